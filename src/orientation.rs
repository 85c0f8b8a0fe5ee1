//! Tile shapes and the canonical orientations derived from them.
//!
//! A [`TileShape`] is a list of cell offsets relative to an implicit anchor
//! cell at `(0, 0)`. Every shape is expanded into the distinct orientations
//! reachable by rotating it in quarter turns and mirroring it, each one
//! normalized so its lowest cell (ordered by `(y, x)`) sits on the origin.

/// Offset `(dx, dy)` of a cell relative to a tile anchor.
pub type Offset = (i32, i32);

/// Shape of a single tile, as offsets from an implicit `(0, 0)` cell.
///
/// The origin cell does not need to be listed. Listing it, or any other
/// offset more than once, has no effect: a shape is the set of its cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TileShape {
    offsets: Vec<Offset>,
}

impl TileShape {
    /// Create a new shape from the offsets of every cell except the origin.
    pub fn new(offsets: impl IntoIterator<Item = Offset>) -> Self {
        Self {
            offsets: offsets.into_iter().collect(),
        }
    }

    /// The offsets this shape was defined with, origin excluded.
    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    /// Return the cells of this shape with the implicit origin included.
    fn cells(&self) -> Vec<Offset> {
        let mut cells = Vec::with_capacity(self.offsets.len() + 1);
        cells.push((0, 0));
        cells.extend_from_slice(&self.offsets);
        cells
    }
}

impl From<Vec<Offset>> for TileShape {
    fn from(offsets: Vec<Offset>) -> Self {
        Self { offsets }
    }
}

impl From<&[Offset]> for TileShape {
    fn from(offsets: &[Offset]) -> Self {
        Self::new(offsets.iter().copied())
    }
}

impl<const N: usize> From<[Offset; N]> for TileShape {
    fn from(offsets: [Offset; N]) -> Self {
        Self::new(offsets)
    }
}

/// One canonical rotation or reflection of a tile shape, prepared for
/// placement on a board of a fixed width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orientation {
    /// Cell offsets sorted by `(y, x)`, the first one always `(0, 0)`.
    pub offsets: Vec<Offset>,
    /// Lowest `dx` of any cell, `0` when no cell lies left of the anchor.
    pub min_x: i32,
    /// Highest `dx` of any cell, `0` when no cell lies right of the anchor.
    pub max_x: i32,
    /// Highest `dy` of any cell, `0` for a single-row orientation.
    pub max_y: i32,
    /// Flat index offsets `dx + width * dy`, one per cell.
    pub deltas: Vec<isize>,
}

impl Orientation {
    /// Canonicalize an offset list and annotate it with its extents and with
    /// the flat index deltas for a board of the given width.
    ///
    /// Placement relies on every cell after the origin lying later in
    /// row-major order, which only holds for canonical offsets.
    pub(crate) fn new(offsets: Vec<Offset>, width: usize) -> Self {
        let offsets = canonicalize(offsets);
        let min_x = offsets.iter().map(|&(x, _)| x).min().unwrap_or(0).min(0);
        let max_x = offsets.iter().map(|&(x, _)| x).max().unwrap_or(0).max(0);
        let max_y = offsets.iter().map(|&(_, y)| y).max().unwrap_or(0).max(0);

        let width = width as isize;
        let deltas = offsets
            .iter()
            .map(|&(x, y)| x as isize + width * y as isize)
            .collect();

        Self {
            offsets,
            min_x,
            max_x,
            max_y,
            deltas,
        }
    }

    /// Number of cells covered by this orientation.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Return true if this orientation covers no cells.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Sort cells by `(y, x)`, drop duplicates and translate so the first cell is
/// the origin.
fn canonicalize(mut cells: Vec<Offset>) -> Vec<Offset> {
    cells.sort_by_key(|&(x, y)| (y, x));
    cells.dedup();

    if let Some(&(base_x, base_y)) = cells.first() {
        for cell in &mut cells {
            *cell = (cell.0 - base_x, cell.1 - base_y);
        }
    }

    cells
}

/// Rotate cells a quarter turn clockwise.
fn rotate(cells: &[Offset]) -> Vec<Offset> {
    cells.iter().map(|&(x, y)| (y, -x)).collect()
}

/// Mirror cells across the y axis.
fn mirror(cells: &[Offset]) -> Vec<Offset> {
    cells.iter().map(|&(x, y)| (-x, y)).collect()
}

/// Return every distinct canonical orientation of `shape`.
///
/// Orientations are listed in generation order: successive clockwise
/// rotations of the shape as given, then successive rotations of its mirror
/// image. Symmetric shapes produce fewer than eight entries.
pub fn orientations(shape: &TileShape) -> Vec<Vec<Offset>> {
    let mut orientations: Vec<Vec<Offset>> = Vec::with_capacity(8);
    let mut mirrored = false;
    let mut current = shape.cells();

    loop {
        current = canonicalize(current);
        if !orientations.contains(&current) {
            let next = rotate(&current);
            orientations.push(current);
            current = next;
        } else if !mirrored {
            current = mirror(&current);
            mirrored = true;
        } else {
            break;
        }
    }

    orientations
}

/// Orientations for a whole tile catalogue, prepared for one board width.
///
/// The table is read-only once built and can be shared between any number of
/// searches over boards of the same width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrientationTable {
    width: usize,
    tiles: Vec<Vec<Orientation>>,
}

impl OrientationTable {
    /// Generate the orientations of every shape, computing flat index deltas
    /// for a board `width` cells wide. Tile identifiers are the positions of
    /// the shapes in `shapes`.
    pub fn new(shapes: &[TileShape], width: usize) -> Self {
        let tiles = shapes
            .iter()
            .map(|shape| {
                orientations(shape)
                    .into_iter()
                    .map(|offsets| Orientation::new(offsets, width))
                    .collect()
            })
            .collect();

        Self { width, tiles }
    }

    /// Board width the index deltas were computed for.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of tiles in the catalogue.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// All orientations of a tile, in generation order.
    ///
    /// # Panics
    ///
    /// Panics if `tile` is not a valid tile identifier.
    pub fn orientations(&self, tile: usize) -> &[Orientation] {
        &self.tiles[tile]
    }

    /// A single orientation of a tile.
    ///
    /// # Panics
    ///
    /// Panics if either identifier is out of range.
    pub fn orientation(&self, tile: usize, orientation: usize) -> &Orientation {
        &self.tiles[tile][orientation]
    }
}
