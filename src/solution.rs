//! Full covers found by the search, and a plain-text view of them.

use crate::{
    board::Board,
    error::{Error, Result},
    orientation::OrientationTable,
};

/// A tile that has been put on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Placement {
    /// Flat index of the cell holding the orientation's origin.
    pub anchor: usize,
    /// Index of the tile in the catalogue.
    pub tile: usize,
    /// Index of the orientation within the tile's orientation list.
    pub orientation: usize,
}

/// One way of covering the board, as the placements in the order they were
/// made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Solution {
    placements: Vec<Placement>,
}

impl Solution {
    /// Snapshot a placement stack.
    pub fn new(placements: &[Placement]) -> Self {
        Self {
            placements: placements.to_vec(),
        }
    }

    /// The placements making up this solution.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of tiles used.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Return true if no tile was needed, because the board was pre-filled.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Iterate over the placements.
    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter()
    }

    /// Return an iterator over the flat indices of every cell covered by a
    /// tile, paired with the tile covering it.
    pub fn covered_cells<'a>(
        &'a self,
        table: &'a OrientationTable,
    ) -> impl Iterator<Item = (usize, usize)> + 'a {
        self.placements.iter().flat_map(move |placement| {
            table
                .orientation(placement.tile, placement.orientation)
                .deltas
                .iter()
                .map(move |&delta| (placement.anchor.wrapping_add_signed(delta), placement.tile))
        })
    }
}

impl<'a> IntoIterator for &'a Solution {
    type IntoIter = std::slice::Iter<'a, Placement>;
    type Item = &'a Placement;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}

/// Draw a solution as text, one capital letter per tile (`A` for tile 0).
///
/// The top row is printed first so that cell `(0, 0)` ends up in the bottom
/// left corner. Pre-filled cells are left blank and every row ends in a
/// newline.
///
/// # Errors
///
/// Returns [`Error::TableWidthMismatch`] if `table` was built for another
/// board width, [`Error::CellOffBoard`] if a placement reaches past the end
/// of the board, and [`Error::TooManyTiles`] if the solution uses a tile
/// numbered 26 or above.
pub fn render(solution: &Solution, table: &OrientationTable, board: &Board) -> Result<String> {
    let width = board.width();
    if table.width() != width {
        return Err(Error::TableWidthMismatch {
            table: table.width(),
            board: width,
        });
    }

    let cells = board.cell_count();
    let mut chars = vec![' '; cells];
    for (index, tile) in solution.covered_cells(table) {
        let cell = chars
            .get_mut(index)
            .ok_or(Error::CellOffBoard { index, cells })?;
        *cell = label(tile)?;
    }

    let mut output = String::with_capacity((width + 1) * board.height());
    for row in (0..board.height()).rev() {
        output.extend(&chars[row * width..(row + 1) * width]);
        output.push('\n');
    }

    Ok(output)
}

fn label(tile: usize) -> Result<char> {
    u8::try_from(tile)
        .ok()
        .filter(|&tile| tile < 26)
        .map(|tile| char::from(b'A' + tile))
        .ok_or(Error::TooManyTiles { tile })
}
