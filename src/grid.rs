//! Cell occupancy for a single search, and the placement engine that fills
//! and clears cells one oriented tile at a time.

use crate::orientation::Orientation;

/// Flat, row-major occupancy grid.
///
/// The cell at column `x` and row `y` is stored at index `x + width * y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new grid with the given dimensions and the cells at the given
    /// flat indices filled.
    ///
    /// # Panics
    ///
    /// Panics if any index is not below `width * height`.
    pub fn new(width: usize, height: usize, filled: impl IntoIterator<Item = usize>) -> Self {
        let mut cells = vec![false; width * height];
        for index in filled {
            cells[index] = true;
        }

        Self {
            width,
            height,
            cells,
        }
    }

    /// Width of the grid in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells, which is also the anchor value that signals
    /// a fully covered grid.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Return true if the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Return true if the cell at `index` is filled.
    pub fn is_filled(&self, index: usize) -> bool {
        self.cells[index]
    }

    /// Return the index of the first empty cell at or after `from`, or
    /// [`Grid::len`] if there is none.
    pub fn next_empty(&self, from: usize) -> usize {
        self.cells
            .iter()
            .skip(from)
            .position(|filled| !filled)
            .map_or(self.cells.len(), |offset| from + offset)
    }

    /// Return true if `orientation` anchored at `anchor` stays on the board.
    #[inline]
    fn fits(&self, orientation: &Orientation, anchor: usize) -> bool {
        let x = (anchor % self.width) as isize;
        let y = (anchor / self.width) as isize;

        x + orientation.min_x as isize >= 0
            && x + (orientation.max_x as isize) < self.width as isize
            && y + (orientation.max_y as isize) < self.height as isize
    }

    /// Try to place `orientation` with its origin cell on `anchor`.
    ///
    /// On success every covered cell is filled and the index of the next
    /// empty cell after `anchor` is returned, which equals [`Grid::len`] once
    /// the grid is full. Returns `None` without touching the grid if the tile
    /// would leave the board or overlap a filled cell.
    pub fn place(&mut self, orientation: &Orientation, anchor: usize) -> Option<usize> {
        if !self.fits(orientation, anchor) {
            return None;
        }

        if orientation
            .deltas
            .iter()
            .any(|&delta| self.cells[anchor.wrapping_add_signed(delta)])
        {
            return None;
        }

        for &delta in &orientation.deltas {
            self.cells[anchor.wrapping_add_signed(delta)] = true;
        }

        Some(self.next_empty(anchor + 1))
    }

    /// Clear the cells covered by `orientation` anchored at `anchor`.
    ///
    /// Must only be called for the most recent placement still on the grid.
    pub fn remove(&mut self, orientation: &Orientation, anchor: usize) {
        for &delta in &orientation.deltas {
            let index = anchor.wrapping_add_signed(delta);
            debug_assert!(self.cells[index], "removing a tile from an empty cell");
            self.cells[index] = false;
        }
    }
}
