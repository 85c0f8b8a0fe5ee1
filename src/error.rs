//! Errors reported while setting up a search or rendering its results.

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A pre-filled cell lies outside `[0, width) x [0, height)`.
    #[error("pre-filled cell ({x}, {y}) lies outside the {width}x{height} board")]
    OutOfRangeCell {
        /// Column of the offending cell.
        x: i32,
        /// Row of the offending cell.
        y: i32,
        /// Width of the board.
        width: usize,
        /// Height of the board.
        height: usize,
    },

    /// An orientation table was built for a different board width than the
    /// board it is being searched against.
    #[error("orientation table was built for width {table}, board has width {board}")]
    TableWidthMismatch {
        /// Width the table's index deltas were computed for.
        table: usize,
        /// Width of the board.
        board: usize,
    },

    /// A solution covers a cell past the end of the board it is drawn on.
    #[error("solution covers cell {index}, board only has {cells} cells")]
    CellOffBoard {
        /// Flat index of the covered cell.
        index: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// A solution uses a tile that has no single letter label.
    #[error("cannot label tile {tile}, only tiles 0 to 25 have a letter")]
    TooManyTiles {
        /// The first tile identifier without a label.
        tile: usize,
    },
}

/// Result type used throughout this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
