#![deny(missing_docs)]

//! Enumerate every way to exactly tile a rectangular board with a set of
//! [polyominoes](https://en.wikipedia.org/wiki/Polyomino), each used at most
//! once in any rotation or reflection.
//!
//! The search is a plain backtracking
//! [exact cover](https://en.wikipedia.org/wiki/Exact_cover) enumeration: it
//! always fills the lowest empty cell next, trying each remaining tile in
//! every orientation whose first cell can sit there.
//!
//! ```
//! use polyomino_cover::{pentomino, solve};
//!
//! let solutions = solve(3, 20, [], &pentomino::shapes()).unwrap();
//! assert_eq!(solutions.len(), 8);
//! ```

pub mod board;
pub mod error;
pub(crate) mod grid;
pub mod orientation;
pub mod pentomino;
pub(crate) mod remaining;
pub mod solution;
pub(crate) mod solver;

pub use board::Board;
pub use error::{Error, Result};
pub use grid::Grid;
pub use orientation::{Offset, Orientation, OrientationTable, TileShape};
pub use remaining::RemainingTiles;
pub use solution::{render, Placement, Solution};
pub use solver::Solver;

/// Return every exact tiling of a `width` x `height` board whose `prefilled`
/// cells are already covered, using each of `shapes` at most once.
///
/// Solutions are listed in the order the search finds them, which depends
/// only on the inputs. Boards that are symmetric copies of each other are all
/// reported.
///
/// # Errors
///
/// Returns [`Error::OutOfRangeCell`] if a pre-filled cell lies off the board.
/// Nothing is searched in that case.
pub fn solve(
    width: usize,
    height: usize,
    prefilled: impl IntoIterator<Item = (i32, i32)>,
    shapes: &[TileShape],
) -> Result<Vec<Solution>> {
    let board = Board::new(width, height, prefilled)?;
    let table = OrientationTable::new(shapes, width);

    Ok(Solver::new(board, &table)?.all_solutions())
}
