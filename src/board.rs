//! Board dimensions and the cells that are filled before the search starts.

use crate::error::{Error, Result};

/// A rectangular board with some cells possibly pre-filled.
///
/// Cell `(0, 0)` is the bottom-left corner; `x` grows to the right and `y`
/// grows upwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    prefilled: Vec<(i32, i32)>,
}

impl Board {
    /// Create a new board, checking that every pre-filled cell lies on it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRangeCell`] for the first pre-filled cell outside
    /// `[0, width) x [0, height)`.
    pub fn new(
        width: usize,
        height: usize,
        prefilled: impl IntoIterator<Item = (i32, i32)>,
    ) -> Result<Self> {
        let prefilled: Vec<_> = prefilled.into_iter().collect();

        if let Some(&(x, y)) = prefilled
            .iter()
            .find(|&&(x, y)| !Self::in_range(width, height, x, y))
        {
            return Err(Error::OutOfRangeCell {
                x,
                y,
                width,
                height,
            });
        }

        Ok(Self {
            width,
            height,
            prefilled,
        })
    }

    fn in_range(width: usize, height: usize, x: i32, y: i32) -> bool {
        usize::try_from(x).is_ok_and(|x| x < width)
            && usize::try_from(y).is_ok_and(|y| y < height)
    }

    /// Width of the board in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the board in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells on the board.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// The pre-filled cells, as given.
    pub fn prefilled(&self) -> &[(i32, i32)] {
        &self.prefilled
    }

    /// Flat row-major indices of the pre-filled cells.
    pub fn prefilled_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.prefilled
            .iter()
            .map(move |&(x, y)| x as usize + self.width * y as usize)
    }
}
