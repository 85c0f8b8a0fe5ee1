//! The ordered set of tiles that are not currently on the board.

use std::collections::VecDeque;

/// Tile identifiers not yet placed, kept in ascending order.
///
/// Backed by a ring buffer so the head and tail can be taken or returned in
/// constant time, and so a tile can be swapped for its successor by rotating
/// the ring instead of shifting elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemainingTiles {
    tiles: VecDeque<usize>,
}

impl RemainingTiles {
    /// Create the ordering for a fresh search over `tile_count` tiles.
    pub fn new(tile_count: usize) -> Self {
        Self {
            tiles: (0..tile_count).collect(),
        }
    }

    /// Number of tiles still available.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Return true if every tile is on the board.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate the available tiles in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.tiles.iter().copied()
    }

    /// Take the lowest available tile.
    pub fn take_first(&mut self) -> Option<usize> {
        self.tiles.pop_front()
    }

    /// Return `tile` to the ordering if it is greater than every available
    /// tile, giving it back to the caller otherwise.
    pub fn return_last(&mut self, tile: usize) -> Result<(), usize> {
        match self.tiles.back() {
            Some(&last) if tile < last => Err(tile),
            _ => {
                self.tiles.push_back(tile);
                Ok(())
            }
        }
    }

    /// Return `tile` to the ordering and take the lowest available tile
    /// greater than it in exchange.
    ///
    /// Returns `None` and leaves the ordering unchanged when no greater tile
    /// is available.
    pub fn exchange(&mut self, tile: usize) -> Option<usize> {
        let rotations = self.tiles.iter().position(|&other| other > tile)?;

        self.tiles.rotate_left(rotations);
        let next = self.tiles.pop_front();
        self.tiles.push_front(tile);
        self.tiles.rotate_right(rotations);

        debug_assert!(self.is_sorted(), "remaining tiles out of order");
        next
    }

    fn is_sorted(&self) -> bool {
        self.tiles
            .iter()
            .zip(self.tiles.iter().skip(1))
            .all(|(a, b)| a < b)
    }
}
