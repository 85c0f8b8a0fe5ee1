//! The twelve free [pentominoes](https://en.wikipedia.org/wiki/Pentomino)
//! and the classic boards they tile.

use crate::orientation::{Offset, TileShape};

/// Conventional letter names of the pentominoes, in catalogue order.
pub const NAMES: [char; 12] = ['I', 'P', 'L', 'F', 'N', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z'];

/// Cell offsets of each pentomino, relative to an implicit `(0, 0)` cell.
pub const OFFSETS: [[Offset; 4]; 12] = [
    [(0, 1), (0, 2), (0, 3), (0, 4)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2), (1, 3)],
    [(1, 0), (-1, 1), (0, 1), (0, 2)],
    [(1, 0), (-2, 1), (-1, 1), (0, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 1), (0, 2), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (1, 2), (2, 2)],
    [(-1, 1), (0, 1), (1, 1), (0, 2)],
    [(-2, 1), (-1, 1), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
];

/// The four centre cells of an 8x8 board, left empty in Dana Scott's
/// pentomino problem.
pub const CENTRE_HOLE: [(i32, i32); 4] = [(3, 3), (4, 3), (3, 4), (4, 4)];

/// Return the full catalogue of pentomino shapes.
pub fn shapes() -> Vec<TileShape> {
    OFFSETS.iter().map(|&offsets| TileShape::from(offsets)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::orientations;

    #[test]
    fn orientation_counts() {
        let counts: Vec<_> = shapes()
            .iter()
            .map(|shape| orientations(shape).len())
            .collect();

        // I, P, L, F, N, T, U, V, W, X, Y, Z
        assert_eq!(counts, vec![2, 8, 8, 8, 8, 4, 4, 4, 4, 1, 8, 4]);
        assert_eq!(counts.iter().sum::<usize>(), 63);
    }

    #[test]
    fn shapes_are_distinct() {
        let all: Vec<_> = shapes().iter().map(orientations).collect();

        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!(a.iter().all(|orientation| !b.contains(orientation)));
            }
        }
    }
}
