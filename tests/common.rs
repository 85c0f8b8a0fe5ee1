use polyomino_cover::{Board, OrientationTable, Solution, TileShape};
use std::collections::HashSet;

/// Install a logger for the test binary, ignoring repeat calls from other
/// tests in the same binary.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Assert that `solution` covers every cell of `board` exactly once, together
/// with the pre-filled cells, and uses no tile twice.
///
/// # Panics
///  - If a cell is covered twice, or covered by a tile while pre-filled.
///  - If a cell is left uncovered.
///  - If a tile appears in more than one placement.
#[allow(dead_code)]
pub fn assert_exact_cover(solution: &Solution, table: &OrientationTable, board: &Board) {
    let mut covered = vec![0usize; board.cell_count()];
    for index in board.prefilled_indices() {
        covered[index] = 1;
    }

    for (index, tile) in solution.covered_cells(table) {
        assert!(index < covered.len(), "Tile [{}] covers off-board cell [{}]", tile, index);
        covered[index] += 1;
    }

    for (index, count) in covered.iter().enumerate() {
        assert_eq!(
            *count, 1,
            "Cell [{}] covered [{}] times in {:?}",
            index, count, solution
        );
    }

    let mut tiles = HashSet::new();
    for placement in solution {
        assert!(
            tiles.insert(placement.tile),
            "Tile [{}] used twice in {:?}",
            placement.tile,
            solution
        );
    }
}

/// The straight, square, T, L and skew tetrominoes.
#[allow(dead_code)]
pub fn tetrominoes() -> Vec<TileShape> {
    vec![
        TileShape::from([(1, 0), (2, 0), (3, 0)]),
        TileShape::from([(1, 0), (0, 1), (1, 1)]),
        TileShape::from([(1, 0), (2, 0), (1, 1)]),
        TileShape::from([(1, 0), (2, 0), (0, 1)]),
        TileShape::from([(1, 0), (-1, 1), (0, 1)]),
    ]
}
