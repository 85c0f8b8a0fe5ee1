mod common;

use common::{assert_exact_cover, init_logger};
use polyomino_cover::{pentomino, render, Board, OrientationTable, Solver};
use std::collections::HashSet;

/// Return the smallest of the eight rotations and reflections of a square
/// text grid, as produced by `render`.
fn canonical_square(rendered: &str) -> String {
    let rows: Vec<Vec<char>> = rendered.lines().map(|line| line.chars().collect()).collect();
    let n = rows.len();

    let transforms: [fn(usize, usize, usize) -> (usize, usize); 8] = [
        |r, c, _| (r, c),
        |r, c, n| (c, n - 1 - r),
        |r, c, n| (n - 1 - r, n - 1 - c),
        |r, c, n| (n - 1 - c, r),
        |r, c, n| (r, n - 1 - c),
        |r, c, n| (n - 1 - r, c),
        |r, c, _| (c, r),
        |r, c, n| (n - 1 - c, n - 1 - r),
    ];

    transforms
        .iter()
        .map(|transform| {
            (0..n)
                .flat_map(|r| (0..n).map(move |c| (r, c)))
                .map(|(r, c)| {
                    let (r, c) = transform(r, c, n);
                    rows[r][c]
                })
                .collect::<String>()
        })
        .min()
        .unwrap()
}

#[test]
fn scott_pentomino_problem() {
    init_logger();

    // Dana Scott, 1958: an 8x8 board with the centre 2x2 removed has 65
    // pentomino tilings up to symmetry.
    let shapes = pentomino::shapes();
    let board = Board::new(8, 8, pentomino::CENTRE_HOLE).unwrap();
    let table = OrientationTable::new(&shapes, 8);

    let solutions = Solver::new(board.clone(), &table).unwrap().all_solutions();
    assert_eq!(solutions.len(), 520);

    let mut distinct = HashSet::new();
    for solution in &solutions {
        assert_eq!(solution.len(), 12);
        assert_exact_cover(solution, &table, &board);

        let rendered = render(solution, &table, &board).unwrap();
        distinct.insert(canonical_square(&rendered));
    }
    assert_eq!(distinct.len(), 65);
}

#[test]
fn pentomino_3x20() {
    let shapes = pentomino::shapes();
    let board = Board::new(3, 20, []).unwrap();
    let table = OrientationTable::new(&shapes, 3);

    let solutions = Solver::new(board.clone(), &table).unwrap().all_solutions();

    // Two tilings, each in four orientations of the rectangle.
    assert_eq!(solutions.len(), 8);
    let unique: HashSet<_> = solutions.iter().collect();
    assert_eq!(unique.len(), 8);
    for solution in &solutions {
        assert_exact_cover(solution, &table, &board);
    }
}

#[test]
#[ignore = "takes several minutes outside of release mode"]
fn pentomino_6x10() {
    let shapes = pentomino::shapes();
    let board = Board::new(6, 10, []).unwrap();
    let table = OrientationTable::new(&shapes, 6);

    // 2339 tilings up to symmetry.
    assert_eq!(Solver::new(board, &table).unwrap().count(), 9356);
}
