#![no_main]

use libfuzzer_sys::fuzz_target;
use polyomino_cover::{Board, OrientationTable, Solver, TileShape};

const SHAPES: [&[(i32, i32)]; 6] = [
    &[],
    &[(1, 0)],
    &[(1, 0), (2, 0)],
    &[(1, 0), (0, 1)],
    &[(1, 0), (2, 0), (1, 1)],
    &[(1, 0), (-1, 1), (0, 1)],
];

#[derive(Debug)]
struct SmallBoardInput {
    width: usize,
    height: usize,
    prefilled: Vec<(i32, i32)>,
    shapes: Vec<TileShape>,
}

impl<'a> arbitrary::Arbitrary<'a> for SmallBoardInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let width = usize::from(u.int_in_range(1u8..=4)?);
        let height = usize::from(u.int_in_range(1u8..=4)?);

        let prefilled = u
            .arbitrary::<u16>()?
            .to_le_bytes()
            .into_iter()
            .chain(u.arbitrary::<u16>()?.to_le_bytes())
            .enumerate()
            .flat_map(|(byte, bits)| (0..8).map(move |bit| (byte * 8 + bit, bits >> bit & 1)))
            .filter(|&(index, bit)| bit == 1 && index < width * height)
            .map(|(index, _)| ((index % width) as i32, (index / width) as i32))
            .collect();

        let shape_count = u.int_in_range(0u8..=5)?;
        let shapes = (0..shape_count)
            .map(|_| u.choose(&SHAPES).map(|&offsets| TileShape::from(offsets)))
            .collect::<arbitrary::Result<_>>()?;

        Ok(SmallBoardInput {
            width,
            height,
            prefilled,
            shapes,
        })
    }
}

fuzz_target!(|data: SmallBoardInput| {
    let board = Board::new(data.width, data.height, data.prefilled).unwrap();
    let table = OrientationTable::new(&data.shapes, data.width);
    let solver = Solver::new(board.clone(), &table).unwrap();

    for solution in solver {
        let mut covered = vec![false; board.cell_count()];
        for index in board.prefilled_indices() {
            covered[index] = true;
        }
        for (index, _) in solution.covered_cells(&table) {
            assert!(!covered[index], "cell {} covered twice", index);
            covered[index] = true;
        }
        assert!(covered.into_iter().all(|filled| filled));
    }
});
