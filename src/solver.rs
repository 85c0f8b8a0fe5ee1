use crate::{
    board::Board,
    error::{Error, Result},
    grid::Grid,
    orientation::OrientationTable,
    remaining::RemainingTiles,
    solution::{Placement, Solution},
};

/// Solver that iteratively returns every exact tiling of a board.
///
/// The search always fills the lowest-index empty cell next, trying tiles in
/// ascending order and each tile's orientations in generation order, so the
/// order of solutions is fully determined by the inputs.
#[derive(Debug)]
pub struct Solver<'t> {
    table: &'t OrientationTable,
    board: Board,

    // Values used to track the state of solving
    grid: Grid,
    placements: Vec<Placement>,
    remaining: RemainingTiles,
    anchor: usize,
    current: Option<Candidate>,
    state: State,
    steps: u64,
}

/// A tile and one of its orientations, considered for the current anchor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Candidate {
    tile: usize,
    orientation: usize,
}

impl From<Placement> for Candidate {
    fn from(placement: Placement) -> Self {
        Self {
            tile: placement.tile,
            orientation: placement.orientation,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum State {
    // Pick the candidate following `current` for the anchor
    Select,
    // Try a candidate at the anchor
    Place(Candidate),
    // Every cell is filled, report the placements
    Covered,
    // Undo the latest placement and resume after it
    Backtrack,
    // Nothing left to try
    Done,
}

impl<'t> Solver<'t> {
    /// Create a new `Solver` for `board`, using orientations prepared in
    /// `table`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TableWidthMismatch`] if `table` was built for a board
    /// of a different width.
    pub fn new(board: Board, table: &'t OrientationTable) -> Result<Self> {
        if table.width() != board.width() {
            return Err(Error::TableWidthMismatch {
                table: table.width(),
                board: board.width(),
            });
        }

        let grid = Self::populate_grid(&board);
        let anchor = grid.next_empty(0);
        let state = Self::initial_state(&grid, anchor);

        Ok(Self {
            table,
            board,

            remaining: RemainingTiles::new(table.tile_count()),
            grid,
            placements: Vec::new(),
            anchor,
            current: None,
            state,
            steps: 0,
        })
    }

    /// Reset all solver state except for the board and orientation table.
    pub fn reset(&mut self) {
        self.grid = Self::populate_grid(&self.board);
        self.anchor = self.grid.next_empty(0);
        self.state = Self::initial_state(&self.grid, self.anchor);
        self.placements.clear();
        self.remaining = RemainingTiles::new(self.table.tile_count());
        self.current = None;
        self.steps = 0;
    }

    fn populate_grid(board: &Board) -> Grid {
        Grid::new(board.width(), board.height(), board.prefilled_indices())
    }

    // A board that starts out full is already solved.
    fn initial_state(grid: &Grid, anchor: usize) -> State {
        if anchor == grid.len() {
            State::Covered
        } else {
            State::Select
        }
    }

    /// The board being tiled.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The orientation table used for placements.
    pub fn table(&self) -> &'t OrientationTable {
        self.table
    }

    /// Number of placement attempts made so far.
    ///
    /// Callers that need to bound the running time can check this between
    /// solutions and stop pulling from the iterator.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Return true once the whole search space has been explored.
    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    /// Return the candidate to try after `current` at the present anchor.
    ///
    /// Moves on to the next orientation of the same tile first, then to the
    /// next greater tile still available, returning the exhausted tile to the
    /// remaining set. Returns `None` once every available tile has been tried.
    fn next_candidate(&mut self, current: Option<Candidate>) -> Option<Candidate> {
        let Some(current) = current else {
            return self.remaining.take_first().map(|tile| Candidate {
                tile,
                orientation: 0,
            });
        };

        let next_orientation = current.orientation + 1;
        if next_orientation < self.table.orientations(current.tile).len() {
            return Some(Candidate {
                tile: current.tile,
                orientation: next_orientation,
            });
        }

        match self.remaining.return_last(current.tile) {
            Ok(()) => None,
            Err(tile) => self.remaining.exchange(tile).map(|tile| Candidate {
                tile,
                orientation: 0,
            }),
        }
    }

    /// Return all remaining solutions.
    pub fn all_solutions(&mut self) -> Vec<Solution> {
        log::debug!(
            "Searching {}x{} board with {} tiles, orientations per tile {:?}.",
            self.board.width(),
            self.board.height(),
            self.table.tile_count(),
            (0..self.table.tile_count())
                .map(|tile| self.table.orientations(tile).len())
                .collect::<Vec<_>>()
        );

        let solutions: Vec<_> = self.by_ref().collect();

        log::debug!(
            "Search finished with {} solutions after {} placement attempts.",
            solutions.len(),
            self.steps
        );

        solutions
    }

    /// Compute up to the next solution, returning `None` if there are no more.
    pub fn next_solution(&mut self) -> Option<Solution> {
        loop {
            self.state = match self.state {
                State::Select => {
                    let current = self.current.take();
                    match self.next_candidate(current) {
                        Some(candidate) => State::Place(candidate),
                        None => State::Backtrack,
                    }
                }
                State::Place(candidate) => {
                    self.steps += 1;

                    let orientation = self
                        .table
                        .orientation(candidate.tile, candidate.orientation);
                    match self.grid.place(orientation, self.anchor) {
                        Some(next_anchor) => {
                            self.placements.push(Placement {
                                anchor: self.anchor,
                                tile: candidate.tile,
                                orientation: candidate.orientation,
                            });
                            self.anchor = next_anchor;

                            if next_anchor == self.grid.len() {
                                State::Covered
                            } else {
                                State::Select
                            }
                        }
                        None => {
                            self.current = Some(candidate);
                            State::Select
                        }
                    }
                }
                State::Covered => {
                    self.state = State::Backtrack;

                    let solution = Solution::new(&self.placements);
                    log::trace!("Found solution {:?}.", solution.placements());
                    return Some(solution);
                }
                State::Backtrack => match self.placements.pop() {
                    Some(placement) => {
                        let orientation = self
                            .table
                            .orientation(placement.tile, placement.orientation);
                        self.grid.remove(orientation, placement.anchor);
                        self.anchor = placement.anchor;

                        match self.next_candidate(Some(placement.into())) {
                            Some(candidate) => State::Place(candidate),
                            None => State::Backtrack,
                        }
                    }
                    None => State::Done,
                },
                State::Done => return None,
            };
        }
    }
}

impl<'t> Iterator for Solver<'t> {
    type Item = Solution;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_solution()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::TileShape;

    fn domino_pair(width: usize) -> OrientationTable {
        OrientationTable::new(&[TileShape::from([(1, 0)]), TileShape::from([(1, 0)])], width)
    }

    fn placement(anchor: usize, tile: usize, orientation: usize) -> Placement {
        Placement {
            anchor,
            tile,
            orientation,
        }
    }

    #[test]
    fn rejects_table_for_other_width() {
        let table = domino_pair(3);
        let board = Board::new(2, 2, []).unwrap();

        assert_eq!(
            Solver::new(board, &table).unwrap_err(),
            Error::TableWidthMismatch { table: 3, board: 2 }
        );
    }

    #[test]
    fn next_candidate_walks_orientations_then_tiles() {
        let table = OrientationTable::new(
            &[
                TileShape::from([(1, 0)]),
                TileShape::default(),
                TileShape::from([(1, 0)]),
            ],
            4,
        );
        let mut solver = Solver::new(Board::new(4, 4, []).unwrap(), &table).unwrap();

        let first = solver.next_candidate(None).unwrap();
        assert_eq!(first, Candidate { tile: 0, orientation: 0 });

        let second = solver.next_candidate(Some(first)).unwrap();
        assert_eq!(second, Candidate { tile: 0, orientation: 1 });

        let third = solver.next_candidate(Some(second)).unwrap();
        assert_eq!(third, Candidate { tile: 1, orientation: 0 });
        assert_eq!(solver.remaining.iter().collect::<Vec<_>>(), vec![0, 2]);

        let fourth = solver.next_candidate(Some(third)).unwrap();
        assert_eq!(fourth, Candidate { tile: 2, orientation: 0 });
        assert_eq!(solver.remaining.iter().collect::<Vec<_>>(), vec![0, 1]);

        let fifth = solver.next_candidate(Some(fourth)).unwrap();
        assert_eq!(fifth, Candidate { tile: 2, orientation: 1 });

        assert_eq!(solver.next_candidate(Some(fifth)), None);
        assert_eq!(solver.remaining.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn next_candidate_with_nothing_left() {
        let table = OrientationTable::new(&[], 2);
        let mut solver = Solver::new(Board::new(2, 2, []).unwrap(), &table).unwrap();

        assert_eq!(solver.next_candidate(None), None);
    }

    #[test]
    fn enumerates_domino_tilings_in_order() {
        let table = domino_pair(2);
        let mut solver = Solver::new(Board::new(2, 2, []).unwrap(), &table).unwrap();

        let solutions: Vec<_> = solver
            .all_solutions()
            .into_iter()
            .map(|solution| solution.placements().to_vec())
            .collect();

        assert_eq!(
            solutions,
            vec![
                vec![placement(0, 0, 0), placement(2, 1, 0)],
                vec![placement(0, 0, 1), placement(1, 1, 1)],
                vec![placement(0, 1, 0), placement(2, 0, 0)],
                vec![placement(0, 1, 1), placement(1, 0, 1)],
            ]
        );
        assert!(solver.is_done());
        assert_eq!(solver.placements, vec![]);
        assert_eq!(solver.remaining.iter().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn full_board_yields_one_empty_solution() {
        let table = domino_pair(1);
        let mut solver = Solver::new(Board::new(1, 2, [(0, 0), (0, 1)]).unwrap(), &table).unwrap();

        assert_eq!(solver.next_solution(), Some(Solution::default()));
        assert_eq!(solver.next_solution(), None);
        assert_eq!(solver.steps(), 0);
    }

    #[test]
    fn unfillable_board_has_no_solutions() {
        let table = domino_pair(3);
        let mut solver = Solver::new(Board::new(3, 1, []).unwrap(), &table).unwrap();

        assert_eq!(solver.next_solution(), None);
        assert!(solver.is_done());
        assert!(solver.steps() > 0);
    }

    #[test]
    fn reset_restarts_the_search() {
        let table = domino_pair(2);
        let mut solver = Solver::new(Board::new(2, 2, []).unwrap(), &table).unwrap();

        let first = solver.next_solution();
        solver.next_solution();
        solver.reset();

        assert_eq!(solver.steps(), 0);
        assert_eq!(solver.next_solution(), first);
        assert_eq!(solver.count(), 3);
    }
}
