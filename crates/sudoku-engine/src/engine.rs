//! Exhaustive backtracking search and solution collection.

use crate::{Grid, Position};

/// The solver engine: owns the loaded puzzle and the ordered solution set.
///
/// One engine serves one puzzle at a time; construct a fresh engine (or call
/// [`reset`](Engine::reset)) per puzzle. Engines are plain values with no
/// shared state, so independent instances can run side by side.
///
/// Every operation is total: a missing grid, an unsolvable seed, or an
/// out-of-range index yields zero or `None`, never a panic.
#[derive(Debug, Default)]
pub struct Engine {
    grid: Option<Grid>,
    solutions: Vec<Grid>,
}

impl Engine {
    /// Create an engine with no puzzle loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a puzzle from a dynamically sized digit matrix.
    ///
    /// Anything other than an exact 9×9 matrix is silently rejected: the
    /// engine records no grid and subsequent solves return 0 solutions.
    pub fn load(&mut self, rows: &[Vec<u8>]) {
        self.grid = Grid::from_rows(rows);
    }

    /// Load an already-constructed grid.
    pub fn load_grid(&mut self, grid: Grid) {
        self.grid = Some(grid);
    }

    /// Drop the loaded puzzle and all collected solutions.
    pub fn reset(&mut self) {
        self.grid = None;
        self.solutions.clear();
    }

    /// Find every completion of the loaded puzzle.
    ///
    /// Clears any previous solution set, then runs the exhaustive search and
    /// returns the number of solutions found. Returns 0 when no grid is
    /// loaded, and 0 without searching when the seed already violates a
    /// row, column, or box.
    ///
    /// This blocks until the whole search tree is exhausted, which can be
    /// slow for sparse puzzles; use [`solve_bounded`](Engine::solve_bounded)
    /// when a cap on the number of solutions is enough.
    pub fn solve(&mut self) -> usize {
        self.solve_bounded(usize::MAX)
    }

    /// Like [`solve`](Engine::solve), but stop once `limit` solutions have
    /// been collected.
    pub fn solve_bounded(&mut self, limit: usize) -> usize {
        self.solutions.clear();
        let Some(grid) = self.grid else {
            return 0;
        };
        // Fail fast: an invalid seed can never reach a solution.
        if limit == 0 || !grid.is_valid() {
            return 0;
        }
        let mut buffer = grid;
        search(&mut buffer, &mut self.solutions, limit);
        self.solutions.len()
    }

    /// True when the loaded puzzle has exactly one completion.
    pub fn has_unique_solution(&mut self) -> bool {
        self.solve_bounded(2) == 1
    }

    /// Size of the current solution set, 0 before any solve.
    pub fn total_solutions(&self) -> usize {
        self.solutions.len()
    }

    /// The solution at `index` in discovery order, `None` out of range.
    pub fn solution_at(&self, index: usize) -> Option<&Grid> {
        self.solutions.get(index)
    }

    /// The whole solution set in discovery order.
    pub fn solutions(&self) -> &[Grid] {
        &self.solutions
    }
}

/// One level of the backtracking search.
///
/// Finds the first empty cell in row-major order and tries digits 1..=9
/// ascending; a placement is kept only while the whole grid stays valid.
/// When no empty cell remains the buffer is a complete valid grid (the
/// placement invariant) and a snapshot is recorded. The cell is reset to
/// empty on every way out of the branch, so siblings in the caller see the
/// buffer unchanged. Returns true once `limit` solutions exist, which
/// unwinds the whole recursion.
fn search(buffer: &mut Grid, solutions: &mut Vec<Grid>, limit: usize) -> bool {
    let Some(pos) = buffer.first_empty() else {
        solutions.push(*buffer);
        return solutions.len() >= limit;
    };
    for digit in 1..=9u8 {
        buffer.set(pos, digit);
        if buffer.is_valid() && search(buffer, solutions, limit) {
            buffer.set(pos, 0);
            return true;
        }
    }
    buffer.set(pos, 0);
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Classic 30-clue puzzle with a single known solution.
    const CLASSIC: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const CLASSIC_SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    fn engine_with(puzzle: &str) -> Engine {
        let mut engine = Engine::new();
        engine.load_grid(Grid::from_string(puzzle).unwrap());
        engine
    }

    #[test]
    fn test_classic_puzzle_unique_solution() {
        let mut engine = engine_with(CLASSIC);
        assert_eq!(engine.solve(), 1);
        assert_eq!(engine.total_solutions(), 1);
        assert_eq!(
            engine.solution_at(0).unwrap().to_line_string(),
            CLASSIC_SOLUTION
        );
    }

    #[test]
    fn test_complete_valid_grid_is_its_own_solution() {
        let mut engine = engine_with(CLASSIC_SOLUTION);
        assert_eq!(engine.solve(), 1);
        let solution = engine.solution_at(0).unwrap();
        assert_eq!(solution, &Grid::from_string(CLASSIC_SOLUTION).unwrap());
    }

    #[test]
    fn test_single_hole_fills_the_unique_digit() {
        let mut grid = Grid::from_string(CLASSIC_SOLUTION).unwrap();
        let hole = Position::new(4, 4);
        let expected = grid.get(hole);
        grid.set(hole, 0);

        let mut engine = Engine::new();
        engine.load_grid(grid);
        assert_eq!(engine.solve(), 1);
        let solution = engine.solution_at(0).unwrap();
        assert_eq!(solution.get(hole), expected);
        // Only the hole may differ from the input.
        for row in 0..9 {
            for col in 0..9 {
                let pos = Position::new(row, col);
                if pos != hole {
                    assert_eq!(solution.get(pos), grid.get(pos));
                }
            }
        }
    }

    #[test]
    fn test_duplicate_seed_yields_zero() {
        // Duplicate 5 within the first column of the classic puzzle.
        let mut grid = Grid::from_string(CLASSIC).unwrap();
        grid.set(Position::new(2, 0), 5);
        let mut engine = Engine::new();
        engine.load_grid(grid);
        assert_eq!(engine.solve(), 0);
        assert_eq!(engine.total_solutions(), 0);
        assert!(engine.solution_at(0).is_none());
    }

    #[test]
    fn test_rows_swapped_across_bands_yields_zero() {
        // Swapping complete rows keeps rows and columns valid but breaks the
        // boxes those rows pass through.
        let mut grid = Grid::from_string(CLASSIC_SOLUTION).unwrap();
        for col in 0..9 {
            let a = grid.get(Position::new(0, col));
            let b = grid.get(Position::new(3, col));
            grid.set(Position::new(0, col), b);
            grid.set(Position::new(3, col), a);
        }
        let mut engine = Engine::new();
        engine.load_grid(grid);
        assert_eq!(engine.solve(), 0);
    }

    #[test]
    fn test_solve_is_idempotent() {
        let mut engine = engine_with(CLASSIC);
        let first = engine.solve();
        let first_set: Vec<Grid> = engine.solutions().to_vec();
        let second = engine.solve();
        assert_eq!(first, second);
        assert_eq!(engine.solutions(), first_set.as_slice());
    }

    #[test]
    fn test_solutions_are_valid_and_preserve_clues() {
        let puzzle = Grid::from_string(CLASSIC).unwrap();
        let mut engine = Engine::new();
        engine.load_grid(puzzle);
        engine.solve();
        for solution in engine.solutions() {
            assert!(solution.is_complete());
            assert!(solution.is_valid());
            for row in 0..9 {
                for col in 0..9 {
                    let pos = Position::new(row, col);
                    if puzzle.get(pos) != 0 {
                        assert_eq!(solution.get(pos), puzzle.get(pos));
                    }
                }
            }
        }
    }

    #[test]
    fn test_deadly_rectangle_has_two_ordered_solutions() {
        // The classic solution with the rectangle (3,5) (3,8) (4,5) (4,8)
        // blanked admits exactly the two digit swaps of 1 and 3.
        let puzzle =
            "534678912672195348198342567859760420426850790713924856961537284287419635345286179";
        let mut engine = engine_with(puzzle);
        assert_eq!(engine.solve(), 2);
        assert_eq!(
            engine.solution_at(0).unwrap().to_line_string(),
            CLASSIC_SOLUTION
        );
        assert_eq!(
            engine.solution_at(1).unwrap().to_line_string(),
            "534678912672195348198342567859763421426851793713924856961537284287419635345286179"
        );
        assert!(engine.solution_at(2).is_none());
        assert!(!engine.has_unique_solution());
    }

    #[test]
    fn test_no_grid_loaded_solves_to_zero() {
        let mut engine = Engine::new();
        assert_eq!(engine.solve(), 0);
        assert_eq!(engine.total_solutions(), 0);
        assert!(engine.solution_at(0).is_none());
    }

    #[test]
    fn test_load_rejects_wrong_dimensions_silently() {
        let mut engine = Engine::new();
        engine.load(&vec![vec![0u8; 9]; 8]);
        assert_eq!(engine.solve(), 0);

        engine.load(&vec![vec![0u8; 10]; 9]);
        assert_eq!(engine.solve(), 0);
    }

    #[test]
    fn test_load_accepts_exact_matrix() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        let rows: Vec<Vec<u8>> = (0..9)
            .map(|r| (0..9).map(|c| grid.get(Position::new(r, c))).collect())
            .collect();
        let mut engine = Engine::new();
        engine.load(&rows);
        assert_eq!(engine.solve(), 1);
    }

    #[test]
    fn test_bounded_solve_stops_at_limit() {
        let mut engine = Engine::new();
        engine.load_grid(Grid::empty());
        assert_eq!(engine.solve_bounded(3), 3);
        assert_eq!(engine.total_solutions(), 3);
        for solution in engine.solutions() {
            assert!(solution.is_complete());
            assert!(solution.is_valid());
        }
        assert_eq!(engine.solve_bounded(0), 0);
    }

    #[test]
    fn test_unique_solution_check() {
        let mut engine = engine_with(CLASSIC);
        assert!(engine.has_unique_solution());

        let mut empty = Engine::new();
        empty.load_grid(Grid::empty());
        assert!(!empty.has_unique_solution());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut engine = engine_with(CLASSIC);
        engine.solve();
        engine.reset();
        assert_eq!(engine.total_solutions(), 0);
        assert_eq!(engine.solve(), 0);
    }
}
