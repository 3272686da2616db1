//! Exhaustive Sudoku solution counting and enumeration.
//!
//! Given a partially filled 9×9 grid, the [`Engine`] determines how many
//! valid completions exist and keeps each of them, in depth-first discovery
//! order: first empty cell in row-major order, candidate digits tried
//! ascending, the whole grid revalidated after every placement. The very
//! same validity check rejects unsolvable seed grids before any search
//! starts.
//!
//! ```
//! use sudoku_engine::{Engine, Grid};
//!
//! let puzzle =
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
//! let mut engine = Engine::new();
//! engine.load_grid(Grid::from_string(puzzle).unwrap());
//! assert_eq!(engine.solve(), 1);
//! println!("{}", engine.solution_at(0).unwrap());
//! ```

mod engine;
mod grid;

pub use engine::Engine;
pub use grid::{Grid, Position, SIZE};
