//! Basic example of using the Sudoku engine

use sudoku_engine::{Engine, Grid};

fn main() {
    // Parse a puzzle from a string
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let puzzle = Grid::from_string(puzzle_string).expect("valid puzzle string");

    println!("Puzzle:");
    println!("{}", puzzle);

    // Show some stats
    println!("Given cells: {}", puzzle.given_count());
    println!("Empty cells: {}", puzzle.empty_count());

    // Find every completion
    let mut engine = Engine::new();
    engine.load_grid(puzzle);
    let count = engine.solve();
    println!("\n{} solutions found.\n", count);

    // Walk the solution set in discovery order
    for i in 0..engine.total_solutions() {
        if let Some(solution) = engine.solution_at(i) {
            println!("Solution {}/{}:", i + 1, count);
            println!("{}", solution);
        }
    }

    // Check uniqueness without enumerating everything
    if engine.has_unique_solution() {
        println!("This puzzle has exactly one solution.");
    }

    // A grid that is not 9x9 is silently rejected
    let mut other = Engine::new();
    other.load(&vec![vec![0u8; 9]; 4]);
    println!("Solutions for a malformed grid: {}", other.solve());
}
