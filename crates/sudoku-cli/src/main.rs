//! `sudoku-count`: count and print every completion of a Sudoku puzzle.

mod input;

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use sudoku_engine::Engine;

/// Below this many clues the exhaustive search can take very long.
const FEW_CLUES: usize = 20;

#[derive(Parser)]
#[command(
    name = "sudoku-count",
    version,
    about = "Count and print every completion of a 9x9 Sudoku puzzle"
)]
struct Args {
    /// 81-character puzzle string, '0' or '.' for empty cells
    puzzle: Option<String>,

    /// Read the puzzle from a file (81-char line or JSON 9x9 array)
    #[arg(long, conflicts_with = "puzzle")]
    file: Option<PathBuf>,

    /// Stop after this many solutions
    #[arg(long)]
    limit: Option<usize>,

    /// Print only the solution at this index (discovery order, 0-based)
    #[arg(long)]
    index: Option<usize>,

    /// Print only the solution count
    #[arg(long)]
    count_only: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let text = match (&args.puzzle, &args.file) {
        (Some(puzzle), None) => puzzle.clone(),
        (None, Some(path)) => match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("error: cannot read {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        _ => {
            eprintln!("error: provide a puzzle string or --file (see --help)");
            return ExitCode::FAILURE;
        }
    };

    let Some(grid) = input::parse_puzzle(&text) else {
        eprintln!("error: input is not a valid 9x9 puzzle");
        return ExitCode::FAILURE;
    };

    if grid.given_count() < FEW_CLUES {
        eprintln!(
            "warning: only {} clues given; finding all solutions may take a long time \
             (consider --limit)",
            grid.given_count()
        );
    }

    let mut engine = Engine::new();
    engine.load_grid(grid);
    let count = match args.limit {
        Some(limit) => engine.solve_bounded(limit),
        None => engine.solve(),
    };

    println!("{count} solutions found.");
    if args.count_only {
        return ExitCode::SUCCESS;
    }

    if let Some(index) = args.index {
        match engine.solution_at(index) {
            Some(solution) => {
                println!("solution {}/{count}", index + 1);
                print!("{solution}");
            }
            None => {
                eprintln!("error: no solution at index {index}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for (i, solution) in engine.solutions().iter().enumerate() {
            println!("solution {}/{count}", i + 1);
            print!("{solution}");
        }
    }

    ExitCode::SUCCESS
}
