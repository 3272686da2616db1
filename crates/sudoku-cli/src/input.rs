//! Puzzle input parsing for the command line.
//!
//! Two shapes are accepted: the usual 81-character puzzle line, and a JSON
//! 9×9 array of digits for callers that keep grids as structured data.

use sudoku_engine::Grid;

/// Parse puzzle text in either supported shape.
///
/// Leading `[` selects the JSON form; anything else is treated as a puzzle
/// line. Returns `None` when the text fits neither.
pub fn parse_puzzle(text: &str) -> Option<Grid> {
    let trimmed = text.trim();
    if trimmed.starts_with('[') {
        let rows: Vec<Vec<u8>> = serde_json::from_str(trimmed).ok()?;
        if rows.iter().flatten().any(|&v| v > 9) {
            return None;
        }
        Grid::from_rows(&rows)
    } else {
        Grid::from_string(trimmed)
    }
}
