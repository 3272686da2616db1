//! The 9×9 grid value type and the line-validity check.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the grid.
pub const SIZE: usize = 9;

/// Side length of one 3×3 box.
const BOX_SIZE: usize = 3;

/// A cell address, row and column each in `0..9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A 9×9 Sudoku grid. `0` marks an empty cell, `1..=9` a filled digit.
///
/// `Grid` is a plain `Copy` value, so snapshots taken during the search are
/// automatically independent of later mutation of the search buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; SIZE]; SIZE],
}

impl Grid {
    /// An all-empty grid.
    pub fn empty() -> Self {
        Self {
            cells: [[0; SIZE]; SIZE],
        }
    }

    /// Parse an 81-character puzzle string, row-major.
    ///
    /// `'1'..='9'` are clues, `'0'` and `'.'` are empty cells. Whitespace is
    /// ignored, so multi-line puzzle blocks parse too. Returns `None` on any
    /// other character or a wrong cell count.
    pub fn from_string(puzzle: &str) -> Option<Self> {
        let mut grid = Self::empty();
        let mut idx = 0;
        for ch in puzzle.chars() {
            if ch.is_whitespace() {
                continue;
            }
            if idx >= SIZE * SIZE {
                return None;
            }
            let value = match ch {
                '.' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => return None,
            };
            grid.cells[idx / SIZE][idx % SIZE] = value;
            idx += 1;
        }
        if idx == SIZE * SIZE {
            Some(grid)
        } else {
            None
        }
    }

    /// Build a grid from a dynamically sized matrix of digits.
    ///
    /// Returns `None` unless the matrix is exactly 9×9. Values outside
    /// `0..=9` are the caller's responsibility, matching the engine's
    /// load contract.
    pub fn from_rows(rows: &[Vec<u8>]) -> Option<Self> {
        if rows.len() != SIZE || rows.iter().any(|row| row.len() != SIZE) {
            return None;
        }
        let mut grid = Self::empty();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                grid.cells[row][col] = value;
            }
        }
        Some(grid)
    }

    /// Value at a position, `0` when empty.
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Write a value at a position. `0` clears the cell.
    pub fn set(&mut self, pos: Position, value: u8) {
        self.cells[pos.row][pos.col] = value;
    }

    /// Number of filled cells.
    pub fn given_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        SIZE * SIZE - self.given_count()
    }

    /// True when no cell is empty.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    /// First empty cell in row-major scan order, if any.
    ///
    /// The search relies on this fixed scan order for its deterministic
    /// solution discovery order.
    pub fn first_empty(&self) -> Option<Position> {
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.cells[row][col] == 0 {
                    return Some(Position::new(row, col));
                }
            }
        }
        None
    }

    /// Check all 27 lines (9 rows, 9 columns, 9 boxes) for duplicate
    /// non-zero digits. Empty cells never conflict.
    ///
    /// This is the search's pruning oracle, so it runs once per tentative
    /// placement; the per-line bitmask keeps it allocation-free.
    pub fn is_valid(&self) -> bool {
        for row in 0..SIZE {
            let mut seen = 0u16;
            for col in 0..SIZE {
                if !mark(&mut seen, self.cells[row][col]) {
                    return false;
                }
            }
        }
        for col in 0..SIZE {
            let mut seen = 0u16;
            for row in 0..SIZE {
                if !mark(&mut seen, self.cells[row][col]) {
                    return false;
                }
            }
        }
        for band in 0..BOX_SIZE {
            for stack in 0..BOX_SIZE {
                let mut seen = 0u16;
                for local_row in 0..BOX_SIZE {
                    for local_col in 0..BOX_SIZE {
                        let value =
                            self.cells[BOX_SIZE * band + local_row][BOX_SIZE * stack + local_col];
                        if !mark(&mut seen, value) {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }

    /// The grid as an 81-character row-major digit string.
    pub fn to_line_string(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|v| (b'0' + v) as char)
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

/// Record `value` in the line bitmask; false if it was already present.
fn mark(seen: &mut u16, value: u8) -> bool {
    if value == 0 {
        return true;
    }
    let bit = 1u16 << value;
    if *seen & bit != 0 {
        return false;
    }
    *seen |= bit;
    true
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            if row > 0 && row % BOX_SIZE == 0 {
                writeln!(f, "------+-------+------")?;
            }
            let mut line = String::new();
            for col in 0..SIZE {
                if col > 0 && col % BOX_SIZE == 0 {
                    line.push_str("| ");
                }
                match self.cells[row][col] {
                    0 => line.push('.'),
                    v => line.push((b'0' + v) as char),
                }
                line.push(' ');
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
