// Keyshift Grid
// The fixed 4x10 keyboard layout and its position permutations

use std::fmt;
use std::sync::OnceLock;

/// Number of rows in the keyboard grid
pub const ROWS: usize = 4;
/// Number of columns in the keyboard grid
pub const COLS: usize = 10;
/// Total number of grid positions
pub const SIZE: usize = ROWS * COLS;

/// Canonical layout, row-major: digits row, then the three letter rows.
const CANONICAL_ROWS: [&str; ROWS] = [
    "1234567890",
    "qwertyuiop",
    "asdfghjkl;",
    "zxcvbnm,./",
];

/// A 4x10 character grid.
///
/// Operations never add, remove, or duplicate characters; they permute
/// positions, so any grid derived from the canonical layout holds the
/// same 40 characters as a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    rows: [[char; COLS]; ROWS],
}

impl Grid {
    /// The canonical keyboard layout.
    ///
    /// Built once and shared read-only across all engine instances.
    pub fn canonical() -> Self {
        static CANONICAL: OnceLock<Grid> = OnceLock::new();
        *CANONICAL.get_or_init(|| {
            let mut rows = [[' '; COLS]; ROWS];
            for (r, line) in CANONICAL_ROWS.iter().enumerate() {
                for (c, ch) in line.chars().enumerate() {
                    rows[r][c] = ch;
                }
            }
            Grid { rows }
        })
    }

    /// Access the rows of the grid.
    pub fn rows(&self) -> &[[char; COLS]; ROWS] {
        &self.rows
    }

    /// Reverse the character order within each row. Row membership and
    /// row order are unchanged.
    pub fn horizontal_flip(&self) -> Self {
        let mut rows = self.rows;
        for row in rows.iter_mut() {
            row.reverse();
        }
        Self { rows }
    }

    /// Reverse the order of the rows. Each row's internal character
    /// order is unchanged.
    pub fn vertical_flip(&self) -> Self {
        let mut rows = self.rows;
        rows.reverse();
        Self { rows }
    }

    /// Rotate the flattened 40-character sequence: the character at
    /// flat index `i` moves to flat index `(i + amount) mod 40`.
    ///
    /// Floored modulo keeps negative amounts in range, so `shift(-5)`
    /// and `shift(35)` produce the same grid.
    pub fn shift(&self, amount: i32) -> Self {
        let flat = self.flatten();
        let mut shifted = [' '; SIZE];
        for (i, ch) in flat.iter().enumerate() {
            let target = (i as i64 + amount as i64).rem_euclid(SIZE as i64) as usize;
            shifted[target] = *ch;
        }
        Self::from_flat(shifted)
    }

    /// Linearize the grid in row-major order: row 0 left-to-right,
    /// then row 1, and so on.
    pub fn flatten(&self) -> [char; SIZE] {
        let mut flat = [' '; SIZE];
        for (r, row) in self.rows.iter().enumerate() {
            flat[r * COLS..(r + 1) * COLS].copy_from_slice(row);
        }
        flat
    }

    /// Rebuild the 4x10 grid by slicing a flat sequence into four
    /// consecutive chunks of ten.
    fn from_flat(flat: [char; SIZE]) -> Self {
        let mut rows = [[' '; COLS]; ROWS];
        for (r, row) in rows.iter_mut().enumerate() {
            row.copy_from_slice(&flat[r * COLS..(r + 1) * COLS]);
        }
        Self { rows }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for ch in row {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}
