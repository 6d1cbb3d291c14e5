//! Final board view combining ships and ability effects.

use core::fmt;

use crate::board::{Board, Matrix};
use crate::config::{BOARD_SIZE, EFFECT};
use crate::effect::EffectMask;

/// Board-sized integer grid: `EFFECT` where any ability landed, otherwise
/// the underlying `SHIP`/`WATER` value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DisplayGrid {
    cells: Matrix,
}

impl DisplayGrid {
    /// Merge `board` and `mask`. Effect cells hide whatever lies beneath.
    pub fn merge(board: &Board, mask: &EffectMask) -> Self {
        let mut cells = board.values();
        for r in 0..BOARD_SIZE as usize {
            for c in 0..BOARD_SIZE as usize {
                if mask.is_affected(r, c) {
                    cells[r][c] = EFFECT;
                }
            }
        }
        DisplayGrid { cells }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get(row)?.get(col).copied()
    }

    pub fn cells(&self) -> &Matrix {
        &self.cells
    }

    /// Number of cells holding `value`.
    pub fn count(&self, value: u8) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == value).count()
    }
}

impl fmt::Display for DisplayGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, &self.cells)
    }
}

/// Writes rows of space-separated integers, one row per line.
pub(crate) fn write_rows<const N: usize>(
    f: &mut fmt::Formatter<'_>,
    rows: &[[u8; N]; N],
) -> fmt::Result {
    for row in rows {
        for (c, value) in row.iter().enumerate() {
            if c > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        writeln!(f)?;
    }
    Ok(())
}
