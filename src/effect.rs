//! Effect mask: which board cells some ability has touched.

use crate::bitboard::BitBoard;
use crate::board::Matrix;
use crate::config::{AFFECTED, BOARD_SIZE, SHAPE_CENTER};
use crate::shape::ShapePattern;

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Board-sized mask of affected cells. Stamping only ever adds cells.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct EffectMask {
    affected: BB,
}

impl EffectMask {
    /// Mask with no cell affected.
    pub fn new() -> Self {
        EffectMask { affected: BB::new() }
    }

    pub fn affected(&self) -> BB {
        self.affected
    }

    pub fn is_affected(&self, row: usize, col: usize) -> bool {
        self.affected.get(row, col).unwrap_or(false)
    }

    /// `AFFECTED` or 0 for the cell at (row, col).
    pub fn value(&self, row: usize, col: usize) -> u8 {
        if self.is_affected(row, col) {
            AFFECTED
        } else {
            0
        }
    }

    /// The whole mask as integers.
    pub fn values(&self) -> Matrix {
        let mut values = [[0; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for (r, c) in self.affected.iter_set_bits() {
            values[r][c] = AFFECTED;
        }
        values
    }

    /// Project `pattern` with its center on (`origin_row`, `origin_col`).
    ///
    /// Cells landing off the board are skipped. Returns how many cells were
    /// marked, counting ones that were already affected.
    pub fn stamp(&mut self, pattern: &ShapePattern, origin_row: isize, origin_col: isize) -> usize {
        let size = BOARD_SIZE as isize;
        let center = SHAPE_CENTER as isize;
        let mut marked = 0;
        for (i, j) in pattern.active_cells() {
            let (Some(r), Some(c)) = (
                origin_row.checked_add(i as isize - center),
                origin_col.checked_add(j as isize - center),
            ) else {
                continue;
            };
            if (0..size).contains(&r)
                && (0..size).contains(&c)
                && self.affected.set(r as usize, c as usize).is_ok()
            {
                marked += 1;
            }
        }
        log::debug!(
            "stamped {} of {} cells at ({}, {})",
            marked,
            pattern.count_active(),
            origin_row,
            origin_col
        );
        marked
    }
}
