//! Ability shapes: fixed 5×5 patterns centred on their middle cell.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::config::{AFFECTED, SHAPE_CENTER, SHAPE_SIZE};
use crate::display::write_rows;

type PatternBits = BitBoard<u32, SHAPE_SIZE>;

/// A `SHAPE_SIZE`×`SHAPE_SIZE` template of cells an ability affects.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ShapePattern {
    bits: PatternBits,
}

impl ShapePattern {
    /// Pattern with a cell active wherever `rule(row, col)` holds.
    pub fn from_rule<F>(rule: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        ShapePattern {
            bits: PatternBits::from_fn(rule),
        }
    }

    /// Whether the cell at (row, col) is active. Cells outside the pattern are not.
    pub fn is_active(&self, row: usize, col: usize) -> bool {
        self.bits.get(row, col).unwrap_or(false)
    }

    /// Active cells in row-major order.
    pub fn active_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.bits.iter_set_bits()
    }

    pub fn count_active(&self) -> usize {
        self.bits.count_ones()
    }

    /// The pattern as a 0/1 matrix.
    pub fn values(&self) -> [[u8; SHAPE_SIZE]; SHAPE_SIZE] {
        let mut values = [[0; SHAPE_SIZE]; SHAPE_SIZE];
        for (r, c) in self.active_cells() {
            values[r][c] = AFFECTED;
        }
        values
    }

    /// The pattern turned a quarter clockwise about its center.
    pub fn rotate90(&self) -> Self {
        Self::from_rule(|r, c| self.is_active(SHAPE_SIZE - 1 - c, r))
    }
}

impl fmt::Display for ShapePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, &self.values())
    }
}

/// Half cone: a point widening downward, one column per row on each side.
/// Rows below the center stay inactive.
pub fn cone() -> ShapePattern {
    ShapePattern::from_rule(|r, c| r <= SHAPE_CENTER && c.abs_diff(SHAPE_CENTER) <= r)
}

/// Center row and center column.
pub fn cross() -> ShapePattern {
    ShapePattern::from_rule(|r, c| r == SHAPE_CENTER || c == SHAPE_CENTER)
}

/// Cells within Manhattan distance `SHAPE_CENTER` of the center.
pub fn diamond() -> ShapePattern {
    ShapePattern::from_rule(|r, c| r.abs_diff(SHAPE_CENTER) + c.abs_diff(SHAPE_CENTER) <= SHAPE_CENTER)
}

/// The three abilities that can be stamped onto the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ability {
    Cone,
    Cross,
    /// Front view of an octahedron.
    Diamond,
}

impl Ability {
    pub fn name(self) -> &'static str {
        match self {
            Ability::Cone => "cone",
            Ability::Cross => "cross",
            Ability::Diamond => "diamond",
        }
    }

    /// Generate this ability's pattern.
    pub fn pattern(self) -> ShapePattern {
        match self {
            Ability::Cone => cone(),
            Ability::Cross => cross(),
            Ability::Diamond => diamond(),
        }
    }
}

/// Board cell an ability's pattern center is aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityPlacement {
    pub ability: Ability,
    pub row: isize,
    pub col: isize,
}

impl AbilityPlacement {
    pub const fn new(ability: Ability, row: isize, col: isize) -> Self {
        Self { ability, row, col }
    }
}
