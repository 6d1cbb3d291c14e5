//! Ship geometry: orientations, ship types, and validated placements.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::bitboard::BitBoard;
use crate::common::PlacementError;

/// Direction a ship extends from its starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Same row, increasing column.
    Horizontal,
    /// Same column, increasing row.
    Vertical,
    /// Increasing row and column (↘).
    DiagonalDownRight,
    /// Increasing row, decreasing column (↙).
    DiagonalDownLeft,
}

impl Orientation {
    /// Row and column delta between consecutive cells.
    pub const fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::DiagonalDownRight => (1, 1),
            Orientation::DiagonalDownLeft => (1, -1),
        }
    }

    /// The `k`-th cell of a ship starting at (`row`, `col`), or `None` when
    /// it would leave the range of `usize` (e.g. left of column 0).
    pub fn cell(self, row: usize, col: usize, k: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.step();
        let k = isize::try_from(k).ok()?;
        let r = row.checked_add_signed(dr.checked_mul(k)?)?;
        let c = col.checked_add_signed(dc.checked_mul(k)?)?;
        Some((r, c))
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// Where and how a ship should go on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipPlacement {
    pub ship_type: ShipType,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl ShipPlacement {
    pub const fn new(ship_type: ShipType, row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            ship_type,
            row,
            col,
            orientation,
        }
    }
}

/// A ship whose cells all lie on an N×N board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    ship_type: ShipType,
    orientation: Orientation,
    row: usize,
    col: usize,
    mask: BitBoard<T, N>,
}

impl<T, const N: usize> Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Lay out a ship at (`row`, `col`) with `orientation`.
    ///
    /// Fails with [`PlacementError::OutOfBounds`] if any cell falls outside
    /// `[0, N)` in either axis. Nothing is built in that case.
    pub fn new(
        ship_type: ShipType,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, PlacementError> {
        let mut mask = BitBoard::<T, N>::new();
        for k in 0..ship_type.length() {
            match orientation.cell(row, col, k) {
                Some((r, c)) if r < N && c < N => mask.set(r, c)?,
                _ => {
                    return Err(PlacementError::OutOfBounds {
                        ship: ship_type.name(),
                        row,
                        col,
                    })
                }
            }
        }
        Ok(Ship {
            ship_type,
            orientation,
            row,
            col,
            mask,
        })
    }

    /// Occupied cells, in order from the starting cell.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.ship_type.length())
            .filter_map(move |k| self.orientation.cell(self.row, self.col, k))
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col).unwrap_or(false)
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Starting cell (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BitBoard<T, N> {
        self.mask
    }
}

impl<T, const N: usize> fmt::Debug for Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: ({}, {}), orientation: {:?}, length: {} }}",
            self.ship_type.name(),
            self.row,
            self.col,
            self.orientation,
            self.ship_type.length(),
        )
    }
}
