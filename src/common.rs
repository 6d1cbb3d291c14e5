//! Errors shared by ship placement and the simulation.

use crate::bitboard::BitBoardError;

/// Errors returned when a ship cannot be placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Some cell of the ship falls outside the board. Carries the ship's
    /// starting cell as requested.
    OutOfBounds {
        ship: &'static str,
        row: usize,
        col: usize,
    },
    /// A cell of the ship is already held by an earlier ship.
    Overlap {
        ship: &'static str,
        row: usize,
        col: usize,
    },
    /// Underlying bitboard error.
    BitBoard(BitBoardError),
}

impl From<BitBoardError> for PlacementError {
    fn from(err: BitBoardError) -> Self {
        PlacementError::BitBoard(err)
    }
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::OutOfBounds { ship, row, col } => write!(
                f,
                "{} ship starting at ({}, {}) runs past the board edge",
                ship, row, col
            ),
            PlacementError::Overlap { ship, row, col } => write!(
                f,
                "{} ship overlaps another ship at ({}, {})",
                ship, row, col
            ),
            PlacementError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
