//! The ship grid: water and ship cells, with validated placement.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::PlacementError;
use crate::config::{BOARD_SIZE, SHIP, WATER};
use crate::ship::{Orientation, Ship, ShipPlacement, ShipType};

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Ship placed on the standard board.
pub type BoardShip = Ship<u128, { BOARD_SIZE as usize }>;

/// Integer view of a board-sized matrix.
pub type Matrix = [[u8; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// Ship occupancy of the board. Every cell starts as water.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    ship_map: BB,
    ship_count: usize,
}

impl Board {
    /// Create an empty board (all water).
    pub fn new() -> Self {
        Board {
            ship_map: BB::new(),
            ship_count: 0,
        }
    }

    /// Occupancy mask of all placed ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    /// Number of ships placed so far.
    pub fn ship_count(&self) -> usize {
        self.ship_count
    }

    /// `SHIP` or `WATER` for the cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<u8, PlacementError> {
        Ok(if self.ship_map.get(row, col)? { SHIP } else { WATER })
    }

    /// The whole grid as integers.
    pub fn values(&self) -> Matrix {
        let mut values = [[WATER; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for (r, c) in self.ship_map.iter_set_bits() {
            values[r][c] = SHIP;
        }
        values
    }

    /// Place a ship starting at (row, col).
    ///
    /// Every cell is checked before the board changes: a cell off the board
    /// yields `OutOfBounds`, a cell already holding a ship yields `Overlap`.
    /// Only ships placed earlier are considered for overlap.
    pub fn place(
        &mut self,
        ship_type: ShipType,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<BoardShip, PlacementError> {
        let ship = BoardShip::new(ship_type, orientation, row, col)?;
        let blocked = ship
            .cells()
            .find(|&(r, c)| self.ship_map.get(r, c).unwrap_or(false));
        if let Some((r, c)) = blocked {
            return Err(PlacementError::Overlap {
                ship: ship_type.name(),
                row: r,
                col: c,
            });
        }
        self.ship_map |= ship.mask();
        self.ship_count += 1;
        for (r, c) in ship.cells() {
            log::info!("{} ship placed at ({}, {})", ship_type.name(), r, c);
        }
        Ok(ship)
    }

    /// Place a ship described by a [`ShipPlacement`].
    pub fn place_ship(&mut self, placement: &ShipPlacement) -> Result<BoardShip, PlacementError> {
        self.place(
            placement.ship_type,
            placement.row,
            placement.col,
            placement.orientation,
        )
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{\n  ships: {},\n  ship_map: {:?}}}",
            self.ship_count, self.ship_map
        )
    }
}
