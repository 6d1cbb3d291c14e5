use crate::shape::{Ability, AbilityPlacement};
use crate::ship::{Orientation, ShipPlacement, ShipType};

pub const BOARD_SIZE: u8 = 10;
pub const SHIP_LENGTH: usize = 3;

/// Side of every ability pattern; the pattern center sits at `SHAPE_CENTER`.
pub const SHAPE_SIZE: usize = 5;
pub const SHAPE_CENTER: usize = SHAPE_SIZE / 2;

/// Grid cell holding water.
pub const WATER: u8 = 0;
/// Grid cell holding part of a ship.
pub const SHIP: u8 = 3;
/// Effect mask / pattern cell that is active.
pub const AFFECTED: u8 = 1;
/// Display value for a cell touched by any ability.
pub const EFFECT: u8 = 5;

pub const NUM_SHIPS: usize = 4;
pub const NUM_ABILITIES: usize = 3;

pub const HORIZONTAL: ShipType = ShipType::new("Horizontal", SHIP_LENGTH);
pub const VERTICAL: ShipType = ShipType::new("Vertical", SHIP_LENGTH);
pub const DIAGONAL_DOWN_RIGHT: ShipType = ShipType::new("Diagonal ↘", SHIP_LENGTH);
pub const DIAGONAL_DOWN_LEFT: ShipType = ShipType::new("Diagonal ↙", SHIP_LENGTH);

/// Ships of the standard scenario, in placement order.
pub const STANDARD_SHIPS: [ShipPlacement; NUM_SHIPS] = [
    ShipPlacement::new(HORIZONTAL, 2, 4, Orientation::Horizontal),
    ShipPlacement::new(VERTICAL, 5, 7, Orientation::Vertical),
    ShipPlacement::new(DIAGONAL_DOWN_RIGHT, 0, 0, Orientation::DiagonalDownRight),
    ShipPlacement::new(DIAGONAL_DOWN_LEFT, 6, 9, Orientation::DiagonalDownLeft),
];

/// Ability origins of the standard scenario, in stamping order.
pub const STANDARD_ABILITIES: [AbilityPlacement; NUM_ABILITIES] = [
    AbilityPlacement::new(Ability::Cone, 1, 2),
    AbilityPlacement::new(Ability::Cross, 4, 4),
    AbilityPlacement::new(Ability::Diamond, 7, 6),
];
