#![cfg_attr(not(feature = "std"), no_std)]
//! Ships on a 10×10 grid, overlaid with cone, cross and diamond abilities.

mod bitboard;
mod board;
mod common;
mod config;
mod display;
mod effect;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod render;
mod scenario;
mod shape;
mod ship;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use display::*;
pub use effect::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use render::Report;
pub use scenario::*;
pub use shape::{cone, cross, diamond, Ability, AbilityPlacement, ShapePattern};
pub use ship::*;
