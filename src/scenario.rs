//! A full run: place ships, build ability shapes, stamp them, merge.

use crate::board::{Board, BoardShip};
use crate::common::PlacementError;
use crate::config::{NUM_ABILITIES, NUM_SHIPS, STANDARD_ABILITIES, STANDARD_SHIPS};
use crate::display::DisplayGrid;
use crate::effect::EffectMask;
use crate::shape::{Ability, AbilityPlacement, ShapePattern};
use crate::ship::ShipPlacement;

/// Ship placements and ability origins for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub ships: [ShipPlacement; NUM_SHIPS],
    pub abilities: [AbilityPlacement; NUM_ABILITIES],
}

impl Scenario {
    /// The fixed scenario: four length-3 ships and one stamp per ability.
    pub const fn standard() -> Self {
        Scenario {
            ships: STANDARD_SHIPS,
            abilities: STANDARD_ABILITIES,
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::standard()
    }
}

/// Stage of a run. Phases only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    PlaceShips,
    BuildShapes,
    Stamp,
    Merge,
    Render,
    Done,
    /// A ship could not be placed; later phases were skipped.
    Failed,
}

/// Everything a successful run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub board: Board,
    /// Placed ships, in scenario order. All slots are filled after a successful run.
    pub ships: [Option<BoardShip>; NUM_SHIPS],
    pub mask: EffectMask,
    /// One pattern per ability, in scenario order.
    pub patterns: [(Ability, ShapePattern); NUM_ABILITIES],
    pub display: DisplayGrid,
}

/// Drives a [`Scenario`] through its phases.
pub struct Simulation {
    scenario: Scenario,
    phase: Phase,
}

impl Simulation {
    pub fn new(scenario: Scenario) -> Self {
        Simulation {
            scenario,
            phase: Phase::Init,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn enter(&mut self, phase: Phase) {
        log::debug!("{:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    /// Run every phase up to rendering, which is left to the caller.
    ///
    /// The first placement error stops the run; ships placed before it
    /// have already been logged.
    pub fn run(&mut self) -> Result<Outcome, PlacementError> {
        let mut board = Board::new();
        let mut mask = EffectMask::new();

        self.enter(Phase::PlaceShips);
        let ships = match place_all(&mut board, &self.scenario.ships) {
            Ok(ships) => ships,
            Err(e) => {
                log::error!("{}", e);
                self.enter(Phase::Failed);
                return Err(e);
            }
        };

        self.enter(Phase::BuildShapes);
        let patterns = self
            .scenario
            .abilities
            .map(|placement| (placement.ability, placement.ability.pattern()));

        self.enter(Phase::Stamp);
        for (placement, (_, pattern)) in self.scenario.abilities.iter().zip(patterns.iter()) {
            mask.stamp(pattern, placement.row, placement.col);
        }

        self.enter(Phase::Merge);
        let display = DisplayGrid::merge(&board, &mask);

        self.enter(Phase::Render);
        Ok(Outcome {
            board,
            ships,
            mask,
            patterns,
            display,
        })
    }

    /// Mark the run finished once the caller has rendered the outcome.
    pub fn finish(&mut self) {
        self.enter(Phase::Done);
    }
}

/// Place `placements` in order, stopping at the first failure.
pub fn place_all(
    board: &mut Board,
    placements: &[ShipPlacement; NUM_SHIPS],
) -> Result<[Option<BoardShip>; NUM_SHIPS], PlacementError> {
    let mut ships: [Option<BoardShip>; NUM_SHIPS] = [None; NUM_SHIPS];
    for (slot, placement) in ships.iter_mut().zip(placements.iter()) {
        *slot = Some(board.place_ship(placement)?);
    }
    Ok(ships)
}
