// src/combat/src/lib.rs

pub mod action;
pub mod controller;
pub mod engine;
pub mod rng;


pub use crate::action::{ActionKind, BattleReport, BattleSide, CreatureSnapshot, TurnOutcome};
pub use crate::controller::{Controller, RandomController};
pub use crate::engine::{Battle, BattleSink, BattleState, CombatError};
pub use crate::rng::BattleRng;

/// Combat policy constants.
pub mod constants {
    /// HP restored by drinking a potion. A battle rule, not a property of
    /// any individual creature.
    pub const POTION_HEAL: u32 = 20;
}
