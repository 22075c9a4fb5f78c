// src/combat/src/action.rs

use creature::Creature;
use strum_macros::{Display, EnumIter};

/// The three things a creature can do on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ActionKind {
    Attack,
    Heal,
    Pass,
}

/// Which participant a value refers to. Used both for the acting side of a
/// turn and for the winner of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BattleSide {
    Player,
    Opponent,
}

/// Everything the presentation layer needs to narrate one resolved turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    /// Name of the creature that acted.
    pub actor: String,
    /// Which side acted.
    pub side: BattleSide,
    pub action: ActionKind,
    /// Health actually lost (Attack) or recovered (Heal); 0 for Pass.
    /// May undershoot the raw amount when clamping kicked in.
    pub amount: u32,
    /// Effectiveness multiplier; `Some` only for Attack.
    pub multiplier: Option<f32>,
    /// Whether this action left the target incapacitated (and therefore
    /// ended the battle).
    pub target_downed: bool,
}

/// Frozen view of a creature's health at the end of a battle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureSnapshot {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
}

impl From<&Creature> for CreatureSnapshot {
    fn from(c: &Creature) -> Self {
        Self {
            name: c.name.clone(),
            hp: c.hp,
            max_hp: c.max_hp,
        }
    }
}

/// Emitted exactly once, when a battle concludes.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleReport {
    pub winner: BattleSide,
    pub player: CreatureSnapshot,
    pub opponent: CreatureSnapshot,
}
