// src/combat/src/engine.rs

use creature::{Creature, Side};
use thiserror::Error;

use crate::action::{ActionKind, BattleReport, BattleSide, TurnOutcome};
use crate::constants::POTION_HEAL;
use crate::controller::Controller;

#[derive(Debug, Error)]
pub enum CombatError {
    /// Asking for a turn after conclusion is a caller bug, not a game state.
    #[error("battle already concluded")]
    AlreadyConcluded,
    #[error("controller failed to produce an action")]
    Controller(#[source] anyhow::Error),
}

/// The turn state machine. The player always acts first in a round; any
/// action that downs its target jumps straight to `Concluded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    AwaitingPlayerTurn,
    AwaitingOpponentTurn,
    Concluded,
}

/// Receiver for structured battle events. Rendering (color, pacing, bars)
/// is entirely the sink's business; no combat logic lives behind it.
pub trait BattleSink {
    /// Called after every resolved turn, with the post-resolution view of
    /// both sides.
    fn turn_resolved(&mut self, outcome: &TurnOutcome, player: &Side, opponent: &Side);

    /// Called exactly once, when the battle concludes.
    fn battle_ended(&mut self, report: &BattleReport);
}

/// A single battle between two sides. Construction restores both sides to
/// full health; the battle then runs strictly turn by turn until one active
/// creature is incapacitated.
pub struct Battle {
    player: Side,
    opponent: Side,
    state: BattleState,
}

impl Battle {
    pub fn new(mut player: Side, mut opponent: Side) -> Self {
        player.restore_all();
        opponent.restore_all();
        Self {
            player,
            opponent,
            state: BattleState::AwaitingPlayerTurn,
        }
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn player(&self) -> &Side {
        &self.player
    }

    pub fn opponent(&self) -> &Side {
        &self.opponent
    }

    /// Resolve one attack. Raw damage is the attacker's power scaled by the
    /// elemental multiplier and rounded half-away-from-zero (`f32::round`,
    /// so 10.5 becomes 11). Returns the health actually lost together with
    /// the multiplier; the actual loss undershoots the raw damage when the
    /// defender was already near 0.
    pub fn resolve_attack(attacker: &Creature, defender: &mut Creature) -> (u32, f32) {
        let mult = attacker.element.effectiveness(defender.element);
        let raw = (attacker.attack as f32 * mult).round() as u32;
        (defender.take_damage(raw), mult)
    }

    /// Execute one turn for whichever side the state machine says is up.
    /// Advances the state, or moves to `Concluded` the moment the target
    /// goes down (skipping the rest of the round).
    pub fn execute_turn(&mut self, action: ActionKind) -> Result<TurnOutcome, CombatError> {
        let acting = match self.state {
            BattleState::AwaitingPlayerTurn => BattleSide::Player,
            BattleState::AwaitingOpponentTurn => BattleSide::Opponent,
            BattleState::Concluded => return Err(CombatError::AlreadyConcluded),
        };
        let (actor, target) = match acting {
            BattleSide::Player => (&mut self.player, &mut self.opponent),
            BattleSide::Opponent => (&mut self.opponent, &mut self.player),
        };

        let outcome = match action {
            ActionKind::Attack => {
                let (dealt, mult) = Self::resolve_attack(actor.active(), target.active_mut());
                TurnOutcome {
                    actor: actor.active().name.clone(),
                    side: acting,
                    action,
                    amount: dealt,
                    multiplier: Some(mult),
                    target_downed: target.active().is_downed(),
                }
            }
            ActionKind::Heal => {
                let healed = actor.active_mut().heal(POTION_HEAL);
                TurnOutcome {
                    actor: actor.active().name.clone(),
                    side: acting,
                    action,
                    amount: healed,
                    multiplier: None,
                    target_downed: false,
                }
            }
            ActionKind::Pass => TurnOutcome {
                actor: actor.active().name.clone(),
                side: acting,
                action,
                amount: 0,
                multiplier: None,
                target_downed: false,
            },
        };

        self.state = if outcome.target_downed {
            BattleState::Concluded
        } else {
            match acting {
                BattleSide::Player => BattleState::AwaitingOpponentTurn,
                BattleSide::Opponent => BattleState::AwaitingPlayerTurn,
            }
        };

        Ok(outcome)
    }

    /// Drive the battle to conclusion: ask the side on turn for an action,
    /// resolve it, report it, repeat. One action resolves fully before the
    /// next is requested; the only blocking point is inside a controller.
    pub fn run(
        &mut self,
        player_ctrl: &mut dyn Controller,
        opponent_ctrl: &mut dyn Controller,
        sink: &mut dyn BattleSink,
    ) -> Result<BattleReport, CombatError> {
        loop {
            let action = match self.state {
                BattleState::Concluded => break,
                BattleState::AwaitingPlayerTurn => player_ctrl
                    .choose_action(self.player.active(), self.opponent.active())
                    .map_err(CombatError::Controller)?,
                BattleState::AwaitingOpponentTurn => opponent_ctrl
                    .choose_action(self.opponent.active(), self.player.active())
                    .map_err(CombatError::Controller)?,
            };
            let outcome = self.execute_turn(action)?;
            sink.turn_resolved(&outcome, &self.player, &self.opponent);
        }

        let report = self.build_report();
        sink.battle_ended(&report);
        Ok(report)
    }

    /// Final report; `None` while the battle is still running.
    pub fn report(&self) -> Option<BattleReport> {
        (self.state == BattleState::Concluded).then(|| self.build_report())
    }

    fn build_report(&self) -> BattleReport {
        // The player wins iff their creature still stands and the
        // opponent's is down; every other configuration is a loss.
        let winner = if !self.player.active().is_downed() && self.opponent.active().is_downed() {
            BattleSide::Player
        } else {
            BattleSide::Opponent
        };
        BattleReport {
            winner,
            player: self.player.active().into(),
            opponent: self.opponent.active().into(),
        }
    }
}
