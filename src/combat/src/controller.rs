// src/combat/src/controller.rs

use crate::action::ActionKind;
use crate::rng::BattleRng;
use creature::Creature;

/// Something that can decide what a creature does with its turn. The engine
/// only ever sees this capability; whether the decision comes from a human
/// at a prompt or from a random draw is invisible to it.
///
/// `own` is the controller's active creature, `foe` the other side's.
/// Failure is reserved for controllers backed by fallible I/O (a closed
/// stdin); it is never used to signal an invalid in-game choice.
pub trait Controller {
    fn choose_action(&mut self, own: &Creature, foe: &Creature) -> anyhow::Result<ActionKind>;
}

/// The automated opponent: a uniform draw over the three actions, blind to
/// the battle state. Deliberately that simple.
pub struct RandomController {
    rng: BattleRng,
}

impl RandomController {
    pub fn new(rng: BattleRng) -> Self {
        Self { rng }
    }
}

const CHOICES: [ActionKind; 3] = [ActionKind::Attack, ActionKind::Heal, ActionKind::Pass];

impl Controller for RandomController {
    fn choose_action(&mut self, _own: &Creature, _foe: &Creature) -> anyhow::Result<ActionKind> {
        let idx = self.rng.random_range(0..CHOICES.len());
        Ok(CHOICES[idx])
    }
}
