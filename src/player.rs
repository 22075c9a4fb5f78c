//! The human-driven controller: turns validated menu picks into actions.

use std::io::{BufRead, Write};

use anyhow::Context;

use combat::constants::POTION_HEAL;
use combat::{ActionKind, Controller};
use creature::Creature;

use crate::input::Prompter;

/// Chooses actions by asking the person at the keyboard. All input
/// validation happens inside the `Prompter`; by the time an index comes
/// back it is guaranteed valid, so the only possible failure is a closed
/// input stream.
pub struct PlayerController<'a, R, W> {
    prompter: &'a mut Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> PlayerController<'a, R, W> {
    pub fn new(prompter: &'a mut Prompter<R, W>) -> Self {
        Self { prompter }
    }
}

impl<R: BufRead, W: Write> Controller for PlayerController<'_, R, W> {
    fn choose_action(&mut self, own: &Creature, _foe: &Creature) -> anyhow::Result<ActionKind> {
        let heal_label = format!("Use a potion (+{POTION_HEAL} HP)");
        let options = ["Attack", heal_label.as_str(), "Pass"];
        let prompt = format!("\n----- Your turn -----\nWhat will {} do?", own.name);

        let idx = self
            .prompter
            .menu_choice(&prompt, &options)
            .context("reading the player's action")?;

        Ok(match idx {
            0 => ActionKind::Attack,
            1 => ActionKind::Heal,
            _ => ActionKind::Pass,
        })
    }
}
