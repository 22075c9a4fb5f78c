//! End-to-end session wiring: scripted stdin through the real prompter,
//! player controller, engine and a recording sink.

use std::io::Cursor;

use combat::{
    ActionKind, Battle, BattleReport, BattleRng, BattleSide, BattleSink, RandomController,
    TurnOutcome,
};
use creature::{Creature, Side};
use pocket_arena::input::Prompter;
use pocket_arena::player::PlayerController;
use pocket_arena::roster::roster;

#[derive(Default)]
struct Recording {
    turns: Vec<TurnOutcome>,
    report: Option<BattleReport>,
}

impl BattleSink for Recording {
    fn turn_resolved(&mut self, outcome: &TurnOutcome, _player: &Side, _opponent: &Side) {
        self.turns.push(outcome.clone());
    }

    fn battle_ended(&mut self, report: &BattleReport) {
        self.report = Some(report.clone());
    }
}

fn from_roster(name: &str) -> Creature {
    roster()
        .into_iter()
        .find(|c| c.name == name)
        .expect("creature in roster")
}

#[test]
fn scripted_player_beats_random_rival() {
    // Plenty of "attack" picks, with some garbage up front to exercise the
    // re-prompt loop mid-battle. Cinderpup (23 ATK, Fire) hits Thornling
    // (92 HP, Plant) for 46 at x2.0, while Thornling's counters are
    // resisted at x0.5, so the player wins under any rival decisions.
    let script = format!("abc\n\n9\n{}", "1\n".repeat(30));
    let mut prompter = Prompter::new(Cursor::new(script), Vec::new());

    let mut battle = Battle::new(
        Side::new("You", vec![from_roster("Cinderpup")]),
        Side::new("Rival", vec![from_roster("Thornling")]),
    );
    let mut player = PlayerController::new(&mut prompter);
    let mut rival = RandomController::new(BattleRng::new(20260830));
    let mut sink = Recording::default();

    let report = battle.run(&mut player, &mut rival, &mut sink).unwrap();

    assert_eq!(report.winner, BattleSide::Player);
    assert_eq!(report.opponent.hp, 0);
    assert!(report.player.hp > 0);

    // First resolved turn is the player's super-effective opener.
    let first = &sink.turns[0];
    assert_eq!(first.side, BattleSide::Player);
    assert_eq!(first.action, ActionKind::Attack);
    assert_eq!(first.amount, 46);
    assert_eq!(first.multiplier, Some(2.0));

    // Turns strictly alternate until the final, downing action.
    for pair in sink.turns.windows(2) {
        assert_ne!(pair[0].side, pair[1].side);
        assert!(!pair[0].target_downed);
    }
    assert!(sink.turns.last().unwrap().target_downed);
    assert_eq!(sink.report, Some(report));
}

#[test]
fn replay_rebuilds_a_fresh_battle_at_full_health() {
    let ember = from_roster("Cinderpup");
    let sprout = from_roster("Thornling");

    let mut first = Battle::new(
        Side::new("You", vec![ember.clone()]),
        Side::new("Rival", vec![sprout.clone()]),
    );
    first.execute_turn(ActionKind::Attack).unwrap();
    assert!(first.opponent().active().hp < sprout.max_hp);

    // A new session starts from the same templates, restored.
    let second = Battle::new(
        Side::new("You", vec![ember]),
        Side::new("Rival", vec![sprout]),
    );
    assert_eq!(second.player().active().hp, second.player().active().max_hp);
    assert_eq!(
        second.opponent().active().hp,
        second.opponent().active().max_hp
    );
}
