//! Terminal presentation: banner, health bars and colored battle
//! narration. Pure rendering over the engine's structured events; nothing
//! in here touches combat state.

use crossterm::style::Stylize;

use combat::{ActionKind, BattleReport, BattleSide, BattleSink, TurnOutcome};
use creature::Side;

const BANNER: &str = r"
 ██████╗  ██████╗  ██████╗██╗  ██╗███████╗████████╗
 ██╔══██╗██╔═══██╗██╔════╝██║ ██╔╝██╔════╝╚══██╔══╝
 ██████╔╝██║   ██║██║     █████╔╝ █████╗     ██║
 ██╔═══╝ ██║   ██║██║     ██╔═██╗ ██╔══╝     ██║
 ██║     ╚██████╔╝╚██████╗██║  ██╗███████╗   ██║
 ╚═╝      ╚═════╝  ╚═════╝╚═╝  ╚═╝╚══════╝   ╚═╝
                A R E N A
";

pub fn print_banner() {
    println!("{}", BANNER.cyan());
}

/// Fixed-width ASCII health bar, e.g. `[████------] 40/100`.
pub fn hp_bar(hp: u32, max_hp: u32, width: usize) -> String {
    let filled = if max_hp == 0 {
        0
    } else {
        ((hp as f32 / max_hp as f32) * width as f32).round() as usize
    };
    let filled = filled.min(width);
    format!(
        "[{}{}] {}/{}",
        "█".repeat(filled),
        "-".repeat(width - filled),
        hp,
        max_hp
    )
}

const BAR_WIDTH: usize = 22;

/// The game's `BattleSink`: narrates each turn and the final outcome to
/// stdout.
pub struct TerminalDisplay;

impl TerminalDisplay {
    pub fn new() -> Self {
        Self
    }

    fn print_standings(&self, player: &Side, opponent: &Side) {
        let you = player.active();
        let foe = opponent.active();
        println!("{}", "─".repeat(52));
        println!(
            "{:<6}: {}",
            player.name(),
            hp_bar(you.hp, you.max_hp, BAR_WIDTH).green()
        );
        println!(
            "{:<6}: {}",
            opponent.name(),
            hp_bar(foe.hp, foe.max_hp, BAR_WIDTH).yellow()
        );
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleSink for TerminalDisplay {
    fn turn_resolved(&mut self, outcome: &TurnOutcome, player: &Side, opponent: &Side) {
        if outcome.side == BattleSide::Opponent {
            println!("\n----- {}'s turn -----", opponent.name());
        }

        match outcome.action {
            ActionKind::Attack => {
                let note = match outcome.multiplier {
                    Some(m) if m > 1.0 => " It's super effective!".to_string(),
                    Some(m) if m < 1.0 => " It's not very effective...".to_string(),
                    _ => String::new(),
                };
                let line = format!(
                    "{} attacks for {} damage.{}",
                    outcome.actor, outcome.amount, note
                );
                match outcome.side {
                    BattleSide::Player => println!("{}", line.green()),
                    BattleSide::Opponent => println!("{}", line.red()),
                }
            }
            ActionKind::Heal => {
                println!(
                    "{}",
                    format!(
                        "{} drinks a potion and recovers {} HP.",
                        outcome.actor, outcome.amount
                    )
                    .blue()
                );
            }
            ActionKind::Pass => {
                println!("{} passes the turn.", outcome.actor);
            }
        }

        self.print_standings(player, opponent);

        if outcome.target_downed {
            let downed = match outcome.side {
                BattleSide::Player => &opponent.active().name,
                BattleSide::Opponent => &player.active().name,
            };
            println!("{}", format!("{downed} is down!").bold());
        }
    }

    fn battle_ended(&mut self, report: &BattleReport) {
        println!("\n{}", "========== BATTLE OVER ==========".bold());
        println!(
            "{} finished at {}/{} HP",
            report.player.name, report.player.hp, report.player.max_hp
        );
        println!(
            "{} finished at {}/{} HP",
            report.opponent.name, report.opponent.hp, report.opponent.max_hp
        );
        match report.winner {
            BattleSide::Player => println!("{}", "VICTORY! Your creature prevails!".green().bold()),
            BattleSide::Opponent => println!("{}", "DEFEAT... your creature is down.".red().bold()),
        }
        println!("{}", "=================================".bold());
    }
}
