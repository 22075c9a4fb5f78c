// src/main.rs

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use rand::Rng;

use combat::{Battle, BattleRng, RandomController};
use creature::{Creature, Side};
use error::GameError;
use pocket_arena::display::{self, TerminalDisplay};
use pocket_arena::input::Prompter;
use pocket_arena::player::PlayerController;
use pocket_arena::roster;

fn choose_creature<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    catalog: &[Creature],
) -> Result<Creature, GameError> {
    println!("\nChoose your creature:");
    for (i, creature) in catalog.iter().enumerate() {
        println!("{}. {}", i + 1, creature.status_line());
    }
    let number = prompter.bounded_int("Number: ", Some(1), Some(catalog.len() as i64))?;
    Ok(catalog[(number - 1) as usize].clone())
}

/// Draw a random opponent distinct from the player's pick.
fn draw_opponent(catalog: &[Creature], player: &Creature) -> Creature {
    let others: Vec<&Creature> = catalog.iter().filter(|c| c.name != player.name).collect();
    let idx = rand::rng().random_range(0..others.len());
    others[idx].clone()
}

fn run_battle<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    player_creature: Creature,
    opponent_creature: Creature,
) -> Result<()> {
    println!("\nYour creature:\n  {}", player_creature.status_line());
    println!("Rival creature:\n  {}", opponent_creature.status_line());

    let mut battle = Battle::new(
        Side::new("You", vec![player_creature]),
        Side::new("Rival", vec![opponent_creature]),
    );
    let mut player = PlayerController::new(prompter);
    let mut opponent = RandomController::new(BattleRng::new(rand::random()));
    let mut sink = TerminalDisplay::new();

    battle
        .run(&mut player, &mut opponent, &mut sink)
        .context("battle did not run to conclusion")?;
    Ok(())
}

fn main() -> Result<()> {
    display::print_banner();
    println!("Welcome to Pocket Arena!");
    println!("------------------------------------------------");

    let catalog = roster::roster();
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());

    let mut chosen = choose_creature(&mut prompter, &catalog)?;

    loop {
        let opponent = draw_opponent(&catalog, &chosen);
        run_battle(&mut prompter, chosen.clone(), opponent)?;

        let again = prompter.menu_choice("\nPlay again?", &["Yes", "No"])?;
        if again == 1 {
            println!("Thanks for playing! See you next time!");
            break;
        }

        let repick = prompter.menu_choice("Pick a different creature?", &["Yes", "No"])?;
        if repick == 0 {
            chosen = choose_creature(&mut prompter, &catalog)?;
        }
    }

    Ok(())
}
