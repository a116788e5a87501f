//! CLI rock-paper-scissors example.
//!
//! Run with `RUST_LOG=rpsrs=debug` to see the engine's round trace.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use rpsrs::{Choice, Game, GameOptions, MoveError, Outcome, RoundResult};

fn main() {
    env_logger::init();

    println!("Rock, Paper, Scissors (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    loop {
        println!(
            "\nRound: {}/{}  Score: {}",
            game.round_index() + 1,
            game.round_limit(),
            game.score()
        );

        let input = prompt_line("Your move [r]ock [p]aper [s]cissors: ");
        if input == "q" || input == "quit" {
            println!("Goodbye.");
            return;
        }

        let choice = match input.parse::<Choice>() {
            Ok(choice) => choice,
            Err(err) => {
                println!("{err}.");
                continue;
            }
        };

        match game.submit_move(choice) {
            Ok(result) => print_round(&result),
            Err(MoveError::InvalidState) => {
                println!("The game is over.");
            }
        }

        if let Some(summary) = game.summary() {
            println!("\nGame over! Your {summary}.");
            match prompt_line("Restart game? (y/n): ").as_str() {
                "y" | "yes" => game.reset(),
                _ => {
                    println!("Goodbye.");
                    return;
                }
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        // EOF
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_round(result: &RoundResult) {
    let code = match result.outcome {
        Outcome::Win => "32",
        Outcome::Lose => "31",
        Outcome::Draw => "90",
    };

    println!(
        "{}  {} vs. {}",
        colorize(result.outcome.label(), code),
        result.player_choice.symbol(),
        result.opponent_choice.symbol()
    );
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
