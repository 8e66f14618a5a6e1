//! Interactive console front end: menu, prompts, and turn pacing.
//!
//! All game logic lives in the library; this binary only reads input,
//! prints results, and re-prompts on invalid entries.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use log::{info, warn};

use dice_race::{
    DiceRoller, GameConfig, GameSession, HistoryStore, DEFAULT_HISTORY_FILE, MAX_PLAYERS,
    MIN_PLAYERS,
};

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Print a prompt and read one trimmed line. Exits the process cleanly on
/// stdin EOF instead of spinning on a dead prompt.
fn prompt(text: &str) -> String {
    print!("{text}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => {
            println!();
            std::process::exit(0);
        }
        Ok(_) => line.trim().to_string(),
    }
}

/// Re-prompt until the input parses as an unsigned integer.
fn prompt_number(text: &str) -> u32 {
    loop {
        match prompt(text).parse() {
            Ok(value) => return value,
            Err(_) => println!("{RED}Please enter a number.{RESET}"),
        }
    }
}

/// Collect player count, target score, and names, re-prompting on every
/// invalid entry until the configuration validates.
fn configure_game() -> GameConfig {
    loop {
        let count = loop {
            let count = prompt_number(&format!(
                "{CYAN}Enter number of players ({MIN_PLAYERS}-{MAX_PLAYERS}): {RESET}"
            )) as usize;
            if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
                break count;
            }
            println!("{RED}Invalid number of players.{RESET}");
        };

        let target_score = loop {
            let target = prompt_number(&format!("{CYAN}Enter target score: {RESET}"));
            if target > 0 {
                break target;
            }
            println!("{RED}Target score must be positive.{RESET}");
        };

        let mut names = Vec::with_capacity(count);
        for i in 1..=count {
            loop {
                let name = prompt(&format!("{CYAN}Enter name for Player {i}: {RESET}"));
                if name.is_empty() {
                    println!("{RED}Name cannot be empty.{RESET}");
                } else {
                    names.push(name);
                    break;
                }
            }
        }

        match GameConfig::new(names, target_score) {
            Ok(config) => return config,
            Err(e) => println!("{RED}{e}{RESET}"),
        }
    }
}

fn roll_animation() {
    print!("{YELLOW}Rolling");
    for _ in 0..3 {
        print!(".");
        let _ = io::stdout().flush();
        thread::sleep(Duration::from_millis(150));
    }
    println!("{RESET}");
}

fn play_game(history: &HistoryStore) {
    let config = configure_game();
    let mut session = GameSession::new(&config);
    let mut dice = DiceRoller::from_entropy();

    while !session.is_over() {
        if let Some(player) = session.current_player() {
            println!("\n---- {}'s turn ----", player.name());
        }
        prompt("Press Enter to roll...");
        roll_animation();

        if let Ok(outcome) = session.play_turn(&mut dice) {
            let name = session.players()[outcome.player].name();
            println!(
                "{YELLOW}{name} rolled a {}. Total score: {}{RESET}",
                outcome.roll, outcome.score
            );
        }
    }

    let Some(winner) = session.winner() else {
        return;
    };
    println!("\n{GREEN}{} WINS the game!{RESET}", winner.name());
    info!(
        "game over: {} won with {} points (target {})",
        winner.name(),
        winner.score(),
        session.target_score()
    );

    println!("\n{CYAN}Leaderboard:{RESET}");
    for (place, player) in session.leaderboard().iter().enumerate() {
        println!(
            "{}. {} - {} points (Avg roll: {:.2})",
            place + 1,
            player.name(),
            player.score(),
            player.average_roll()
        );
    }

    match history.save(session.target_score(), session.players(), winner.name()) {
        Ok(()) => println!(
            "\n{GREEN}Game history saved to {}{RESET}",
            history.path().display()
        ),
        Err(e) => {
            warn!("game finished but history was not saved: {e}");
            println!("\n{RED}Warning: could not save history: {e}{RESET}");
        }
    }
}

fn show_history(history: &HistoryStore) {
    match history.replay() {
        Ok(Some(content)) if !content.trim().is_empty() => {
            println!("\n{CYAN}Game History:{RESET}");
            print!("{content}");
        }
        Ok(_) => println!("{RED}No history found.{RESET}"),
        Err(e) => println!("{RED}Warning: could not read history: {e}{RESET}"),
    }
}

fn main() {
    env_logger::init();

    let history = HistoryStore::new(DEFAULT_HISTORY_FILE);

    loop {
        println!("\n{CYAN}===== Dice Game Menu ====={RESET}");
        println!("1. Start New Game");
        println!("2. View History");
        println!("3. Exit");

        match prompt("Enter choice: ").as_str() {
            "1" => play_game(&history),
            "2" => show_history(&history),
            "3" => {
                println!("{GREEN}Exiting game.{RESET}");
                break;
            }
            _ => println!("{RED}Invalid choice.{RESET}"),
        }
    }
}
