//! Colored terminal rendering of the game state

use super::formatters::{KEYBOARD_ROWS, outcome_message, share_grid};
use crate::core::{Guess, KeyboardState, LetterStatus};
use crate::game::{GameEngine, Outcome};
use colored::{ColoredString, Colorize};

/// Paint one letter as a colored tile
#[must_use]
pub fn tile(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        Some(LetterStatus::Correct) => text.black().on_green().bold(),
        Some(LetterStatus::Present) => text.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => text.white().on_bright_black(),
        Some(LetterStatus::Empty) | None => text.normal(),
    }
}

/// Render a submitted guess as a row of tiles
#[must_use]
pub fn render_guess(guess: &Guess) -> String {
    guess
        .letters()
        .iter()
        .map(|l| tile(l.character(), Some(l.status())).to_string())
        .collect()
}

/// Render the keyboard, one line per row
#[must_use]
pub fn render_keyboard(keyboard: &KeyboardState) -> String {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|key| tile(key, keyboard.get(key)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the board, the keyboard, and remaining attempts
pub fn print_game(engine: &GameEngine) {
    println!("\n{}", "─".repeat(40).cyan());
    for guess in engine.history() {
        println!("  {}", render_guess(guess));
    }
    println!("{}", "─".repeat(40).cyan());
    println!("{}", render_keyboard(engine.keyboard()));
    if engine.outcome() == Outcome::InProgress {
        println!(
            "\n{} attempt(s) left",
            engine.remaining_guesses().to_string().bright_cyan().bold()
        );
    }
}

/// Print the end-of-round banner and share grid
pub fn print_outcome(engine: &GameEngine) {
    let outcome = engine.outcome();
    let Some(message) = outcome_message(
        outcome,
        engine.history().len(),
        engine.secret_word().text(),
    ) else {
        return;
    };

    println!("\n{}", "═".repeat(40).bright_cyan());
    match outcome {
        Outcome::Won => println!("  {}", message.bright_green().bold()),
        _ => println!("  {}", message.bright_red().bold()),
    }
    println!("{}", "═".repeat(40).bright_cyan());
    println!(
        "\n{}\n",
        share_grid(engine.history(), outcome, engine.config().max_guesses())
    );
}
