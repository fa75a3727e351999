//! Formatting utilities for terminal output

use crate::core::Guess;
use crate::game::Outcome;

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Format the history as an emoji share grid
///
/// The header shows the attempt count on a win and `X` on a loss, e.g.
/// `Wordle 3/6`.
#[must_use]
pub fn share_grid(history: &[Guess], outcome: Outcome, max_guesses: usize) -> String {
    let score = match outcome {
        Outcome::Won => history.len().to_string(),
        Outcome::Lost | Outcome::InProgress => "X".to_string(),
    };

    let mut result = format!("Wordle {score}/{max_guesses}\n");
    for guess in history {
        result.push('\n');
        result.push_str(&guess.to_emoji());
    }
    result
}

/// Message shown when a round ends
#[must_use]
pub fn outcome_message(outcome: Outcome, attempts: usize, secret: &str) -> Option<String> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Won => Some(match attempts {
            1 => "Genius! Solved in one.".to_string(),
            2 => "Magnificent! Solved in two.".to_string(),
            3 => "Impressive! Solved in three.".to_string(),
            4 => "Splendid! Solved in four.".to_string(),
            5 => "Great! Solved in five.".to_string(),
            n => format!("Phew! Solved in {n}."),
        }),
        Outcome::Lost => Some(format!("Out of guesses. The word was {secret}.")),
    }
}
