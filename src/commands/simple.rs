//! Simple line-based play mode
//!
//! Text-based game without the TUI. Each input line is typed into the
//! engine letter by letter and then submitted.

use crate::game::{GameEngine, GameError, WORD_LENGTH};
use crate::output::{print_game, print_outcome};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// What a line of input did to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    /// A guess was evaluated and recorded
    Submitted,
    /// The guess was refused; the game is unchanged
    Rejected(GameError),
    /// More letters than a word holds; nothing was typed
    TooLong(usize),
    NewGame,
    Help,
    Quit,
    /// Blank line
    Nothing,
}

/// Apply one line of user input to the engine
///
/// Commands are `quit`, `new`, and `help`; anything else is treated as a
/// guess. A refused guess is erased again so the next line starts clean.
pub fn apply_line(engine: &mut GameEngine, line: &str) -> LineAction {
    let line = line.trim();

    match line.to_ascii_lowercase().as_str() {
        "" => return LineAction::Nothing,
        "quit" | "q" | "exit" => return LineAction::Quit,
        "new" | "n" => {
            engine.restart();
            return LineAction::NewGame;
        }
        "help" | "?" => return LineAction::Help,
        _ => {}
    }

    let letters = line.chars().filter(char::is_ascii_alphabetic).count();
    if letters > WORD_LENGTH {
        return LineAction::TooLong(letters);
    }

    clear_input(engine);
    for ch in line.chars() {
        engine.enter_letter(ch);
    }

    match engine.submit_guess() {
        Ok(_) => LineAction::Submitted,
        Err(err) => {
            clear_input(engine);
            LineAction::Rejected(err)
        }
    }
}

fn clear_input(engine: &mut GameEngine) {
    for _ in 0..engine.current_input().len() {
        engine.delete_letter();
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(engine: &mut GameEngine) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║           Wordle - Simple Mode       ║");
    println!("╚══════════════════════════════════════╝\n");
    print_help();

    loop {
        print_game(engine);

        let prompt = if engine.outcome().is_finished() {
            "Play again? ('new' or 'quit')"
        } else {
            "Your guess"
        };

        let Some(line) = get_user_input(prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match apply_line(engine, &line) {
            LineAction::Submitted => print_outcome(engine),
            LineAction::Rejected(err) => println!("❌ {}", err.to_string().red()),
            LineAction::TooLong(letters) => println!(
                "❌ {}",
                format!("Too many letters: need {WORD_LENGTH}, got {letters}").red()
            ),
            LineAction::NewGame => println!("\n🔄 New game started!"),
            LineAction::Help => print_help(),
            LineAction::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineAction::Nothing => {}
        }
    }
}

fn print_help() {
    println!("Guess the five-letter word. After each guess:");
    println!("  {} letter is in the right spot", " A ".black().on_green());
    println!("  {} letter is in the word elsewhere", " A ".black().on_yellow());
    println!("  {} letter is not in the word", " A ".white().on_bright_black());
    println!("Commands: 'new' for a new game, 'quit' to exit, 'help' for this text\n");
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::dictionary::Dictionary;
    use crate::game::{GameConfig, Outcome};

    fn engine() -> GameEngine {
        GameEngine::with_secret(
            Dictionary::from_words(["sword", "doors", "crane"]),
            GameConfig::default(),
            Word::new("sword").unwrap(),
        )
    }

    #[test]
    fn guess_line_is_submitted() {
        let mut engine = engine();
        assert_eq!(apply_line(&mut engine, "doors\n"), LineAction::Submitted);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn winning_line() {
        let mut engine = engine();
        assert_eq!(apply_line(&mut engine, "Sword"), LineAction::Submitted);
        assert_eq!(engine.outcome(), Outcome::Won);
    }

    #[test]
    fn short_line_is_rejected_and_cleared() {
        let mut engine = engine();
        assert!(matches!(
            apply_line(&mut engine, "swo"),
            LineAction::Rejected(GameError::IncompleteGuess { .. })
        ));
        assert!(engine.current_input().is_empty());
        assert!(engine.history().is_empty());
    }

    #[test]
    fn unknown_word_is_rejected() {
        let mut engine = engine();
        assert_eq!(
            apply_line(&mut engine, "xyzzy"),
            LineAction::Rejected(GameError::WordNotInDictionary("XYZZY".to_string()))
        );
        assert!(engine.current_input().is_empty());
    }

    #[test]
    fn long_line_is_refused_without_spending_an_attempt() {
        let mut engine = engine();
        assert_eq!(apply_line(&mut engine, "swordfish"), LineAction::TooLong(9));
        assert!(engine.history().is_empty());
        assert!(engine.current_input().is_empty());
        assert_eq!(engine.outcome(), Outcome::InProgress);

        // Non-letters do not count toward the length
        assert_eq!(apply_line(&mut engine, "s-w-o-r-d"), LineAction::Submitted);
        assert_eq!(engine.outcome(), Outcome::Won);
    }

    #[test]
    fn commands() {
        let mut engine = engine();
        assert_eq!(apply_line(&mut engine, "  "), LineAction::Nothing);
        assert_eq!(apply_line(&mut engine, "help"), LineAction::Help);
        assert_eq!(apply_line(&mut engine, "QUIT"), LineAction::Quit);

        apply_line(&mut engine, "doors");
        assert_eq!(apply_line(&mut engine, "new"), LineAction::NewGame);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn guess_after_finish_is_rejected() {
        let mut engine = engine();
        apply_line(&mut engine, "sword");
        assert_eq!(
            apply_line(&mut engine, "crane"),
            LineAction::Rejected(GameError::GameAlreadyFinished(Outcome::Won))
        );
    }
}
