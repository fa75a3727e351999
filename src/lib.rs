//! Wordle Game
//!
//! A Wordle-style word guessing game: a pure game-state engine plus terminal
//! front-ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::dictionary::Dictionary;
//! use wordle_game::game::{GameConfig, GameEngine, Outcome};
//!
//! let mut engine = GameEngine::with_seed(Dictionary::embedded(), GameConfig::default(), 7);
//!
//! for letter in "crane".chars() {
//!     engine.enter_letter(letter);
//! }
//! let guess = engine.submit_guess().unwrap();
//! println!("{}", guess.to_emoji());
//! assert_eq!(engine.history().len(), 1);
//! ```

// Core domain types
pub mod core;

// Word pool
pub mod dictionary;

// Round state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Log subscriber setup
pub mod logging;
