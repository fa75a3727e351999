//! Game state machine
//!
//! `GameEngine` drives one round at a time: typing, submission, outcome,
//! and restart. It performs no I/O.

mod config;
mod engine;
mod error;
mod state;

pub use config::{GameConfig, MAX_GUESSES, WORD_LENGTH};
pub use engine::GameEngine;
pub use error::GameError;
pub use state::{GameState, Outcome};
