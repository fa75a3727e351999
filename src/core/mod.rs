//! Core domain types for the game
//!
//! Pure value types with no I/O: words, per-letter feedback, evaluated
//! guesses, and the cumulative keyboard state.

mod guess;
mod keyboard;
mod letter;
mod word;

pub use guess::Guess;
pub use keyboard::KeyboardState;
pub use letter::{EvaluatedLetter, LetterStatus};
pub use word::{WORD_LENGTH, Word, WordError};
