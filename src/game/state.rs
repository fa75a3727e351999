//! Round state
//!
//! `GameState` is the aggregate for one round. Only the engine mutates it;
//! everything outside the crate sees it through read accessors.

use crate::core::{Guess, KeyboardState, WORD_LENGTH, Word};
use std::fmt;

/// Round classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// Everything known about one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    secret: Word,
    history: Vec<Guess>,
    current_input: String,
    keyboard: KeyboardState,
    outcome: Outcome,
}

impl GameState {
    pub(super) fn new(secret: Word) -> Self {
        Self {
            secret,
            history: Vec::new(),
            current_input: String::with_capacity(WORD_LENGTH),
            keyboard: KeyboardState::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// The secret word for this round
    #[must_use]
    pub const fn secret_word(&self) -> &Word {
        &self.secret
    }

    /// Submitted guesses, oldest first
    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    /// Letters typed but not yet submitted, uppercase
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Append an uppercase letter if the round is open and the buffer has room
    pub(super) fn push_letter(&mut self, letter: char) -> bool {
        if self.outcome.is_finished() || self.current_input.len() >= WORD_LENGTH {
            return false;
        }
        self.current_input.push(letter);
        true
    }

    pub(super) fn pop_letter(&mut self) -> bool {
        if self.outcome.is_finished() {
            return false;
        }
        self.current_input.pop().is_some()
    }

    /// Commit an evaluated guess and advance the outcome
    pub(super) fn record(&mut self, guess: Guess, max_guesses: usize) {
        self.keyboard.record(&guess);
        let won = guess.is_correct();
        self.history.push(guess);
        self.current_input.clear();

        self.outcome = if won {
            Outcome::Won
        } else if self.history.len() >= max_guesses {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };
    }
}
