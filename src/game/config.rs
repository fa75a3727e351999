//! Round configuration

pub use crate::core::WORD_LENGTH;

/// Default number of attempts per round
pub const MAX_GUESSES: usize = 6;

/// Configuration for a game engine
///
/// Fixed for the lifetime of an engine; every round it plays uses the same
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_guesses: usize,
    validate_words: bool,
}

impl GameConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_guesses: MAX_GUESSES,
            validate_words: true,
        }
    }

    /// Set the number of attempts per round (at least 1)
    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = if max_guesses == 0 { 1 } else { max_guesses };
        self
    }

    /// Enable or disable rejecting guesses missing from the dictionary
    #[must_use]
    pub const fn with_validation(mut self, validate_words: bool) -> Self {
        self.validate_words = validate_words;
        self
    }

    #[inline]
    #[must_use]
    pub const fn word_length(self) -> usize {
        WORD_LENGTH
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(self) -> usize {
        self.max_guesses
    }

    #[inline]
    #[must_use]
    pub const fn validate_words(self) -> bool {
        self.validate_words
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
