//! Recoverable errors reported by the game engine
//!
//! None of these leave the game state changed.

use super::state::Outcome;
use std::fmt;

/// Why a submission was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Fewer letters typed than the word length
    IncompleteGuess { expected: usize, actual: usize },
    /// Well-formed word that the dictionary does not know
    WordNotInDictionary(String),
    /// The round already ended
    GameAlreadyFinished(Outcome),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteGuess { expected, actual } => {
                write!(f, "Not enough letters: need {expected}, got {actual}")
            }
            Self::WordNotInDictionary(word) => write!(f, "Not in word list: {word}"),
            Self::GameAlreadyFinished(outcome) => {
                write!(f, "Game already finished ({outcome})")
            }
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = GameError::IncompleteGuess {
            expected: 5,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Not enough letters: need 5, got 3");
        assert_eq!(
            GameError::WordNotInDictionary("XYZZY".to_string()).to_string(),
            "Not in word list: XYZZY"
        );
        assert_eq!(
            GameError::GameAlreadyFinished(Outcome::Won).to_string(),
            "Game already finished (won)"
        );
    }
}
