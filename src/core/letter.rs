//! Per-letter feedback
//!
//! `LetterStatus` derives its ordering from declaration order, so
//! `Empty < Absent < Present < Correct` is exactly the keyboard precedence.

use std::fmt;

/// Classification of a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Not yet evaluated (uncommitted input only)
    Empty,
    /// Letter does not occur in the secret, or all occurrences are used up
    Absent,
    /// Letter occurs in the secret at another position
    Present,
    /// Letter is in the correct position
    Correct,
}

impl LetterStatus {
    /// Emoji square used in share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent | Self::Empty => '⬛',
        }
    }
}

/// One letter of a submitted guess together with its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvaluatedLetter {
    character: u8,
    status: LetterStatus,
}

impl EvaluatedLetter {
    pub(crate) const fn new(character: u8, status: LetterStatus) -> Self {
        Self { character, status }
    }

    /// The uppercase ASCII letter
    #[inline]
    #[must_use]
    pub const fn character(self) -> char {
        self.character as char
    }

    #[inline]
    #[must_use]
    pub(crate) const fn byte(self) -> u8 {
        self.character
    }

    #[inline]
    #[must_use]
    pub const fn status(self) -> LetterStatus {
        self.status
    }
}

impl fmt::Display for EvaluatedLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.character())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_precedence_order() {
        assert!(LetterStatus::Correct > LetterStatus::Present);
        assert!(LetterStatus::Present > LetterStatus::Absent);
        assert!(LetterStatus::Absent > LetterStatus::Empty);
    }

    #[test]
    fn status_emoji() {
        assert_eq!(LetterStatus::Correct.emoji(), '🟩');
        assert_eq!(LetterStatus::Present.emoji(), '🟨');
        assert_eq!(LetterStatus::Absent.emoji(), '⬛');
    }

    #[test]
    fn evaluated_letter_accessors() {
        let letter = EvaluatedLetter::new(b'S', LetterStatus::Present);
        assert_eq!(letter.character(), 'S');
        assert_eq!(letter.status(), LetterStatus::Present);
        assert_eq!(letter.to_string(), "S");
    }
}
