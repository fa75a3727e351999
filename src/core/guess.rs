//! Guess evaluation
//!
//! A `Guess` is the fully evaluated form of one submitted attempt. It is only
//! ever produced by [`Guess::evaluate`] and is immutable afterwards.

use super::letter::{EvaluatedLetter, LetterStatus};
use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// A submitted, fully evaluated attempt
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    letters: [EvaluatedLetter; WORD_LENGTH],
}

impl Guess {
    /// Evaluate `candidate` against `secret`
    ///
    /// Implements the exact feedback rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches as correct and remove them from the
    ///    available-letter pool
    /// 2. Second pass: mark remaining letters present while the pool still
    ///    holds that letter, absent otherwise
    ///
    /// The number of correct plus present marks for a letter therefore never
    /// exceeds its occurrence count in the secret.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Guess, LetterStatus::*, Word};
    ///
    /// let guess = Word::new("doors").unwrap();
    /// let secret = Word::new("sword").unwrap();
    /// let statuses: Vec<_> = Guess::evaluate(&guess, &secret)
    ///     .letters()
    ///     .iter()
    ///     .map(|l| l.status())
    ///     .collect();
    ///
    /// assert_eq!(statuses, [Present, Absent, Correct, Correct, Present]);
    /// ```
    #[must_use]
    pub fn evaluate(candidate: &Word, secret: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LENGTH];
        let mut available = secret.char_counts();

        // First pass: exact position matches
        for (i, status) in result.iter_mut().enumerate() {
            let letter = candidate.char_at(i);
            if letter == secret.char_at(i) {
                *status = LetterStatus::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, limited by remaining count
        for (i, status) in result.iter_mut().enumerate() {
            if *status == LetterStatus::Correct {
                continue;
            }
            let letter = candidate.char_at(i);
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                *status = LetterStatus::Present;
                *count -= 1;
            }
        }

        let chars = candidate.chars();
        Self {
            letters: std::array::from_fn(|i| EvaluatedLetter::new(chars[i], result[i])),
        }
    }

    /// The evaluated letters in guess order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[EvaluatedLetter; WORD_LENGTH] {
        &self.letters
    }

    /// The guessed word as an uppercase string
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|l| l.character()).collect()
    }

    /// True when every letter is correct
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.letters
            .iter()
            .all(|l| l.status() == LetterStatus::Correct)
    }

    /// Number of letters carrying `status`
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.letters.iter().filter(|l| l.status() == status).count()
    }

    /// Render as a row of emoji squares, e.g. "🟨⬛🟩🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.letters.iter().map(|l| l.status().emoji()).collect()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Present};

    fn statuses(candidate: &str, secret: &str) -> [LetterStatus; WORD_LENGTH] {
        let guess = Guess::evaluate(&Word::new(candidate).unwrap(), &Word::new(secret).unwrap());
        guess.letters().map(EvaluatedLetter::status)
    }

    #[test]
    fn evaluate_exact_match_all_correct() {
        for word in ["sword", "crane", "aaaaa", "speed"] {
            let w = Word::new(word).unwrap();
            let guess = Guess::evaluate(&w, &w);
            assert!(guess.is_correct());
            assert_eq!(guess.count(Correct), WORD_LENGTH);
        }
    }

    #[test]
    fn evaluate_all_absent() {
        assert_eq!(statuses("abcde", "fghij"), [Absent; WORD_LENGTH]);
    }

    #[test]
    fn evaluate_doors_against_sword() {
        // O at index 2 is exact and consumes the only O, so index 1 gets none
        assert_eq!(
            statuses("doors", "sword"),
            [Present, Absent, Correct, Correct, Present]
        );
    }

    #[test]
    fn evaluate_duplicate_guess_letter_single_in_secret() {
        // Only one E in the secret, so only the first E may be present
        assert_eq!(
            statuses("speed", "crane"),
            [Absent, Absent, Present, Absent, Absent]
        );
    }

    #[test]
    fn evaluate_exact_match_preferred_over_earlier_misplaced() {
        // The E at index 4 is exact and consumes the only E
        assert_eq!(
            statuses("eerie", "crane"),
            [Absent, Absent, Present, Absent, Correct]
        );
        // One S is exact, one S remains for the first misplaced S only
        assert_eq!(
            statuses("sassy", "brass"),
            [Present, Present, Absent, Correct, Absent]
        );
        assert_eq!(
            statuses("skill", "spell"),
            [Correct, Absent, Absent, Correct, Correct]
        );
    }

    #[test]
    fn evaluate_duplicates_in_both() {
        // SPEED vs ERASE: S yellow, P gray, both Es yellow, D gray
        assert_eq!(
            statuses("speed", "erase"),
            [Present, Absent, Present, Present, Absent]
        );
        // ROBOT vs FLOOR: R yellow, first O yellow, B gray, second O green
        assert_eq!(
            statuses("robot", "floor"),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn evaluate_never_over_grants_letters() {
        let words = ["sword", "doors", "speed", "erase", "eerie", "llama", "aaaaa", "abbey"];
        for candidate in words {
            for secret in words {
                let c = Word::new(candidate).unwrap();
                let s = Word::new(secret).unwrap();
                let guess = Guess::evaluate(&c, &s);

                for letter in b'A'..=b'Z' {
                    let granted = guess
                        .letters()
                        .iter()
                        .filter(|l| l.byte() == letter && l.status() >= Present)
                        .count();
                    let available = s.chars().iter().filter(|&&ch| ch == letter).count();
                    assert!(
                        granted <= available,
                        "{candidate} vs {secret}: {granted} marks for {} but only {available} in secret",
                        letter as char
                    );
                }
            }
        }
    }

    #[test]
    fn evaluate_is_deterministic() {
        let c = Word::new("doors").unwrap();
        let s = Word::new("sword").unwrap();
        assert_eq!(Guess::evaluate(&c, &s), Guess::evaluate(&c, &s));
    }

    #[test]
    fn guess_word_and_emoji() {
        let guess = Guess::evaluate(&Word::new("doors").unwrap(), &Word::new("sword").unwrap());
        assert_eq!(guess.word(), "DOORS");
        assert_eq!(guess.to_string(), "DOORS");
        assert_eq!(guess.to_emoji(), "🟨⬛🟩🟩🟨");
        assert_eq!(guess.count(Correct), 2);
        assert_eq!(guess.count(Present), 2);
        assert_eq!(guess.count(Absent), 1);
    }
}
