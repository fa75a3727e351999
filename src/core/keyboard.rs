//! Cumulative keyboard knowledge
//!
//! Tracks the best-known status of each letter A-Z across every guess of a
//! round. A letter's status only ever moves up the precedence order.

use super::guess::Guess;
use super::letter::LetterStatus;

const ALPHABET_LEN: usize = 26;

/// Best-known status per letter; `None` means no information yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: [Option<LetterStatus>; ALPHABET_LEN],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status for `letter` (either case), or `None` if nothing is known
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterStatus> {
        index_of(letter).and_then(|i| self.keys[i])
    }

    /// Fold every letter of `guess` into the keyboard, never downgrading
    pub fn record(&mut self, guess: &Guess) {
        for letter in guess.letters() {
            self.upgrade(letter.character(), letter.status());
        }
    }

    fn upgrade(&mut self, letter: char, status: LetterStatus) {
        if status == LetterStatus::Empty {
            return;
        }
        let Some(i) = index_of(letter) else {
            return;
        };
        if self.keys[i].is_none_or(|current| status > current) {
            self.keys[i] = Some(status);
        }
    }

    /// Letters with known status, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        self.keys
            .iter()
            .zip('A'..='Z')
            .filter_map(|(status, letter)| status.map(|s| (letter, s)))
    }

    /// Number of letters with known status
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.iter().all(Option::is_none)
    }
}

fn index_of(letter: char) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| (upper as u8 - b'A') as usize)
}
