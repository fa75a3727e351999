//! Dictionary of playable words
//!
//! An immutable pool of five-letter words supporting case-insensitive
//! membership tests and uniform random selection. How the words get here
//! (embedded list, file, test fixture) is up to the caller.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{WORD_LENGTH, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use tracing::warn;

/// Word returned by [`Dictionary::random_word`] when the pool is empty
pub const FALLBACK_WORD: &str = "CRANE";

/// Immutable set of valid words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<[u8; WORD_LENGTH]>,
}

impl Dictionary {
    /// Build a dictionary from arbitrary strings
    ///
    /// Entries that are not valid five-letter words are skipped. Duplicates
    /// are dropped so random selection stays uniform over distinct words.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["sword", "SWORD", "toolong", "crane"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("Sword"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        for word in words {
            if let Ok(word) = Word::new(word.as_ref()) {
                dictionary.insert(word);
            }
        }
        dictionary
    }

    /// The built-in word list
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(WORDS)
    }

    fn insert(&mut self, word: Word) {
        if self.lookup.insert(*word.chars()) {
            self.words.push(word);
        }
    }

    /// Case-insensitive membership test
    ///
    /// Anything that is not a well-formed five-letter word is not contained.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.contains_word(&w))
    }

    /// Membership test for an already validated word
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.lookup.contains(word.chars())
    }

    /// Pick a word uniformly at random
    ///
    /// An empty pool yields [`FALLBACK_WORD`] so a game can always start.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        if let Some(word) = self.words.choose(rng) {
            return word.clone();
        }
        warn!("dictionary is empty, using fallback word");
        fallback_word()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// # Panics
/// Will not panic - `FALLBACK_WORD` is a valid five-letter word.
fn fallback_word() -> Word {
    Word::new(FALLBACK_WORD).expect("fallback word is a valid word")
}
