//! Game engine
//!
//! Owns the round state and is the only place it changes. A presentation
//! layer forwards key presses here and reads the state back afterwards.

use super::config::GameConfig;
use super::error::GameError;
use super::state::{GameState, Outcome};
use crate::core::{Guess, KeyboardState, Word};
use crate::dictionary::Dictionary;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// Wordle game engine
///
/// # Examples
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::dictionary::Dictionary;
/// use wordle_game::game::{GameConfig, GameEngine, Outcome};
///
/// let dictionary = Dictionary::from_words(["sword", "doors", "crane"]);
/// let secret = Word::new("sword").unwrap();
/// let mut engine = GameEngine::with_secret(dictionary, GameConfig::default(), secret);
///
/// for letter in "sword".chars() {
///     engine.enter_letter(letter);
/// }
/// let guess = engine.submit_guess().unwrap();
/// assert!(guess.is_correct());
/// assert_eq!(engine.outcome(), Outcome::Won);
/// ```
#[derive(Debug)]
pub struct GameEngine {
    dictionary: Dictionary,
    config: GameConfig,
    rng: StdRng,
    state: GameState,
}

impl GameEngine {
    /// Start a game with an OS-seeded random secret
    #[must_use]
    pub fn new(dictionary: Dictionary, config: GameConfig) -> Self {
        Self::with_rng(dictionary, config, StdRng::from_os_rng())
    }

    /// Start a game whose secret words are reproducible from `seed`
    #[must_use]
    pub fn with_seed(dictionary: Dictionary, config: GameConfig, seed: u64) -> Self {
        Self::with_rng(dictionary, config, StdRng::seed_from_u64(seed))
    }

    /// Start a game with a fixed first secret
    ///
    /// Later rounds started by [`restart`](Self::restart) still draw from the
    /// dictionary.
    #[must_use]
    pub fn with_secret(dictionary: Dictionary, config: GameConfig, secret: Word) -> Self {
        debug!("new round with fixed secret");
        Self {
            dictionary,
            config,
            rng: StdRng::from_os_rng(),
            state: GameState::new(secret),
        }
    }

    fn with_rng(dictionary: Dictionary, config: GameConfig, mut rng: StdRng) -> Self {
        let secret = dictionary.random_word(&mut rng);
        debug!(pool = dictionary.len(), "new round");
        Self {
            dictionary,
            config,
            rng,
            state: GameState::new(secret),
        }
    }

    /// Type one letter
    ///
    /// Letters of either case are accepted and stored uppercase. Anything
    /// else, a full buffer, or a finished round makes this a no-op.
    pub fn enter_letter(&mut self, ch: char) {
        if !ch.is_ascii_alphabetic() {
            return;
        }
        self.state.push_letter(ch.to_ascii_uppercase());
    }

    /// Remove the last typed letter, if any, while the round is open
    pub fn delete_letter(&mut self) {
        self.state.pop_letter();
    }

    /// Evaluate the typed word and commit it to the history
    ///
    /// On success the evaluated guess is returned, the keyboard is updated,
    /// the input is cleared, and the outcome is recomputed.
    ///
    /// # Errors
    ///
    /// Returns, leaving the state untouched:
    /// - `GameAlreadyFinished` if the round is won or lost
    /// - `IncompleteGuess` if fewer than five letters are typed
    /// - `WordNotInDictionary` if validation is enabled, the dictionary is
    ///   non-empty, and the word is unknown
    pub fn submit_guess(&mut self) -> Result<&Guess, GameError> {
        let outcome = self.state.outcome();
        if outcome.is_finished() {
            return Err(GameError::GameAlreadyFinished(outcome));
        }

        let input = self.state.current_input();
        let candidate = Word::new(input).map_err(|_| GameError::IncompleteGuess {
            expected: self.config.word_length(),
            actual: input.len(),
        })?;

        if self.validates_words() && !self.dictionary.contains_word(&candidate) {
            debug!(word = %candidate, "rejected unknown word");
            return Err(GameError::WordNotInDictionary(candidate.text().to_string()));
        }

        let guess = Guess::evaluate(&candidate, self.state.secret_word());
        let attempt = self.state.history().len();
        debug!(
            attempt = attempt + 1,
            pattern = %guess.to_emoji(),
            "guess submitted"
        );
        self.state.record(guess, self.config.max_guesses());

        match self.state.outcome() {
            Outcome::Won => info!(attempts = self.state.history().len(), "round won"),
            Outcome::Lost => info!(secret = %self.state.secret_word(), "round lost"),
            Outcome::InProgress => {}
        }

        Ok(&self.state.history()[attempt])
    }

    /// An empty dictionary cannot vouch for any word, so it validates nothing
    fn validates_words(&self) -> bool {
        self.config.validate_words() && !self.dictionary.is_empty()
    }

    /// Throw away the current round and start a fresh one
    pub fn restart(&mut self) {
        let secret = self.dictionary.random_word(&mut self.rng);
        self.state = GameState::new(secret);
        debug!("round restarted");
    }

    /// Owned copy of the round state
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    #[must_use]
    pub fn history(&self) -> &[Guess] {
        self.state.history()
    }

    #[must_use]
    pub fn current_input(&self) -> &str {
        self.state.current_input()
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        self.state.keyboard()
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    #[must_use]
    pub const fn secret_word(&self) -> &Word {
        self.state.secret_word()
    }

    /// Attempts left in this round
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.config
            .max_guesses()
            .saturating_sub(self.state.history().len())
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}
