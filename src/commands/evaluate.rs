//! One-shot evaluation command
//!
//! Scores a single guess against a given secret, outside of any game.

use crate::core::{Guess, LetterStatus, Word};

/// Result of evaluating one guess
#[derive(Debug)]
pub struct EvaluationResult {
    pub guess: Guess,
    pub secret: String,
    pub correct: usize,
    pub present: usize,
}

/// Evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is not a valid five-letter word.
pub fn evaluate_words(guess: &str, secret: &str) -> Result<EvaluationResult, String> {
    let guess_word = Word::new(guess).map_err(|e| format!("Invalid guess '{guess}': {e}"))?;
    let secret_word = Word::new(secret).map_err(|e| format!("Invalid secret '{secret}': {e}"))?;

    let guess = Guess::evaluate(&guess_word, &secret_word);

    Ok(EvaluationResult {
        correct: guess.count(LetterStatus::Correct),
        present: guess.count(LetterStatus::Present),
        guess,
        secret: secret_word.text().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_valid_words() {
        let result = evaluate_words("doors", "sword").unwrap();
        assert_eq!(result.guess.word(), "DOORS");
        assert_eq!(result.secret, "SWORD");
        assert_eq!(result.correct, 2);
        assert_eq!(result.present, 2);
    }

    #[test]
    fn evaluate_invalid_guess() {
        let err = evaluate_words("door", "sword").unwrap_err();
        assert!(err.contains("Invalid guess"));
    }

    #[test]
    fn evaluate_result_is_printable() {
        let result = evaluate_words("crane", "sword").unwrap();
        let debug = format!("{result:?}");
        assert!(debug.contains("SWORD"));
        assert_eq!(result.correct, 0);
        assert_eq!(result.present, 1);
    }

    #[test]
    fn evaluate_invalid_secret() {
        let err = evaluate_words("doors", "sw0rd").unwrap_err();
        assert!(err.contains("Invalid secret"));
    }
}
