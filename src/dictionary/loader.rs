//! Word list loading utilities
//!
//! Reads a dictionary from a plain text file, one word per line.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

/// Load a dictionary from a file
///
/// Blank lines, `#` comments, and entries that are not five-letter words
/// are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dictionary = parse_word_list(&content);

    info!(
        path = %path.display(),
        words = dictionary.len(),
        "loaded dictionary"
    );

    Ok(dictionary)
}

/// Parse word list text into a dictionary
#[must_use]
pub fn parse_word_list(content: &str) -> Dictionary {
    Dictionary::from_words(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_and_comment_lines() {
        let dictionary = parse_word_list("# five letters\ncrane\n\n  slate  \n");
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("CRANE"));
        assert!(dictionary.contains("SLATE"));
    }

    #[test]
    fn parse_skips_invalid() {
        let dictionary = parse_word_list("crane\ntoolong\nabc\nsw0rd\nslate");
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn parse_empty() {
        assert!(parse_word_list("").is_empty());
    }

    #[test]
    fn load_missing_file_errors() {
        assert!(load_from_file("definitely/not/a/real/wordlist.txt").is_err());
    }

    #[test]
    fn load_bundled_word_list() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt");
        let dictionary = load_from_file(path).unwrap();
        assert_eq!(dictionary.len(), crate::dictionary::WORDS_COUNT);
    }
}
