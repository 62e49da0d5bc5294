//! Word list loading utilities
//!
//! Turns raw text or embedded constants into playable, uppercase words.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Parse whitespace-delimited word tokens
///
/// Every token is upper-cased. Tokens that cannot be played (containing the mask
/// placeholder) are skipped.
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::parse_words;
///
/// let words = parse_words("apple berry\ncherry\n");
/// assert_eq!(words.len(), 3);
/// assert_eq!(words[0].text(), "APPLE");
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .split_whitespace()
        .filter_map(|token| match Word::new(token) {
            Ok(word) => Some(word),
            Err(e) => {
                log::debug!("Skipping word token {token:?}: {e}");
                None
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Convert embedded string slice to Word vector
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
