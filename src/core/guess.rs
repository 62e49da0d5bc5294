//! Character guess validation

use std::fmt;

/// Why a line of input is not a single-character guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    Empty,
    TooLong(usize),
    /// The input was not valid UTF-8 and decoded to U+FFFD
    Undecodable,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "No character entered"),
            Self::TooLong(len) => write!(f, "Expected a single character, got {len}"),
            Self::Undecodable => write!(f, "Input was not valid text"),
        }
    }
}

impl std::error::Error for GuessError {}

/// Parse one line of input as a character guess
///
/// Surrounding whitespace is ignored and the input is upper-cased before the length
/// check, so a letter whose uppercase form is several characters is rejected.
///
/// # Errors
/// Returns `GuessError` unless exactly one character remains, or if that character
/// is the replacement character left by undecodable input.
pub fn parse_character_guess(input: &str) -> Result<char, GuessError> {
    let normalized = input.trim().to_uppercase();
    let mut chars = normalized.chars();

    match (chars.next(), chars.next()) {
        (None, _) => Err(GuessError::Empty),
        (Some(char::REPLACEMENT_CHARACTER), None) => Err(GuessError::Undecodable),
        (Some(c), None) => Ok(c),
        (Some(_), Some(_)) => Err(GuessError::TooLong(normalized.chars().count())),
    }
}

/// Uppercase form of a single character, when it is itself a single character
#[must_use]
pub fn normalize_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
