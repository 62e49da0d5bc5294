//! Word list inspection

use crate::core::Word;
use std::io::{self, Write};

/// Print how many words were read, followed by up to `limit` of them
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn list_words<W: Write>(out: &mut W, words: &[Word], limit: Option<usize>) -> io::Result<()> {
    print_loaded(out, words.len())?;

    for word in words.iter().take(limit.unwrap_or(words.len())) {
        writeln!(out, "{word}")?;
    }

    if let Some(limit) = limit
        && words.len() > limit
    {
        writeln!(out, "...and {} more", words.len() - limit)?;
    }

    Ok(())
}

/// # Errors
///
/// Returns an error if writing fails.
pub fn print_loaded<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    writeln!(out, "Read {count} words from the word list\n")
}
