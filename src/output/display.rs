//! Display functions for the game loop

use super::formatters::{format_history, occurrence_message, summary_message};
use crate::game::GameSession;
use colored::Colorize;
use std::io::{self, Write};

/// Print the mask and the characters guessed so far
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print_state<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    writeln!(out)?;
    print_mask(out, session)?;
    writeln!(
        out,
        "Previous characters guessed: {}",
        format_history(session.history())
    )
}

/// Print the revealed-so-far word
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print_mask<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    writeln!(
        out,
        "The word to guess is: {}",
        session.current_mask().bright_yellow().bold()
    )
}

/// # Errors
///
/// Returns an error if writing fails.
pub fn print_occurrences<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    writeln!(out, "{}", occurrence_message(count))
}

/// Tell the player whether the word guess was right
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print_word_guess_response<W: Write>(out: &mut W, unsolved: bool) -> io::Result<()> {
    if unsolved {
        writeln!(out, "{}", "That is not correct.".red())
    } else {
        writeln!(out, "{}", "That is correct!".green().bold())
    }
}

/// # Errors
///
/// Returns an error if writing fails.
pub fn print_summary<W: Write>(out: &mut W, guesses: usize) -> io::Result<()> {
    writeln!(out, "{}", summary_message(guesses).bright_cyan())
}

/// # Errors
///
/// Returns an error if writing fails.
pub fn print_farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nThanks for playing!  Goodbye!")
}
