//! Interactive game loop
//!
//! Drives rounds over a `Console` until the player declines a rematch.

use crate::core::{Word, parse_character_guess};
use crate::game::{GameSession, RoundOutcome, WordMatch};
use crate::output::display::print_mask;
use crate::output::{
    Console, print_farewell, print_occurrences, print_state, print_summary,
    print_word_guess_response,
};
use crate::wordlists::pick_random;
use anyhow::Result;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Configuration for a play session
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayConfig {
    pub word_match: WordMatch,
}

/// Play rounds until the player stops or input runs out
///
/// Returns the outcome of every completed round.
///
/// # Errors
///
/// Returns an error if `words` is empty or console I/O fails.
pub fn run_play<R, W, G>(
    words: &[Word],
    rng: &mut G,
    console: &mut Console<R, W>,
    config: PlayConfig,
) -> Result<Vec<RoundOutcome>>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut outcomes = Vec::new();

    loop {
        let solution = pick_random(words, rng)?.clone();
        let mut session = GameSession::with_word_match(solution, config.word_match);

        let Some(outcome) = play_round(&mut session, console)? else {
            log::info!("Input ended during round {}", outcomes.len() + 1);
            break;
        };

        print_summary(console.out(), outcome.guesses)?;
        outcomes.push(outcome);

        if !ask_rematch(console)? {
            break;
        }
    }

    print_farewell(console.out())?;
    Ok(outcomes)
}

/// Run one round to completion
///
/// Returns `None` if input ends before the word is guessed.
///
/// # Errors
///
/// Returns an error if console I/O fails.
pub fn play_round<R: BufRead, W: Write>(
    session: &mut GameSession,
    console: &mut Console<R, W>,
) -> io::Result<Option<RoundOutcome>> {
    while !session.is_solved() {
        print_state(console.out(), session)?;

        let Some(c) = read_character_guess(console)? else {
            return Ok(None);
        };

        let count = session.guess_character(c);
        print_occurrences(console.out(), count)?;

        // A miss never offers a word guess
        if !session.solution().has_letter(c) {
            continue;
        }

        session.apply_character_guess(c);
        print_mask(console.out(), session)?;

        let Some(guess) = console.prompt("Enter your guess: ")? else {
            return Ok(None);
        };
        let unsolved = session.guess_word(&guess);
        print_word_guess_response(console.out(), unsolved)?;
    }

    let outcome = session.outcome();
    log::info!("Round solved in {} guesses", outcome.guesses);
    Ok(Some(outcome))
}

/// Prompt until the player enters exactly one character
///
/// Returns `None` if input ends first.
///
/// # Errors
///
/// Returns an error if console I/O fails.
pub fn read_character_guess<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<char>> {
    loop {
        let Some(input) = console.prompt("Enter a character to guess: ")? else {
            return Ok(None);
        };

        match parse_character_guess(&input) {
            Ok(c) => return Ok(Some(c)),
            Err(e) => {
                log::debug!("Rejected character guess: {e}");
                writeln!(console.out(), "Error! Please enter a single character.")?;
            }
        }
    }
}

/// Ask whether to play again; only "y" or "Y" continues
///
/// # Errors
///
/// Returns an error if console I/O fails.
pub fn ask_rematch<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<bool> {
    let answer = console.prompt("Would you like a rematch [y/n]? ")?;
    Ok(answer.is_some_and(|a| a.to_uppercase() == "Y"))
}
