//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure and testable on their own.

mod guess;
mod mask;
mod word;

pub use guess::{GuessError, normalize_char, parse_character_guess};
pub use mask::{Mask, PLACEHOLDER};
pub use word::{Word, WordError};
