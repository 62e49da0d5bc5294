//! Command implementations

pub mod play;
pub mod words;

pub use play::{PlayConfig, ask_rematch, play_round, read_character_guess, run_play};
pub use words::{list_words, print_loaded};
