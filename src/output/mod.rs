//! Terminal output formatting
//!
//! Console plumbing and display utilities for the game.

pub mod console;
pub mod display;
pub mod formatters;

pub use console::Console;
pub use display::{
    print_farewell, print_occurrences, print_state, print_summary, print_word_guess_response,
};
