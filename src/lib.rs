//! Hangman
//!
//! A console word-guessing game: a word is drawn at random from a vocabulary and the
//! player reveals it one character at a time, then names the whole word.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::Word;
//! use hangman::game::GameSession;
//!
//! let mut session = GameSession::new(Word::new("berry").unwrap());
//!
//! let count = session.guess_character('r');
//! session.apply_character_guess('r');
//! println!("{count} hits: {}", session.current_mask());
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
