//! Word lists for Hangman
//!
//! Provides the bundled vocabulary and the `WordSource` providers that feed a round.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{EmbeddedSource, FileSource, SourceError, StaticSource, WordSource, pick_random};
