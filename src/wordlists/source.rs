//! Vocabulary providers
//!
//! A `WordSource` supplies the candidate words for every round; `pick_random`
//! chooses the solution for one round.

use super::WORDS;
use super::loader::{load_from_file, words_from_slice};
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::path::PathBuf;

/// Failure to obtain a usable vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The provider could not be read, or yielded no words
    Unavailable { source_name: String, reason: String },
    /// A random pick was requested from an empty list
    EmptyWordList,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable {
                source_name,
                reason,
            } => write!(f, "Word source '{source_name}' is unavailable: {reason}"),
            Self::EmptyWordList => write!(f, "Word list is empty"),
        }
    }
}

impl std::error::Error for SourceError {}

/// A provider of the candidate vocabulary
pub trait WordSource {
    /// Short human-readable name, used in logs and errors
    fn name(&self) -> String;

    /// Obtain the vocabulary, upper-cased, in provider order
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the provider cannot be read or yields no words.
    fn load(&self) -> Result<Vec<Word>, SourceError>;
}

/// Guard shared by all providers: an empty vocabulary is an unavailable source
fn non_empty(name: String, words: Vec<Word>) -> Result<Vec<Word>, SourceError> {
    if words.is_empty() {
        return Err(SourceError::Unavailable {
            source_name: name,
            reason: "no words found".to_string(),
        });
    }
    log::info!("Loaded {} words from {name}", words.len());
    Ok(words)
}

/// The word list bundled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl WordSource for EmbeddedSource {
    fn name(&self) -> String {
        "embedded word list".to_string()
    }

    fn load(&self) -> Result<Vec<Word>, SourceError> {
        non_empty(self.name(), words_from_slice(WORDS))
    }
}

/// A whitespace-delimited word file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<Word>, SourceError> {
        let words = load_from_file(&self.path).map_err(|e| SourceError::Unavailable {
            source_name: self.name(),
            reason: e.to_string(),
        })?;
        non_empty(self.name(), words)
    }
}

/// An in-memory list of tokens
///
/// # Examples
/// ```
/// use hangman::wordlists::{StaticSource, WordSource};
///
/// let words = StaticSource::new(["apple", "berry"]).load().unwrap();
/// assert_eq!(words[1].text(), "BERRY");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    tokens: Vec<String>,
}

impl StaticSource {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordSource for StaticSource {
    fn name(&self) -> String {
        "in-memory word list".to_string()
    }

    fn load(&self) -> Result<Vec<Word>, SourceError> {
        let words = self
            .tokens
            .iter()
            .filter_map(|t| Word::new(t.as_str()).ok())
            .collect();
        non_empty(self.name(), words)
    }
}

/// Choose one word uniformly at random
///
/// # Errors
///
/// Returns `SourceError::EmptyWordList` if `words` is empty.
pub fn pick_random<'a, R: Rng + ?Sized>(
    words: &'a [Word],
    rng: &mut R,
) -> Result<&'a Word, SourceError> {
    words.choose(rng).ok_or(SourceError::EmptyWordList)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn static_source_uppercases() {
        let words = StaticSource::new(["apple", "Berry"]).load().unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["APPLE", "BERRY"]);
    }

    #[test]
    fn static_source_without_words_is_unavailable() {
        let err = StaticSource::new(Vec::<String>::new()).load().unwrap_err();
        assert!(matches!(err, SourceError::Unavailable { .. }));
    }

    #[test]
    fn embedded_source_loads() {
        let words = EmbeddedSource.load().unwrap();
        assert_eq!(words.len(), crate::wordlists::WORDS_COUNT);
        assert!(words.iter().all(|w| w.text() == w.text().to_uppercase()));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let source = FileSource::new("/definitely/not/here/words.txt");
        let err = source.load().unwrap_err();
        match err {
            SourceError::Unavailable { source_name, .. } => {
                assert!(source_name.contains("words.txt"));
            }
            SourceError::EmptyWordList => panic!("expected Unavailable"),
        }
    }

    #[test]
    fn pick_random_from_empty_list_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_random(&[], &mut rng), Err(SourceError::EmptyWordList));
    }

    #[test]
    fn pick_random_returns_member() {
        let words = StaticSource::new(["apple", "berry", "cherry"]).load().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let picked = pick_random(&words, &mut rng).unwrap();
            assert!(words.contains(picked));
        }
    }

    #[test]
    fn pick_random_single_word() {
        let words = StaticSource::new(["apple"]).load().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(pick_random(&words, &mut rng).unwrap().text(), "APPLE");
    }

    #[test]
    fn pick_random_reaches_every_word() {
        let words = StaticSource::new(["a", "b", "c", "d"]).load().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..400 {
            seen.insert(pick_random(&words, &mut rng).unwrap().text().to_string());
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn source_error_display() {
        let err = SourceError::Unavailable {
            source_name: "words.txt".to_string(),
            reason: "gone".to_string(),
        };
        assert_eq!(err.to_string(), "Word source 'words.txt' is unavailable: gone");
        assert_eq!(SourceError::EmptyWordList.to_string(), "Word list is empty");
    }
}
