//! Per-round game state
//!
//! A `GameSession` owns the solution, the mask and the guess history of one round.

use crate::core::{Mask, Word, normalize_char};

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Solved,
}

/// How a whole-word guess is compared against the solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordMatch {
    /// The guess must equal the uppercase solution as typed, so a lowercase
    /// spelling of the right word is rejected
    #[default]
    Exact,
    /// The guess is upper-cased before comparing
    IgnoreCase,
}

/// Result of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub solved: bool,
    pub guesses: usize,
}

/// One round of Hangman
///
/// # Examples
/// ```
/// use hangman::core::Word;
/// use hangman::game::GameSession;
///
/// let mut session = GameSession::new(Word::new("apple").unwrap());
/// assert_eq!(session.guess_character('p'), 2);
/// session.apply_character_guess('p');
/// assert_eq!(session.current_mask(), "*PP**");
/// assert!(!session.guess_word("APPLE"));
/// assert!(session.is_solved());
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    solution: Word,
    mask: Mask,
    history: Vec<char>,
    state: SessionState,
    word_match: WordMatch,
}

impl GameSession {
    #[must_use]
    pub fn new(solution: Word) -> Self {
        Self::with_word_match(solution, WordMatch::default())
    }

    #[must_use]
    pub fn with_word_match(solution: Word, word_match: WordMatch) -> Self {
        log::debug!("New round with a {}-letter solution", solution.len());
        Self {
            mask: Mask::hidden(&solution),
            solution,
            history: Vec::new(),
            state: SessionState::InProgress,
            word_match,
        }
    }

    /// Record a character guess and count its occurrences in the solution
    ///
    /// The guess is upper-cased and appended to the history whether or not it
    /// matches. The mask is left alone; see `apply_character_guess`.
    pub fn guess_character(&mut self, c: char) -> usize {
        let c = normalize_char(c);
        self.history.push(c);
        let count = self.solution.occurrences(c);
        log::trace!("Guess #{}: {count} occurrence(s)", self.history.len());
        count
    }

    /// Reveal every position holding `c`
    ///
    /// A character absent from the solution leaves the mask unchanged.
    pub fn apply_character_guess(&mut self, c: char) -> &Mask {
        let c = normalize_char(c);
        let newly = self.mask.reveal(&self.solution, c);
        log::trace!("Revealed {newly} position(s), {} hidden", self.mask.hidden_count());
        &self.mask
    }

    /// Attempt the whole word
    ///
    /// Returns `false` when the guess is correct (the round is then solved and
    /// the mask fully revealed), `true` while the word remains unsolved.
    pub fn guess_word(&mut self, w: &str) -> bool {
        let correct = match self.word_match {
            WordMatch::Exact => w == self.solution.text(),
            WordMatch::IgnoreCase => w.to_uppercase() == self.solution.text(),
        };

        if correct {
            self.state = SessionState::Solved;
            self.mask.reveal_all(&self.solution);
        }
        !correct
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == SessionState::Solved
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn current_mask(&self) -> String {
        self.mask.to_string()
    }

    #[must_use]
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Number of character guesses made, duplicates included
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.history.len()
    }

    /// Character guesses in the order they were made
    #[must_use]
    pub fn history(&self) -> &[char] {
        &self.history
    }

    #[must_use]
    pub fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub fn outcome(&self) -> RoundOutcome {
        RoundOutcome {
            solved: self.is_solved(),
            guesses: self.guess_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;

    fn session(text: &str) -> GameSession {
        GameSession::new(Word::new(text).unwrap())
    }

    #[test]
    fn new_session_is_hidden_and_in_progress() {
        let s = session("apple");
        assert_eq!(s.current_mask(), "*****");
        assert_eq!(s.state(), SessionState::InProgress);
        assert_eq!(s.guess_count(), 0);
        assert!(s.history().is_empty());
    }

    #[test]
    fn absent_character_counts_zero_and_keeps_mask() {
        let mut s = session("apple");
        assert_eq!(s.guess_character('z'), 0);
        s.apply_character_guess('z');
        assert_eq!(s.current_mask(), "*****");
    }

    #[test]
    fn guess_character_does_not_reveal() {
        let mut s = session("apple");
        assert_eq!(s.guess_character('a'), 1);
        assert_eq!(s.current_mask(), "*****");
        s.apply_character_guess('a');
        assert_eq!(s.current_mask(), "A****");
    }

    #[test]
    fn lowercase_guess_is_normalized() {
        let mut s = session("berry");
        assert_eq!(s.guess_character('r'), 2);
        assert_eq!(s.history(), &['R']);
        assert_eq!(s.apply_character_guess('r').to_string(), "**RR*");
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut s = session("banana");
        s.apply_character_guess('N');
        s.apply_character_guess('B');
        let mask = s.apply_character_guess('X').clone();
        assert!(mask.is_revealed(0));
        assert!(mask.is_revealed(2));
        assert!(mask.is_revealed(4));
        assert_eq!(s.current_mask(), "B*N*N*");
    }

    #[test]
    fn history_counts_every_attempt() {
        let mut s = session("apple");
        for c in ['a', 'a', 'z', 'P', 'p'] {
            s.guess_character(c);
        }
        assert_eq!(s.guess_count(), 5);
        assert_eq!(s.history(), &['A', 'A', 'Z', 'P', 'P']);
    }

    #[test]
    fn correct_word_solves() {
        let mut s = session("apple");
        assert!(!s.guess_word("APPLE"));
        assert!(s.is_solved());
        assert_eq!(s.current_mask(), "APPLE");
    }

    #[test]
    fn wrong_word_stays_in_progress() {
        let mut s = session("apple");
        assert!(s.guess_word("APPLY"));
        assert!(s.guess_word(""));
        assert_eq!(s.state(), SessionState::InProgress);
        assert_eq!(s.current_mask(), "*****");
    }

    #[test]
    fn exact_match_rejects_lowercase_word() {
        let mut s = session("apple");
        assert!(s.guess_word("apple"));
        assert!(!s.is_solved());
    }

    #[test]
    fn ignore_case_accepts_lowercase_word() {
        let mut s =
            GameSession::with_word_match(Word::new("apple").unwrap(), WordMatch::IgnoreCase);
        assert!(!s.guess_word("apple"));
        assert!(s.is_solved());
    }

    #[test]
    fn revealing_all_letters_reproduces_word() {
        let mut s = session("cherry");
        for c in ['c', 'h', 'e', 'r', 'y'] {
            s.apply_character_guess(c);
        }
        assert_eq!(s.current_mask(), "CHERRY");
        assert!(s.mask().is_complete());
        // A complete mask does not solve the round by itself
        assert!(!s.is_solved());
    }

    #[test]
    fn outcome_reports_guesses() {
        let mut s = session("apple");
        s.guess_character('a');
        s.guess_character('b');
        s.guess_word("APPLE");
        assert_eq!(
            s.outcome(),
            RoundOutcome {
                solved: true,
                guesses: 2
            }
        );
    }

    #[test]
    fn misses_count_zero_and_keep_mask_for_every_word() {
        for &text in WORDS {
            let mut s = session(text);
            let misses: Vec<char> = ('A'..='Z')
                .filter(|&c| !s.solution().has_letter(c))
                .collect();
            for c in misses {
                let before = s.current_mask();
                assert_eq!(s.guess_character(c), 0, "{text} / {c}");
                s.apply_character_guess(c);
                assert_eq!(s.current_mask(), before, "{text} / {c}");
            }
        }
    }

    #[test]
    fn reveals_are_monotonic_and_rebuild_every_word() {
        for &text in WORDS {
            let mut s = session(text);
            let letters: Vec<char> = s.solution().chars().to_vec();
            assert_eq!(s.current_mask(), "*".repeat(letters.len()));

            for &c in &letters {
                let before = s.mask().clone();
                assert_eq!(s.guess_character(c), s.solution().occurrences(c));
                let after = s.apply_character_guess(c).clone();

                for (i, &letter) in letters.iter().enumerate() {
                    if before.is_revealed(i) || letter == c {
                        assert!(after.is_revealed(i), "{text}: position {i} hidden after {c}");
                    }
                }
            }

            assert_eq!(s.current_mask(), s.solution().text());
            assert_eq!(s.guess_count(), letters.len());
        }
    }
}
