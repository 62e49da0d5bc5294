//! Revealed-so-far view of a solution word

use super::Word;
use std::fmt;

/// Symbol shown for an unrevealed position
pub const PLACEHOLDER: char = '*';

/// One symbol per solution character: either the placeholder or the revealed letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    cells: Vec<Option<char>>,
}

impl Mask {
    /// All-placeholder mask with the same length as `word`
    #[must_use]
    pub fn hidden(word: &Word) -> Self {
        Self {
            cells: vec![None; word.len()],
        }
    }

    /// Reveal every position of `word` holding `letter`
    ///
    /// Returns the number of positions newly revealed. Already revealed positions
    /// stay revealed, so repeating a letter is a no-op. Positions beyond the mask
    /// are ignored.
    pub fn reveal(&mut self, word: &Word, letter: char) -> usize {
        let mut newly = 0;
        for &i in word.positions_of(letter) {
            if let Some(cell) = self.cells.get_mut(i)
                && cell.is_none()
            {
                *cell = Some(letter);
                newly += 1;
            }
        }
        newly
    }

    /// Reveal every position
    pub fn reveal_all(&mut self, word: &Word) {
        for (cell, &ch) in self.cells.iter_mut().zip(word.chars()) {
            *cell = Some(ch);
        }
    }

    #[inline]
    #[must_use]
    pub fn is_revealed(&self, position: usize) -> bool {
        self.cells.get(position).is_some_and(Option::is_some)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.unwrap_or(PLACEHOLDER))?;
        }
        Ok(())
    }
}
