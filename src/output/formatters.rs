//! Formatting utilities for terminal output

/// Join guessed characters with ", "
#[must_use]
pub fn format_history(history: &[char]) -> String {
    history
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[must_use]
pub fn occurrence_message(count: usize) -> String {
    format!("The character occurs {count} times.")
}

#[must_use]
pub fn summary_message(guesses: usize) -> String {
    format!("You achieved the correct answer in {guesses} guesses.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_empty() {
        assert_eq!(format_history(&[]), "");
    }

    #[test]
    fn history_single() {
        assert_eq!(format_history(&['A']), "A");
    }

    #[test]
    fn history_keeps_order_and_duplicates() {
        assert_eq!(format_history(&['A', 'B', 'A']), "A, B, A");
    }

    #[test]
    fn occurrence_message_text() {
        assert_eq!(occurrence_message(0), "The character occurs 0 times.");
        assert_eq!(occurrence_message(2), "The character occurs 2 times.");
    }

    #[test]
    fn summary_message_text() {
        assert_eq!(
            summary_message(2),
            "You achieved the correct answer in 2 guesses."
        );
    }
}
