//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterStatus, Word};
use colored::{ColoredString, Colorize};

/// One letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, status: LetterStatus) -> ColoredString {
    let tile = format!(" {letter} ");
    match status {
        LetterStatus::Exact => tile.black().on_green().bold(),
        LetterStatus::Present => tile.black().on_yellow().bold(),
        LetterStatus::Absent => tile.white().on_bright_black(),
    }
}

/// A graded guess as a row of colored tiles
#[must_use]
pub fn colored_guess(guess: &Word, result: &GuessResult) -> String {
    guess
        .text()
        .chars()
        .zip(result.statuses())
        .map(|(letter, &status)| letter_tile(letter, status).to_string())
        .collect()
}

/// Format whole seconds as `m:ss`
#[must_use]
pub fn format_clock(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(90), "1:30");
        assert_eq!(format_clock(59), "0:59");
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(-4), "0:00");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 90.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(90.0, 90.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(45.0, 90.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        let secret = Word::new("SPEED").unwrap();
        let guess = Word::new("ERASE").unwrap();
        let row = colored_guess(&guess, &GuessResult::evaluate(&secret, &guess));
        for letter in ["E", "R", "A", "S"] {
            assert!(row.contains(letter));
        }
    }
}
