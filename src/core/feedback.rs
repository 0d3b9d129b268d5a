//! Per-letter guess feedback
//!
//! Each letter of a guess is graded against the secret word:
//! - `Exact`: right letter, right position
//! - `Present`: letter still unmatched elsewhere in the secret
//! - `Absent`: no unmatched occurrence left

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Status of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    Exact,
    Present,
    Absent,
}

impl LetterStatus {
    /// Emoji tile for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, aligned positionally with the guessed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessResult([LetterStatus; WORD_LENGTH]);

impl GuessResult {
    /// All letters exact
    pub const SOLVED: Self = Self([LetterStatus::Exact; WORD_LENGTH]);

    /// Grade `guess` against `secret`
    ///
    /// Duplicate letters are only credited as many times as they still have
    /// unmatched occurrences in the secret.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume both positions
    /// 2. Second pass: for each unconsumed guess letter, take the first
    ///    unconsumed secret position holding the same letter
    /// 3. Whatever is left is absent
    ///
    /// The exact pass must run first, otherwise a present mark could steal
    /// the secret letter an exact match needs.
    ///
    /// # Examples
    /// ```
    /// use twisted_wordle::core::{GuessResult, LetterStatus::*, Word};
    ///
    /// let secret = Word::new("SPEED").unwrap();
    /// let guess = Word::new("ERASE").unwrap();
    /// let result = GuessResult::evaluate(&secret, &guess);
    ///
    /// assert_eq!(result.statuses(), &[Present, Absent, Absent, Present, Present]);
    /// ```
    #[must_use]
    #[allow(clippy::needless_range_loop)] // Indices address three parallel arrays
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let secret = secret.chars();
        let guess = guess.chars();

        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        let mut secret_used = [false; WORD_LENGTH];
        let mut guess_used = [false; WORD_LENGTH];

        for i in 0..WORD_LENGTH {
            if guess[i] == secret[i] {
                statuses[i] = LetterStatus::Exact;
                secret_used[i] = true;
                guess_used[i] = true;
            }
        }

        for i in 0..WORD_LENGTH {
            if guess_used[i] {
                continue;
            }
            let found = (0..WORD_LENGTH).find(|&j| !secret_used[j] && secret[j] == guess[i]);
            if let Some(j) = found {
                statuses[i] = LetterStatus::Present;
                secret_used[j] = true;
                guess_used[i] = true;
            }
        }

        Self(statuses)
    }

    /// Statuses in guess order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is exact
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Count letters with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Render as emoji tiles, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            let c = match status {
                LetterStatus::Exact => 'G',
                LetterStatus::Present => 'Y',
                LetterStatus::Absent => '-',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
