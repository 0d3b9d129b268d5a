//! Validated game word
//!
//! A Word is exactly five ASCII uppercase letters. Case and whitespace are
//! never normalized here: the dictionary loader and the front ends do that
//! before handing text to the engine.

use super::WORD_LENGTH;
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A 5-letter uppercase word
///
/// Equality and hashing use the text only, so a `WordSet` can be queried
/// with a plain `&str`.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for malformed words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("word must be exactly {len} letters, got {0}", len = WORD_LENGTH)]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word must contain only uppercase letters A-Z")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from uppercase text
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `WORD_LENGTH` characters
    /// - Contains non-ASCII characters
    /// - Contains anything other than `A`-`Z`
    ///
    /// # Examples
    /// ```
    /// use twisted_wordle::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("crane").is_err());
    /// assert!(Word::new("TOOLONG").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= `WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
