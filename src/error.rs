//! Error types for the game engine
//!
//! Validation errors are recoverable: the caller re-prompts or rejects the
//! offending input. Everything else ends the current operation.

use crate::core::WordError;

/// Invalid input rejected at the point of entry
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("player name cannot be blank")]
    BlankPlayerName,

    #[error("expected {expected} secret words, got {actual}")]
    WrongWordCount { expected: usize, actual: usize },

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("'{0}' is not in the dictionary")]
    NotInDictionary(String),

    #[error("score increment cannot be negative, got {0}")]
    NegativeScore(i64),

    #[error("attemptsLeft cannot be negative, got {0}")]
    NegativeAttempts(i64),

    #[error("elapsed time must be a finite, non-negative number of seconds, got {0}")]
    InvalidElapsed(f64),
}

/// Errors raised by the game engine
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("the turn is already over")]
    TurnOver,

    #[error("no game in progress")]
    NotInProgress,

    #[error("a game is already in progress")]
    AlreadyStarted,

    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Whether the caller can recover by supplying different input
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
