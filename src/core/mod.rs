//! Core domain types for the word duel
//!
//! Pure, dependency-light types: words, the dictionary, players, guess
//! feedback and setup validation.

mod feedback;
mod player;
pub mod validation;
mod word;
mod word_set;

pub use feedback::{GuessResult, LetterStatus};
pub use player::Player;
pub use word::{Word, WordError};
pub use word_set::WordSet;

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per turn
pub const MAX_ATTEMPTS: u32 = 6;

/// Seconds allowed per turn
pub const TURN_TIME: u32 = 90;

/// Rounds per game; each player takes one turn per round
pub const TOTAL_ROUNDS: u32 = 3;

/// Points awarded for any solved word before bonuses
pub const BASE_SCORE: u32 = 50;
