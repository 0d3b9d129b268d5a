//! Twisted Wordle
//!
//! A two-player, turn-based Wordle duel. Each player picks secret words for
//! the other; each turn is bounded by attempts and by a countdown, and fast,
//! efficient solves score more.
//!
//! # Quick Start
//!
//! ```rust
//! use twisted_wordle::core::{Word, WordSet};
//! use twisted_wordle::engine::{GameController, Phase, TurnOutcome};
//!
//! let words = ["APPLE", "CHAIR", "SPACE", "LOWER", "VALID", "TABLE"];
//! let dictionary = WordSet::new(words.iter().map(|w| Word::new(*w).unwrap())).unwrap();
//!
//! let mut game = GameController::default();
//! game.start_game(
//!     &dictionary,
//!     "Ada",
//!     "Bo",
//!     &["APPLE", "CHAIR", "SPACE"],
//!     &["LOWER", "VALID", "TABLE"],
//! )
//! .unwrap();
//!
//! game.tick(10.0).unwrap();
//! let report = game.submit_guess("APPLE").unwrap();
//! assert_eq!(report.outcome, TurnOutcome::Solved);
//! assert_eq!(report.points, Some(50 + 6 * 10 + 80));
//! assert_eq!(report.state.phase, Phase::PlayerTurn);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod engine;

// Error types
pub mod error;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{GameError, Result, ValidationError};
