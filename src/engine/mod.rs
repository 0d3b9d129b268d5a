//! Game engine
//!
//! A pure reactive state machine: feed it `submit_guess` and `tick`
//! events, read back outcomes. It performs no I/O, holds no timers, and
//! knows time only as seconds remaining.

mod config;
mod controller;
mod round;
mod scoring;
mod variant;

pub use config::GameConfig;
pub use controller::{
    GameController, GameState, GuessReport, PLAYER_COUNT, Phase, TickReport, Winner,
};
pub use round::{AttemptState, GuessOutcome, RoundEngine, TurnOutcome};
pub use scoring::{ATTEMPT_BONUS, calculate_score};
pub use variant::{GameVariant, TurnStats};
