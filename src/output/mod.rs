//! Terminal output formatting
//!
//! Display utilities for the line-based front end.

pub mod display;
pub mod formatters;

pub use display::{
    print_attempt_status, print_clock, print_final_scores, print_guess_row, print_scoreboard,
    print_stats, print_turn_banner, print_turn_end,
};
