//! Command implementations

pub mod setup;
pub mod simple;

pub use setup::{SetupInput, prompt_setup};
pub use simple::run_simple;
