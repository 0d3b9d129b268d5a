//! Interactive TUI front end

mod app;
mod rendering;

pub use app::{App, FinishedTurn, InputMode, Message, MessageStyle, run_tui};
