//! Dictionaries of allowed words
//!
//! Provides the embedded default dictionary and file loading.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
