//! Dictionary loading utilities
//!
//! This is the only place that normalizes text: entries are trimmed,
//! uppercased and filtered to well-formed words before the engine sees them.

use crate::core::{Word, WordSet};
use crate::error::Result;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Trim, uppercase and keep only well-formed `WORD_LENGTH` letter words
///
/// Blank lines and malformed entries are skipped.
///
/// # Examples
/// ```
/// use twisted_wordle::wordlists::loader::normalize_words;
///
/// let words = normalize_words(["apple", " TABLE ", "CHAIR", "TOOLONG", "SHRT"]);
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["APPLE", "TABLE", "CHAIR"]);
/// ```
pub fn normalize_words<'a>(raw: impl IntoIterator<Item = &'a str>) -> Vec<Word> {
    raw.into_iter()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed.to_uppercase()) {
                Ok(word) => Some(word),
                Err(e) => {
                    debug!("skipping dictionary entry {trimmed:?}: {e}");
                    None
                }
            }
        })
        .collect()
}

/// Build a dictionary from raw entries
///
/// # Errors
/// `Configuration` if no entry survives normalization.
pub fn words_from_slice(slice: &[&str]) -> Result<WordSet> {
    WordSet::new(normalize_words(slice.iter().copied()))
}

/// Load a dictionary from a file, one word per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or a configuration
/// error if it holds no usable words.
///
/// # Examples
/// ```no_run
/// use twisted_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordSet> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let set = WordSet::new(normalize_words(content.lines()))?;
    info!("loaded {} words from {}", set.len(), path.display());
    Ok(set)
}
