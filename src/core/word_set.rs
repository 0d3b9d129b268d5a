//! The dictionary of allowed words

use super::Word;
use crate::error::{GameError, Result};
use rand::Rng;
use rand::seq::{IteratorRandom, SliceRandom};
use rustc_hash::FxHashSet;

/// Immutable, non-empty set of allowed words
#[derive(Debug, Clone)]
pub struct WordSet {
    words: FxHashSet<Word>,
}

impl WordSet {
    /// Build a set from already-validated words
    ///
    /// Duplicates collapse into one entry.
    ///
    /// # Errors
    /// Returns `GameError::Configuration` if no words are supplied.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self> {
        let words: FxHashSet<Word> = words.into_iter().collect();
        if words.is_empty() {
            return Err(GameError::Configuration("dictionary is empty".to_string()));
        }
        Ok(Self { words })
    }

    /// Check membership by text
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Look up the stored word for `text`
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.words.get(text)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: an empty set cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Pick `count` distinct words at random, in random order
    ///
    /// Returns fewer than `count` words only if the set is smaller.
    pub fn choose_random<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Word> {
        let mut picked: Vec<Word> = self.words.iter().cloned().choose_multiple(rng, count);
        // choose_multiple does not guarantee a random order
        picked.shuffle(rng);
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(words: &[&str]) -> WordSet {
        WordSet::new(words.iter().map(|w| Word::new(*w).unwrap())).unwrap()
    }

    #[test]
    fn empty_dictionary_is_configuration_error() {
        let result = WordSet::new(Vec::new());
        assert!(matches!(result, Err(GameError::Configuration(_))));
    }

    #[test]
    fn duplicates_collapse() {
        let set = set_of(&["APPLE", "APPLE", "CHAIR"]);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }

    #[test]
    fn contains_by_text() {
        let set = set_of(&["APPLE", "CHAIR", "SPACE", "LOWER", "VALID"]);
        assert!(set.contains("SPACE"));
        assert!(!set.contains("space"));
        assert!(!set.contains("TABLE"));
        assert_eq!(set.get("LOWER").map(Word::text), Some("LOWER"));
    }

    #[test]
    fn choose_random_distinct_members() {
        let set = set_of(&["APPLE", "CHAIR", "SPACE", "LOWER", "VALID"]);
        let mut rng = rand::rng();

        let picked = set.choose_random(&mut rng, 3);
        assert_eq!(picked.len(), 3);
        assert!(picked.iter().all(|w| set.contains(w.text())));

        let unique: FxHashSet<&Word> = picked.iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn choose_random_caps_at_set_size() {
        let set = set_of(&["APPLE", "CHAIR"]);
        let picked = set.choose_random(&mut rand::rng(), 5);
        assert_eq!(picked.len(), 2);
    }
}
