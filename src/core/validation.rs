//! Input validation for setup
//!
//! Every check here rejects rather than repairs: no trimming, no case
//! folding, no default substitution.

use super::{WORD_LENGTH, Word, WordSet};
use crate::error::ValidationError;

/// True iff `word` is present and exactly `WORD_LENGTH` characters
#[must_use]
pub fn validate_word_length(word: Option<&str>) -> bool {
    word.is_some_and(|w| w.chars().count() == WORD_LENGTH)
}

/// True iff `word` is present and a member of `set`
#[must_use]
pub fn validate_word_in_set(word: Option<&str>, set: &WordSet) -> bool {
    word.is_some_and(|w| set.contains(w))
}

/// Accept a secret word only if it passes both the length and the
/// dictionary check
///
/// # Errors
/// `InvalidWord` when the text is not a well-formed word,
/// `NotInDictionary` when it is well-formed but not allowed.
pub fn validate_secret_word(word: &str, set: &WordSet) -> Result<Word, ValidationError> {
    let parsed = Word::new(word)?;
    if !validate_word_in_set(Some(word), set) {
        return Err(ValidationError::NotInDictionary(parsed.text().to_string()));
    }
    Ok(parsed)
}

/// Reject empty or whitespace-only names
///
/// # Errors
/// `BlankPlayerName` for blank input.
pub fn validate_player_name(name: &str) -> Result<&str, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::BlankPlayerName);
    }
    Ok(name)
}

/// Validate the words one player picked for the other
///
/// # Errors
/// `WrongWordCount` unless exactly `total_rounds` words are given, then the
/// first word that fails `validate_secret_word`.
pub fn validate_assignment<S: AsRef<str>>(
    words: &[S],
    set: &WordSet,
    total_rounds: usize,
) -> Result<Vec<Word>, ValidationError> {
    if words.len() != total_rounds {
        return Err(ValidationError::WrongWordCount {
            expected: total_rounds,
            actual: words.len(),
        });
    }

    words
        .iter()
        .map(|w| validate_secret_word(w.as_ref(), set))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;

    fn dictionary() -> WordSet {
        let words = ["APPLE", "CHAIR", "SPACE", "LOWER", "VALID"];
        WordSet::new(words.iter().map(|w| Word::new(*w).unwrap())).unwrap()
    }

    #[test]
    fn word_length_checks() {
        assert!(validate_word_length(Some("APPLE")));
        assert!(!validate_word_length(Some("APPLES")));
        assert!(!validate_word_length(Some("")));
        assert!(!validate_word_length(None));
    }

    #[test]
    fn word_in_set_checks() {
        let set = dictionary();
        assert!(validate_word_in_set(Some("CHAIR"), &set));
        assert!(!validate_word_in_set(Some("chair"), &set));
        assert!(!validate_word_in_set(Some("TABLE"), &set));
        assert!(!validate_word_in_set(None, &set));
    }

    #[test]
    fn secret_word_reports_reason() {
        let set = dictionary();
        assert!(validate_secret_word("SPACE", &set).is_ok());
        assert_eq!(
            validate_secret_word("TABLE", &set),
            Err(ValidationError::NotInDictionary("TABLE".to_string()))
        );
        assert_eq!(
            validate_secret_word("SPACES", &set),
            Err(ValidationError::InvalidWord(WordError::InvalidLength(6)))
        );
    }

    #[test]
    fn blank_names_rejected() {
        assert_eq!(validate_player_name("Ada"), Ok("Ada"));
        assert_eq!(validate_player_name(""), Err(ValidationError::BlankPlayerName));
        assert_eq!(validate_player_name("  \t"), Err(ValidationError::BlankPlayerName));
    }

    #[test]
    fn assignment_needs_exact_count() {
        let set = dictionary();
        assert_eq!(
            validate_assignment(&["APPLE", "CHAIR"], &set, 3),
            Err(ValidationError::WrongWordCount {
                expected: 3,
                actual: 2
            })
        );
        assert!(matches!(
            validate_assignment(&["APPLE", "CHAIR", "SPACE", "LOWER"], &set, 3),
            Err(ValidationError::WrongWordCount { actual: 4, .. })
        ));
    }

    #[test]
    fn assignment_rejects_unknown_word() {
        let set = dictionary();
        let result = validate_assignment(&["APPLE", "TABLE", "SPACE"], &set, 3);
        assert_eq!(
            result,
            Err(ValidationError::NotInDictionary("TABLE".to_string()))
        );
    }

    #[test]
    fn assignment_keeps_order() {
        let set = dictionary();
        let words = validate_assignment(&["VALID", "APPLE", "LOWER"], &set, 3).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["VALID", "APPLE", "LOWER"]);
    }
}
