//! Points for a solved word

use crate::core::BASE_SCORE;
use crate::error::ValidationError;

/// Points per attempt still available when the word was solved
pub const ATTEMPT_BONUS: i64 = 10;

/// Score a solved word
///
/// `BASE_SCORE + attempts_left * 10 + max(0, time_left)`
///
/// `attempts_left` counts the attempts available before the winning guess.
/// A negative `time_left` is accepted and contributes nothing.
///
/// # Errors
/// `NegativeAttempts` if `attempts_left < 0`.
///
/// # Examples
/// ```
/// use twisted_wordle::engine::calculate_score;
///
/// assert_eq!(calculate_score(3, 20), Ok(100));
/// assert_eq!(calculate_score(1, -10), Ok(60));
/// assert!(calculate_score(-1, 30).is_err());
/// ```
pub fn calculate_score(attempts_left: i64, time_left: i64) -> Result<u32, ValidationError> {
    if attempts_left < 0 {
        return Err(ValidationError::NegativeAttempts(attempts_left));
    }

    let total = i64::from(BASE_SCORE)
        .saturating_add(attempts_left.saturating_mul(ATTEMPT_BONUS))
        .saturating_add(time_left.max(0));

    Ok(u32::try_from(total).unwrap_or(u32::MAX))
}
