//! A participant in the duel

use super::validation::validate_player_name;
use crate::error::ValidationError;

/// Player name and running score
///
/// The score only ever grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    score: u32,
}

impl Player {
    /// # Errors
    /// `BlankPlayerName` if `name` is empty or whitespace.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = validate_player_name(name)?;
        Ok(Self {
            name: name.to_string(),
            score: 0,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Add `points` to the score, saturating at `u32::MAX`
    ///
    /// # Errors
    /// `NegativeScore` if `points < 0`; the score is left unchanged.
    pub fn add_score(&mut self, points: i64) -> Result<(), ValidationError> {
        if points < 0 {
            return Err(ValidationError::NegativeScore(points));
        }
        let points = u32::try_from(points).unwrap_or(u32::MAX);
        self.score = self.score.saturating_add(points);
        Ok(())
    }
}
