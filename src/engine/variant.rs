//! Capabilities shared by game variants
//!
//! Variants share no behaviour, only this small surface, so each one
//! implements it on its own.

/// Reset, outcome bookkeeping and statistics for a game variant
pub trait GameVariant {
    /// What a finished unit of play reports
    type Outcome;
    /// Accumulated statistics
    type Stats;

    /// Return to the initial, not-yet-started state
    fn reset_state(&mut self);

    /// Fold a finished unit of play into the statistics
    fn record_outcome(&mut self, outcome: Self::Outcome);

    fn current_stats(&self) -> Self::Stats;
}

/// Turn tallies for the word duel
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TurnStats {
    pub turns_played: u32,
    pub solved: u32,
    pub attempts_exhausted: u32,
    pub timed_out: u32,
    pub games_completed: u32,
}

impl TurnStats {
    /// Share of turns solved, 0.0 when nothing was played
    #[must_use]
    pub fn solve_rate(&self) -> f64 {
        if self.turns_played == 0 {
            0.0
        } else {
            f64::from(self.solved) / f64::from(self.turns_played)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_rate_handles_empty() {
        assert!(TurnStats::default().solve_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn solve_rate_fraction() {
        let stats = TurnStats {
            turns_played: 4,
            solved: 3,
            ..TurnStats::default()
        };
        assert!((stats.solve_rate() - 0.75).abs() < f64::EPSILON);
    }
}
