//! A single turn: one player, one secret word
//!
//! The engine only tracks attempts and remaining time. It never touches
//! scores or rounds; the controller acts on the outcomes it reports.

use crate::core::{GuessResult, Word};
use crate::error::{GameError, Result, ValidationError};
use log::{debug, warn};

/// Where a turn stands after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnOutcome {
    /// Still awaiting guesses
    Continuing,
    /// The secret word was guessed
    Solved,
    /// The last attempt was used without solving
    AttemptsExhausted,
    /// The clock ran out
    TimedOut,
}

impl TurnOutcome {
    /// True once the turn can accept no more events
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Continuing)
    }
}

/// State of the turn in progress
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptState {
    pub secret: Word,
    pub attempts_left: u32,
    /// Seconds remaining, never below zero
    pub time_left: f64,
    /// Every accepted guess in order
    pub guesses: Vec<(Word, GuessResult)>,
}

impl AttemptState {
    /// Remaining time rounded up to whole seconds, as a countdown shows it
    #[must_use]
    pub fn whole_seconds_left(&self) -> i64 {
        self.time_left.ceil() as i64
    }
}

/// Result of one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub result: GuessResult,
    pub outcome: TurnOutcome,
}

/// Drives one player's attempts against one secret word
#[derive(Debug, Clone)]
pub struct RoundEngine {
    state: AttemptState,
    outcome: TurnOutcome,
    attempts_before_solve: Option<u32>,
}

impl RoundEngine {
    #[must_use]
    pub fn new(secret: Word, max_attempts: u32, turn_time: u32) -> Self {
        Self {
            state: AttemptState {
                secret,
                attempts_left: max_attempts,
                time_left: f64::from(turn_time),
                guesses: Vec::with_capacity(max_attempts as usize),
            },
            outcome: TurnOutcome::Continuing,
            attempts_before_solve: None,
        }
    }

    /// Grade a guess and consume one attempt
    ///
    /// A malformed guess is rejected without using an attempt.
    ///
    /// # Errors
    /// - `TurnOver` if the turn already ended
    /// - `Validation` if `guess` is not a well-formed word
    pub fn submit_guess(&mut self, guess: &str) -> Result<GuessOutcome> {
        if self.outcome.is_terminal() {
            return Err(GameError::TurnOver);
        }

        let guess = Word::new(guess).map_err(|e| {
            warn!("rejected guess {guess:?}: {e}");
            ValidationError::from(e)
        })?;

        let result = GuessResult::evaluate(&self.state.secret, &guess);
        let attempts_before = self.state.attempts_left;
        self.state.attempts_left = attempts_before.saturating_sub(1);

        self.outcome = if guess == self.state.secret {
            self.attempts_before_solve = Some(attempts_before);
            TurnOutcome::Solved
        } else if self.state.attempts_left == 0 {
            TurnOutcome::AttemptsExhausted
        } else {
            TurnOutcome::Continuing
        };

        debug!(
            "guess {guess} -> {result} ({} attempts left, {:?})",
            self.state.attempts_left, self.outcome
        );

        self.state.guesses.push((guess, result));

        Ok(GuessOutcome {
            result,
            outcome: self.outcome,
        })
    }

    /// Advance the clock by `elapsed_seconds`
    ///
    /// Once the turn is over further ticks change nothing and report the
    /// final outcome.
    ///
    /// # Errors
    /// `Validation` if `elapsed_seconds` is negative or not finite.
    pub fn tick(&mut self, elapsed_seconds: f64) -> Result<TurnOutcome> {
        if !elapsed_seconds.is_finite() || elapsed_seconds < 0.0 {
            return Err(ValidationError::InvalidElapsed(elapsed_seconds).into());
        }

        if self.outcome.is_terminal() {
            return Ok(self.outcome);
        }

        let before = self.state.whole_seconds_left();
        self.state.time_left = (self.state.time_left - elapsed_seconds).max(0.0);
        let after = self.state.whole_seconds_left();
        if after != before {
            debug!("{after}s left");
        }

        if self.state.time_left <= 0.0 {
            self.outcome = TurnOutcome::TimedOut;
        }

        Ok(self.outcome)
    }

    #[must_use]
    pub const fn outcome(&self) -> TurnOutcome {
        self.outcome
    }

    #[must_use]
    pub const fn state(&self) -> &AttemptState {
        &self.state
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.state.secret
    }

    #[must_use]
    pub const fn attempts_left(&self) -> u32 {
        self.state.attempts_left
    }

    #[must_use]
    pub const fn time_left(&self) -> f64 {
        self.state.time_left
    }

    /// Attempts that were available before the winning guess
    ///
    /// `None` unless the turn ended `Solved`.
    #[must_use]
    pub const fn attempts_before_solve(&self) -> Option<u32> {
        self.attempts_before_solve
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;

    fn engine(secret: &str) -> RoundEngine {
        RoundEngine::new(Word::new(secret).unwrap(), 6, 90)
    }

    #[test]
    fn new_turn_starts_full() {
        let round = engine("CRANE");
        assert_eq!(round.attempts_left(), 6);
        assert!((round.time_left() - 90.0).abs() < f64::EPSILON);
        assert_eq!(round.outcome(), TurnOutcome::Continuing);
        assert!(round.state().guesses.is_empty());
    }

    #[test]
    fn wrong_guess_continues() {
        let mut round = engine("CRANE");
        let outcome = round.submit_guess("SLATE").unwrap();

        assert_eq!(outcome.outcome, TurnOutcome::Continuing);
        assert_eq!(outcome.result.statuses()[2], LetterStatus::Exact);
        assert_eq!(round.attempts_left(), 5);
        assert_eq!(round.state().guesses.len(), 1);
    }

    #[test]
    fn correct_guess_solves() {
        let mut round = engine("CRANE");
        round.submit_guess("SLATE").unwrap();
        let outcome = round.submit_guess("CRANE").unwrap();

        assert_eq!(outcome.outcome, TurnOutcome::Solved);
        assert!(outcome.result.is_solved());
        assert_eq!(round.attempts_left(), 4);
        assert_eq!(round.attempts_before_solve(), Some(5));
    }

    #[test]
    fn last_attempt_exhausts() {
        let mut round = engine("CRANE");
        for _ in 0..5 {
            let outcome = round.submit_guess("SLATE").unwrap();
            assert_eq!(outcome.outcome, TurnOutcome::Continuing);
        }
        let outcome = round.submit_guess("SLATE").unwrap();

        assert_eq!(outcome.outcome, TurnOutcome::AttemptsExhausted);
        assert_eq!(round.attempts_left(), 0);
        assert_eq!(round.attempts_before_solve(), None);
    }

    #[test]
    fn solving_on_last_attempt_is_solved() {
        let mut round = engine("CRANE");
        for _ in 0..5 {
            round.submit_guess("SLATE").unwrap();
        }
        let outcome = round.submit_guess("CRANE").unwrap();
        assert_eq!(outcome.outcome, TurnOutcome::Solved);
        assert_eq!(round.attempts_before_solve(), Some(1));
    }

    #[test]
    fn no_guesses_after_turn_over() {
        let mut round = engine("CRANE");
        round.submit_guess("CRANE").unwrap();
        assert!(matches!(
            round.submit_guess("SLATE"),
            Err(GameError::TurnOver)
        ));
        assert_eq!(round.attempts_left(), 5);
    }

    #[test]
    fn malformed_guess_keeps_attempt() {
        let mut round = engine("CRANE");
        let err = round.submit_guess("CRANES").unwrap_err();
        assert!(err.is_recoverable());
        assert!(round.submit_guess("crane").is_err());
        assert_eq!(round.attempts_left(), 6);
        assert_eq!(round.outcome(), TurnOutcome::Continuing);
    }

    #[test]
    fn tick_counts_down_then_times_out() {
        let mut round = engine("CRANE");
        assert_eq!(round.tick(30.0).unwrap(), TurnOutcome::Continuing);
        assert_eq!(round.state().whole_seconds_left(), 60);
        assert_eq!(round.tick(59.5).unwrap(), TurnOutcome::Continuing);
        assert_eq!(round.state().whole_seconds_left(), 1);
        assert_eq!(round.tick(1.0).unwrap(), TurnOutcome::TimedOut);
        assert!(round.time_left().abs() < f64::EPSILON);
    }

    #[test]
    fn guesses_rejected_after_timeout() {
        let mut round = engine("CRANE");
        round.tick(90.0).unwrap();
        assert!(matches!(
            round.submit_guess("CRANE"),
            Err(GameError::TurnOver)
        ));
    }

    #[test]
    fn ticks_after_solve_are_ignored() {
        let mut round = engine("CRANE");
        round.tick(10.0).unwrap();
        round.submit_guess("CRANE").unwrap();
        assert_eq!(round.tick(500.0).unwrap(), TurnOutcome::Solved);
        assert_eq!(round.state().whole_seconds_left(), 80);
    }

    #[test]
    fn invalid_elapsed_rejected() {
        let mut round = engine("CRANE");
        assert!(round.tick(-1.0).is_err());
        assert!(round.tick(f64::NAN).is_err());
        assert!(round.tick(f64::INFINITY).is_err());
        assert_eq!(round.state().whole_seconds_left(), 90);
    }
}
