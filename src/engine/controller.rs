//! The two-player game state machine
//!
//! `Setup -> PlayerTurn -> ... -> GameOver`
//!
//! Player 1 plays, then player 2 plays the same round, then the round
//! number advances. After the last round the game is over. A controller is
//! the whole session: the caller owns it and feeds it `submit_guess` and
//! `tick` events one at a time.

use super::config::GameConfig;
use super::round::{AttemptState, GuessOutcome, RoundEngine, TurnOutcome};
use super::scoring::calculate_score;
use super::variant::{GameVariant, TurnStats};
use crate::core::validation::validate_assignment;
use crate::core::{GuessResult, Player, Word, WordSet};
use crate::error::{GameError, Result};
use log::{info, warn};

/// Number of players in a duel
pub const PLAYER_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    PlayerTurn,
    GameOver,
}

/// Final standing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// Index of the winning player
    Player(usize),
    Tie,
}

/// Read-only snapshot for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub phase: Phase,
    /// 1-based; 0 during setup
    pub current_round: u32,
    pub total_rounds: u32,
    /// Index into `players` of whoever is guessing
    pub current_player: usize,
    /// Empty during setup
    pub players: Vec<Player>,
    pub attempt: Option<AttemptState>,
}

impl GameState {
    #[must_use]
    pub fn active_player(&self) -> Option<&Player> {
        match self.phase {
            Phase::PlayerTurn => self.players.get(self.current_player),
            Phase::Setup | Phase::GameOver => None,
        }
    }

    /// The winner, once the game is over
    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        if self.phase != Phase::GameOver {
            return None;
        }
        let [first, second] = self.players.as_slice() else {
            return None;
        };
        Some(match first.score().cmp(&second.score()) {
            std::cmp::Ordering::Greater => Winner::Player(0),
            std::cmp::Ordering::Less => Winner::Player(1),
            std::cmp::Ordering::Equal => Winner::Tie,
        })
    }
}

/// What a submitted guess did
#[derive(Debug, Clone, PartialEq)]
pub struct GuessReport {
    pub result: GuessResult,
    pub outcome: TurnOutcome,
    /// The secret word, revealed when the turn ended
    pub revealed: Option<Word>,
    /// Points awarded, when the guess solved the word
    pub points: Option<u32>,
    pub state: GameState,
}

/// What a clock tick did
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub outcome: TurnOutcome,
    /// The secret word, revealed when the turn timed out
    pub revealed: Option<Word>,
    pub state: GameState,
}

/// Players and their secret words, fixed once setup succeeds
#[derive(Debug, Clone)]
struct Duel {
    players: [Player; PLAYER_COUNT],
    /// `assignments[i]` holds the words player `i` must guess
    assignments: [Vec<Word>; PLAYER_COUNT],
}

/// Owns a whole two-player session
#[derive(Debug, Clone)]
pub struct GameController {
    config: GameConfig,
    phase: Phase,
    duel: Option<Duel>,
    current_round: u32,
    current_player: usize,
    round: Option<RoundEngine>,
    stats: TurnStats,
}

impl Default for GameController {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            phase: Phase::Setup,
            duel: None,
            current_round: 0,
            current_player: 0,
            round: None,
            stats: TurnStats::default(),
        }
    }
}

impl GameController {
    /// Create a controller in the `Setup` phase
    ///
    /// # Errors
    /// `Configuration` if `config` has a zero limit.
    pub fn new(config: GameConfig) -> Result<Self> {
        Ok(Self {
            config: config.validate()?,
            ..Self::default()
        })
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Validate setup input and start player 1's first turn
    ///
    /// `words_for_player1` are the secret words player 1 must guess, chosen
    /// by player 2, and vice versa. On any error the controller stays in
    /// `Setup` and can be retried.
    ///
    /// # Errors
    /// - `AlreadyStarted` outside the `Setup` phase
    /// - `Validation` for a blank name, a list without exactly
    ///   `total_rounds` words, or a word failing length or dictionary checks
    pub fn start_game<S: AsRef<str>>(
        &mut self,
        word_set: &WordSet,
        player1_name: &str,
        player2_name: &str,
        words_for_player1: &[S],
        words_for_player2: &[S],
    ) -> Result<GameState> {
        if self.phase != Phase::Setup {
            return Err(GameError::AlreadyStarted);
        }

        let rounds = self.config.total_rounds as usize;
        let duel = Duel {
            players: [Player::new(player1_name)?, Player::new(player2_name)?],
            assignments: [
                validate_assignment(words_for_player1, word_set, rounds)?,
                validate_assignment(words_for_player2, word_set, rounds)?,
            ],
        };

        info!(
            "game started: {} vs {}, {} rounds",
            duel.players[0].name(),
            duel.players[1].name(),
            self.config.total_rounds
        );

        self.duel = Some(duel);
        self.phase = Phase::PlayerTurn;
        self.current_round = 1;
        self.current_player = 0;
        self.round = self.new_round_engine();

        Ok(self.game_state())
    }

    /// Submit a guess for the active player
    ///
    /// A malformed guess is a recoverable error; the turn carries on.
    ///
    /// # Errors
    /// - `NotInProgress` outside the `PlayerTurn` phase
    /// - `Validation` for a malformed guess
    pub fn submit_guess(&mut self, guess: &str) -> Result<GuessReport> {
        let round = self.active_round_mut()?;
        let GuessOutcome { result, outcome } = round.submit_guess(guess)?;

        let (revealed, points) = if outcome.is_terminal() {
            self.finish_turn(outcome)?
        } else {
            (None, None)
        };

        Ok(GuessReport {
            result,
            outcome,
            revealed,
            points,
            state: self.game_state(),
        })
    }

    /// Advance the active turn's clock
    ///
    /// # Errors
    /// - `NotInProgress` outside the `PlayerTurn` phase
    /// - `Validation` for a negative or non-finite `elapsed_seconds`
    pub fn tick(&mut self, elapsed_seconds: f64) -> Result<TickReport> {
        let round = self.active_round_mut()?;
        let outcome = round.tick(elapsed_seconds)?;

        let revealed = if outcome.is_terminal() {
            self.finish_turn(outcome)?.0
        } else {
            None
        };

        Ok(TickReport {
            outcome,
            revealed,
            state: self.game_state(),
        })
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn game_state(&self) -> GameState {
        GameState {
            phase: self.phase,
            current_round: self.current_round,
            total_rounds: self.config.total_rounds,
            current_player: self.current_player,
            players: self
                .duel
                .as_ref()
                .map(|d| d.players.to_vec())
                .unwrap_or_default(),
            attempt: self.round.as_ref().map(|r| r.state().clone()),
        }
    }

    fn active_round_mut(&mut self) -> Result<&mut RoundEngine> {
        match self.phase {
            Phase::PlayerTurn => self.round.as_mut().ok_or(GameError::NotInProgress),
            Phase::Setup | Phase::GameOver => {
                warn!("event received with no game in progress");
                Err(GameError::NotInProgress)
            }
        }
    }

    /// Score the finished turn, then hand over to the next one
    fn finish_turn(&mut self, outcome: TurnOutcome) -> Result<(Option<Word>, Option<u32>)> {
        let round = self.round.take().ok_or(GameError::NotInProgress)?;
        let duel = self.duel.as_mut().ok_or(GameError::NotInProgress)?;
        let player = &mut duel.players[self.current_player];

        let points = if outcome == TurnOutcome::Solved {
            let attempts = i64::from(round.attempts_before_solve().unwrap_or_default());
            let points = calculate_score(attempts, round.state().whole_seconds_left())?;
            player.add_score(i64::from(points))?;
            Some(points)
        } else {
            None
        };

        info!(
            "round {} turn over for {}: {:?}, secret {}, score {}",
            self.current_round,
            player.name(),
            outcome,
            round.secret(),
            player.score()
        );

        self.record_outcome(outcome);
        self.advance();

        Ok((Some(round.secret().clone()), points))
    }

    /// Player 1 -> player 2 keeps the round; player 2 -> player 1 starts
    /// the next one, or ends the game after the last
    fn advance(&mut self) {
        if self.current_player == 0 {
            self.current_player = 1;
        } else {
            self.current_player = 0;
            self.current_round += 1;
        }

        if self.current_round > self.config.total_rounds {
            self.phase = Phase::GameOver;
            self.round = None;
            self.stats.games_completed += 1;
            if let Some(duel) = &self.duel {
                info!(
                    "game over: {} {} - {} {}",
                    duel.players[0].name(),
                    duel.players[0].score(),
                    duel.players[1].name(),
                    duel.players[1].score()
                );
            }
        } else {
            self.round = self.new_round_engine();
        }
    }

    fn new_round_engine(&self) -> Option<RoundEngine> {
        let duel = self.duel.as_ref()?;
        let index = (self.current_round as usize).checked_sub(1)?;
        let secret = duel.assignments[self.current_player].get(index)?.clone();
        Some(RoundEngine::new(
            secret,
            self.config.max_attempts,
            self.config.turn_time,
        ))
    }
}

impl GameVariant for GameController {
    type Outcome = TurnOutcome;
    type Stats = TurnStats;

    /// Back to `Setup`; statistics and configuration are kept
    fn reset_state(&mut self) {
        self.phase = Phase::Setup;
        self.duel = None;
        self.current_round = 0;
        self.current_player = 0;
        self.round = None;
    }

    fn record_outcome(&mut self, outcome: TurnOutcome) {
        match outcome {
            TurnOutcome::Continuing => return,
            TurnOutcome::Solved => self.stats.solved += 1,
            TurnOutcome::AttemptsExhausted => self.stats.attempts_exhausted += 1,
            TurnOutcome::TimedOut => self.stats.timed_out += 1,
        }
        self.stats.turns_played += 1;
    }

    fn current_stats(&self) -> TurnStats {
        self.stats
    }
}
