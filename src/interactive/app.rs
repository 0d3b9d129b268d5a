//! TUI application state and logic
//!
//! A thin adapter: key presses become `submit_guess` calls, measured loop
//! time becomes `tick` calls, and engine reports become messages.

use crate::core::{GuessResult, WORD_LENGTH, Word};
use crate::engine::{GameController, GameState, Phase, TurnOutcome};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How often the clock is fed when no key is pressed
const TICK_RATE: Duration = Duration::from_millis(250);

/// Messages kept on screen
const MAX_MESSAGES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Waiting for the next player to take the keyboard; the clock is paused
    Handover,
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// The board of a turn that just ended, shown during the handover
#[derive(Debug, Clone)]
pub struct FinishedTurn {
    pub player: String,
    pub guesses: Vec<(Word, GuessResult)>,
    pub outcome: TurnOutcome,
    pub secret: Option<Word>,
}

/// Application state
pub struct App {
    pub controller: GameController,
    pub state: GameState,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub last_turn: Option<FinishedTurn>,
    pub should_quit: bool,
}

impl App {
    /// Wrap a controller whose game has already been started
    #[must_use]
    pub fn new(controller: GameController) -> Self {
        let state = controller.game_state();
        let input_mode = if state.phase == Phase::GameOver {
            InputMode::GameOver
        } else {
            InputMode::Handover
        };

        let mut app = Self {
            controller,
            state,
            input_mode,
            input_buffer: String::new(),
            messages: Vec::new(),
            last_turn: None,
            should_quit: false,
        };
        app.announce_turn();
        app
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Handover => match key.code {
                KeyCode::Enter => {
                    self.input_mode = InputMode::Guessing;
                    self.last_turn = None;
                }
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < WORD_LENGTH {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
            InputMode::GameOver => {
                if key.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
        }
    }

    /// Feed loop time to the engine; the clock only runs while guessing
    pub fn on_tick(&mut self, elapsed_seconds: f64) {
        if self.input_mode != InputMode::Guessing {
            return;
        }

        let before = self.controller.game_state();
        match self.controller.tick(elapsed_seconds) {
            Ok(report) => {
                if report.outcome.is_terminal() {
                    self.finish_turn(&before, None, report.outcome, report.revealed, None);
                }
                self.state = report.state;
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn submit(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);
        let before = self.controller.game_state();

        match self.controller.submit_guess(&guess) {
            Ok(report) => {
                if report.outcome.is_terminal() {
                    let last = Word::new(guess).ok().map(|w| (w, report.result));
                    self.finish_turn(&before, last, report.outcome, report.revealed, report.points);
                }
                self.state = report.state;
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_turn(
        &mut self,
        before: &GameState,
        last_guess: Option<(Word, GuessResult)>,
        outcome: TurnOutcome,
        revealed: Option<Word>,
        points: Option<u32>,
    ) {
        let player = before
            .active_player()
            .map(|p| p.name().to_string())
            .unwrap_or_default();
        let mut guesses = before
            .attempt
            .as_ref()
            .map(|a| a.guesses.clone())
            .unwrap_or_default();
        guesses.extend(last_guess);

        let secret = revealed.as_ref().map_or("", Word::text);
        match outcome {
            TurnOutcome::Solved => self.add_message(
                &format!(
                    "{player} solved {secret} for {} points!",
                    points.unwrap_or(0)
                ),
                MessageStyle::Success,
            ),
            TurnOutcome::AttemptsExhausted => self.add_message(
                &format!("{player} is out of attempts. The word was {secret}."),
                MessageStyle::Error,
            ),
            TurnOutcome::TimedOut => self.add_message(
                &format!("Time's up for {player}! The word was {secret}."),
                MessageStyle::Error,
            ),
            TurnOutcome::Continuing => {}
        }

        self.last_turn = Some(FinishedTurn {
            player,
            guesses,
            outcome,
            secret: revealed,
        });
        self.input_buffer.clear();

        self.state = self.controller.game_state();
        if self.state.phase == Phase::GameOver {
            self.input_mode = InputMode::GameOver;
            self.add_message("Game over! Press 'q' to quit.", MessageStyle::Info);
        } else {
            self.input_mode = InputMode::Handover;
            self.announce_turn();
        }
    }

    fn announce_turn(&mut self) {
        if let Some(player) = self.state.active_player() {
            let text = format!(
                "Round {}/{}: {}, press Enter to start your turn.",
                self.state.current_round,
                self.state.total_rounds,
                player.name()
            );
            self.add_message(&text, MessageStyle::Info);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<App> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<App> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= TICK_RATE || app.input_mode != InputMode::Guessing {
            app.on_tick(elapsed.as_secs_f64());
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}
