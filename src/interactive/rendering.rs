//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GuessResult, LetterStatus, WORD_LENGTH, Word};
use crate::engine::{Phase, Winner};
use crate::output::formatters::format_clock;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Scores, clock, messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, chunks[3], app.input_mode);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.state.phase {
        Phase::PlayerTurn => format!(
            "🔀 TWISTED WORDLE - Round {}/{} - {}",
            app.state.current_round,
            app.state.total_rounds,
            app.state.active_player().map_or("", |p| p.name())
        ),
        Phase::GameOver => "🔀 TWISTED WORDLE - Game Over".to_string(),
        Phase::Setup => "🔀 TWISTED WORDLE".to_string(),
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(status: LetterStatus) -> Style {
    let bg = match status {
        LetterStatus::Exact => Color::Green,
        LetterStatus::Present => Color::Yellow,
        LetterStatus::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn guess_line(guess: &Word, result: &GuessResult) -> Line<'static> {
    let spans: Vec<Span> = guess
        .text()
        .chars()
        .zip(result.statuses())
        .flat_map(|(letter, &status)| {
            [
                Span::styled(format!(" {letter} "), tile_style(status)),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn placeholder_line(text: &str) -> Line<'static> {
    let mut letters = text.chars();
    let spans: Vec<Span> = (0..WORD_LENGTH)
        .flat_map(|_| {
            let letter = letters.next().unwrap_or('_');
            [
                Span::styled(
                    format!(" {letter} "),
                    Style::default().fg(Color::White).bg(Color::Black),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let max_attempts = app.controller.config().max_attempts as usize;

    // During a handover the finished board stays up until the next player starts
    let (title, guesses, typing) = match (&app.last_turn, &app.state.attempt) {
        (Some(last), _) => (
            format!(" {}'s board ", last.player),
            last.guesses.as_slice(),
            false,
        ),
        (None, Some(attempt)) => (
            " Board ".to_string(),
            attempt.guesses.as_slice(),
            app.input_mode == InputMode::Guessing,
        ),
        (None, None) => (" Board ".to_string(), &[][..], false),
    };

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (guess, result) in guesses {
        lines.push(guess_line(guess, result));
        lines.push(Line::from(""));
    }

    let mut rows = guesses.len();
    if typing && rows < max_attempts {
        lines.push(placeholder_line(&app.input_buffer));
        lines.push(Line::from(""));
        rows += 1;
    }
    for _ in rows..max_attempts {
        lines.push(placeholder_line(""));
        lines.push(Line::from(""));
    }

    if let Some(secret) = app.last_turn.as_ref().and_then(|t| t.secret.as_ref()) {
        lines.push(Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                secret.text().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Scores
            Constraint::Length(3), // Clock
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_scores(f, app, chunks[0]);
    render_clock(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_scores(f: &mut Frame, app: &App, area: Rect) {
    let winner = app.state.winner();
    let lines: Vec<Line> = app
        .state
        .players
        .iter()
        .enumerate()
        .map(|(i, player)| {
            let active = app.state.phase == Phase::PlayerTurn && app.state.current_player == i;
            let marker = match winner {
                Some(Winner::Player(w)) if w == i => "🏆 ",
                Some(Winner::Tie) => "🤝 ",
                _ if active => "▶ ",
                _ => "  ",
            };
            let style = if active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{:<16}", player.name()), style),
                Span::styled(
                    format!("{:>6}", player.score()),
                    Style::default().fg(Color::Cyan),
                ),
            ])
        })
        .collect();

    let scores = Paragraph::new(lines).block(
        Block::default()
            .title(" Scores ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(scores, area);
}

fn render_clock(f: &mut Frame, app: &App, area: Rect) {
    let turn_time = f64::from(app.controller.config().turn_time);
    let (time_left, attempts_left) = app
        .state
        .attempt
        .as_ref()
        .map_or((0.0, 0), |a| (a.time_left, a.attempts_left));

    let ratio = if turn_time > 0.0 {
        (time_left / turn_time).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let color = if ratio > 0.5 {
        Color::Green
    } else if ratio > 0.2 {
        Color::Yellow
    } else {
        Color::Red
    };

    let label = if app.input_mode == InputMode::Handover {
        format!("paused | {} | {attempts_left} attempts", format_clock(time_left.ceil() as i64))
    } else {
        format!("{} | {attempts_left} attempts", format_clock(time_left.ceil() as i64))
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(label);
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Handover => (" Next player: press Enter to start ", "", Color::Cyan),
        InputMode::Guessing => (
            " Type your guess (5 letters) | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::GameOver => (" 🎉 GAME OVER 🎉 | Press 'q' to quit ", "", Color::Green),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, area: Rect, mode: InputMode) {
    let help_text = match mode {
        InputMode::Handover => "Enter: Start turn | q/Esc: Quit",
        InputMode::Guessing => "A-Z: Type | Backspace: Delete | Enter: Submit | Esc: Quit",
        InputMode::GameOver => "q/Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
