//! Display functions for game events

use super::formatters::{colored_guess, create_progress_bar, format_clock};
use crate::core::{GuessResult, Word};
use crate::engine::{AttemptState, GameState, Phase, TurnOutcome, TurnStats, Winner};
use colored::Colorize;
use std::io::{self, Write};

/// Announce whose turn it is
///
/// # Errors
/// Propagates write failures.
pub fn print_turn_banner<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    let Some(player) = state.active_player() else {
        return Ok(());
    };

    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Round {}/{}: {} to guess",
        state.current_round,
        state.total_rounds,
        player.name().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    print_scoreboard(out, state)
}

/// One line per player with the current score
///
/// # Errors
/// Propagates write failures.
pub fn print_scoreboard<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    for player in &state.players {
        writeln!(out, "  {:<20} {:>5}", player.name(), player.score())?;
    }
    Ok(())
}

/// Print a graded guess as tiles followed by its emoji summary
///
/// # Errors
/// Propagates write failures.
pub fn print_guess_row<W: Write>(out: &mut W, guess: &Word, result: &GuessResult) -> io::Result<()> {
    writeln!(out, "  {}  {}", colored_guess(guess, result), result.to_emoji())
}

/// Print attempts and time left in the running turn
///
/// # Errors
/// Propagates write failures.
pub fn print_attempt_status<W: Write>(
    out: &mut W,
    attempt: &AttemptState,
    turn_time: u32,
) -> io::Result<()> {
    write!(out, "  {} attempts left ", attempt.attempts_left)?;
    print_clock(out, attempt.time_left, turn_time)
}

/// Print the remaining time as a bar
///
/// # Errors
/// Propagates write failures.
pub fn print_clock<W: Write>(out: &mut W, time_left: f64, turn_time: u32) -> io::Result<()> {
    let bar = create_progress_bar(time_left, f64::from(turn_time), 30);
    writeln!(
        out,
        "  [{}] {}",
        bar.green(),
        format_clock(time_left.ceil() as i64)
    )
}

/// Report how a turn ended
///
/// # Errors
/// Propagates write failures.
pub fn print_turn_end<W: Write>(
    out: &mut W,
    name: &str,
    outcome: TurnOutcome,
    revealed: Option<&Word>,
    points: Option<u32>,
) -> io::Result<()> {
    let secret = revealed.map_or_else(String::new, |w| w.text().to_string());
    match outcome {
        TurnOutcome::Solved => writeln!(
            out,
            "{}",
            format!("✅ {name} solved {secret} for {} points!", points.unwrap_or(0))
                .green()
                .bold()
        ),
        TurnOutcome::AttemptsExhausted => writeln!(
            out,
            "{}",
            format!("❌ {name} is out of attempts. The word was {secret}.")
                .red()
                .bold()
        ),
        TurnOutcome::TimedOut => writeln!(
            out,
            "{}",
            format!("⏰ Time's up for {name}! The word was {secret}.")
                .red()
                .bold()
        ),
        TurnOutcome::Continuing => Ok(()),
    }
}

/// Print the final standings
///
/// # Errors
/// Propagates write failures.
pub fn print_final_scores<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    if state.phase != Phase::GameOver {
        return Ok(());
    }

    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, " {} ", "FINAL SCORES".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    print_scoreboard(out, state)?;

    match state.winner() {
        Some(Winner::Player(index)) => {
            if let Some(player) = state.players.get(index) {
                writeln!(
                    out,
                    "\n  🏆 {} wins!",
                    player.name().bright_yellow().bold()
                )?;
            }
        }
        Some(Winner::Tie) => writeln!(out, "\n  🤝 It's a tie!")?,
        None => {}
    }
    Ok(())
}

/// Print session statistics
///
/// # Errors
/// Propagates write failures.
pub fn print_stats<W: Write>(out: &mut W, stats: &TurnStats) -> io::Result<()> {
    writeln!(out, "\n📊 {}", "Turns:".bright_cyan().bold())?;
    writeln!(out, "   Played:       {}", stats.turns_played)?;
    writeln!(out, "   Solved:       {}", stats.solved)?;
    writeln!(out, "   Out of tries: {}", stats.attempts_exhausted)?;
    writeln!(out, "   Timed out:    {}", stats.timed_out)?;
    writeln!(out, "   Solve rate:   {:.0}%", stats.solve_rate() * 100.0)
}
