//! Simple hot-seat CLI mode
//!
//! Line-based play without the TUI. The clock runs from each prompt to the
//! answer; the measured time is fed to the engine before the guess, so a
//! guess typed after the deadline ends the turn instead of counting.

use super::setup::read_line;
use crate::core::Word;
use crate::engine::{GameController, GameVariant, Phase};
use crate::error::Result;
use crate::output::{
    print_attempt_status, print_final_scores, print_guess_row, print_stats, print_turn_banner,
    print_turn_end,
};
use colored::Colorize;
use log::info;
use std::io::{BufRead, Write};
use std::time::Instant;

/// Play a started game to the end on the console
///
/// Typing `quit` at a guess prompt abandons the game.
///
/// # Errors
///
/// Returns an error if input ends early, output cannot be written, or the
/// engine rejects an event for a reason other than bad input.
pub fn run_simple<R: BufRead, W: Write>(
    controller: &mut GameController,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    while controller.phase() == Phase::PlayerTurn {
        print_turn_banner(output, &controller.game_state())?;
        // The clock only starts once the player is at the keyboard
        read_line(input, output, "Press Enter when ready")?;

        if !play_turn(controller, input, output)? {
            info!("game abandoned");
            writeln!(output, "\n👋 Game abandoned.")?;
            return Ok(());
        }
    }

    print_final_scores(output, &controller.game_state())?;
    print_stats(output, &controller.current_stats())?;
    Ok(())
}

/// Returns `false` if the player quit
fn play_turn<R: BufRead, W: Write>(
    controller: &mut GameController,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    let turn_time = controller.config().turn_time;
    let name = controller
        .game_state()
        .active_player()
        .map(|p| p.name().to_string())
        .unwrap_or_default();

    let mut clock = Instant::now();
    loop {
        let line = read_line(input, output, "Guess")?;
        let elapsed = clock.elapsed().as_secs_f64();
        clock = Instant::now();

        if line.eq_ignore_ascii_case("quit") {
            return Ok(false);
        }

        let tick = controller.tick(elapsed)?;
        if tick.outcome.is_terminal() {
            print_turn_end(output, &name, tick.outcome, tick.revealed.as_ref(), None)?;
            return Ok(true);
        }

        let guess = line.to_uppercase();
        match controller.submit_guess(&guess) {
            Ok(report) => {
                if let Ok(word) = Word::new(guess) {
                    print_guess_row(output, &word, &report.result)?;
                }
                if report.outcome.is_terminal() {
                    print_turn_end(
                        output,
                        &name,
                        report.outcome,
                        report.revealed.as_ref(),
                        report.points,
                    )?;
                    return Ok(true);
                }
                if let Some(attempt) = &report.state.attempt {
                    print_attempt_status(output, attempt, turn_time)?;
                }
            }
            Err(e) if e.is_recoverable() => {
                writeln!(output, "{}", format!("❌ {e}").red())?;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordSet;
    use crate::engine::GameConfig;
    use std::io::Cursor;

    fn one_round_game() -> GameController {
        let words = ["APPLE", "LOWER", "CRANE"];
        let set = WordSet::new(words.iter().map(|w| Word::new(*w).unwrap())).unwrap();
        let config = GameConfig {
            total_rounds: 1,
            ..GameConfig::default()
        };
        let mut controller = GameController::new(config).unwrap();
        controller
            .start_game(&set, "Ada", "Bo", &["APPLE"], &["LOWER"])
            .unwrap();
        controller
    }

    fn play(controller: &mut GameController, script: &str) -> (Result<()>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = run_simple(controller, &mut input, &mut output);
        (result, String::from_utf8_lossy(&output).into_owned())
    }

    #[test]
    fn plays_to_game_over() {
        let mut controller = one_round_game();
        let (result, output) = play(&mut controller, "\ncrane\napple\n\nlower\n");

        assert!(result.is_ok());
        assert_eq!(controller.phase(), Phase::GameOver);
        assert!(output.contains("Ada solved APPLE"));
        assert!(output.contains("Bo solved LOWER"));
        assert!(output.contains("FINAL SCORES"));

        let stats = controller.current_stats();
        assert_eq!(stats.solved, 2);
    }

    #[test]
    fn bad_guess_is_reported_and_turn_continues() {
        let mut controller = one_round_game();
        let (result, output) = play(&mut controller, "\napples\napple\n\nlower\n");

        assert!(result.is_ok());
        assert!(output.contains("invalid word"));
        assert!(output.contains("Ada solved APPLE"));
    }

    #[test]
    fn exhausting_attempts_reveals_word() {
        let mut controller = one_round_game();
        let script = "\ncrane\ncrane\ncrane\ncrane\ncrane\ncrane\n\nlower\n";
        let (result, output) = play(&mut controller, script);

        assert!(result.is_ok());
        assert!(output.contains("out of attempts. The word was APPLE"));
        assert_eq!(controller.game_state().winner(), Some(crate::engine::Winner::Player(1)));
    }

    #[test]
    fn quit_abandons_game() {
        let mut controller = one_round_game();
        let (result, output) = play(&mut controller, "\nquit\n");

        assert!(result.is_ok());
        assert!(output.contains("Game abandoned"));
        assert_eq!(controller.phase(), Phase::PlayerTurn);
    }

    #[test]
    fn input_ending_mid_game_is_error() {
        let mut controller = one_round_game();
        let (result, _) = play(&mut controller, "\ncrane\n");
        assert!(result.is_err());
    }
}
