//! Console setup dialogue
//!
//! Asks for both names and the secret words each player picks for the
//! other, re-prompting with the reason whenever input is rejected.

use crate::core::WordSet;
use crate::core::validation::{validate_player_name, validate_secret_word};
use crate::engine::{GameConfig, GameController, GameState};
use crate::error::{GameError, Result};
use colored::Colorize;
use log::warn;
use std::io::{self, BufRead, Write};

/// Validated answers from the setup dialogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupInput {
    pub player1: String,
    pub player2: String,
    /// Chosen by player 2, guessed by player 1
    pub words_for_player1: Vec<String>,
    /// Chosen by player 1, guessed by player 2
    pub words_for_player2: Vec<String>,
}

impl SetupInput {
    /// Hand the answers to the controller and start the first turn
    ///
    /// # Errors
    /// Whatever `GameController::start_game` rejects.
    pub fn start(&self, controller: &mut GameController, word_set: &WordSet) -> Result<GameState> {
        controller.start_game(
            word_set,
            &self.player1,
            &self.player2,
            self.words_for_player1.as_slice(),
            self.words_for_player2.as_slice(),
        )
    }
}

/// Run the setup dialogue
///
/// With `random_words` the secret words are drawn from the dictionary
/// instead of being typed in.
///
/// # Errors
/// `Io` if input ends early or output cannot be written.
pub fn prompt_setup<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    word_set: &WordSet,
    config: GameConfig,
    random_words: bool,
) -> Result<SetupInput> {
    writeln!(output, "\n{}", "Twisted Wordle: setup".bright_cyan().bold())?;

    let player1 = prompt_name(input, output, "Player 1 name")?;
    let player2 = prompt_name(input, output, "Player 2 name")?;

    let rounds = config.total_rounds as usize;
    let (words_for_player1, words_for_player2) = if random_words {
        let mut rng = rand::rng();
        let pick = |rng: &mut rand::rngs::ThreadRng| -> Vec<String> {
            word_set
                .choose_random(rng, rounds)
                .into_iter()
                .map(|w| w.text().to_string())
                .collect()
        };
        (pick(&mut rng), pick(&mut rng))
    } else {
        writeln!(
            output,
            "\n{player2} picks {rounds} words for {player1}. {player1}, look away!"
        )?;
        let for_player1 = prompt_words(input, output, word_set, &player2, rounds)?;
        writeln!(
            output,
            "\n{player1} picks {rounds} words for {player2}. {player2}, look away!"
        )?;
        let for_player2 = prompt_words(input, output, word_set, &player1, rounds)?;
        (for_player1, for_player2)
    };

    Ok(SetupInput {
        player1,
        player2,
        words_for_player1,
        words_for_player2,
    })
}

fn prompt_name<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    loop {
        let line = read_line(input, output, prompt)?;
        match validate_player_name(&line) {
            Ok(name) => return Ok(name.trim().to_string()),
            Err(e) => report_rejection(output, &e)?,
        }
    }
}

fn prompt_words<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    word_set: &WordSet,
    chooser: &str,
    rounds: usize,
) -> Result<Vec<String>> {
    let mut words = Vec::with_capacity(rounds);
    while words.len() < rounds {
        let prompt = format!("{chooser}, secret word {}/{rounds}", words.len() + 1);
        let line = read_line(input, output, &prompt)?.to_uppercase();
        match validate_secret_word(&line, word_set) {
            Ok(word) => words.push(word.text().to_string()),
            Err(e) => report_rejection(output, &e)?,
        }
    }
    Ok(words)
}

fn report_rejection<W: Write>(output: &mut W, reason: &dyn std::fmt::Display) -> Result<()> {
    warn!("setup input rejected: {reason}");
    writeln!(output, "{}", format!("❌ {reason}, try again").red())?;
    Ok(())
}

/// Read one trimmed line, failing on end of input
pub(crate) fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(GameError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed",
        )));
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::Phase;
    use std::io::Cursor;

    fn dictionary() -> WordSet {
        let words = ["APPLE", "CHAIR", "SPACE", "LOWER", "VALID", "TABLE"];
        WordSet::new(words.iter().map(|w| Word::new(*w).unwrap())).unwrap()
    }

    fn run(script: &str, random: bool) -> (Result<SetupInput>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = prompt_setup(
            &mut input,
            &mut output,
            &dictionary(),
            GameConfig::default(),
            random,
        );
        (result, String::from_utf8_lossy(&output).into_owned())
    }

    #[test]
    fn collects_names_and_words() {
        let script = "Ada\nBo\nlower\nvalid\ntable\napple\nchair\nspace\n";
        let (result, _) = run(script, false);
        let setup = result.unwrap();

        assert_eq!(setup.player1, "Ada");
        assert_eq!(setup.player2, "Bo");
        assert_eq!(setup.words_for_player1, ["LOWER", "VALID", "TABLE"]);
        assert_eq!(setup.words_for_player2, ["APPLE", "CHAIR", "SPACE"]);
    }

    #[test]
    fn reprompts_on_invalid_input() {
        let script = "\n  \nAda\nBo\nzebra\nlowers\nlower\nvalid\ntable\napple\nchair\nspace\n";
        let (result, output) = run(script, false);
        let setup = result.unwrap();

        assert_eq!(setup.player1, "Ada");
        assert_eq!(setup.words_for_player1, ["LOWER", "VALID", "TABLE"]);
        assert!(output.contains("player name cannot be blank"));
        assert!(output.contains("not in the dictionary"));
        assert!(output.contains("exactly 5 letters"));
    }

    #[test]
    fn random_words_come_from_dictionary() {
        let (result, _) = run("Ada\nBo\n", true);
        let setup = result.unwrap();
        let set = dictionary();

        assert_eq!(setup.words_for_player1.len(), 3);
        assert_eq!(setup.words_for_player2.len(), 3);
        assert!(setup.words_for_player1.iter().all(|w| set.contains(w)));
    }

    #[test]
    fn early_end_of_input_is_error() {
        let (result, _) = run("Ada\n", false);
        assert!(matches!(result, Err(GameError::Io(_))));
    }

    #[test]
    fn setup_starts_controller() {
        let (result, _) = run("Ada\nBo\n", true);
        let mut controller = GameController::default();
        let state = result.unwrap().start(&mut controller, &dictionary()).unwrap();
        assert_eq!(state.phase, Phase::PlayerTurn);
    }
}
