//! Twisted Wordle - CLI
//!
//! Two-player timed Wordle duel with TUI and plain console modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use twisted_wordle::{
    commands::{prompt_setup, run_simple},
    core::{GuessResult, MAX_ATTEMPTS, TOTAL_ROUNDS, TURN_TIME, Word, WordSet},
    engine::{GameConfig, GameController, GameVariant},
    output::{print_final_scores, print_guess_row, print_stats},
    wordlists::{DICTIONARY, loader},
};

#[derive(Parser)]
#[command(
    name = "twisted_wordle",
    about = "Two-player Wordle duel: pick words for your opponent, race the clock",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'all' (default, embedded list) or path to a word file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Seconds per turn
    #[arg(short, long, global = true, default_value_t = TURN_TIME)]
    turn_time: u32,

    /// Guesses per turn
    #[arg(short, long, global = true, default_value_t = MAX_ATTEMPTS)]
    attempts: u32,

    /// Rounds per game
    #[arg(short = 'n', long, global = true, default_value_t = TOTAL_ROUNDS)]
    rounds: u32,

    /// Draw secret words from the dictionary instead of asking for them
    #[arg(short, long, global = true)]
    random: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode (no TUI)
    Simple,

    /// Show the feedback a guess would get against a secret word
    Check {
        /// The secret word
        secret: String,

        /// The guess to grade
        guess: String,
    },
}

/// Load the dictionary based on the -w flag
fn load_word_set(wordlist: &str) -> Result<WordSet> {
    let set = match wordlist {
        "all" => loader::words_from_slice(DICTIONARY)?,
        path => loader::load_from_file(path)
            .with_context(|| format!("failed to load dictionary from {path}"))?,
    };
    Ok(set)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = GameConfig {
        max_attempts: cli.attempts,
        turn_time: cli.turn_time,
        total_rounds: cli.rounds,
    }
    .validate()?;

    let word_set = load_word_set(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&word_set, config, cli.random),
        Commands::Simple => run_simple_command(&word_set, config, cli.random),
        Commands::Check { secret, guess } => run_check_command(&secret, &guess),
    }
}

/// Run the setup dialogue and return a controller with the game started
fn start_game(word_set: &WordSet, config: GameConfig, random: bool) -> Result<GameController> {
    let mut controller = GameController::new(config)?;
    let setup = prompt_setup(
        &mut io::stdin().lock(),
        &mut io::stdout(),
        word_set,
        config,
        random,
    )?;
    setup.start(&mut controller, word_set)?;
    Ok(controller)
}

fn run_play_command(word_set: &WordSet, config: GameConfig, random: bool) -> Result<()> {
    use twisted_wordle::interactive::{App, run_tui};

    let controller = start_game(word_set, config, random)?;
    let app = run_tui(App::new(controller))?;

    let mut stdout = io::stdout();
    print_final_scores(&mut stdout, &app.state)?;
    print_stats(&mut stdout, &app.controller.current_stats())?;
    Ok(())
}

fn run_simple_command(word_set: &WordSet, config: GameConfig, random: bool) -> Result<()> {
    let mut controller = start_game(word_set, config, random)?;
    run_simple(&mut controller, &mut io::stdin().lock(), &mut io::stdout())?;
    Ok(())
}

fn run_check_command(secret: &str, guess: &str) -> Result<()> {
    let secret = Word::new(secret.trim().to_uppercase()).context("invalid secret word")?;
    let guess = Word::new(guess.trim().to_uppercase()).context("invalid guess")?;

    let result = GuessResult::evaluate(&secret, &guess);

    let mut stdout = io::stdout();
    print_guess_row(&mut stdout, &guess, &result)?;
    writeln!(stdout, "  {result}")?;
    Ok(())
}
