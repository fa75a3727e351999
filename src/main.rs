//! Wordle - CLI
//!
//! Play Wordle in the terminal, either full-screen (TUI) or line by line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::{evaluate_words, run_simple},
    dictionary::{Dictionary, loader::load_from_file},
    game::{GameConfig, GameEngine, MAX_GUESSES},
    logging,
    output::render_guess,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible secret words
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Number of attempts per round
    #[arg(short, long, global = true, default_value_t = MAX_GUESSES)]
    max_guesses: usize,

    /// Accept guesses that are not in the word list
    #[arg(long, global = true)]
    no_validate: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Show how one guess scores against a given secret
    Evaluate {
        /// The guessed word
        guess: String,

        /// The secret word to score against
        secret: String,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "embedded" => Ok(Dictionary::embedded()),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}")),
    }
}

fn build_engine(cli: &Cli) -> Result<GameEngine> {
    let dictionary = load_dictionary(&cli.wordlist)?;
    if dictionary.is_empty() {
        tracing::warn!(wordlist = %cli.wordlist, "word list has no usable words");
    }

    let config = GameConfig::new()
        .with_max_guesses(cli.max_guesses)
        .with_validation(!cli.no_validate);

    Ok(match cli.seed {
        Some(seed) => GameEngine::with_seed(dictionary, config, seed),
        None => GameEngine::new(dictionary, config),
    })
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    // Default to Play mode if no command given
    match cli.command {
        None | Some(Commands::Play) => run_play_command(&cli),
        Some(Commands::Simple) => run_simple_command(&cli),
        Some(Commands::Evaluate {
            ref guess,
            ref secret,
        }) => run_evaluate_command(guess, secret),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let engine = build_engine(cli)?;
    run_tui(App::new(engine))
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let mut engine = build_engine(cli)?;
    run_simple(&mut engine)
}

fn run_evaluate_command(guess: &str, secret: &str) -> Result<()> {
    let result = evaluate_words(guess, secret).map_err(|e| anyhow::anyhow!(e))?;

    println!("\n  {}", render_guess(&result.guess));
    println!("  {}", result.guess.to_emoji());
    println!(
        "\n  {} correct, {} present (secret: {})",
        result.correct, result.present, result.secret
    );
    Ok(())
}
