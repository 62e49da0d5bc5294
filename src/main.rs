//! Hangman - CLI
//!
//! Guess the hidden word one character at a time.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use hangman::{
    commands::{PlayConfig, list_words, print_loaded, run_play},
    core::Word,
    game::WordMatch,
    output::Console,
    wordlists::{EmbeddedSource, FileSource, WordSource},
};
use log::LevelFilter;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Console word-guessing game: reveal the hidden word one character at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Whitespace-delimited word file (default: bundled list of common English words)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for the word picker, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Accept whole-word guesses regardless of case
    #[arg(long, global = true)]
    ignore_case: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (default)
    Play,

    /// Show the loaded vocabulary
    Words {
        /// Maximum number of words to print
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // RUST_LOG, when set, takes precedence over -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Load the vocabulary selected by the -w flag
fn load_words(wordlist: Option<&PathBuf>) -> Result<Vec<Word>> {
    let source: Box<dyn WordSource> = match wordlist {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(EmbeddedSource),
    };

    source
        .load()
        .with_context(|| format!("Could not load words from {}", source.name()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let words = load_words(cli.wordlist.as_ref())?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&words, cli.seed, cli.ignore_case),
        Commands::Words { limit } => {
            list_words(&mut io::stdout().lock(), &words, limit)?;
            Ok(())
        }
    }
}

fn run_play_command(words: &[Word], seed: Option<u64>, ignore_case: bool) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let config = PlayConfig {
        word_match: if ignore_case {
            WordMatch::IgnoreCase
        } else {
            WordMatch::Exact
        },
    };

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    print_loaded(console.out(), words.len())?;

    let outcomes = run_play(words, &mut rng, &mut console, config)?;
    log::info!("Played {} round(s)", outcomes.len());
    Ok(())
}
