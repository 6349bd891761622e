//! Vocabulary Jumble - CLI
//!
//! Interactive jumble game, plus one-shot JSON commands for driving the engine
//! from another process.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use vocab_jumble::{
    commands::{run_play, step},
    core::JumbleGenerator,
    game::{DEFAULT_SUCCESS_THRESHOLD, Game, GameConfig},
    logging,
    vocab::{VocabSource, Vocabulary},
};

#[derive(Parser)]
#[command(
    name = "vocab_jumble",
    about = "Find the vocabulary words hidden in a jumble of letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Vocabulary: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    vocab: String,

    /// Number of words to find per puzzle (capped by the vocabulary size)
    #[arg(short, long, global = true, default_value_t = DEFAULT_SUCCESS_THRESHOLD)]
    threshold: usize,

    /// Seed for reproducible jumbles
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Show the letters of each source word as a separate group (not a letter)
    #[arg(long, global = true)]
    separator: Option<char>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively in the terminal (default)
    Play,

    /// Start a new puzzle and print its session state as JSON
    Start,

    /// Check a word against a session state and print the result as JSON
    Check {
        /// The word to check
        word: String,

        /// File holding the session state JSON (default: read stdin)
        #[arg(short, long)]
        state: Option<PathBuf>,
    },

    /// Print the vocabulary
    Vocab,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // The vocabulary is loaded once and shared read-only from here on
    let source = VocabSource::from_arg(&cli.vocab);
    let vocab = Vocabulary::load(&source).context("failed to load vocabulary")?;

    let mut generator = JumbleGenerator::new();
    if let Some(separator) = cli.separator {
        generator = generator
            .with_separator(separator)
            .context("invalid --separator")?;
    }
    let config = GameConfig::new(cli.threshold).with_generator(generator);
    let game = Game::new(&vocab, config);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&game, &mut io::stdin().lock(), &mut io::stdout(), &mut rng),
        Commands::Start => {
            let state = step::start(&game, &mut rng)?;
            println!("{}", serde_json::to_string_pretty(&state)?);
            Ok(())
        }
        Commands::Check { word, state } => {
            let state_json = read_state(state.as_ref())?;
            let response = step::check(&game, &state_json, &word)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Commands::Vocab => {
            for word in game.vocab().iter() {
                println!("{word}");
            }
            Ok(())
        }
    }
}

fn read_state(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("cannot read session state {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("cannot read session state from stdin")?;
            Ok(text)
        }
    }
}
