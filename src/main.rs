//! Wordle Game - CLI
//!
//! Play Wordle in a full-screen TUI or with simple text menus, and keep a
//! leaderboard of the best wins.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};
use wordle_game::{
    commands::{SimpleGame, run_highscores, run_rules},
    core::{Difficulty, PlayerName},
    interactive::{App, run_tui},
    lexicon::{Lexicon, WordLists, loader::load_dir},
    logging,
    scores::JsonlScoreStore,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word and climb the highscore chart",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or a directory with answers.txt and allowed.txt
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Highscore file (JSON lines)
    #[arg(
        short = 's',
        long,
        global = true,
        env = "WORDLE_SCORES",
        default_value = "highscores.jsonl"
    )]
    scores: PathBuf,

    /// Log filter when RUST_LOG is unset (e.g. warn, info, debug)
    #[arg(long, global = true, default_value = logging::DEFAULT_LEVEL)]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Player name; asked for on screen when omitted
        #[arg(short, long)]
        name: Option<String>,

        /// Difficulty tier
        #[arg(short, long, value_enum, default_value = "normal")]
        difficulty: Difficulty,
    },

    /// Simple CLI mode (text menus without TUI)
    Simple,

    /// Show the top 10 highscores
    Highscores,

    /// Explain how to play
    Rules,
}

/// Load wordlists based on the -w flag
fn load_wordlists(wordlist_mode: &str) -> Result<WordLists> {
    match wordlist_mode {
        "embedded" => Ok(WordLists::embedded()),
        dir => load_dir(dir).with_context(|| format!("Failed to load word lists from {dir}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level, cli.log_file.as_deref())?;

    let command = cli.command.unwrap_or(Commands::Play {
        name: None,
        difficulty: Difficulty::default(),
    });

    match command {
        Commands::Play { name, difficulty } => {
            let lexicon = load_wordlists(&cli.wordlist)?;
            run_play_command(&lexicon, cli.scores, name.as_deref(), difficulty)
        }
        Commands::Simple => {
            let lexicon = load_wordlists(&cli.wordlist)?;
            run_simple_command(&lexicon, cli.scores)
        }
        Commands::Highscores => run_highscores(&JsonlScoreStore::new(cli.scores)),
        Commands::Rules => run_rules(),
    }
}

fn log_lexicon(lexicon: &WordLists) {
    info!(
        answers = lexicon.answer_pool().len(),
        valid = lexicon.valid_guesses().len(),
        "word lists loaded"
    );
}

fn run_play_command(
    lexicon: &WordLists,
    scores: PathBuf,
    name: Option<&str>,
    difficulty: Difficulty,
) -> Result<()> {
    log_lexicon(lexicon);

    // A bad --name falls back to asking on screen
    let player = name.and_then(|raw| match PlayerName::parse(raw) {
        Ok(player) => Some(player),
        Err(err) => {
            eprintln!("{err}, you will be asked again.");
            None
        }
    });

    let mut store = JsonlScoreStore::new(scores);
    debug!(path = %store.path().display(), "highscore store");

    let app = App::new(lexicon, &mut store, player, difficulty, StdRng::from_os_rng())?;
    run_tui(app)
}

fn run_simple_command(lexicon: &WordLists, scores: PathBuf) -> Result<()> {
    log_lexicon(lexicon);

    let mut store = JsonlScoreStore::new(scores);
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    SimpleGame::new(stdin, stdout, lexicon, &mut store, StdRng::from_os_rng()).run()
}
