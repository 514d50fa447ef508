//! Wordle Game
//!
//! Terminal Wordle with difficulty tiers, a line-oriented and a full-screen
//! front end, and a persistent highscore leaderboard.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_game::core::Difficulty;
//! use wordle_game::game::{GameSession, ManualClock, Outcome};
//! use wordle_game::lexicon::WordLists;
//! use wordle_game::lexicon::loader::words_from_slice;
//!
//! let lexicon = WordLists::new(words_from_slice(&["slate"]), words_from_slice(&["crane"]));
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut session =
//!     GameSession::start(&lexicon, Difficulty::Hard, &mut rng, ManualClock::new()).unwrap();
//!
//! session.submit("slate").unwrap();
//! let submission = session.submit("crane").unwrap();
//! assert_eq!(submission.outcome, Outcome::Won);
//! assert_eq!(session.guess_count(), 2);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod lexicon;

// Game sessions
pub mod game;

// Highscores
pub mod scores;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
