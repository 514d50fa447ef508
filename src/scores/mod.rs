//! Highscores: reporting finished sessions, storing and ranking them

mod entry;
mod ranker;
pub mod store;

pub use entry::{LeaderboardEntry, SessionSummary, report};
pub use ranker::{LEADERBOARD_SIZE, rank, sort_entries};
pub use store::{
    JsonlScoreStore, MemoryScoreStore, ScoreSink, ScoreSource, ScoreStore, StoreError,
    StoreResult,
};
