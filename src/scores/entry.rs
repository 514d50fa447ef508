//! Leaderboard records and session reporting

use crate::core::{Difficulty, PlayerName, Word};
use crate::game::Outcome;
use serde::{Deserialize, Serialize};

/// Immutable record of one finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub difficulty: Difficulty,
    pub guess_count: usize,
    pub elapsed_seconds: u64,
}

/// Terminal state of a session, ready to be reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub outcome: Outcome,
    pub difficulty: Difficulty,
    pub guess_count: usize,
    pub elapsed_seconds: u64,
    pub answer: Word,
}

/// Assemble a leaderboard record
///
/// # Examples
/// ```
/// use wordle_game::core::Difficulty;
/// use wordle_game::scores::report;
///
/// let entry = report("Ada", Difficulty::Hard, 3, 50);
/// assert_eq!(entry.guess_count, 3);
/// ```
#[must_use]
pub fn report(
    name: impl Into<String>,
    difficulty: Difficulty,
    guess_count: usize,
    elapsed_seconds: u64,
) -> LeaderboardEntry {
    LeaderboardEntry {
        name: name.into(),
        difficulty,
        guess_count,
        elapsed_seconds,
    }
}

impl SessionSummary {
    #[must_use]
    pub fn won(&self) -> bool {
        self.outcome == Outcome::Won
    }

    /// Leaderboard record for this session
    ///
    /// Only won sessions make the leaderboard; a loss yields `None`.
    #[must_use]
    pub fn leaderboard_entry(&self, player: &PlayerName) -> Option<LeaderboardEntry> {
        self.won().then(|| {
            report(
                player.as_str(),
                self.difficulty,
                self.guess_count,
                self.elapsed_seconds,
            )
        })
    }
}
