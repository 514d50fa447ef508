//! Leaderboard ordering
//!
//! Entries are ordered by guess count (fewer first), then difficulty (harder
//! first), then elapsed time (faster first). Full ties keep input order.

use super::entry::LeaderboardEntry;
use std::cmp::Reverse;

/// Number of entries shown on the leaderboard
pub const LEADERBOARD_SIZE: usize = 10;

/// Sort every entry into leaderboard order
#[must_use]
pub fn sort_entries(entries: &[LeaderboardEntry]) -> Vec<LeaderboardEntry> {
    let mut sorted = entries.to_vec();
    // Stable sort keeps insertion order for exact ties
    sorted.sort_by_key(|entry| {
        (
            entry.guess_count,
            Reverse(entry.difficulty.rank()),
            entry.elapsed_seconds,
        )
    });
    sorted
}

/// Top entries of the leaderboard
///
/// # Examples
/// ```
/// use wordle_game::core::Difficulty;
/// use wordle_game::scores::{rank, report};
///
/// let entries = vec![
///     report("B", Difficulty::Normal, 3, 40),
///     report("A", Difficulty::Hard, 3, 50),
/// ];
/// let ranked = rank(&entries);
/// assert_eq!(ranked[0].name, "A");
/// ```
#[must_use]
pub fn rank(entries: &[LeaderboardEntry]) -> Vec<LeaderboardEntry> {
    let mut sorted = sort_entries(entries);
    sorted.truncate(LEADERBOARD_SIZE);
    sorted
}
