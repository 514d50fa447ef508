//! Difficulty tiers and their guess budgets

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tier, fixing how many distinct guesses a session allows
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Every tier, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Normal, Self::Hard];

    /// Maximum number of distinct guesses before the session is lost
    #[must_use]
    pub const fn guess_budget(self) -> usize {
        match self {
            Self::Easy => 10,
            Self::Normal => 6,
            Self::Hard => 4,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
        }
    }

    /// Leaderboard weight: harder tiers rank higher on equal guess counts
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Normal => 2,
            Self::Hard => 3,
        }
    }

    /// Menu key for this tier (`e`, `n` or `h`)
    #[must_use]
    pub const fn menu_key(self) -> char {
        match self {
            Self::Easy => 'e',
            Self::Normal => 'n',
            Self::Hard => 'h',
        }
    }

    /// Parse a menu choice, case-insensitively
    ///
    /// Accepts the single-letter key or the full tier name.
    #[must_use]
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim().to_ascii_lowercase().as_str() {
            "e" | "easy" => Some(Self::Easy),
            "n" | "normal" => Some(Self::Normal),
            "h" | "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
