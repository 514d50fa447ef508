//! Core domain types for the game
//!
//! Words, feedback evaluation, difficulty tiers and player names. Everything
//! here is pure and independent of I/O.

mod difficulty;
mod feedback;
mod player;
mod word;

pub use difficulty::Difficulty;
pub use feedback::{Evaluation, Feedback, LetterFeedback, evaluate};
pub use player::{MIN_NAME_LENGTH, NameError, PlayerName};
pub use word::{WORD_LENGTH, Word, WordError};
