//! Word lists for the game
//!
//! The [`Lexicon`] trait is everything a session needs from a word source:
//! the set of accepted guesses and the pool answers are drawn from.
//! [`WordLists`] is the in-memory implementation backed by the embedded
//! lists or by files on disk.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use crate::game::GameError;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Read-only provider of accepted guesses and candidate answers
///
/// Implementations must keep `answer_pool() ⊆ valid_guesses()`; sessions rely
/// on it without checking.
pub trait Lexicon {
    /// Every word accepted as a guess
    fn valid_guesses(&self) -> &FxHashSet<Word>;

    /// Words that may be drawn as the hidden answer
    fn answer_pool(&self) -> &[Word];

    /// Check whether a word is an accepted guess
    fn is_valid_guess(&self, word: &Word) -> bool {
        self.valid_guesses().contains(word)
    }
}

/// Draw a random answer from the lexicon's pool
///
/// # Errors
///
/// Returns `GameError::EmptyAnswerPool` if the pool has no words.
pub fn draw_answer<L, R>(lexicon: &L, rng: &mut R) -> Result<Word, GameError>
where
    L: Lexicon + ?Sized,
    R: Rng + ?Sized,
{
    lexicon
        .answer_pool()
        .choose(rng)
        .cloned()
        .ok_or(GameError::EmptyAnswerPool)
}

/// In-memory lexicon
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    valid: FxHashSet<Word>,
    answers: Vec<Word>,
}

impl WordLists {
    /// Build a lexicon from accepted guesses and candidate answers
    ///
    /// Answers are added to the accepted set so every answer is guessable.
    #[must_use]
    pub fn new(allowed: Vec<Word>, answers: Vec<Word>) -> Self {
        let mut valid: FxHashSet<Word> = allowed.into_iter().collect();
        valid.extend(answers.iter().cloned());

        Self { valid, answers }
    }

    /// Lexicon from the word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            loader::words_from_slice(ALLOWED),
            loader::words_from_slice(ANSWERS),
        )
    }
}

impl Lexicon for WordLists {
    fn valid_guesses(&self) -> &FxHashSet<Word> {
        &self.valid
    }

    fn answer_pool(&self) -> &[Word] {
        &self.answers
    }
}
