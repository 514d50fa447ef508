//! Game error types

use thiserror::Error;

/// Errors raised by the session state machine
///
/// None of these change game state; callers re-prompt or start over.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid word: '{0}' is not a valid 5-letter word")]
    InvalidGuess(String),

    #[error("The game is over, start a new game to keep playing")]
    SessionTerminated,

    #[error("The answer pool is empty, cannot start a game")]
    EmptyAnswerPool,
}
