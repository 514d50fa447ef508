//! Game sessions
//!
//! A [`GameSession`] is created per play-through and thrown away afterwards;
//! nothing is shared between sessions.

mod clock;
mod error;
mod session;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::GameError;
pub use session::{GameSession, GuessRecord, Outcome, Submission};
