//! Command implementations

pub mod highscores;
pub mod simple;

pub use highscores::{run_highscores, run_rules, write_highscores};
pub use simple::SimpleGame;
