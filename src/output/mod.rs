//! Terminal output formatting
//!
//! Display utilities for the text front end and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    TITLE, write_difficulty_menu, write_history, write_leaderboard, write_main_menu, write_rules,
    write_title,
};
