//! Highscores and rules commands

use crate::output::{write_leaderboard, write_rules};
use crate::scores::{ScoreSource, rank};
use anyhow::{Context, Result};
use std::io::Write;

/// Load every stored entry, rank it and print the top of the leaderboard
///
/// # Errors
///
/// Returns an error if the store cannot be read or the writer fails.
pub fn write_highscores<W, S>(out: &mut W, source: &S) -> Result<()>
where
    W: Write,
    S: ScoreSource + ?Sized,
{
    let entries = source
        .all_entries()
        .context("Failed to load highscores")?;
    write_leaderboard(out, &rank(&entries))?;
    Ok(())
}

/// Print the highscores to stdout
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn run_highscores<S: ScoreSource + ?Sized>(source: &S) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_highscores(&mut stdout, source)
}

/// Print the how-to-play text to stdout
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn run_rules() -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_rules(&mut stdout)?;
    Ok(())
}
