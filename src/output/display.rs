//! Display functions for menus, rules, boards and the leaderboard
//!
//! Every function writes to a caller-supplied writer so the text front end
//! can be driven from tests.

use super::formatters::{colored_tiles, feedback_to_clue};
use crate::core::Difficulty;
use crate::game::GuessRecord;
use crate::scores::{LEADERBOARD_SIZE, LeaderboardEntry};
use colored::Colorize;
use std::io::{self, Write};

/// Game title banner
pub const TITLE: &str = r"
 _ _ _              _  _
| | | | ___  ___  _| || | ___
| | | || . ||  _|| . || || -_|
|_____||___||_|  |___||_||___|
";

const RULE_WIDTH: usize = 80;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Print the title banner
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_title<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", TITLE.bright_cyan())?;
    writeln!(out, "{}", rule())
}

/// Print the welcome text and main menu
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_main_menu<W: Write>(out: &mut W) -> io::Result<()> {
    write_title(out)?;
    writeln!(out, " Welcome to Wordle! Get ready to test your word-guessing")?;
    writeln!(out, " skills. Crack the hidden word in as few guesses as you")?;
    writeln!(out, " can and climb up the highscore chart!")?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "1. Start Game")?;
    writeln!(out, "2. Show High-Scores")?;
    writeln!(out, "3. How to play")?;
    writeln!(out, "q. Quit")?;
    writeln!(out, "{}", rule())
}

/// Print the difficulty menu
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_difficulty_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Select difficulty:")?;
    for tier in Difficulty::ALL {
        writeln!(
            out,
            "{} - {} ({} guesses)",
            tier.menu_key(),
            tier.label(),
            tier.guess_budget()
        )?;
    }
    Ok(())
}

/// Print the how-to-play text
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_rules<W: Write>(out: &mut W) -> io::Result<()> {
    write_title(out)?;
    writeln!(out, "{}", "How to Play Wordle:".bold())?;
    writeln!(out, "1. Enter your name when you start a game.")?;
    writeln!(out, "2. Pick a difficulty:")?;
    for tier in Difficulty::ALL {
        writeln!(
            out,
            "     {:<6} {} guesses",
            tier.label(),
            tier.guess_budget()
        )?;
    }
    writeln!(out, "3. Type a 5-letter word and press Enter to guess.")?;
    writeln!(out, "4. Each guess gets a clue:")?;
    writeln!(out, "     a letter on its own is in the correct position")?;
    writeln!(out, "     a letter marked with * is in the word at another position")?;
    writeln!(out, "     _ means the letter is not in the word")?;
    writeln!(out, "5. For example, if the answer is 'APPLE' and you guess 'ADOPT'")?;
    writeln!(out, "   the clue is: A _ _ P* _")?;
    writeln!(out, "6. Guessing a word twice does not cost you a turn.")?;
    writeln!(out, "7. Find the word before you run out of guesses to win!")?;
    writeln!(out, "   Wins are ranked by guesses, then difficulty, then time.")?;
    writeln!(out, "{}", rule())
}

/// Print previous guesses with their clues
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_history<W: Write>(out: &mut W, history: &[GuessRecord]) -> io::Result<()> {
    writeln!(out, "Your previous guesses and their clues:")?;
    for record in history {
        writeln!(
            out,
            "{}  {}: {}",
            colored_tiles(&record.guess, &record.feedback),
            record.guess,
            feedback_to_clue(&record.guess, &record.feedback)
        )?;
    }
    Ok(())
}

/// Print the leaderboard
///
/// Expects entries already ranked.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_leaderboard<W: Write>(out: &mut W, ranked: &[LeaderboardEntry]) -> io::Result<()> {
    write_title(out)?;
    writeln!(
        out,
        "{}",
        format!("Top {LEADERBOARD_SIZE} Highscores:").bright_cyan().bold()
    )?;

    if ranked.is_empty() {
        writeln!(out, "No highscores yet. Be the first!")?;
    }

    for (i, entry) in ranked.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. Name: {}, Difficulty: {}, Guesses: {}, Time: {}s",
            i + 1,
            entry.name,
            entry.difficulty.label(),
            entry.guess_count,
            entry.elapsed_seconds
        )?;
    }

    writeln!(out, "{}", rule())
}
