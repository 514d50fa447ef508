//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterFeedback, Word};
use colored::{ColoredString, Colorize};

/// Format feedback as the classic clue line
///
/// Exact letters are shown as-is, present letters get a `*` suffix and absent
/// letters become `_`, separated by spaces.
///
/// # Examples
/// ```
/// use wordle_game::core::{evaluate, Word};
/// use wordle_game::output::formatters::feedback_to_clue;
///
/// let answer = Word::new("apple").unwrap();
/// let guess = Word::new("adopt").unwrap();
/// let clue = feedback_to_clue(&guess, &evaluate(&answer, &guess).feedback);
/// assert_eq!(clue, "A _ _ P* _");
/// ```
#[must_use]
pub fn feedback_to_clue(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, mark)| match mark {
            LetterFeedback::Exact => char::from(letter).to_string(),
            LetterFeedback::Present => format!("{}*", char::from(letter)),
            LetterFeedback::Absent => "_".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format feedback as emoji squares
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .marks()
        .iter()
        .map(|mark| match mark {
            LetterFeedback::Exact => '🟩',
            LetterFeedback::Present => '🟨',
            LetterFeedback::Absent => '⬜',
        })
        .collect()
}

/// Render a guess as colored letter tiles
#[must_use]
pub fn colored_tiles(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, &mark)| tile(letter, mark).to_string())
        .collect()
}

fn tile(letter: u8, mark: LetterFeedback) -> ColoredString {
    let text = format!(" {} ", char::from(letter));
    match mark {
        LetterFeedback::Exact => text.black().on_green().bold(),
        LetterFeedback::Present => text.black().on_yellow().bold(),
        LetterFeedback::Absent => text.white().on_bright_black(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn feedback(answer: &str, guess: &str) -> (Word, Feedback) {
        let guess = Word::new(guess).unwrap();
        let feedback = evaluate(&Word::new(answer).unwrap(), &guess).feedback;
        (guess, feedback)
    }

    #[test]
    fn clue_for_apple_adopt() {
        let (guess, fb) = feedback("apple", "adopt");
        assert_eq!(feedback_to_clue(&guess, &fb), "A _ _ P* _");
    }

    #[test]
    fn clue_for_win_shows_every_letter() {
        let (guess, fb) = feedback("crane", "crane");
        assert_eq!(feedback_to_clue(&guess, &fb), "C R A N E");
    }

    #[test]
    fn clue_for_all_absent() {
        let (guess, fb) = feedback("fghij", "abcde");
        assert_eq!(feedback_to_clue(&guess, &fb), "_ _ _ _ _");
    }

    #[test]
    fn emoji_squares() {
        let (_, fb) = feedback("apple", "adopt");
        assert_eq!(feedback_to_emoji(&fb), "🟩⬜⬜🟨⬜");
        assert_eq!(feedback_to_emoji(&Feedback::PERFECT), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn tiles_contain_letters() {
        let (guess, fb) = feedback("apple", "adopt");
        let tiles = colored_tiles(&guess, &fb);
        for letter in ["A", "D", "O", "P", "T"] {
            assert!(tiles.contains(letter));
        }
    }
}
