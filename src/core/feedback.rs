//! Guess evaluation and per-letter feedback
//!
//! Feedback is computed position by position:
//! - `Exact`: the guess letter matches the answer letter at that position
//! - `Present`: the guess letter occurs somewhere else in the answer
//! - `Absent`: the guess letter does not occur in the answer
//!
//! Letter multiplicity is not tracked. A letter repeated in the guess is
//! marked `Present` at every misplaced position even when the answer holds a
//! single copy (guessing `EERIE` against `CRANE` marks both leading E's yellow).

use super::word::{WORD_LENGTH, Word};

/// Classification of one guess letter against the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    /// Gray - letter does not occur in the answer
    Absent,
    /// Yellow - letter occurs in the answer at another position
    Present,
    /// Green - letter is in the correct position
    Exact,
}

/// Feedback for a complete guess, aligned to guess positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

/// Result of evaluating one guess against the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub won: bool,
    pub feedback: Feedback,
}

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterFeedback::Exact; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(marks: [LetterFeedback; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Per-position marks
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of `Exact` marks
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0
            .iter()
            .filter(|&&mark| mark == LetterFeedback::Exact)
            .count()
    }

    /// Count the number of `Present` marks
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&mark| mark == LetterFeedback::Present)
            .count()
    }
}

/// Evaluate `guess` against the hidden `answer`
///
/// A total match short-circuits to a win with all-`Exact` feedback.
///
/// # Examples
/// ```
/// use wordle_game::core::{evaluate, LetterFeedback::*, Word};
///
/// let answer = Word::new("apple").unwrap();
/// let guess = Word::new("adopt").unwrap();
/// let evaluation = evaluate(&answer, &guess);
///
/// assert!(!evaluation.won);
/// assert_eq!(
///     evaluation.feedback.marks(),
///     &[Exact, Absent, Absent, Present, Absent]
/// );
/// ```
#[must_use]
pub fn evaluate(answer: &Word, guess: &Word) -> Evaluation {
    if guess == answer {
        return Evaluation {
            won: true,
            feedback: Feedback::PERFECT,
        };
    }

    let mut marks = [LetterFeedback::Absent; WORD_LENGTH];
    for (i, mark) in marks.iter_mut().enumerate() {
        let letter = guess.letter_at(i);
        *mark = if letter == answer.letter_at(i) {
            LetterFeedback::Exact
        } else if answer.has_letter(letter) {
            LetterFeedback::Present
        } else {
            LetterFeedback::Absent
        };
    }

    Evaluation {
        won: false,
        feedback: Feedback(marks),
    }
}
