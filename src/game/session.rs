//! Game session state machine
//!
//! A session starts `InProgress` with no guesses and ends exactly once, in
//! `Won` or `Lost`. The only transition is [`GameSession::submit`].

use super::clock::{Clock, SystemClock};
use super::error::GameError;
use crate::core::{Difficulty, Feedback, Word, evaluate};
use crate::lexicon::{Lexicon, draw_answer};
use crate::scores::SessionSummary;
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One distinct guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Result of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub feedback: Feedback,
    /// The word was already guessed; no turn was used
    pub repeated: bool,
    pub outcome: Outcome,
}

/// One play-through against a hidden answer
///
/// Guess history is insertion-ordered and keyed by distinct guess, so
/// `guess_count()` always equals the number of history entries.
pub struct GameSession<'a, C: Clock = SystemClock> {
    answer: Word,
    difficulty: Difficulty,
    valid_guesses: &'a FxHashSet<Word>,
    history: Vec<GuessRecord>,
    positions: FxHashMap<Word, usize>,
    outcome: Outcome,
    clock: C,
    started_at: Instant,
    elapsed: Option<Duration>,
}

impl<'a, C: Clock> GameSession<'a, C> {
    /// Create a session for a known answer
    ///
    /// The answer is expected to be one of `valid_guesses`.
    #[must_use]
    pub fn new(
        answer: Word,
        valid_guesses: &'a FxHashSet<Word>,
        difficulty: Difficulty,
        clock: C,
    ) -> Self {
        let started_at = clock.now();
        debug!(%difficulty, budget = difficulty.guess_budget(), "session started");

        Self {
            answer,
            difficulty,
            valid_guesses,
            history: Vec::new(),
            positions: FxHashMap::default(),
            outcome: Outcome::InProgress,
            clock,
            started_at,
            elapsed: None,
        }
    }

    /// Start a session with an answer drawn at random from the lexicon
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyAnswerPool` if the lexicon has no answers; no
    /// session is created.
    pub fn start<L, R>(
        lexicon: &'a L,
        difficulty: Difficulty,
        rng: &mut R,
        clock: C,
    ) -> Result<Self, GameError>
    where
        L: Lexicon + ?Sized,
        R: Rng + ?Sized,
    {
        let answer = draw_answer(lexicon, rng)?;
        Ok(Self::new(answer, lexicon.valid_guesses(), difficulty, clock))
    }

    /// Submit a raw guess
    ///
    /// Input is case-insensitive and surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// - `GameError::SessionTerminated` once the session is won or lost
    /// - `GameError::InvalidGuess` if the word is malformed or not accepted
    ///
    /// Neither error changes the session.
    pub fn submit(&mut self, raw: &str) -> Result<Submission, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::SessionTerminated);
        }

        let raw = raw.trim();
        let guess = Word::new(raw).map_err(|_| GameError::InvalidGuess(raw.to_uppercase()))?;
        self.submit_word(&guess)
    }

    /// Submit an already-parsed guess
    ///
    /// A word that was guessed before returns its stored feedback without
    /// using a turn.
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::submit`].
    pub fn submit_word(&mut self, guess: &Word) -> Result<Submission, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::SessionTerminated);
        }

        if !self.valid_guesses.contains(guess) {
            debug!(%guess, "rejected guess not in word list");
            return Err(GameError::InvalidGuess(guess.text().to_string()));
        }

        if let Some(&position) = self.positions.get(guess) {
            debug!(%guess, "repeated guess, no turn used");
            return Ok(Submission {
                feedback: self.history[position].feedback,
                repeated: true,
                outcome: self.outcome,
            });
        }

        let evaluation = evaluate(&self.answer, guess);
        self.positions.insert(guess.clone(), self.history.len());
        self.history.push(GuessRecord {
            guess: guess.clone(),
            feedback: evaluation.feedback,
        });

        debug!(
            %guess,
            guess_count = self.guess_count(),
            exact = evaluation.feedback.count_exact(),
            present = evaluation.feedback.count_present(),
            "guess accepted"
        );

        if evaluation.won {
            self.finish(Outcome::Won);
        } else if self.guess_count() >= self.difficulty.guess_budget() {
            self.finish(Outcome::Lost);
        }

        Ok(Submission {
            feedback: evaluation.feedback,
            repeated: false,
            outcome: self.outcome,
        })
    }

    fn finish(&mut self, outcome: Outcome) {
        let elapsed = self.clock.now().saturating_duration_since(self.started_at);
        self.outcome = outcome;
        self.elapsed = Some(elapsed);

        info!(
            ?outcome,
            difficulty = %self.difficulty,
            guess_count = self.guess_count(),
            elapsed_secs = elapsed.as_secs(),
            "session finished"
        );
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Number of distinct guesses made
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.history.len()
    }

    /// Guesses left before the session is lost
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        if self.is_over() {
            return 0;
        }
        self.difficulty
            .guess_budget()
            .saturating_sub(self.guess_count())
    }

    /// Distinct guesses in the order they were first made
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Stored feedback for a previous guess
    #[must_use]
    pub fn feedback_for(&self, guess: &Word) -> Option<Feedback> {
        self.positions
            .get(guess)
            .map(|&position| self.history[position].feedback)
    }

    /// The answer, once the session is over
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&Word> {
        self.is_over().then_some(&self.answer)
    }

    /// Time from session start to the terminal transition
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    /// Terminal outcome packaged for reporting
    #[must_use]
    pub fn summary(&self) -> Option<SessionSummary> {
        let elapsed = self.elapsed?;
        Some(SessionSummary {
            outcome: self.outcome,
            difficulty: self.difficulty,
            guess_count: self.guess_count(),
            elapsed_seconds: elapsed.as_secs(),
            answer: self.answer.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback::{Absent, Exact, Present};
    use crate::game::ManualClock;
    use crate::lexicon::WordLists;
    use crate::lexicon::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lexicon() -> WordLists {
        WordLists::new(
            words_from_slice(&[
                "adopt", "slate", "irate", "crate", "grate", "trace", "bread", "fudge", "moist",
                "lucky", "sound", "plumb",
            ]),
            words_from_slice(&["apple", "crane"]),
        )
    }

    fn session<'a>(
        lists: &'a WordLists,
        answer: &str,
        difficulty: Difficulty,
        clock: &'a ManualClock,
    ) -> GameSession<'a, &'a ManualClock> {
        GameSession::new(
            Word::new(answer).unwrap(),
            lists.valid_guesses(),
            difficulty,
            clock,
        )
    }

    #[test]
    fn new_session_is_in_progress_with_no_guesses() {
        let lists = lexicon();
        let clock = ManualClock::new();
        let game = session(&lists, "crane", Difficulty::Normal, &clock);

        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.guess_count(), 0);
        assert!(game.history().is_empty());
        assert_eq!(game.remaining_guesses(), 6);
        assert!(game.revealed_answer().is_none());
        assert!(game.summary().is_none());
    }

    #[test]
    fn apple_adopt_feedback_and_not_won() {
        let lists = lexicon();
        let clock = ManualClock::new();
        let mut game = session(&lists, "apple", Difficulty::Normal, &clock);

        let submission = game.submit("adopt").unwrap();

        assert_eq!(
            submission.feedback.marks(),
            &[Exact, Absent, Absent, Present, Absent]
        );
        assert!(!submission.repeated);
        assert_eq!(submission.outcome, Outcome::InProgress);
        assert_eq!(game.guess_count(), 1);
    }

    #[test]
    fn correct_guess_wins() {
        let lists = lexicon();
        let clock = ManualClock::new();
        let mut game = session(&lists, "crane", Difficulty::Hard, &clock);

        game.submit("slate").unwrap();
        let submission = game.submit("CRANE").unwrap();

        assert_eq!(submission.outcome, Outcome::Won);
        assert!(submission.feedback.is_perfect());
        assert_eq!(game.guess_count(), 2);
        assert_eq!(game.remaining_guesses(), 0);
        assert_eq!(game.revealed_answer().unwrap().text(), "CRANE");
    }

    #[test]
    fn hard_session_lost_after_fourth_wrong_guess() {
        let lists = lexicon();
        let clock = ManualClock::new();
        let mut game = session(&lists, "crane", Difficulty::Hard, &clock);

        for guess in ["slate", "irate", "bread"] {
            assert_eq!(game.submit(guess).unwrap().outcome, Outcome::InProgress);
        }
        assert_eq!(game.remaining_guesses(), 1);

        let last = game.submit("fudge").unwrap();

        assert_eq!(last.outcome, Outcome::Lost);
        assert_eq!(game.guess_count(), 4);
        assert_eq!(game.summary().unwrap().guess_count, 4);
    }

    #[test]
    fn win_on_last_allotted_guess_is_a_win() {
        let lists = lexicon();
        let clock = ManualClock::new();
        let mut game = session(&lists, "crane", Difficulty::Hard, &clock);

        for guess in ["slate", "irate", "bread"] {
            game.submit(guess).unwrap();
        }

        assert_eq!(game.submit("crane").unwrap().outcome, Outcome::Won);
        assert_eq!(game.guess_count(), 4);
    }

    #[test]
    fn guess_count_never_exceeds_budget() {
        let lists = lexicon();
        let wrong = [
            "adopt", "slate", "irate", "crate", "grate", "trace", "bread", "fudge", "moist",
            "lucky", "sound", "plumb",
        ];

        for difficulty in Difficulty::ALL {
            let clock = ManualClock::new();
            let mut game = session(&lists, "apple", difficulty, &clock);

            for guess in wrong {
                if game.submit(guess).is_err() {
                    break;
                }
            }

            assert_eq!(game.outcome(), Outcome::Lost);
            assert_eq!(game.guess_count(), difficulty.guess_budget());
        }
    }

    #[test]
    fn repeated_guess_uses_no_turn_and_keeps_feedback() {
        let lists = lexicon();
        let clock = ManualClock::new();
        let mut game = session(&lists, "apple", Difficulty::Hard, &clock);

        let first = game.submit("adopt").unwrap();
        let second = game.submit("ADOPT").unwrap();

        assert!(!first.repeated);
        assert!(second.repeated);
        assert_eq!(first.feedback, second.feedback);
        assert_eq!(game.guess_count(), 1);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.remaining_guesses(), 3);
    }

    #[test]
    fn repeated_guesses_cannot_exhaust_budget() {
        let lists = lexicon();
        let clock = ManualClock::new();
        let mut game = session(&lists, "apple", Difficulty::Hard, &clock);

        for _ in 0..10 {
            game.submit("slate").unwrap();
        }

        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.guess_count(), 1);
    }

    #[test]
    fn invalid_guess_leaves_session_unchanged() {
        let lists = lexicon();
        let clock = ManualClock::new();
        let mut game = session(&lists, "crane", Difficulty::Normal, &clock);
        game.submit("slate").unwrap();

        let err = game.submit("zzzzz").unwrap_err();

        assert_eq!(err, GameError::InvalidGuess("ZZZZZ".to_string()));
        assert_eq!(game.guess_count(), 1);
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn malformed_guess_is_invalid() {
        let lists = lexicon();
        let clock = ManualClock::new();
        let mut game = session(&lists, "crane", Difficulty::Normal, &clock);

        for raw in ["", "cran", "cranes", "cr4ne"] {
            assert!(matches!(game.submit(raw), Err(GameError::InvalidGuess(_))));
        }
        assert_eq!(game.guess_count(), 0);
    }

    #[test]
    fn submit_after_win_is_rejected() {
        let lists = lexicon();
        let clock = ManualClock::new();
        let mut game = session(&lists, "crane", Difficulty::Normal, &clock);
        game.submit("crane").unwrap();

        assert_eq!(game.submit("slate"), Err(GameError::SessionTerminated));
        // Even already-known or invalid words are refused
        assert_eq!(game.submit("crane"), Err(GameError::SessionTerminated));
        assert_eq!(game.submit("zzzzz"), Err(GameError::SessionTerminated));
        assert_eq!(game.guess_count(), 1);
        assert_eq!(game.outcome(), Outcome::Won);
    }

    #[test]
    fn submit_after_loss_is_rejected() {
        let lists = lexicon();
        let clock = ManualClock::new();
        let mut game = session(&lists, "crane", Difficulty::Hard, &clock);
        for guess in ["slate", "irate", "bread", "fudge"] {
            game.submit(guess).unwrap();
        }

        assert_eq!(game.submit("crane"), Err(GameError::SessionTerminated));
        assert_eq!(game.outcome(), Outcome::Lost);
        assert_eq!(game.guess_count(), 4);
    }

    #[test]
    fn history_is_insertion_ordered() {
        let lists = lexicon();
        let clock = ManualClock::new();
        let mut game = session(&lists, "apple", Difficulty::Easy, &clock);

        for guess in ["slate", "adopt", "slate", "bread"] {
            game.submit(guess).unwrap();
        }

        let order: Vec<&str> = game.history().iter().map(|r| r.guess.text()).collect();
        assert_eq!(order, vec!["SLATE", "ADOPT", "BREAD"]);
        assert_eq!(
            game.feedback_for(&Word::new("adopt").unwrap()),
            Some(game.history()[1].feedback)
        );
        assert!(game.feedback_for(&Word::new("crate").unwrap()).is_none());
    }

    #[test]
    fn elapsed_time_recorded_at_terminal_transition() {
        let lists = lexicon();
        let clock = ManualClock::new();
        let mut game = session(&lists, "crane", Difficulty::Normal, &clock);

        clock.advance(Duration::from_secs(30));
        game.submit("slate").unwrap();
        assert!(game.elapsed().is_none());

        clock.advance(Duration::from_millis(12_900));
        game.submit("crane").unwrap();

        // Later clock movement does not change the recorded time
        clock.advance(Duration::from_secs(100));

        assert_eq!(game.elapsed(), Some(Duration::from_millis(42_900)));
        let summary = game.summary().unwrap();
        assert_eq!(summary.elapsed_seconds, 42);
        assert_eq!(summary.outcome, Outcome::Won);
        assert_eq!(summary.difficulty, Difficulty::Normal);
        assert_eq!(summary.answer.text(), "CRANE");
    }

    #[test]
    fn start_draws_answer_from_pool() {
        let lists = lexicon();
        let mut rng = StdRng::seed_from_u64(3);

        let mut game =
            GameSession::start(&lists, Difficulty::Easy, &mut rng, SystemClock).unwrap();

        // Guessing both answers guarantees a win within the budget
        let first = game.submit("apple").unwrap();
        if first.outcome != Outcome::Won {
            assert_eq!(game.submit("crane").unwrap().outcome, Outcome::Won);
        }
        assert!(game.is_over());
    }

    #[test]
    fn start_with_empty_pool_fails() {
        let lists = WordLists::new(words_from_slice(&["crane"]), Vec::new());
        let mut rng = StdRng::seed_from_u64(3);

        let result = GameSession::start(&lists, Difficulty::Normal, &mut rng, SystemClock);

        assert!(matches!(result, Err(GameError::EmptyAnswerPool)));
    }
}
