//! Simple interactive CLI mode
//!
//! Line-oriented menus and game loop without the full-screen UI. Input and
//! output are generic so the whole flow can be scripted.

use super::highscores::write_highscores;
use crate::core::{Difficulty, PlayerName};
use crate::game::{GameError, GameSession, SystemClock};
use crate::lexicon::Lexicon;
use crate::output::formatters::feedback_to_clue;
use crate::output::{write_difficulty_menu, write_history, write_main_menu, write_rules};
use crate::scores::ScoreStore;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// What the player chose at the end of a game
enum AfterGame {
    PlayAgain,
    MainMenu,
}

/// Text-mode game: main menu, name and difficulty prompts, play loop
pub struct SimpleGame<'a, R, W> {
    input: R,
    output: W,
    lexicon: &'a dyn Lexicon,
    store: &'a mut dyn ScoreStore,
    rng: StdRng,
}

impl<'a, R: BufRead, W: Write> SimpleGame<'a, R, W> {
    pub fn new(
        input: R,
        output: W,
        lexicon: &'a dyn Lexicon,
        store: &'a mut dyn ScoreStore,
        rng: StdRng,
    ) -> Self {
        Self {
            input,
            output,
            lexicon,
            store,
            rng,
        }
    }

    /// Run the main menu until the player quits or input ends
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or if a game cannot be started
    /// because the answer pool is empty.
    pub fn run(&mut self) -> Result<()> {
        let mut show_menu = true;

        loop {
            if show_menu {
                write_main_menu(&mut self.output)?;
            }
            show_menu = false;

            let Some(choice) =
                self.prompt("Type: 1 (Start Game) 2 (Highscores) 3 (Rules) or q (Quit)")?
            else {
                return Ok(());
            };

            match choice.to_lowercase().as_str() {
                "1" => {
                    if !self.play_rounds()? {
                        return Ok(());
                    }
                    show_menu = true;
                }
                "2" => {
                    write_highscores(&mut self.output, &*self.store)?;
                    if !self.pause("Press Enter to return to the main menu...")? {
                        return Ok(());
                    }
                    show_menu = true;
                }
                "3" => {
                    write_rules(&mut self.output)?;
                    if !self.pause("Press Enter to return to the main menu...")? {
                        return Ok(());
                    }
                    show_menu = true;
                }
                "q" | "quit" | "exit" => {
                    writeln!(self.output, "Thanks for playing!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid option. Please choose a valid option.")?,
            }
        }
    }

    /// Play games with one player name until they go back to the menu
    ///
    /// Returns `false` if input ended.
    fn play_rounds(&mut self) -> Result<bool> {
        let Some(player) = self.ask_name()? else {
            return Ok(false);
        };

        loop {
            let Some(difficulty) = self.ask_difficulty()? else {
                return Ok(false);
            };

            writeln!(self.output, "Hello, {player}!")?;
            if !self.pause("Press Enter to start the game")? {
                return Ok(false);
            }

            if !self.play_one(&player, difficulty)? {
                return Ok(false);
            }

            match self.ask_after_game()? {
                Some(AfterGame::PlayAgain) => {}
                Some(AfterGame::MainMenu) => return Ok(true),
                None => return Ok(false),
            }
        }
    }

    /// Play a single session
    ///
    /// Returns `false` if input ended mid-game.
    fn play_one(&mut self, player: &PlayerName, difficulty: Difficulty) -> Result<bool> {
        let mut session = GameSession::start(self.lexicon, difficulty, &mut self.rng, SystemClock)?;

        while !session.is_over() {
            write_history(&mut self.output, session.history())?;
            writeln!(
                self.output,
                "{} ({} difficulty)",
                format!("Guesses left: {}", session.remaining_guesses()).bright_cyan(),
                difficulty.label()
            )?;

            let Some(raw) = self.prompt("Input a 5-letter word and press enter")? else {
                return Ok(false);
            };

            match session.submit(&raw) {
                Ok(submission) if submission.repeated => {
                    let guess = raw.trim().to_uppercase();
                    writeln!(
                        self.output,
                        "You already guessed {guess}. That one is free, try another word."
                    )?;
                }
                Ok(_) => {}
                Err(err @ GameError::InvalidGuess(_)) => {
                    writeln!(
                        self.output,
                        "{}",
                        format!("{err}. Please try again.").red()
                    )?;
                }
                Err(err) => return Err(err.into()),
            }
        }

        let summary = session
            .summary()
            .context("finished session has no summary")?;

        if let Some(entry) = summary.leaderboard_entry(player) {
            let last = session
                .history()
                .last()
                .context("won session has no guesses")?;
            write_history(&mut self.output, session.history())?;
            writeln!(
                self.output,
                "{} {}",
                "Congratulations! You guessed the word correctly:".green().bold(),
                feedback_to_clue(&last.guess, &last.feedback)
            )?;
            writeln!(
                self.output,
                "Your final time is {} seconds. It took you {} guesses to find the right word!",
                summary.elapsed_seconds, summary.guess_count
            )?;

            // The game goes on even if the highscore cannot be saved
            if let Err(err) = self.store.append(&entry) {
                warn!(error = %err, "failed to save highscore");
                writeln!(self.output, "Your highscore could not be saved: {err}")?;
            } else {
                info!(name = %entry.name, guess_count = entry.guess_count, "highscore saved");
            }
        } else {
            write_history(&mut self.output, session.history())?;
            writeln!(self.output, "{}", "_".repeat(80))?;
            writeln!(
                self.output,
                "You could not guess the word in the given amount of guesses, the correct answer was {}",
                summary.answer.to_string().bold()
            )?;
        }

        Ok(true)
    }

    fn ask_name(&mut self) -> Result<Option<PlayerName>> {
        loop {
            let Some(raw) = self.prompt("Please enter your name")? else {
                return Ok(None);
            };
            match PlayerName::parse(&raw) {
                Ok(name) => return Ok(Some(name)),
                Err(err) => writeln!(self.output, "{err}. Try again.")?,
            }
        }
    }

    fn ask_difficulty(&mut self) -> Result<Option<Difficulty>> {
        write_difficulty_menu(&mut self.output)?;
        loop {
            let Some(choice) = self.prompt("Enter choice (e/n/h)")? else {
                return Ok(None);
            };
            if let Some(difficulty) = Difficulty::from_choice(&choice) {
                writeln!(
                    self.output,
                    "You have selected {} difficulty. You will be given {} attempts to guess the word.",
                    difficulty.label().to_lowercase(),
                    difficulty.guess_budget()
                )?;
                return Ok(Some(difficulty));
            }
            writeln!(self.output, "Please enter a valid option (e, n, h).")?;
        }
    }

    fn ask_after_game(&mut self) -> Result<Option<AfterGame>> {
        loop {
            let Some(choice) =
                self.prompt("Enter '1' to play again or '2' to return to the main menu")?
            else {
                return Ok(None);
            };
            match choice.as_str() {
                "1" => return Ok(Some(AfterGame::PlayAgain)),
                "2" => return Ok(Some(AfterGame::MainMenu)),
                _ => writeln!(self.output, "Please enter a valid option (1 or 2).")?,
            }
        }
    }

    /// Wait for Enter; `false` if input ended
    fn pause(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.prompt(prompt)?.is_some())
    }

    /// Get user input with a prompt; `None` once input is exhausted
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::WordLists;
    use crate::lexicon::loader::words_from_slice;
    use crate::scores::{MemoryScoreStore, ScoreSource, report};
    use rand::SeedableRng;

    fn lexicon() -> WordLists {
        WordLists::new(
            words_from_slice(&["adopt", "slate", "irate", "bread", "fudge", "moist"]),
            words_from_slice(&["crane"]),
        )
    }

    fn run_script(script: &str, store: &mut MemoryScoreStore) -> String {
        let lists = lexicon();
        let mut output = Vec::new();
        {
            let mut game = SimpleGame::new(
                script.as_bytes(),
                &mut output,
                &lists,
                store,
                StdRng::seed_from_u64(11),
            );
            game.run().unwrap();
        }
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn win_records_highscore() {
        let mut store = MemoryScoreStore::new();
        let text = run_script("1\nada\nh\n\nslate\ncrane\n2\nq\n", &mut store);

        assert!(text.contains("Hello, Ada!"));
        assert!(text.contains("Congratulations!"));
        assert!(text.contains("It took you 2 guesses"));

        let entries = store.all_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Ada");
        assert_eq!(entries[0].difficulty, Difficulty::Hard);
        assert_eq!(entries[0].guess_count, 2);
    }

    #[test]
    fn loss_reveals_answer_and_records_nothing() {
        let mut store = MemoryScoreStore::new();
        let text = run_script(
            "1\nada\nh\n\nslate\nirate\nbread\nfudge\n2\nq\n",
            &mut store,
        );

        assert!(text.contains("the correct answer was"));
        assert!(text.contains("CRANE"));
        assert!(store.all_entries().unwrap().is_empty());
    }

    #[test]
    fn invalid_and_repeated_guesses_do_not_use_turns() {
        let mut store = MemoryScoreStore::new();
        let text = run_script(
            "1\nada\nh\n\nzzzzz\nslate\nslate\nslate\nirate\nbread\ncrane\n2\nq\n",
            &mut store,
        );

        assert!(text.contains("Invalid word: 'ZZZZZ'"));
        assert!(text.contains("You already guessed SLATE"));
        assert_eq!(store.all_entries().unwrap()[0].guess_count, 4);
    }

    #[test]
    fn clue_lines_follow_classic_format() {
        let mut store = MemoryScoreStore::new();
        let text = run_script("1\nada\nn\n\nirate\ncrane\n2\nq\n", &mut store);

        // IRATE against CRANE: R, A and E in place, I and T absent
        assert!(text.contains("IRATE: _ R A _ E"));
    }

    #[test]
    fn invalid_name_and_difficulty_reprompt() {
        let mut store = MemoryScoreStore::new();
        let text = run_script("1\nal\nbad name\nada\nx\n\nh\n\ncrane\n2\nq\n", &mut store);

        assert!(text.contains("at least 3 characters"));
        assert!(text.contains("only contain letters/numbers"));
        assert_eq!(text.matches("Please enter a valid option (e, n, h).").count(), 2);
        assert_eq!(store.all_entries().unwrap().len(), 1);
    }

    #[test]
    fn play_again_keeps_player_name() {
        let mut store = MemoryScoreStore::new();
        let text = run_script("1\nada\ne\n\ncrane\n1\nn\n\ncrane\n2\nq\n", &mut store);

        assert_eq!(text.matches("Please enter your name").count(), 1);
        assert_eq!(text.matches("Hello, Ada!").count(), 2);

        let entries = store.all_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].difficulty, Difficulty::Easy);
        assert_eq!(entries[1].difficulty, Difficulty::Normal);
    }

    #[test]
    fn main_menu_forgets_player_name() {
        let mut store = MemoryScoreStore::new();
        let text = run_script("1\nada\ne\n\ncrane\n2\n1\nbob\ne\n\ncrane\n2\nq\n", &mut store);

        assert_eq!(text.matches("Please enter your name").count(), 2);
        let names: Vec<String> = store
            .all_entries()
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Ada", "Bob"]);
    }

    #[test]
    fn highscores_menu_shows_ranked_entries() {
        let mut store = MemoryScoreStore::with_entries(vec![
            report("Bob", Difficulty::Normal, 3, 40),
            report("Ada", Difficulty::Hard, 3, 50),
        ]);
        let text = run_script("2\n\nq\n", &mut store);

        let ada = text.find("Name: Ada").unwrap();
        let bob = text.find("Name: Bob").unwrap();
        assert!(ada < bob);
    }

    #[test]
    fn rules_menu_shows_example() {
        let mut store = MemoryScoreStore::new();
        let text = run_script("3\n\nq\n", &mut store);
        assert!(text.contains("A _ _ P* _"));
    }

    #[test]
    fn invalid_menu_option() {
        let mut store = MemoryScoreStore::new();
        let text = run_script("9\nq\n", &mut store);
        assert!(text.contains("Invalid option. Please choose a valid option."));
        assert!(text.contains("Thanks for playing!"));
    }

    #[test]
    fn end_of_input_mid_game_exits_cleanly() {
        let mut store = MemoryScoreStore::new();
        let text = run_script("1\nada\nh\n\nslate\n", &mut store);

        assert!(text.contains("Guesses left: 3"));
        assert!(store.all_entries().unwrap().is_empty());
    }

    #[test]
    fn empty_answer_pool_is_an_error() {
        let lists = WordLists::new(words_from_slice(&["crane"]), Vec::new());
        let mut store = MemoryScoreStore::new();
        let mut output = Vec::new();
        let mut game = SimpleGame::new(
            "1\nada\nh\n\n".as_bytes(),
            &mut output,
            &lists,
            &mut store,
            StdRng::seed_from_u64(1),
        );

        let err = game.run().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GameError>(),
            Some(GameError::EmptyAnswerPool)
        ));
    }
}
