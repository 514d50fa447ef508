//! TUI application state and logic

use crate::core::{Difficulty, PlayerName, WORD_LENGTH};
use crate::game::{GameError, GameSession, SystemClock};
use crate::lexicon::Lexicon;
use crate::output::formatters::feedback_to_emoji;
use crate::scores::{LeaderboardEntry, ScoreStore, rank};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{info, warn};

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    lexicon: &'a dyn Lexicon,
    store: &'a mut dyn ScoreStore,
    rng: StdRng,
    pub player: Option<PlayerName>,
    pub difficulty: Difficulty,
    pub session: Option<GameSession<'a>>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub show_leaderboard: bool,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    PlayerName,
    Guess,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
}

impl<'a> App<'a> {
    /// Create the app
    ///
    /// Without a player name the app asks for one before the first game.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyAnswerPool` if a game cannot be started.
    pub fn new(
        lexicon: &'a dyn Lexicon,
        store: &'a mut dyn ScoreStore,
        player: Option<PlayerName>,
        difficulty: Difficulty,
        rng: StdRng,
    ) -> Result<Self, GameError> {
        let mut app = Self {
            lexicon,
            store,
            rng,
            player: None,
            difficulty,
            session: None,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            leaderboard: Vec::new(),
            show_leaderboard: false,
            should_quit: false,
            input_mode: InputMode::PlayerName,
        };
        app.refresh_leaderboard();

        if let Some(player) = player {
            app.add_message(&format!("Hello, {player}!"), MessageStyle::Info);
            app.player = Some(player);
            app.new_game()?;
        } else {
            app.add_message("Welcome to Wordle! Type your name and press Enter.", MessageStyle::Info);
        }

        Ok(app)
    }

    /// Start a fresh session for the current player
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyAnswerPool` if the lexicon has no answers.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        let session = GameSession::start(
            self.lexicon,
            self.difficulty,
            &mut self.rng,
            SystemClock,
        )?;
        self.session = Some(session);
        self.input_buffer.clear();
        self.show_leaderboard = false;
        self.input_mode = InputMode::Guess;
        self.add_message(
            &format!(
                "New {} game: guess the word in {} tries.",
                self.difficulty.label().to_lowercase(),
                self.difficulty.guess_budget()
            ),
            MessageStyle::Info,
        );
        Ok(())
    }

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Returns an error only if a new game cannot be started.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), GameError> {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode {
            InputMode::PlayerName => match key.code {
                KeyCode::Char(c) if c.is_ascii_alphanumeric() => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_name()?,
                _ => {}
            },
            InputMode::Guess => match key.code {
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < WORD_LENGTH {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('n') => self.new_game()?,
                KeyCode::Char('h') => self.show_leaderboard = !self.show_leaderboard,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }

        Ok(())
    }

    fn submit_name(&mut self) -> Result<(), GameError> {
        match PlayerName::parse(&self.input_buffer) {
            Ok(player) => {
                self.add_message(&format!("Hello, {player}!"), MessageStyle::Info);
                self.player = Some(player);
                self.new_game()
            }
            Err(err) => {
                self.add_message(&format!("{err}. Try again."), MessageStyle::Error);
                self.input_buffer.clear();
                Ok(())
            }
        }
    }

    pub fn submit_guess(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if self.input_buffer.len() < WORD_LENGTH {
            self.add_message(
                &format!("Not enough letters, a guess has {WORD_LENGTH}"),
                MessageStyle::Error,
            );
            return;
        }

        let guess = std::mem::take(&mut self.input_buffer);
        match session.submit(&guess) {
            Ok(submission) if submission.repeated => {
                self.add_message(
                    &format!("You already guessed {guess}, no guess used"),
                    MessageStyle::Info,
                );
            }
            Ok(submission) if submission.outcome.is_terminal() => self.finish_game(),
            Ok(submission) => {
                let squares = feedback_to_emoji(&submission.feedback);
                self.add_message(&format!("{guess} {squares}"), MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self) {
        let Some(summary) = self.session.as_ref().and_then(GameSession::summary) else {
            return;
        };

        self.stats.games_played += 1;
        self.input_mode = InputMode::GameOver;

        let entry = self
            .player
            .as_ref()
            .and_then(|player| summary.leaderboard_entry(player));

        if let Some(entry) = entry {
            self.stats.games_won += 1;
            self.add_message(
                &format!(
                    "You got {} in {} guesses and {}s!",
                    summary.answer, summary.guess_count, summary.elapsed_seconds
                ),
                MessageStyle::Success,
            );

            match self.store.append(&entry) {
                Ok(()) => info!(name = %entry.name, "highscore saved"),
                Err(err) => {
                    warn!(error = %err, "failed to save highscore");
                    self.add_message(
                        &format!("Highscore not saved: {err}"),
                        MessageStyle::Error,
                    );
                }
            }
            self.refresh_leaderboard();
        } else {
            self.add_message(
                &format!("Out of guesses! The word was {}", summary.answer),
                MessageStyle::Error,
            );
        }

        self.add_message(
            "Press 'n' for a new game, 'h' for highscores or Esc to quit.",
            MessageStyle::Info,
        );
    }

    fn refresh_leaderboard(&mut self) {
        match self.store.all_entries() {
            Ok(entries) => self.leaderboard = rank(&entries),
            Err(err) => warn!(error = %err, "failed to load highscores"),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore the terminal before reporting anything
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
