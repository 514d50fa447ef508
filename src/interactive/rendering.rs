//! TUI rendering with ratatui
//!
//! Board, status, message log and the highscore panel.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterFeedback, PlayerName, WORD_LENGTH};
use crate::game::{GameSession, GuessRecord};
use crate::scores::LEADERBOARD_SIZE;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Help line
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    if app.show_leaderboard {
        render_leaderboard(f, app, main_chunks[1]);
    } else {
        render_info_panel(f, app, main_chunks[1]);
    }

    render_input(f, app, chunks[2]);
    render_help(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE - Guess the hidden word")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(mark: LetterFeedback) -> Style {
    let bg = match mark {
        LetterFeedback::Exact => Color::Green,
        LetterFeedback::Present => Color::Yellow,
        LetterFeedback::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn guess_row(record: &GuessRecord) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for (&letter, &mark) in record.guess.letters().iter().zip(record.feedback.marks()) {
        spans.push(Span::styled(
            format!(" {} ", char::from(letter)),
            tile_style(mark),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Row being typed: entered letters, then blanks
fn pending_row(input: &str) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    let mut letters = input.chars();
    for _ in 0..WORD_LENGTH {
        let text = letters
            .next()
            .map_or_else(|| " _ ".to_string(), |c| format!(" {c} "));
        spans.push(Span::styled(
            text,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn empty_row() -> Line<'static> {
    let spans: Vec<Span> = (0..WORD_LENGTH)
        .flat_map(|_| {
            [
                Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    if let Some(session) = &app.session {
        for record in session.history() {
            lines.push(guess_row(record));
            lines.push(Line::from(""));
        }

        let mut remaining = session.remaining_guesses();
        if !session.is_over() && remaining > 0 {
            lines.push(pending_row(&app.input_buffer));
            lines.push(Line::from(""));
            remaining -= 1;
        }
        for _ in 0..remaining {
            lines.push(empty_row());
            lines.push(Line::from(""));
        }
    } else {
        lines.push(Line::from("Enter your name to start playing."));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(5)])
        .split(area);

    render_status(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let player = app.player.as_ref().map_or("-", PlayerName::as_str);
    let remaining = app
        .session
        .as_ref()
        .map_or(app.difficulty.guess_budget(), GameSession::remaining_guesses);

    let content = vec![
        Line::from(vec![
            Span::raw("Player:     "),
            Span::styled(
                player.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Difficulty: {}", app.difficulty.label())),
        Line::from(vec![
            Span::raw("Remaining:  "),
            Span::styled(
                format!("{remaining} guesses"),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(format!(
            "Games: {} | Won: {}",
            app.stats.games_played, app.stats.games_won
        )),
    ];

    let status = Paragraph::new(content).block(
        Block::default()
            .title(" Status ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(status, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_leaderboard(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = if app.leaderboard.is_empty() {
        vec![ListItem::new("No highscores yet. Be the first!")]
    } else {
        app.leaderboard
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                ListItem::new(format!(
                    "{:>2}. {:<12} {:<6} {:>2} guesses {:>4}s",
                    i + 1,
                    entry.name,
                    entry.difficulty.label(),
                    entry.guess_count,
                    entry.elapsed_seconds
                ))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Top {LEADERBOARD_SIZE} Highscores "))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::PlayerName => (
            " Your name (letters/numbers, at least 3) ",
            app.input_buffer.as_str(),
            Color::Cyan,
        ),
        InputMode::Guess => (" Your guess ", app.input_buffer.as_str(), Color::Yellow),
        InputMode::GameOver => (" Game over ", "", Color::Green),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::PlayerName => "Enter: Confirm | Backspace: Delete | Esc: Quit",
        InputMode::Guess => "Enter: Submit | Backspace: Delete | Esc: Quit",
        InputMode::GameOver => "n: New Game | h: Highscores | Esc/q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};

    #[test]
    fn guess_row_has_a_tile_per_letter() {
        let answer = Word::new("apple").unwrap();
        let guess = Word::new("adopt").unwrap();
        let record = GuessRecord {
            feedback: evaluate(&answer, &guess).feedback,
            guess,
        };

        let row = guess_row(&record);
        let tiles: Vec<&Span> = row.spans.iter().step_by(2).collect();
        assert_eq!(tiles.len(), WORD_LENGTH);
        assert_eq!(tiles[0].content, " A ");
        assert_eq!(tiles[0].style.bg, Some(Color::Green));
        assert_eq!(tiles[3].style.bg, Some(Color::Yellow));
        assert_eq!(tiles[4].style.bg, Some(Color::DarkGray));
    }

    #[test]
    fn pending_row_pads_with_blanks() {
        let row = pending_row("CR");
        let text: String = row.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " C   R   _   _   _  ");
    }
}
