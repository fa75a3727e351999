//! TUI rendering with ratatui
//!
//! Board of letter tiles, on-screen keyboard, and message log.

use super::app::{App, MessageStyle};
use crate::core::{Guess, LetterStatus, WORD_LENGTH};
use crate::game::Outcome;
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Header, keyboard, minimum message area, and status bar
const FIXED_PANEL_HEIGHT: u16 = 3 + 5 + 4 + 1;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    // Guess rows plus the two border lines, capped to what the other panels leave
    let board_height = u16::try_from(app.engine.config().max_guesses())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(f.area().height.saturating_sub(FIXED_PANEL_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(board_height), // Board
            Constraint::Length(5),            // Keyboard
            Constraint::Min(4),               // Messages
            Constraint::Length(1),            // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

/// Colors for a tile with the given status
fn tile_style(status: Option<LetterStatus>) -> Style {
    match status {
        Some(LetterStatus::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        Some(LetterStatus::Empty) => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        None => Style::default().fg(Color::Gray),
    }
}

fn tile(letter: char, status: Option<LetterStatus>) -> Span<'static> {
    Span::styled(format!(" {letter} "), tile_style(status))
}

fn guess_line(guess: &Guess) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for letter in guess.letters() {
        spans.push(tile(letter.character(), Some(letter.status())));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// The row being typed: letters so far, then blanks
fn input_line(input: &str) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    let mut letters = input.chars();
    for _ in 0..WORD_LENGTH {
        match letters.next() {
            Some(letter) => spans.push(tile(letter, Some(LetterStatus::Empty))),
            None => spans.push(tile('_', Some(LetterStatus::Empty))),
        }
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn blank_line() -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for _ in 0..WORD_LENGTH {
        spans.push(tile('·', None));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let engine = &app.engine;
    // Only as many rows as fit inside the borders
    let rows = engine
        .config()
        .max_guesses()
        .min(usize::from(area.height.saturating_sub(2)));

    let mut lines: Vec<Line> = engine.history().iter().map(guess_line).collect();
    if engine.outcome() == Outcome::InProgress {
        lines.push(input_line(engine.current_input()));
    }
    while lines.len() < rows {
        lines.push(blank_line());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.engine.keyboard();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|key| tile(key, keyboard.get(key)))
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));

    f.render_widget(paragraph, area);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.engine.outcome().is_finished() {
        "Enter/n: New Game | q/Esc: Quit"
    } else {
        "Type letters | Backspace: Delete | Enter: Submit | Esc: Quit"
    };

    let status = format!(
        "Attempts left: {} | {help_text}",
        app.engine.remaining_guesses()
    );

    let paragraph = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(paragraph, area);
}
