//! TUI application state and logic

use crate::game::{GameEngine, GameError, Outcome};
use crate::output::formatters::outcome_message;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub engine: GameEngine,
    pub messages: Vec<Message>,
    pub should_quit: bool,
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

impl App {
    #[must_use]
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            messages: vec![Message {
                text: "Guess the five-letter word. Type and press Enter.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            _ if self.engine.outcome().is_finished() => match code {
                KeyCode::Enter | KeyCode::Char('n' | 'N') => self.new_game(),
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                // Board is frozen until a new game starts
                _ => {}
            },
            KeyCode::Char(c) => self.engine.enter_letter(c),
            KeyCode::Backspace => self.engine.delete_letter(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        let result = self.engine.submit_guess().map(|_| ());
        match result {
            Ok(()) => {
                let outcome = self.engine.outcome();
                if let Some(text) = outcome_message(
                    outcome,
                    self.engine.history().len(),
                    self.engine.secret_word().text(),
                ) {
                    let style = if outcome == Outcome::Won {
                        MessageStyle::Success
                    } else {
                        MessageStyle::Error
                    };
                    self.add_message(&text, style);
                    self.add_message(
                        "Press Enter for a new game or 'q' to quit.",
                        MessageStyle::Info,
                    );
                }
            }
            Err(GameError::IncompleteGuess { .. }) => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            Err(GameError::WordNotInDictionary(_)) => {
                self.add_message("Not in word list", MessageStyle::Error);
            }
            Err(err @ GameError::GameAlreadyFinished(_)) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn new_game(&mut self) {
        self.engine.restart();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
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
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
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
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
