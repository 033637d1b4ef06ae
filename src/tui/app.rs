//! Application state and key handling.

use super::input::move_cursor;
use crate::config::AppConfig;
use crate::game::{GameView, Position};
use crate::session::{GameSession, Variant, new_session};
use crossterm::event::KeyCode;
use tracing::{debug, info, instrument};

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows move through the move list.
    History,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// Main application state.
pub struct App {
    session: Box<dyn GameSession>,
    config: AppConfig,
    variant: Variant,
    cursor: Position,
    focus: Focus,
    selected: usize,
}

impl App {
    /// Creates an application running a new game of `variant`.
    #[instrument(skip(config))]
    pub fn new(variant: Variant, config: AppConfig) -> Self {
        let session = new_session(variant, &config);
        Self {
            session,
            config,
            variant,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
        }
    }

    /// The running session.
    pub fn session(&self) -> &dyn GameSession {
        self.session.as_ref()
    }

    /// Projection of the current state.
    pub fn view(&self) -> GameView {
        self.session.view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the displayed move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Variant being played.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Handles one key press. Returns false when the user quits.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return false;
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.select_current();
            }
            KeyCode::Char('o') => {
                self.session.toggle_order();
                self.select_current();
            }
            KeyCode::Char('a') => {
                self.session.set_order(true);
                self.select_current();
            }
            KeyCode::Char('d') => {
                self.session.set_order(false);
                self.select_current();
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    self.play(digit as usize - 1);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor.to_index()),
                Focus::History => self.jump_to_selected(),
            },
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::History => self.move_selection(key),
            },
            _ => debug!("Unbound key"),
        }
        true
    }

    /// Starts over with a new game of the same variant.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session = new_session(self.variant, &self.config);
        self.cursor = Position::Center;
        self.selected = 0;
    }

    fn play(&mut self, index: usize) {
        self.session.play(index);
        if let Some(pos) = Position::from_index(index) {
            self.cursor = pos;
        }
        self.select_current();
    }

    fn jump_to_selected(&mut self) {
        let view = self.view();
        if let Some(entry) = view.moves.get(self.selected) {
            self.session.jump_to(entry.step);
        }
    }

    fn move_selection(&mut self, key: KeyCode) {
        let len = self.session.state().history().len();
        self.selected = match key {
            KeyCode::Up | KeyCode::Left => self.selected.saturating_sub(1),
            _ => (self.selected + 1).min(len - 1),
        };
    }

    fn select_current(&mut self) {
        let view = self.view();
        self.selected = view.moves.iter().position(|m| m.is_current).unwrap_or(0);
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("variant", &self.variant)
            .field("state", self.session.state())
            .field("cursor", &self.cursor)
            .field("focus", &self.focus)
            .field("selected", &self.selected)
            .finish()
    }
}
