//! Application state and key handling.

use super::input::{digit_position, move_cursor};
use crate::settings::DisplaySettings;
use crate::view::{GameView, ViewAction, dispatch};
use crossterm::event::KeyCode;
use timeline_tictactoe::{Engine, Position};
use tracing::{debug, warn};

/// Pane receiving arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrows move the board cursor, Enter plays.
    Board,
    /// Arrows select a history entry, Enter jumps to it.
    History,
}

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading keys.
    Continue,
    /// Leave the terminal UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: Engine,
    cursor: Position,
    focus: Focus,
    selected: usize,
    display: DisplaySettings,
    error: Option<String>,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(display: DisplaySettings) -> Self {
        Self {
            engine: Engine::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            display,
            error: None,
        }
    }

    /// The game engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// View of the current engine state.
    pub fn view(&self) -> GameView {
        GameView::of(&self.engine)
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected history row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Display settings.
    pub fn display(&self) -> &DisplaySettings {
        &self.display
    }

    /// Last error from the engine, shown until the next action.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        debug!(?key, focus = ?self.focus, "Handling key");

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('r') => self.perform(ViewAction::Restart),
            KeyCode::Char('u') | KeyCode::Backspace => self.perform(ViewAction::Revert),
            KeyCode::Tab if *self.display.show_history() => self.toggle_focus(),
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.perform(ViewAction::Play(pos));
                }
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
        Flow::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter => self.perform(ViewAction::Play(self.cursor)),
            _ => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let last = self.engine.history_len() - 1;
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = last,
            KeyCode::Enter => self.perform(ViewAction::JumpTo(self.selected)),
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        };
        self.selected = self.engine.current_move();
    }

    fn perform(&mut self, action: ViewAction) {
        match dispatch(&mut self.engine, action) {
            Ok(()) => self.error = None,
            Err(e) => {
                warn!(error = %e, ?action, "Action rejected");
                self.error = Some(e.to_string());
            }
        }
        self.selected = self.engine.current_move();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(DisplaySettings::default())
    }
}
