//! Timeline Games - tic-tac-toe with move history and time travel
//!
//! The game rules and the time-travel engine live in
//! [`timeline_tictactoe`]; this crate is the view layer around it.
//!
//! # Architecture
//!
//! - **View**: [`GameView`] snapshot of an engine and [`dispatch`] for
//!   forwarding control activations back into it
//! - **TUI**: ratatui/crossterm front end
//! - **Headless**: replay a move list and print the view as text or JSON
//! - **Settings**: TOML configuration for logging and display
//!
//! # Example
//!
//! ```
//! use timeline_games::{GameView, ViewAction, dispatch};
//! use timeline_tictactoe::{Engine, Position};
//!
//! let mut engine = Engine::new();
//! dispatch(&mut engine, ViewAction::Play(Position::Center)).unwrap();
//!
//! let view = GameView::of(&engine);
//! assert_eq!(view.status, "Next Player: O");
//! assert_eq!(view.jumps[1].label, "Go to move #1");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod headless;
pub mod logging;
pub mod settings;
pub mod tui;
pub mod view;

pub use cli::{Cli, Command, OutputFormat};
pub use headless::PlayScript;
pub use settings::{ConfigError, DisplaySettings, LogSettings, Settings};
pub use view::{CellView, GameView, JumpView, ViewAction, dispatch};
