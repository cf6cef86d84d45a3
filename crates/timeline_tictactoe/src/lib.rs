//! Pure tic-tac-toe game logic with move history and time travel.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Cell`], [`Board`], [`Position`]
//! - **Rules**: pure win/draw/status functions in [`rules`]
//! - **History**: the append-until-branch log of board snapshots
//! - **Engine**: the [`Engine`] state machine; everything a view needs is a
//!   query on it, and every user action is one of its operations
//! - **Invariants**: properties checked after every operation in debug builds
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{Engine, Mark, Position, Status};
//!
//! let mut engine = Engine::new();
//! engine.apply_move(Position::Center);
//! engine.apply_move(Position::TopLeft);
//! assert_eq!(engine.status(), Status::Turn(Mark::X));
//!
//! engine.revert();
//! assert_eq!(engine.status(), Status::Turn(Mark::O));
//! assert_eq!(engine.history_len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use engine::Engine;
pub use error::EngineError;
pub use history::History;
pub use position::Position;
pub use rules::Status;
pub use types::{Board, Cell, Mark};
