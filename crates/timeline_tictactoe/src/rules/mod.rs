//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here is stored;
//! the engine recomputes status from the current board on every query.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::{is_draw, is_full};
pub use status::{Status, status};
pub use win::{LINES, winner, winning_line};
