//! Rooted history invariant: the log always starts from the empty board.

use super::Invariant;
use crate::{Board, Engine};

/// Invariant: History is non-empty and its first snapshot is the empty board.
pub struct RootedHistoryInvariant;

impl Invariant<Engine> for RootedHistoryInvariant {
    fn holds(engine: &Engine) -> bool {
        engine.history().get(0) == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
