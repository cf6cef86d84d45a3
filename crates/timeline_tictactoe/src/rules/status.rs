//! Displayable game status.

use super::win::winner;
use crate::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Status of a board, as shown in the status line.
///
/// This is a view of the board, not an engine state: a decided game still
/// accepts jumps, reverts and restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A mark holds a full line.
    #[display("Winner: {_0}")]
    Winner(Mark),
    /// Every cell is occupied and nobody won.
    #[display("Draw!")]
    Draw,
    /// The game goes on; this mark moves next.
    #[display("Next Player: {_0}")]
    Turn(Mark),
}

impl Status {
    /// Returns true for `Winner` or `Draw`.
    pub fn is_decided(self) -> bool {
        !matches!(self, Status::Turn(_))
    }
}

/// Computes the status of `board` given the mark to move next.
///
/// A winner takes precedence over a full board.
pub fn status(board: &Board, next: Mark) -> Status {
    if let Some(mark) = winner(board) {
        Status::Winner(mark)
    } else if board.is_full() {
        Status::Draw
    } else {
        Status::Turn(next)
    }
}
