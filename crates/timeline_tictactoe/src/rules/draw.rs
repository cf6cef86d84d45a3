//! Draw detection logic for tic-tac-toe.

use crate::Board;
use super::win::winner;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
