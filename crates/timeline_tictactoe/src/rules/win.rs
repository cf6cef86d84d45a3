//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position};
use tracing::instrument;

/// The eight winning lines, in the order they are scanned.
///
/// Rows first, then columns, then the two diagonals. Only the first
/// matching line is reported.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line held entirely by one mark, with that mark.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, [Position; 3])> {
    LINES.into_iter().find_map(|[a, b, c]| {
        let mark = board.get(a).mark()?;
        (board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark))
            .then_some((mark, [a, b, c]))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark has three in a row,
/// `None` otherwise.
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}
