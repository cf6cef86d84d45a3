//! Board snapshot history.

use crate::Board;
use serde::Serialize;
use tracing::instrument;

/// Ordered log of board snapshots for one line of play.
///
/// Never empty: index 0 is always the empty board. Only the engine
/// mutates it, by truncating the future and appending a new board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    boards: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    /// Number of snapshots (always at least 1).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Index of the newest snapshot.
    pub fn last_index(&self) -> usize {
        self.boards.len() - 1
    }

    /// Gets the snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// All snapshots, oldest first.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Drops every snapshot after `index`, keeping `0..=index`.
    #[instrument(skip(self), fields(len = self.boards.len()))]
    pub(crate) fn truncate_after(&mut self, index: usize) {
        self.boards.truncate(index + 1);
    }

    /// Appends a snapshot and returns its index.
    pub(crate) fn push(&mut self, board: Board) -> usize {
        self.boards.push(board);
        self.last_index()
    }

    /// Forgets every move, back to the empty board.
    pub(crate) fn reset(&mut self) {
        self.boards.clear();
        self.boards.push(Board::new());
    }

    #[cfg(test)]
    pub(crate) fn boards_mut(&mut self) -> &mut Vec<Board> {
        &mut self.boards
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark, Position};

    #[test]
    fn test_starts_with_empty_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0), Some(&Board::new()));
        assert_eq!(history.last_index(), 0);
    }

    #[test]
    fn test_truncate_after_keeps_prefix() {
        let mut history = History::new();
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            board = board.with(pos, Cell::Marked(Mark::X));
            history.push(board);
        }
        assert_eq!(history.len(), 4);

        history.truncate_after(1);
        assert_eq!(history.len(), 2);
        assert_eq!(history.boards()[1].occupied_count(), 1);
    }

    #[test]
    fn test_reset_restores_root() {
        let mut history = History::new();
        history.push(Board::new().with(Position::Center, Cell::Marked(Mark::X)));
        history.reset();
        assert_eq!(history, History::new());
    }
}
