//! Time-travel game engine for tic-tac-toe.
//!
//! The engine owns the full history of board snapshots and a cursor
//! (`current_move`) into it. The displayed board, whose turn it is, the
//! winner and the status line are derived from those two fields on demand
//! and never stored.

use crate::error::EngineError;
use crate::history::History;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::position::Position;
use crate::rules::{self, Status};
use crate::types::{Board, Cell, Mark};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Tic-tac-toe engine with move history and time travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Engine {
    pub(crate) history: History,
    pub(crate) current_move: usize,
}

impl Engine {
    /// Creates a new game: history holds the empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_move: 0,
        }
    }

    /// Creates a game by applying `positions` in order.
    ///
    /// Moves that would be ignored interactively (occupied cells, moves after
    /// a win) are ignored here too.
    #[instrument(skip(positions))]
    pub fn replay<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut engine = Self::new();
        for pos in positions {
            engine.apply_move(pos);
        }
        debug!(
            history_len = engine.history_len(),
            "Replayed moves into fresh engine"
        );
        engine
    }

    // ─────────────────────────────────────────────────────────────
    //  Derived queries
    // ─────────────────────────────────────────────────────────────

    /// The board at the current move.
    pub fn current_board(&self) -> &Board {
        &self.history.boards()[self.current_move]
    }

    /// True iff X moves next.
    pub fn is_x_next(&self) -> bool {
        self.next_mark() == Mark::X
    }

    /// Mark that moves next.
    pub fn next_mark(&self) -> Mark {
        Mark::for_move(self.current_move)
    }

    /// Winner on the current board, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::winner(self.current_board())
    }

    /// Status of the current board.
    pub fn status(&self) -> Status {
        rules::status(self.current_board(), self.next_mark())
    }

    /// Number of snapshots; valid jump targets are `0..history_len()`.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The full snapshot history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// True when there is an earlier move to revert to.
    pub fn can_revert(&self) -> bool {
        self.current_move > 0
    }

    // ─────────────────────────────────────────────────────────────
    //  Operations
    // ─────────────────────────────────────────────────────────────

    /// Places the next mark at `pos`.
    ///
    /// Does nothing if the current board already has a winner or the cell
    /// is occupied. Otherwise any history after the current move is
    /// discarded and the new board becomes the current move.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply_move(&mut self, pos: Position) {
        if let Some(winner) = self.winner() {
            debug!(%winner, "Game already decided, ignoring move");
            return;
        }
        if !self.current_board().is_empty(pos) {
            debug!("Cell occupied, ignoring move");
            return;
        }

        let mark = self.next_mark();
        let next = self.current_board().with(pos, Cell::Marked(mark));

        let discarded = self.history.last_index() - self.current_move;
        if discarded > 0 {
            debug!(discarded, "Discarding future history");
        }
        self.history.truncate_after(self.current_move);
        self.current_move = self.history.push(next);

        debug!(%mark, current_move = self.current_move, board = %next.display(), "Move applied");
        self.debug_check();
    }

    /// Displays the snapshot at `move_index` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] if `move_index` is not a recorded
    /// snapshot.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), EngineError> {
        if move_index >= self.history.len() {
            return Err(EngineError::OutOfRange {
                requested: move_index,
                len: self.history.len(),
            });
        }
        self.current_move = move_index;
        debug!("Jumped");
        self.debug_check();
        Ok(())
    }

    /// Steps back one move. No-op at the start of the game.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn revert(&mut self) {
        if self.current_move == 0 {
            debug!("Nothing to revert");
            return;
        }
        self.current_move -= 1;
        debug!("Reverted");
        self.debug_check();
    }

    /// Discards all history and starts a new game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(history_len = self.history.len(), "Restarting game");
        self.history.reset();
        self.current_move = 0;
        self.debug_check();
    }

    fn debug_check(&self) {
        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "engine invariants violated: {:?}",
            EngineInvariants::check_all(self)
        );
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Position::*;

    #[test]
    fn test_new_engine() {
        let engine = Engine::new();
        assert_eq!(engine.history_len(), 1);
        assert_eq!(engine.current_move(), 0);
        assert!(engine.is_x_next());
        assert_eq!(engine.status(), Status::Turn(Mark::X));
        assert!(!engine.can_revert());
    }

    #[test]
    fn test_apply_move_alternates_marks() {
        let mut engine = Engine::new();
        engine.apply_move(Center);
        engine.apply_move(TopLeft);
        assert_eq!(engine.current_board().get(Center), Cell::Marked(Mark::X));
        assert_eq!(engine.current_board().get(TopLeft), Cell::Marked(Mark::O));
        assert_eq!(engine.current_move(), 2);
        assert!(engine.is_x_next());
    }

    #[test]
    fn test_is_x_next_agrees_with_next_mark() {
        let mut engine = Engine::replay([Center, TopLeft, TopRight, BottomLeft]);
        for target in (0..engine.history_len()).rev() {
            engine.jump_to(target).unwrap();
            assert_eq!(engine.is_x_next(), engine.next_mark() == Mark::X);
            assert_eq!(engine.next_mark(), Mark::for_move(target));
        }
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut engine = Engine::replay([Center]);
        let before = engine.clone();
        engine.apply_move(Center);
        assert_eq!(engine, before);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut engine = Engine::replay([Center, TopLeft]);
        assert_eq!(
            engine.jump_to(3),
            Err(EngineError::OutOfRange {
                requested: 3,
                len: 3
            })
        );
        assert_eq!(engine.current_move(), 2);
    }

    #[test]
    fn test_revert_at_start_is_noop() {
        let mut engine = Engine::new();
        engine.revert();
        assert_eq!(engine, Engine::new());
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut engine = Engine::replay([Center, TopLeft, BottomRight]);
        engine.jump_to(1).unwrap();
        assert_eq!(engine.history_len(), 4);
        assert_eq!(engine.current_board().occupied_count(), 1);
        assert!(!engine.is_x_next());
    }

    #[test]
    fn test_move_after_jump_truncates() {
        let mut engine = Engine::replay([Center, TopLeft, BottomRight]);
        engine.jump_to(1).unwrap();
        engine.apply_move(TopRight);
        assert_eq!(engine.history_len(), 3);
        assert_eq!(engine.current_move(), 2);
        assert_eq!(engine.current_board().get(TopRight), Cell::Marked(Mark::O));
        assert!(engine.current_board().is_empty(TopLeft));
    }

    #[test]
    fn test_restart_after_win() {
        let mut engine = Engine::replay([TopLeft, MiddleLeft, TopCenter, Center, TopRight]);
        assert_eq!(engine.status(), Status::Winner(Mark::X));
        engine.restart();
        assert_eq!(engine, Engine::new());
    }
}
