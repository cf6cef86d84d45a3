//! Core domain types for tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Mark placed by a player. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Mark that moves from the board at `move_index` in the history.
    ///
    /// X moves from even-indexed boards, O from odd ones.
    pub fn for_move(move_index: usize) -> Self {
        if move_index % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Display symbol: `"X"`, `"O"`, or `""` for an empty cell.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::Marked(Mark::X) => "X",
            Cell::Marked(Mark::O) => "O",
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from nine cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns a copy of this board with `pos` set to `cell`.
    pub fn with(mut self, pos: Position, cell: Cell) -> Self {
        self.cells[pos.to_index()] = cell;
        self
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Positions whose cells differ between `self` and `other`.
    pub fn diff(&self, other: &Board) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.get(pos) != other.get(pos))
            .collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based key so the text doubles as a legend.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::Marked(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|c| c.is_empty()));
        assert_eq!(board.occupied_count(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with(Position::Center, Cell::Marked(Mark::X));
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Cell::Marked(Mark::X));
        assert_eq!(board.diff(&next), vec![Position::Center]);
    }

    #[test]
    fn test_mark_for_move_parity() {
        assert_eq!(Mark::for_move(0), Mark::X);
        assert_eq!(Mark::for_move(1), Mark::O);
        assert_eq!(Mark::for_move(6), Mark::X);
        assert_eq!(Mark::X.opponent(), Mark::O);
    }

    #[test]
    fn test_display_grid() {
        let board = Board::new()
            .with(Position::TopLeft, Cell::Marked(Mark::X))
            .with(Position::Center, Cell::Marked(Mark::O));
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
