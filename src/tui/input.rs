//! Key translation for keyboard navigation.

use crossterm::event::KeyCode;
use timeline_tictactoe::Position;

/// Moves the board cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let (row, column) = match key {
        KeyCode::Up => (row.saturating_sub(1), column),
        KeyCode::Down => ((row + 1).min(2), column),
        KeyCode::Left => (row, column.saturating_sub(1)),
        KeyCode::Right => (row, (column + 1).min(2)),
        _ => (row, column),
    };
    Position::from_row_column(row, column).unwrap_or(cursor)
}

/// Maps the digit keys 1-9 to board positions, numbered like a phone keypad
/// read left to right, top to bottom.
pub fn digit_position(c: char) -> Option<Position> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Position::from_index)
}
