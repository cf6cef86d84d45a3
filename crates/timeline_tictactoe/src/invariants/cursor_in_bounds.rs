//! Cursor invariant: the current move always names a recorded snapshot.

use super::Invariant;
use crate::Engine;

/// Invariant: `0 <= current_move < history_len`.
pub struct CursorInBoundsInvariant;

impl Invariant<Engine> for CursorInBoundsInvariant {
    fn holds(engine: &Engine) -> bool {
        engine.current_move() < engine.history_len()
    }

    fn description() -> &'static str {
        "Current move indexes a recorded snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_holds_after_jump() {
        let mut engine = Engine::replay([Position::Center, Position::TopLeft]);
        engine.jump_to(0).unwrap();
        assert!(CursorInBoundsInvariant::holds(&engine));
    }

    #[test]
    fn test_dangling_cursor_violates() {
        let mut engine = Engine::new();
        engine.current_move = 1;
        assert!(!CursorInBoundsInvariant::holds(&engine));
    }
}
