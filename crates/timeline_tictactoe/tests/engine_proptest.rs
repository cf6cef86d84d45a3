//! Property tests for the time-travel engine.

use proptest::prelude::*;
use timeline_tictactoe::invariants::{EngineInvariants, InvariantSet};
use timeline_tictactoe::{Cell, Engine, Mark, Position};

/// A user action as a view would forward it.
#[derive(Debug, Clone)]
enum Action {
    Play(usize),
    Jump(usize),
    Revert,
    Restart,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        6 => (0usize..9).prop_map(Action::Play),
        2 => (0usize..10).prop_map(Action::Jump),
        2 => Just(Action::Revert),
        1 => Just(Action::Restart),
    ]
}

fn position(index: usize) -> Position {
    Position::from_index(index).expect("strategy yields 0..9")
}

fn run(actions: &[Action]) -> Engine {
    let mut engine = Engine::new();
    for action in actions {
        match *action {
            Action::Play(i) => engine.apply_move(position(i)),
            Action::Jump(n) => {
                let in_range = n < engine.history_len();
                assert_eq!(engine.jump_to(n).is_ok(), in_range);
            }
            Action::Revert => engine.revert(),
            Action::Restart => engine.restart(),
        }
    }
    engine
}

proptest! {
    #[test]
    fn prop_invariants_hold(actions in prop::collection::vec(action(), 0..40)) {
        let engine = run(&actions);
        prop_assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn prop_marks_alternate(indices in prop::collection::vec(0usize..9, 0..20)) {
        let engine = Engine::replay(indices.into_iter().map(position));
        let boards = engine.history().boards();
        for (k, pair) in boards.windows(2).enumerate() {
            let changed = pair[0].diff(&pair[1]);
            prop_assert_eq!(changed.len(), 1);
            let expected = if k % 2 == 0 { Mark::X } else { Mark::O };
            prop_assert_eq!(pair[1].get(changed[0]), Cell::Marked(expected));
        }
    }

    #[test]
    fn prop_move_advances_by_one_or_not_at_all(
        actions in prop::collection::vec(action(), 0..30),
        index in 0usize..9,
    ) {
        let mut engine = run(&actions);
        let before = engine.clone();
        engine.apply_move(position(index));

        let playable = before.winner().is_none()
            && before.current_board().is_empty(position(index));
        if playable {
            prop_assert_eq!(engine.current_move(), before.current_move() + 1);
            prop_assert_eq!(engine.history_len(), before.current_move() + 2);
            prop_assert_eq!(
                before.current_board().diff(engine.current_board()),
                vec![position(index)]
            );
        } else {
            prop_assert_eq!(engine, before);
        }
    }

    #[test]
    fn prop_revert_is_jump_back(actions in prop::collection::vec(action(), 0..30)) {
        let engine = run(&actions);
        let mut reverted = engine.clone();
        reverted.revert();

        if engine.current_move() > 0 {
            let mut jumped = engine.clone();
            jumped.jump_to(engine.current_move() - 1).expect("in range");
            prop_assert_eq!(reverted, jumped);
        } else {
            prop_assert_eq!(reverted, engine);
        }
    }

    #[test]
    fn prop_restart_resets(actions in prop::collection::vec(action(), 0..30)) {
        let mut engine = run(&actions);
        engine.restart();
        prop_assert_eq!(engine.history_len(), 1);
        prop_assert_eq!(engine.current_move(), 0);
        prop_assert_eq!(engine, Engine::new());
    }
}
