//! Tests for headless play and its text/JSON views.

use clap::Parser;
use timeline_games::{Cli, Command, GameView, OutputFormat, PlayScript, headless};
use timeline_tictactoe::{Mark, Position, Status};

fn script(indices: &[usize]) -> PlayScript {
    PlayScript {
        moves: indices
            .iter()
            .map(|&i| Position::from_index(i).expect("index on board"))
            .collect(),
        ..PlayScript::default()
    }
}

#[test]
fn test_text_view_of_win() {
    let engine = script(&[0, 3, 1, 4, 2]).run().expect("valid script");
    let text = headless::render(&GameView::of(&engine), OutputFormat::Text).expect("renders");

    assert!(text.starts_with("Winner: X\n"));
    assert!(text.contains(" X | X | X \n---+---+---\n O | O | 5 "));
    assert!(text.contains("[Restart] [Revert]"));
    assert!(text.contains("> 5. Go to move #5"));
}

#[test]
fn test_text_view_of_draw() {
    let engine = script(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).run().expect("valid script");
    let view = GameView::of(&engine);
    assert_eq!(view.status, "Draw!");
    assert_eq!(view.jumps.len(), 10);
    assert!(view.cells.iter().all(|c| !c.winning));
}

#[test]
fn test_moves_after_win_are_ignored() {
    let engine = script(&[0, 3, 1, 4, 2, 8, 7]).run().expect("valid script");
    assert_eq!(engine.history_len(), 6);
    assert_eq!(engine.status(), Status::Winner(Mark::X));
}

#[test]
fn test_revert_past_start_stops_at_start() {
    let mut s = script(&[4, 0]);
    s.revert = 5;
    let engine = s.run().expect("reverting is never an error");
    assert_eq!(engine.current_move(), 0);
    assert_eq!(engine.history_len(), 3);

    let view = GameView::of(&engine);
    assert!(!view.can_revert);
    assert!(view.jumps[0].current);
}

#[test]
fn test_json_view_shape() {
    let mut s = script(&[0, 1, 2]);
    s.jump = Some(1);
    let engine = s.run().expect("valid script");
    let json = headless::render(&GameView::of(&engine), OutputFormat::Json).expect("renders");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["current_move"], 1);
    assert_eq!(value["status"], "Next Player: O");
    assert_eq!(value["jumps"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["jumps"][3]["label"], "Go to move #3");
    assert_eq!(value["cells"][2]["label"], "");
}

#[test]
fn test_printed_numbers_feed_back_into_play() {
    let engine = script(&[0]).run().expect("valid script");
    let text = headless::render(&GameView::of(&engine), OutputFormat::Text).expect("renders");
    assert!(text.contains(" 3 | 4 | 5 "));
    assert!(text.contains("> 1. Go to move #1"));

    let cli = Cli::try_parse_from(["timeline_games", "play", "0", "5", "--jump", "1"])
        .expect("printed numbers parse");
    let Some(Command::Play { moves, jump, .. }) = cli.command else {
        panic!("expected play command");
    };
    assert_eq!(moves, [Position::TopLeft, Position::MiddleRight]);
    assert_eq!(jump, Some(1));

    let replayed = PlayScript { moves, jump, ..PlayScript::default() }
        .run()
        .expect("valid script");
    let view = GameView::of(&replayed);
    assert_eq!(view.current_move, 1);
    assert_eq!(view.jumps[1].label, "Go to move #1");
    let branch_tip = replayed.history().get(2).expect("second move recorded");
    assert_eq!(branch_tip.get(Position::MiddleRight).mark(), Some(Mark::O));
}
