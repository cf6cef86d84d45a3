//! View model for a tic-tac-toe engine.
//!
//! A [`GameView`] is a snapshot of everything a renderer shows, computed from
//! an [`Engine`] after each call. It holds no game logic: every control maps
//! to a [`ViewAction`], and [`dispatch`] is the only path from a view event
//! back into the engine.

use serde::Serialize;
use timeline_tictactoe::{Engine, EngineError, Position, Status, rules};
use tracing::{debug, instrument};

/// One cell widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Board coordinate of the cell.
    pub position: Position,
    /// Board index (0-8).
    pub index: usize,
    /// `"X"`, `"O"`, or empty.
    pub label: &'static str,
    /// Part of the line that decided the game.
    pub winning: bool,
}

/// One history entry the player can jump to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JumpView {
    /// History index passed to [`Engine::jump_to`].
    pub move_index: usize,
    /// `"Go to game start"` or `"Go to move #N"`.
    pub label: String,
    /// The entry currently displayed.
    pub current: bool,
}

impl JumpView {
    /// Label for the jump control at `move_index`.
    pub fn label_for(move_index: usize) -> String {
        if move_index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", move_index)
        }
    }
}

/// Everything needed to render one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Nine cells in row-major order.
    pub cells: Vec<CellView>,
    /// Status line text.
    pub status: String,
    /// Structured status, for styling.
    pub status_kind: Status,
    /// Whether the revert control is offered.
    pub can_revert: bool,
    /// One jump control per history entry.
    pub jumps: Vec<JumpView>,
    /// Index of the displayed history entry.
    pub current_move: usize,
}

impl GameView {
    /// Builds the view of the engine's current state.
    #[instrument(skip(engine), fields(current_move = engine.current_move()))]
    pub fn of(engine: &Engine) -> Self {
        let board = engine.current_board();
        let line = rules::winning_line(board).map(|(_, line)| line);

        let cells = Position::ALL
            .into_iter()
            .map(|position| CellView {
                position,
                index: position.to_index(),
                label: board.get(position).symbol(),
                winning: line.is_some_and(|l| l.contains(&position)),
            })
            .collect();

        let jumps = (0..engine.history_len())
            .map(|move_index| JumpView {
                move_index,
                label: JumpView::label_for(move_index),
                current: move_index == engine.current_move(),
            })
            .collect();

        let status_kind = engine.status();
        Self {
            cells,
            status: status_kind.to_string(),
            status_kind,
            can_revert: engine.can_revert(),
            jumps,
            current_move: engine.current_move(),
        }
    }

    /// Cells grouped into three rows of three.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(3)
    }

    /// Plain-text rendering: board, status line, controls and jump list.
    ///
    /// Empty cells show their board index and jump rows their history index,
    /// the same numbers `play` and `--jump` accept.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.status);
        out.push_str("\n\n");

        let rows: Vec<String> = self
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell.label {
                        "" => format!(" {} ", cell.index),
                        label => format!(" {} ", label),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        out.push_str(&rows.join("\n---+---+---\n"));
        out.push_str("\n\n[Restart]");
        if self.can_revert {
            out.push_str(" [Revert]");
        }
        out.push('\n');

        for jump in &self.jumps {
            let marker = if jump.current { '>' } else { ' ' };
            out.push_str(&format!("{} {}. {}\n", marker, jump.move_index, jump.label));
        }
        out
    }
}

/// A control activation forwarded from a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    /// A cell was activated.
    Play(Position),
    /// A jump control was activated.
    JumpTo(usize),
    /// The revert control was activated.
    Revert,
    /// The restart control was activated.
    Restart,
}

/// Forwards a view action to the engine.
///
/// # Errors
///
/// Propagates [`EngineError`] from a jump to a nonexistent entry.
#[instrument(skip(engine))]
pub fn dispatch(engine: &mut Engine, action: ViewAction) -> Result<(), EngineError> {
    debug!("Dispatching view action");
    match action {
        ViewAction::Play(position) => engine.apply_move(position),
        ViewAction::JumpTo(move_index) => engine.jump_to(move_index)?,
        ViewAction::Revert => engine.revert(),
        ViewAction::Restart => engine.restart(),
    }
    Ok(())
}
