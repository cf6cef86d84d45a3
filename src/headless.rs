//! Headless play: replay moves and render the resulting view.

use crate::cli::OutputFormat;
use crate::view::{GameView, ViewAction, dispatch};
use anyhow::{Context, Result};
use timeline_tictactoe::{Engine, Position};
use tracing::{info, instrument};

/// What to do after replaying the moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayScript {
    /// Cells to play, in order.
    pub moves: Vec<Position>,
    /// Number of reverts applied after the moves.
    pub revert: usize,
    /// History entry to jump to last.
    pub jump: Option<usize>,
}

impl PlayScript {
    /// Runs the script against a fresh engine.
    ///
    /// Moves the engine would ignore interactively are ignored here too; a
    /// jump past the end of the history is an error.
    #[instrument(skip(self), fields(moves = self.moves.len(), revert = self.revert, jump = ?self.jump))]
    pub fn run(&self) -> Result<Engine> {
        let mut engine = Engine::new();
        let actions = self
            .moves
            .iter()
            .copied()
            .map(ViewAction::Play)
            .chain(std::iter::repeat_n(ViewAction::Revert, self.revert))
            .chain(self.jump.map(ViewAction::JumpTo));

        for action in actions {
            dispatch(&mut engine, action)
                .with_context(|| format!("Failed to apply {:?}", action))?;
        }
        info!(
            current_move = engine.current_move(),
            history_len = engine.history_len(),
            decided = engine.status().is_decided(),
            "Script finished"
        );
        Ok(engine)
    }
}

/// Renders `view` in the requested format.
pub fn render(view: &GameView, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(view.to_text()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(view).context("Failed to serialize view")
        }
    }
}
