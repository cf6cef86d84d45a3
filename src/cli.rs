//! Command-line interface for timeline_games.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use timeline_tictactoe::Position;

/// Timeline Games - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "timeline_games")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Tui {
        /// Hide the move history pane
        #[arg(long)]
        no_history: bool,
    },

    /// Replay moves without a terminal and print the resulting view
    Play {
        /// Cells to play in order, as board indices 0-8 (row-major) or names like "center"
        #[arg(value_parser = parse_position)]
        moves: Vec<Position>,

        /// Revert this many moves after replaying
        #[arg(long, default_value_t = 0)]
        revert: usize,

        /// Jump to this history entry last (0 is the game start)
        #[arg(long)]
        jump: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for headless play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Board, status line and jump list as text
    Text,
    /// The view model as JSON
    Json,
}

fn parse_position(s: &str) -> Result<Position, String> {
    Position::parse(s).ok_or_else(|| format!("'{}' is not a board index (0-8) or cell name", s))
}
