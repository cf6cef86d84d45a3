//! Timeline Games - Unified CLI

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use timeline_games::{
    Cli, Command, GameView, OutputFormat, PlayScript, Settings, headless, logging, tui,
};
use tracing::{debug, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command.unwrap_or(Command::Tui { no_history: false }) {
        Command::Tui { no_history } => {
            let shown = *settings.display().show_history() && !no_history;
            tui::run_tui(settings.with_history_shown(shown))
        }
        Command::Play {
            moves,
            revert,
            jump,
            format,
        } => run_play(&settings, PlayScript { moves, revert, jump }, format),
    }
}

/// Run a headless game and print the final view
#[instrument(skip_all)]
fn run_play(settings: &Settings, script: PlayScript, format: OutputFormat) -> Result<()> {
    logging::init_stderr(settings.log());
    debug!(?script, "Running headless script");

    let engine = script.run()?;
    let output = headless::render(&GameView::of(&engine), format)?;
    println!("{}", output);
    Ok(())
}
