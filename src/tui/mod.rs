//! Terminal UI for time-travel tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::{App, Flow, Focus};
pub use ui::draw;

use crate::logging;
use crate::settings::Settings;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode and the alternate screen, held for the guard's lifetime.
///
/// Dropping the guard restores the terminal, including on early returns and
/// while unwinding from a panic.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = restore(&mut io::stdout()) {
            error!(error = %err, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Every step runs even if an earlier one fails; the first error is returned.
fn restore(out: &mut impl Write) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, Show);
    raw.and(screen)
}

/// Runs the interactive game until the player quits.
#[instrument(skip_all)]
pub fn run_tui(settings: Settings) -> Result<()> {
    logging::init_file(settings.log())?;
    info!("Starting timeline_games TUI");

    let guard = TerminalGuard::enter()?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to create terminal")?;

    let mut app = App::new(*settings.display());
    let res = run_loop(&mut terminal, &mut app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        history_len = app.engine().history_len(),
        "Leaving timeline_games TUI"
    );
    res
}

fn run_loop(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key.code) == Flow::Quit {
                info!("User quit");
                return Ok(());
            }
        }
    }
}
