//! Terminal User Interface for pomolock.
//!
//! The work countdown and the break lock screen both render on the
//! alternate screen in raw mode. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, RunOutcome};

use std::io;

use chrono::Local;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::PomolockError;
use crate::platform::DesktopVisibility;
use crate::session::{CuePlayer, SessionController};

/// Run the whole work/break sequence in the terminal.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize or render.
pub fn run<C: CuePlayer, V: DesktopVisibility>(
    controller: SessionController,
    cues: &C,
    visibility: &V,
) -> Result<RunOutcome, PomolockError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| PomolockError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| PomolockError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PomolockError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(controller, cues, visibility, Local::now());
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend, C: CuePlayer, V: DesktopVisibility>(
    terminal: &mut Terminal<B>,
    app: &mut App<'_, C, V>,
) -> Result<RunOutcome, PomolockError> {
    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomolockError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events; the poll timeout doubles as the tick interval
        event::handle_events(app)?;
        app.on_tick(Local::now());

        if app.should_quit {
            break;
        }
    }

    Ok(app.outcome())
}
