//! Event handling for the TUI.
//!
//! Polling doubles as the tick scheduler: the poll timeout bounds how stale
//! the countdown display can get, and key events are fed straight into the
//! app. During a break the usual quit keys are deliberately not honored.

use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::error::PomolockError;
use crate::platform::DesktopVisibility;
use crate::session::CuePlayer;
use crate::tui::app::App;

/// Poll timeout; also the refresh cadence of the break countdown.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Poll for one event and apply it to the app.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<C: CuePlayer, V: DesktopVisibility>(
    app: &mut App<'_, C, V>,
) -> Result<(), PomolockError> {
    if !event::poll(POLL_INTERVAL)
        .map_err(|e| PomolockError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(());
    }

    let Event::Key(key) = event::read()
        .map_err(|e| PomolockError::Terminal(format!("Event read failed: {e}")))?
    else {
        return Ok(());
    };

    // Key release events arrive on some platforms; act on presses only.
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if app.is_on_break() {
        handle_break_key(app, key.code, key.modifiers);
    } else {
        handle_work_key(app, key.code, key.modifiers);
    }

    Ok(())
}

/// Keys during a work interval: only stopping is interesting.
fn handle_work_key<C: CuePlayer, V: DesktopVisibility>(
    app: &mut App<'_, C, V>,
    code: KeyCode,
    modifiers: KeyModifiers,
) {
    let ctrl_c = modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c');

    if ctrl_c || matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_stop();
    }
}

/// Keys during a break: everything routes to the password field; there is
/// no quit. Ctrl+C, Escape and q are just characters or nothing here.
fn handle_break_key<C: CuePlayer, V: DesktopVisibility>(
    app: &mut App<'_, C, V>,
    code: KeyCode,
    modifiers: KeyModifiers,
) {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }

    match code {
        KeyCode::Char(c) => app.overlay_char(c),
        KeyCode::Backspace => app.overlay_backspace(),
        KeyCode::Enter => app.overlay_enter(Local::now()),
        _ => {}
    }
}
