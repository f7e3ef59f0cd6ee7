//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::core::format_mmss;
use crate::platform::DesktopVisibility;
use crate::session::{BreakOverlay, CuePlayer, OverlayPhase};
use crate::tui::app::App;

/// Render the application UI.
pub fn render<C: CuePlayer, V: DesktopVisibility>(frame: &mut Frame<'_>, app: &App<'_, C, V>) {
    if let Some(overlay) = app.overlay() {
        render_break(frame, app, overlay);
    } else {
        render_work(frame, app);
    }
}

/// Render the work-interval screen.
fn render_work<C: CuePlayer, V: DesktopVisibility>(frame: &mut Frame<'_>, app: &App<'_, C, V>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Filler
            Constraint::Length(1), // Countdown
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Progress
            Constraint::Min(0),    // Filler
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_work_header(frame, app, chunks[0]);
    render_work_countdown(frame, app, chunks[2]);
    render_work_progress(frame, app, chunks[4]);
    render_status_bar(frame, app, chunks[6]);
}

/// Render the work screen header.
fn render_work_header<C: CuePlayer, V: DesktopVisibility>(
    frame: &mut Frame<'_>,
    app: &App<'_, C, V>,
    area: Rect,
) {
    let title = format!(
        " Session {} of {} ",
        app.controller().current_session(),
        app.controller().total_sessions()
    );

    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the big work countdown.
fn render_work_countdown<C: CuePlayer, V: DesktopVisibility>(
    frame: &mut Frame<'_>,
    app: &App<'_, C, V>,
    area: Rect,
) {
    let countdown = Paragraph::new(app.work_timer().format_remaining())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(countdown, area);
}

/// Render the work progress gauge.
fn render_work_progress<C: CuePlayer, V: DesktopVisibility>(
    frame: &mut Frame<'_>,
    app: &App<'_, C, V>,
    area: Rect,
) {
    let area = centered_width(area, 60);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(app.work_timer().progress().clamp(0.0, 1.0))
        .label("");

    frame.render_widget(gauge, area);
}

/// Render the fullscreen break lock screen.
fn render_break<C: CuePlayer, V: DesktopVisibility>(
    frame: &mut Frame<'_>,
    app: &App<'_, C, V>,
    overlay: &BreakOverlay,
) {
    // Dark backdrop over the whole terminal
    let backdrop = Block::default().style(Style::default().bg(Color::Black));
    frame.render_widget(backdrop, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(20), // Top padding
            Constraint::Length(1),      // Title
            Constraint::Length(2),      // Countdown / complete message
            Constraint::Length(2),      // Wellness message
            Constraint::Length(1),      // Password prompt / incorrect notice
            Constraint::Length(3),      // Password entry
            Constraint::Min(0),         // Filler
            Constraint::Length(1),      // Status bar
        ])
        .split(frame.area());

    render_break_title(frame, overlay, chunks[1]);
    render_break_countdown(frame, app, overlay, chunks[2]);
    render_wellness(frame, chunks[3]);
    render_password_prompt(frame, app, overlay, chunks[4]);
    render_password_entry(frame, overlay, chunks[5]);
    render_status_bar(frame, app, chunks[7]);
}

/// Render the break title line.
fn render_break_title(frame: &mut Frame<'_>, overlay: &BreakOverlay, area: Rect) {
    let text = if overlay.is_long() {
        "Take a long break!"
    } else {
        "Take a break!"
    };

    let title = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(title, area);
}

/// Render the break countdown, or the resume prompt once it has run out.
fn render_break_countdown<C: CuePlayer, V: DesktopVisibility>(
    frame: &mut Frame<'_>,
    app: &App<'_, C, V>,
    overlay: &BreakOverlay,
    area: Rect,
) {
    let line = if overlay.phase() == OverlayPhase::Finished {
        Line::from(Span::styled(
            "Break complete! Press Enter to resume working",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        let remaining = overlay.remaining_seconds(app.clock());
        Line::from(Span::styled(
            format!("Break time: {}", format_mmss(remaining)),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let countdown = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(countdown, area);
}

/// Render the wellness reminder.
fn render_wellness(frame: &mut Frame<'_>, area: Rect) {
    let message = Paragraph::new(
        "Relax! Look away from the screen, stretch your body, and rest your eyes.",
    )
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC),
    );

    frame.render_widget(message, area);
}

/// Render the password prompt, or the transient incorrect notice.
fn render_password_prompt<C: CuePlayer, V: DesktopVisibility>(
    frame: &mut Frame<'_>,
    app: &App<'_, C, V>,
    overlay: &BreakOverlay,
    area: Rect,
) {
    let (text, style) = if overlay.notice_active(app.clock()) {
        (
            "Incorrect password. Try again:",
            Style::default().fg(Color::Red),
        )
    } else {
        (
            "Enter password to end break early:",
            Style::default().fg(Color::White),
        )
    };

    let prompt = Paragraph::new(text).alignment(Alignment::Center).style(style);
    frame.render_widget(prompt, area);
}

/// Render the masked password entry box.
fn render_password_entry(frame: &mut Frame<'_>, overlay: &BreakOverlay, area: Rect) {
    let area = centered_width(area, 40);

    let masked = "*".repeat(overlay.input().chars().count());
    let entry = Paragraph::new(masked).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(entry, area);
}

/// Render the status bar.
fn render_status_bar<C: CuePlayer, V: DesktopVisibility>(
    frame: &mut Frame<'_>,
    app: &App<'_, C, V>,
    area: Rect,
) {
    let default_hint = if app.is_on_break() {
        "Breaks cannot be dismissed"
    } else {
        "q:stop"
    };

    let status_text = app.status.as_deref().unwrap_or(default_hint);

    let status = Paragraph::new(status_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

/// Clamp a full-width area to a centered column of at most `width` cells.
fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect {
        x,
        width,
        ..area
    }
}
