//! Application state for the TUI.
//!
//! `App` is the single driver of both state machines: it owns the
//! controller and the current break overlay, feeds them clock ticks and key
//! input, and fires cues on transitions. It never touches the terminal, so
//! the whole sequence can be driven in tests with a fake clock.

use chrono::{DateTime, Duration, Local};

use crate::core::Timer;
use crate::platform::DesktopVisibility;
use crate::session::{Advance, BreakOverlay, Cue, CuePlayer, OverlayPhase, SessionController};

/// How a finished run left the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// All sessions and breaks ran to the end.
    Completed,
    /// The user stopped during a work interval.
    Stopped {
        /// 1-based session index at the time of the stop.
        session: u32,
    },
}

/// Application state.
pub struct App<'a, C: CuePlayer, V: DesktopVisibility> {
    /// Session sequencing state machine.
    controller: SessionController,
    /// Countdown for the work interval in progress.
    work_timer: Timer,
    /// Lock screen for the break in progress, if any.
    overlay: Option<BreakOverlay>,
    /// Cue player for transition sounds/notifications.
    cues: &'a C,
    /// Best-effort window pinning for breaks.
    visibility: &'a V,
    /// Clock reading from the latest tick; rendering reads time from here.
    clock: DateTime<Local>,
    /// When the work timer should next lose a second.
    next_work_tick: DateTime<Local>,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the event loop should exit.
    pub should_quit: bool,
    /// Set when the sequence ends, one way or the other.
    outcome: Option<RunOutcome>,
}

impl<'a, C: CuePlayer, V: DesktopVisibility> App<'a, C, V> {
    /// Start the sequence at session 1 and begin the first work interval.
    pub fn new(
        mut controller: SessionController,
        cues: &'a C,
        visibility: &'a V,
        now: DateTime<Local>,
    ) -> Self {
        controller.start();
        cues.play(Cue::WorkStart);

        let work_timer = Timer::new(controller.work_seconds());

        Self {
            controller,
            work_timer,
            overlay: None,
            cues,
            visibility,
            clock: now,
            next_work_tick: now + Duration::seconds(1),
            status: None,
            should_quit: false,
            outcome: None,
        }
    }

    /// Advance everything by one poll interval.
    pub fn on_tick(&mut self, now: DateTime<Local>) {
        self.clock = now;

        if self.overlay.is_some() {
            if let Some(overlay) = self.overlay.as_mut() {
                overlay.tick(now);
            }
            self.settle_overlay();
        } else if self.controller.is_running() {
            // Fold sub-second polls into whole-second timer ticks,
            // catching up if a poll came late.
            while now >= self.next_work_tick && self.work_timer.is_running() {
                self.work_timer.tick();
                self.next_work_tick += Duration::seconds(1);
            }

            if self.work_timer.is_completed() {
                self.start_break(now);
            }
        }
    }

    /// Begin the break the current session has earned.
    fn start_break(&mut self, now: DateTime<Local>) {
        self.controller.begin_break();
        self.cues.play(Cue::BreakStart);

        let plan = self.controller.break_plan();
        self.overlay = Some(BreakOverlay::new(plan, now));
        self.status = None;

        // Pinning is best-effort; failures surface on the status line only.
        if let Err(e) = self.visibility.claim_foreground() {
            self.status = Some(format!("Window pinning unavailable: {e}"));
        }
    }

    /// Consume the overlay's one-shot completion and move the sequence on.
    fn settle_overlay(&mut self) {
        let terminated = self
            .overlay
            .as_mut()
            .is_some_and(BreakOverlay::take_completion);
        if !terminated {
            return;
        }

        self.overlay = None;
        self.status = None;

        match self.controller.finish_break() {
            Advance::NextWork(_) => {
                self.cues.play(Cue::WorkStart);
                self.work_timer = Timer::new(self.controller.work_seconds());
                self.next_work_tick = self.clock + Duration::seconds(1);
            }
            Advance::Complete => {
                self.cues.play(Cue::SequenceComplete);
                self.outcome = Some(RunOutcome::Completed);
                self.should_quit = true;
            }
        }
    }

    /// Handle a stop request (q/Escape/Ctrl+C).
    ///
    /// Honored between ticks of a work countdown; ignored entirely during a
    /// break, which has no sanctioned exit besides the phrase and resume.
    pub fn request_stop(&mut self) {
        if self.overlay.is_some() {
            return;
        }

        self.controller.stop();
        self.work_timer.stop();
        self.outcome = Some(RunOutcome::Stopped {
            session: self.controller.current_session(),
        });
        self.should_quit = true;
    }

    /// Type a character into the break password field.
    pub fn overlay_char(&mut self, c: char) {
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.push_char(c);
        }
    }

    /// Delete the last character of the break password field.
    pub fn overlay_backspace(&mut self) {
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.backspace();
        }
    }

    /// Handle Enter during a break: resume when the countdown is over and
    /// nothing is typed, otherwise submit the password field.
    pub fn overlay_enter(&mut self, now: DateTime<Local>) {
        if let Some(overlay) = self.overlay.as_mut() {
            if overlay.phase() == OverlayPhase::Finished && overlay.input().is_empty() {
                overlay.resume();
            } else {
                overlay.submit_password(now);
            }
        }
        self.settle_overlay();
    }

    /// True while a break owns the screen.
    #[must_use]
    pub const fn is_on_break(&self) -> bool {
        self.overlay.is_some()
    }

    /// The break overlay, while one is active.
    #[must_use]
    pub const fn overlay(&self) -> Option<&BreakOverlay> {
        self.overlay.as_ref()
    }

    /// Clock reading from the latest tick.
    #[must_use]
    pub const fn clock(&self) -> DateTime<Local> {
        self.clock
    }

    /// The work countdown.
    #[must_use]
    pub const fn work_timer(&self) -> &Timer {
        &self.work_timer
    }

    /// The session sequencing state.
    #[must_use]
    pub const fn controller(&self) -> &SessionController {
        &self.controller
    }

    /// How the sequence ended. Meaningful once `should_quit` is set.
    #[must_use]
    pub fn outcome(&self) -> RunOutcome {
        self.outcome.unwrap_or(RunOutcome::Stopped {
            session: self.controller.current_session(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimerConfig;
    use crate::platform::{MockDesktopVisibility, NoopVisibility};
    use crate::session::cues::MockCuePlayer;
    use crate::session::{SilentCues, BYPASS_PHRASE};
    use chrono::TimeZone;

    fn start_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).single().unwrap()
    }

    fn config(sessions: u32) -> TimerConfig {
        TimerConfig {
            work_minutes: 1,
            short_break_minutes: 1,
            long_break_minutes: 2,
            sessions,
        }
    }

    fn app_with<'a, C: CuePlayer, V: DesktopVisibility>(
        sessions: u32,
        cues: &'a C,
        visibility: &'a V,
    ) -> App<'a, C, V> {
        App::new(
            SessionController::new(config(sessions)),
            cues,
            visibility,
            start_time(),
        )
    }

    /// Tick the app forward one second at a time.
    fn advance_seconds<C: CuePlayer, V: DesktopVisibility>(
        app: &mut App<'_, C, V>,
        from: DateTime<Local>,
        seconds: i64,
    ) -> DateTime<Local> {
        let mut now = from;
        for _ in 0..seconds {
            now += Duration::seconds(1);
            app.on_tick(now);
        }
        now
    }

    fn type_phrase<C: CuePlayer, V: DesktopVisibility>(app: &mut App<'_, C, V>, phrase: &str) {
        for c in phrase.chars() {
            app.overlay_char(c);
        }
    }

    #[test]
    fn test_work_interval_runs_down_then_break_starts() {
        let cues = SilentCues;
        let vis = NoopVisibility;
        let mut app = app_with(2, &cues, &vis);

        assert!(!app.is_on_break());
        assert_eq!(app.work_timer().remaining_seconds(), 60);

        let now = advance_seconds(&mut app, start_time(), 59);
        assert!(!app.is_on_break());

        advance_seconds(&mut app, now, 1);
        assert!(app.is_on_break());
        assert!(app.controller().is_on_break());
    }

    #[test]
    fn test_break_timeout_does_not_advance_session() {
        let cues = SilentCues;
        let vis = NoopVisibility;
        let mut app = app_with(2, &cues, &vis);

        // Run through work and far past the end of the break
        let now = advance_seconds(&mut app, start_time(), 60);
        advance_seconds(&mut app, now, 600);

        assert!(app.is_on_break());
        assert_eq!(app.controller().current_session(), 1);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_password_ends_break_and_starts_next_session() {
        let cues = SilentCues;
        let vis = NoopVisibility;
        let mut app = app_with(2, &cues, &vis);

        let now = advance_seconds(&mut app, start_time(), 60);
        assert!(app.is_on_break());

        type_phrase(&mut app, BYPASS_PHRASE);
        app.overlay_enter(now);

        assert!(!app.is_on_break());
        assert_eq!(app.controller().current_session(), 2);
        assert_eq!(app.work_timer().remaining_seconds(), 60);
    }

    #[test]
    fn test_wrong_password_keeps_break() {
        let cues = SilentCues;
        let vis = NoopVisibility;
        let mut app = app_with(2, &cues, &vis);

        let now = advance_seconds(&mut app, start_time(), 60);
        type_phrase(&mut app, "wrong");
        app.overlay_enter(now);

        assert!(app.is_on_break());
        assert_eq!(app.controller().current_session(), 1);
    }

    #[test]
    fn test_enter_resumes_once_finished() {
        let cues = SilentCues;
        let vis = NoopVisibility;
        let mut app = app_with(2, &cues, &vis);

        // Work (60s) then the full short break (60s)
        let now = advance_seconds(&mut app, start_time(), 120);
        assert!(app.is_on_break());

        app.overlay_enter(now);
        assert!(!app.is_on_break());
        assert_eq!(app.controller().current_session(), 2);
    }

    #[test]
    fn test_enter_before_finished_with_empty_input_is_a_failed_submit() {
        let cues = SilentCues;
        let vis = NoopVisibility;
        let mut app = app_with(2, &cues, &vis);

        let now = advance_seconds(&mut app, start_time(), 60);
        app.overlay_enter(now);

        // Still locked: an empty submit is just a wrong password
        assert!(app.is_on_break());
    }

    #[test]
    fn test_stop_ignored_during_break() {
        let cues = SilentCues;
        let vis = NoopVisibility;
        let mut app = app_with(2, &cues, &vis);

        advance_seconds(&mut app, start_time(), 60);
        app.request_stop();

        assert!(app.is_on_break());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_stop_during_work() {
        let cues = SilentCues;
        let vis = NoopVisibility;
        let mut app = app_with(2, &cues, &vis);

        advance_seconds(&mut app, start_time(), 10);
        app.request_stop();

        assert!(app.should_quit);
        assert_eq!(app.outcome(), RunOutcome::Stopped { session: 1 });
    }

    #[test]
    fn test_full_sequence_completes_after_last_break() {
        let cues = SilentCues;
        let vis = NoopVisibility;
        let mut app = app_with(2, &cues, &vis);
        let mut now = start_time();

        for _ in 0..2 {
            now = advance_seconds(&mut app, now, 60);
            assert!(app.is_on_break());
            type_phrase(&mut app, BYPASS_PHRASE);
            app.overlay_enter(now);
        }

        assert!(app.should_quit);
        assert_eq!(app.outcome(), RunOutcome::Completed);
    }

    #[test]
    fn test_cue_sequence_for_one_session() {
        let mut cues = MockCuePlayer::new();
        let mut seq = mockall::Sequence::new();
        cues.expect_play()
            .with(mockall::predicate::eq(Cue::WorkStart))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        cues.expect_play()
            .with(mockall::predicate::eq(Cue::BreakStart))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        cues.expect_play()
            .with(mockall::predicate::eq(Cue::SequenceComplete))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let vis = NoopVisibility;
        let mut app = app_with(1, &cues, &vis);

        let now = advance_seconds(&mut app, start_time(), 60);
        type_phrase(&mut app, BYPASS_PHRASE);
        app.overlay_enter(now);

        assert_eq!(app.outcome(), RunOutcome::Completed);
    }

    #[test]
    fn test_visibility_failure_lands_on_status_line() {
        let cues = SilentCues;
        let mut vis = MockDesktopVisibility::new();
        vis.expect_claim_foreground().returning(|| {
            Err(crate::error::PomolockError::Config(
                "wmctrl not found".to_string(),
            ))
        });

        let mut app = app_with(2, &cues, &vis);
        advance_seconds(&mut app, start_time(), 60);

        assert!(app.is_on_break());
        assert!(app
            .status
            .as_deref()
            .is_some_and(|s| s.contains("Window pinning unavailable")));
    }
}
