//! Work/break sequencing.
//!
//! `SessionController` owns the session counter and decides what happens
//! after each work interval and each break: another work interval, a short
//! or long break, or the end of the sequence.

use serde::{Deserialize, Serialize};

use crate::config::TimerConfig;

/// Which pause follows a finished work interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakKind {
    /// Short recovery pause between most work intervals.
    Short,
    /// Extended pause after every 4th session.
    Long,
}

impl BreakKind {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Short => "Short break",
            Self::Long => "Long break",
        }
    }
}

impl std::fmt::Display for BreakKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Which pause a given 1-based session index earns.
///
/// Every 4th session earns a long break; all others a short one.
#[must_use]
pub const fn break_kind(session_index: u32) -> BreakKind {
    if session_index % 4 == 0 {
        BreakKind::Long
    } else {
        BreakKind::Short
    }
}

/// Duration and kind of an upcoming break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakPlan {
    /// Break length in seconds.
    pub seconds: u64,
    /// Short or long.
    pub kind: BreakKind,
}

impl BreakPlan {
    /// True for a long break.
    #[must_use]
    pub const fn is_long(&self) -> bool {
        matches!(self.kind, BreakKind::Long)
    }
}

/// What comes after a completed break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Another work interval, carrying the new 1-based session index.
    NextWork(u32),
    /// The sequence is over.
    Complete,
}

/// Drives the work -> break -> work loop.
///
/// The controller assumes its `TimerConfig` has already been validated: all
/// durations and the session count are positive.
#[derive(Debug, Clone)]
pub struct SessionController {
    timer: TimerConfig,
    /// 1-based index of the session being worked, or just worked.
    current_session: u32,
    on_break: bool,
    running: bool,
}

impl SessionController {
    /// Create a controller for a validated configuration.
    #[must_use]
    pub const fn new(timer: TimerConfig) -> Self {
        Self {
            timer,
            current_session: 0,
            on_break: false,
            running: false,
        }
    }

    /// Begin the sequence at session 1.
    pub fn start(&mut self) {
        self.current_session = 1;
        self.on_break = false;
        self.running = true;
    }

    /// The 1-based index of the current session.
    #[must_use]
    pub const fn current_session(&self) -> u32 {
        self.current_session
    }

    /// Total number of work sessions in the sequence.
    #[must_use]
    pub const fn total_sessions(&self) -> u32 {
        self.timer.sessions
    }

    /// Length of one work interval in seconds.
    #[must_use]
    pub const fn work_seconds(&self) -> u64 {
        self.timer.work_minutes as u64 * 60
    }

    /// The break earned by the session that just finished.
    #[must_use]
    pub const fn break_plan(&self) -> BreakPlan {
        let kind = break_kind(self.current_session);
        let minutes = match kind {
            BreakKind::Short => self.timer.short_break_minutes,
            BreakKind::Long => self.timer.long_break_minutes,
        };
        BreakPlan {
            seconds: minutes as u64 * 60,
            kind,
        }
    }

    /// Mark the transition from working to being on break.
    pub fn begin_break(&mut self) {
        self.on_break = true;
    }

    /// Finish the current break and advance the session counter.
    ///
    /// This is the single advancing transition: it runs once per break, when
    /// the user ends the break through the bypass phrase or the resume
    /// action. Timeout alone never lands here.
    pub fn finish_break(&mut self) -> Advance {
        self.on_break = false;
        self.current_session += 1;

        if self.current_session <= self.timer.sessions {
            Advance::NextWork(self.current_session)
        } else {
            self.running = false;
            Advance::Complete
        }
    }

    /// Request a cooperative stop; the work countdown honors it between
    /// ticks.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// True while the sequence is live.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// True while a break owns the screen.
    #[must_use]
    pub const fn is_on_break(&self) -> bool {
        self.on_break
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(sessions: u32) -> SessionController {
        let timer = TimerConfig {
            work_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            sessions,
        };
        let mut c = SessionController::new(timer);
        c.start();
        c
    }

    #[test]
    fn test_break_kind_every_fourth_is_long() {
        for i in 1..=12 {
            let expected = if i % 4 == 0 {
                BreakKind::Long
            } else {
                BreakKind::Short
            };
            assert_eq!(break_kind(i), expected, "session {i}");
        }
    }

    #[test]
    fn test_start_resets_state() {
        let mut c = controller(4);
        c.begin_break();
        c.start();

        assert_eq!(c.current_session(), 1);
        assert!(c.is_running());
        assert!(!c.is_on_break());
    }

    #[test]
    fn test_break_plan_durations() {
        let mut c = controller(4);

        // Sessions 1-3 earn the short break
        for expected_session in 1..=3 {
            assert_eq!(c.current_session(), expected_session);
            let plan = c.break_plan();
            assert_eq!(plan.kind, BreakKind::Short);
            assert_eq!(plan.seconds, 5 * 60);
            c.finish_break();
        }

        // Session 4 earns the long break
        assert_eq!(c.current_session(), 4);
        let plan = c.break_plan();
        assert_eq!(plan.kind, BreakKind::Long);
        assert_eq!(plan.seconds, 15 * 60);
        assert!(plan.is_long());
    }

    #[test]
    fn test_sequence_of_four_sessions() {
        let mut c = controller(4);

        assert_eq!(c.finish_break(), Advance::NextWork(2));
        assert_eq!(c.finish_break(), Advance::NextWork(3));
        assert_eq!(c.finish_break(), Advance::NextWork(4));
        // No 5th work interval
        assert_eq!(c.finish_break(), Advance::Complete);
        assert!(!c.is_running());
    }

    #[test]
    fn test_session_index_strictly_increases() {
        let mut c = controller(3);
        let mut last = c.current_session();

        loop {
            match c.finish_break() {
                Advance::NextWork(next) => {
                    assert_eq!(next, last + 1);
                    last = next;
                }
                Advance::Complete => break,
            }
        }

        assert_eq!(last, 3);
    }

    #[test]
    fn test_begin_and_finish_break_toggle_flag() {
        let mut c = controller(2);

        c.begin_break();
        assert!(c.is_on_break());

        c.finish_break();
        assert!(!c.is_on_break());
    }

    #[test]
    fn test_stop_clears_running() {
        let mut c = controller(2);
        c.stop();
        assert!(!c.is_running());
    }

    #[test]
    fn test_single_session_sequence() {
        let mut c = controller(1);
        assert_eq!(c.finish_break(), Advance::Complete);
    }
}
