//! Audio and notification cues.
//!
//! Cues are fire-and-forget: a missing notification daemon or a terminal
//! with the bell disabled must never interrupt the timer, so every failure
//! here is swallowed.

use std::io::Write;

use notify_rust::Notification;

use crate::config::CueConfig;

/// Moments in the sequence that get an audible/visible cue.
///
/// Break end deliberately has no cue; the next work interval's cue covers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A work interval is starting.
    WorkStart,
    /// A break is starting.
    BreakStart,
    /// The whole sequence is done.
    SequenceComplete,
}

impl Cue {
    /// Number of terminal bells for this cue: one for work, two for a
    /// break, three when the sequence completes.
    #[must_use]
    pub const fn bell_count(&self) -> usize {
        match self {
            Self::WorkStart => 1,
            Self::BreakStart => 2,
            Self::SequenceComplete => 3,
        }
    }

    /// Notification body text for this cue.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::WorkStart => "Work session started. Stay focused!",
            Self::BreakStart => "Time for a break. Step away from the keyboard.",
            Self::SequenceComplete => "Pomodoro sequence complete!",
        }
    }
}

/// Something that can play a cue.
#[cfg_attr(test, mockall::automock)]
pub trait CuePlayer {
    /// Play the given cue. Implementations must not fail loudly.
    fn play(&self, cue: Cue);
}

/// Default cue player: terminal bell plus desktop notification, each
/// individually togglable in the config.
#[derive(Debug, Clone, Copy)]
pub struct Cues {
    config: CueConfig,
}

impl Cues {
    /// Build a player honoring the given toggles.
    #[must_use]
    pub const fn new(config: CueConfig) -> Self {
        Self { config }
    }

    fn ring_bell(count: usize) {
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(&b"\x07".repeat(count));
        let _ = stdout.flush();
    }

    fn notify(cue: Cue) {
        let _ = Notification::new()
            .summary("pomolock")
            .body(cue.message())
            .show();
    }
}

impl CuePlayer for Cues {
    fn play(&self, cue: Cue) {
        if self.config.sound {
            Self::ring_bell(cue.bell_count());
        }
        if self.config.notifications {
            Self::notify(cue);
        }
    }
}

/// Cue player that does nothing; stands in for [`Cues`] in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCues;

impl CuePlayer for SilentCues {
    fn play(&self, _cue: Cue) {}
}
