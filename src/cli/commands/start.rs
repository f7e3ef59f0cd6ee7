//! Start command: run a Pomodoro sequence.

use colored::Colorize;

use crate::cli::args::StartArgs;
use crate::config::Config;
use crate::core::parse_duration;
use crate::error::PomolockError;
use crate::platform::WindowPin;
use crate::session::{Cues, SessionController};
use crate::tui::{self, RunOutcome};

/// Run the work/break sequence until it completes or is stopped.
///
/// Command-line overrides are merged over the config file, then the merged
/// timer settings are validated before anything touches the terminal.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the terminal cannot
/// be set up.
pub fn start(args: StartArgs) -> Result<String, PomolockError> {
    let config = Config::load()?;

    let mut timer = config.timer;
    if let Some(ref value) = args.work {
        timer.work_minutes = parse_minutes("work", value)?;
    }
    if let Some(ref value) = args.short_break {
        timer.short_break_minutes = parse_minutes("short break", value)?;
    }
    if let Some(ref value) = args.long_break {
        timer.long_break_minutes = parse_minutes("long break", value)?;
    }
    if let Some(count) = args.sessions {
        timer.sessions = count;
    }

    // The sequence must never start with a bad configuration.
    timer.validate()?;

    let mut cue_config = config.cues;
    if args.no_sound {
        cue_config.sound = false;
    }
    if args.no_notifications {
        cue_config.notifications = false;
    }

    let controller = SessionController::new(timer);
    let outcome = tui::run(controller, &Cues::new(cue_config), &WindowPin)?;

    match outcome {
        RunOutcome::Completed => Ok(format!(
            "{}\n   {} sessions of {} minutes done. Nice work!",
            "Pomodoro sequence complete!".green().bold(),
            timer.sessions,
            timer.work_minutes
        )),
        RunOutcome::Stopped { session } => Ok(format!(
            "{} during session {} of {}.",
            "Stopped".yellow(),
            session,
            timer.sessions
        )),
    }
}

/// Parse a duration flag like "25", "50m" or "1h" into whole minutes.
fn parse_minutes(field: &str, value: &str) -> Result<u32, PomolockError> {
    let minutes = parse_duration(value)
        .map(|d| d.num_minutes())
        .ok_or_else(|| {
            PomolockError::Config(format!("Invalid {field} duration: '{value}'"))
        })?;

    u32::try_from(minutes)
        .map_err(|_| PomolockError::Config(format!("Invalid {field} duration: '{value}'")))
}
