//! Config command: inspect or create the configuration file.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::PomolockError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or written.
pub fn config(cmd: ConfigCommands, format: OutputFormat) -> Result<String, PomolockError> {
    match cmd {
        ConfigCommands::Show => show(format),
        ConfigCommands::Init => init(),
        ConfigCommands::Path => path(),
    }
}

/// Show the active configuration.
fn show(format: OutputFormat) -> Result<String, PomolockError> {
    let config = Config::load()?;

    match format {
        OutputFormat::Json => to_json(&config),
        OutputFormat::Pretty => {
            let timer = config.timer;
            let mut output = Vec::new();

            output.push("Timer".bold().to_string());
            output.push(format!("  Work:        {} min", timer.work_minutes));
            output.push(format!("  Short break: {} min", timer.short_break_minutes));
            output.push(format!(
                "  Long break:  {} min (after every 4th session)",
                timer.long_break_minutes
            ));
            output.push(format!("  Sessions:    {}", timer.sessions));
            output.push(String::new());
            output.push("Cues".bold().to_string());
            output.push(format!("  Sound:         {}", on_off(config.cues.sound)));
            output.push(format!(
                "  Notifications: {}",
                on_off(config.cues.notifications)
            ));

            Ok(output.join("\n"))
        }
    }
}

/// Write a default config file if none exists yet.
fn init() -> Result<String, PomolockError> {
    let paths = Paths::new()?;

    if paths.config_file.exists() {
        return Err(PomolockError::Config(format!(
            "Config file already exists at {}",
            paths.config_file.display()
        )));
    }

    Config::default().save()?;

    Ok(format!(
        "Wrote default config to {}",
        paths.config_file.display()
    ))
}

/// Print the config file path.
fn path() -> Result<String, PomolockError> {
    let paths = Paths::new()?;
    Ok(paths.config_file.display().to_string())
}

const fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_off() {
        assert_eq!(on_off(true), "on");
        assert_eq!(on_off(false), "off");
    }
}
