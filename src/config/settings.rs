//! Configuration settings for pomolock.
//!
//! Settings are loaded from `~/.pomolock/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::PomolockError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Timer durations and session count.
    pub timer: TimerConfig,
    /// Cue playback settings.
    pub cues: CueConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
}

/// Timer durations and session count.
///
/// All four values must be positive; `validate` is the single gate that
/// enforces this before a sequence is allowed to start.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Work interval length in minutes.
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    /// Short break length in minutes.
    #[serde(default = "default_short_break")]
    pub short_break_minutes: u32,
    /// Long break length in minutes, used after every 4th session.
    #[serde(default = "default_long_break")]
    pub long_break_minutes: u32,
    /// Number of work sessions in the sequence.
    #[serde(default = "default_sessions")]
    pub sessions: u32,
}

/// Cue playback settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CueConfig {
    /// Send desktop notifications on work/break transitions.
    #[serde(default = "default_true")]
    pub notifications: bool,
    /// Ring the terminal bell on work/break transitions.
    #[serde(default = "default_true")]
    pub sound: bool,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_work_minutes() -> u32 {
    25
}

const fn default_short_break() -> u32 {
    5
}

const fn default_long_break() -> u32 {
    15
}

const fn default_sessions() -> u32 {
    4
}

const fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            short_break_minutes: default_short_break(),
            long_break_minutes: default_long_break(),
            sessions: default_sessions(),
        }
    }
}

impl Default for CueConfig {
    fn default() -> Self {
        Self {
            notifications: default_true(),
            sound: default_true(),
        }
    }
}

impl TimerConfig {
    /// Check that every duration and the session count are positive.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending field if any value is zero.
    pub fn validate(&self) -> Result<(), PomolockError> {
        let fields = [
            ("work minutes", self.work_minutes),
            ("short break minutes", self.short_break_minutes),
            ("long break minutes", self.long_break_minutes),
            ("session count", self.sessions),
        ];

        for (name, value) in fields {
            if value == 0 {
                return Err(PomolockError::Config(format!(
                    "{name} must be a positive number (got {value})"
                )));
            }
        }

        Ok(())
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, PomolockError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomolockError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomolockError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            PomolockError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), PomolockError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), PomolockError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| PomolockError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            PomolockError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
