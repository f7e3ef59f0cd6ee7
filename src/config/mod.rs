//! Configuration management for pomolock.
//!
//! This module handles loading and saving configuration from `~/.pomolock/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, CueConfig, GeneralConfig, TimerConfig};
