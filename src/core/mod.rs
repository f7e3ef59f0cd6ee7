//! Core abstractions for pomolock.
//!
//! This module provides the countdown timer and duration helpers shared by
//! the session logic and the UI.

mod timer;

pub use timer::{format_mmss, parse_duration, Timer, TimerState};
