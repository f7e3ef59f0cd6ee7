//! Command-line interface for pomolock.

pub mod args;
pub mod commands;
