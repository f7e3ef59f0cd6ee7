//! Session sequencing and break enforcement.
//!
//! Both state machines here are pure: they are advanced by clock ticks and
//! user actions fed in from the UI driver, and they never touch the terminal
//! themselves.

pub mod controller;
pub mod cues;
pub mod overlay;

pub use controller::{break_kind, Advance, BreakKind, BreakPlan, SessionController};
pub use cues::{Cue, CuePlayer, Cues, SilentCues};
pub use overlay::{BreakOverlay, OverlayPhase, PasswordOutcome, BYPASS_PHRASE};
