//! Platform integration for keeping the break surface in front.
//!
//! Terminal emulators cannot be made always-on-top from the inside, so this
//! goes through the window manager's own tooling where one is available.
//! The whole operation is best-effort: every implementation may fail, and
//! callers surface the failure on the status line and move on.

use std::process::Command;

use crate::error::PomolockError;

/// Capability to pin the current window above others and onto every
/// workspace.
#[cfg_attr(test, mockall::automock)]
pub trait DesktopVisibility {
    /// Try to raise the window hosting this process. Failure is reported,
    /// never fatal.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying window-manager call fails or no
    /// tooling is present.
    fn claim_foreground(&self) -> Result<(), PomolockError>;
}

/// Pin the active window using whatever the host OS offers.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowPin;

impl WindowPin {
    fn run(program: &str, args: &[&str]) -> Result<(), PomolockError> {
        let output = Command::new(program).args(args).output().map_err(|e| {
            PomolockError::Config(format!("Failed to run {program}: {e}"))
        })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(PomolockError::Config(format!(
                "{program} exited with {}: {}",
                output.status,
                stderr.trim()
            )))
        }
    }
}

impl DesktopVisibility for WindowPin {
    #[cfg(target_os = "linux")]
    fn claim_foreground(&self) -> Result<(), PomolockError> {
        // Keep the terminal above other windows and visible on every
        // workspace. Requires an EWMH-compliant window manager.
        Self::run("wmctrl", &["-r", ":ACTIVE:", "-b", "add,above,sticky"])
    }

    #[cfg(target_os = "macos")]
    fn claim_foreground(&self) -> Result<(), PomolockError> {
        Self::run(
            "osascript",
            &[
                "-e",
                "tell application \"System Events\" to set frontmost of first process whose frontmost is true to true",
            ],
        )
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    fn claim_foreground(&self) -> Result<(), PomolockError> {
        Err(PomolockError::Config(
            "No window pinning support on this platform".to_string(),
        ))
    }
}

/// Fallback that claims nothing and never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopVisibility;

impl DesktopVisibility for NoopVisibility {
    fn claim_foreground(&self) -> Result<(), PomolockError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_always_succeeds() {
        assert!(NoopVisibility.claim_foreground().is_ok());
    }
}
