//! Shell completions generation.
//!
//! Generates completion scripts for bash, zsh, fish, PowerShell and elvish.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::PomolockError;

/// Generate a completion script for the named shell.
///
/// # Errors
///
/// Returns an error for an unknown shell name.
pub fn completions(shell: &str) -> Result<String, PomolockError> {
    let shell = shell_from_str(shell).ok_or_else(|| {
        PomolockError::Config(format!(
            "Unknown shell '{shell}' (expected bash, zsh, fish, powershell or elvish)"
        ))
    })?;

    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "pomolock", &mut buf);

    String::from_utf8(buf)
        .map_err(|e| PomolockError::Config(format!("UTF-8 error in completions: {e}")))
}

/// Get shell from string name.
fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}
