use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pomolock")]
#[command(about = "A Pomodoro timer that locks your terminal for breaks")]
#[command(long_about = "pomolock - a Pomodoro timer that locks your terminal for breaks

Runs a sequence of timed work sessions separated by short breaks, with a
long break after every 4th session. Breaks take over the whole terminal
and cannot be dismissed: you either sit them out and resume, or type the
bypass phrase to get back to work early.

QUICK START:
  pomolock start                      Run with defaults (25/5/15, 4 sessions)
  pomolock start --work 50            50-minute work sessions
  pomolock config init                Write a default config file
  pomolock config show                Show the active configuration

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  pomolock <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a Pomodoro sequence
    ///
    /// Runs work sessions back to back, each followed by a break that
    /// locks the terminal. Sessions 1-3 get the short break; every 4th
    /// session gets the long break. After the last session's break the
    /// program exits.
    ///
    /// During a work session q, Escape or Ctrl+C stop the sequence.
    /// During a break those keys do nothing: the break ends only through
    /// the bypass phrase, or by pressing Enter once the countdown is over.
    ///
    /// # Examples
    ///
    ///   pomolock start
    ///   pomolock start --work 50 --short-break 10
    ///   pomolock start --sessions 2
    #[command(alias = "s")]
    Start(StartArgs),

    /// Inspect or create the configuration file
    ///
    /// Settings live in ~/.pomolock/config.yaml and are merged with
    /// built-in defaults; command-line flags override both.
    #[command(alias = "c")]
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   pomolock completions bash > /etc/bash_completion.d/pomolock
    ///   pomolock completions zsh > ~/.zsh/completions/_pomolock
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
}

/// Arguments for the start command.
#[derive(Args)]
pub struct StartArgs {
    /// Work interval length ("25", "50m", "1h")
    #[arg(short, long, value_name = "DURATION")]
    pub work: Option<String>,

    /// Short break length ("5", "10m")
    #[arg(short, long, value_name = "DURATION")]
    pub short_break: Option<String>,

    /// Long break length, used after every 4th session ("15", "30m")
    #[arg(short, long, value_name = "DURATION")]
    pub long_break: Option<String>,

    /// Number of work sessions to run
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub sessions: Option<u32>,

    /// Disable the terminal bell
    #[arg(long)]
    pub no_sound: bool,

    /// Disable desktop notifications
    #[arg(long)]
    pub no_notifications: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the active configuration
    Show,
    /// Write a default config file if none exists
    Init,
    /// Print the config file path
    Path,
}
