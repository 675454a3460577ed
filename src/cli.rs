// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `exrun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "exrun",
    version,
    about = "Run the tutorial example programs with per-attempt isolation and retries.",
    long_about = None
)]
pub struct CliArgs {
    /// Run native examples.
    ///
    /// Bare `--rust` runs the default-enabled set; `--rust=a,b` runs exactly
    /// the named examples (comma-separated), in the given order.
    #[arg(long, value_name = "NAMES", num_args = 0..=1, require_equals = true)]
    pub rust: Option<Option<String>>,

    /// Run browser examples.
    ///
    /// Bare `--web` runs the default-enabled set; `--web=a,b` runs exactly
    /// the named examples (comma-separated).
    #[arg(long, value_name = "NAMES", num_args = 0..=1, require_equals = true)]
    pub web: Option<Option<String>>,

    /// Print both catalogs (default-enabled and skip-by-default) and exit.
    #[arg(long)]
    pub list: bool,

    /// Path to the orchestrator config file (TOML).
    ///
    /// A missing file is fine; all settings have defaults.
    #[arg(long, value_name = "PATH", default_value = "Exrun.toml")]
    pub config: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `EXRUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
