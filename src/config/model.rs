// src/config/model.rs

use serde::Deserialize;
use std::time::Duration;

/// Top-level orchestrator configuration as read from a TOML file.
///
/// All sections are optional and have defaults, so a missing config file is
/// equivalent to an empty one:
///
/// ```toml
/// [runner]
/// retries = 3
/// retry_delay_secs = 10
/// runs_dir = "runs"
///
/// [native]
/// manifest = "rust-client/Cargo.toml"
/// masm_dir = "masm"
///
/// [web]
/// command = "npm"
/// args = ["--prefix", "web-client", "test", "--"]
/// grep_flag = "--grep"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub runner: RunnerSection,

    #[serde(default)]
    pub native: NativeSection,

    #[serde(default)]
    pub web: WebSection,
}

/// `[runner]` section: retry budget and run-directory layout.
#[derive(Debug, Clone, Deserialize)]
pub struct RunnerSection {
    /// Attempt budget per native example (total attempts, not extra tries).
    ///
    /// Overridable at runtime via the `EXRUN_RETRIES` environment variable.
    #[serde(default = "default_retries")]
    pub retries: u32,

    /// Fixed delay between a failed attempt and its retry.
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,

    /// Base directory holding one subdirectory per attempt.
    #[serde(default = "default_runs_dir")]
    pub runs_dir: String,
}

fn default_retries() -> u32 {
    3
}

fn default_retry_delay_secs() -> u64 {
    10
}

fn default_runs_dir() -> String {
    "runs".to_string()
}

impl Default for RunnerSection {
    fn default() -> Self {
        Self {
            retries: default_retries(),
            retry_delay_secs: default_retry_delay_secs(),
            runs_dir: default_runs_dir(),
        }
    }
}

/// `[native]` section: where the native example binaries live.
#[derive(Debug, Clone, Deserialize)]
pub struct NativeSection {
    /// Cargo manifest of the project holding the example binaries.
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Canonical assembly-sources directory, linked into the runs directory
    /// so every attempt sees the same sources without copies.
    #[serde(default = "default_masm_dir")]
    pub masm_dir: String,
}

fn default_manifest() -> String {
    "rust-client/Cargo.toml".to_string()
}

fn default_masm_dir() -> String {
    "masm".to_string()
}

impl Default for NativeSection {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            masm_dir: default_masm_dir(),
        }
    }
}

/// `[web]` section: the external browser-test command.
#[derive(Debug, Clone, Deserialize)]
pub struct WebSection {
    #[serde(default = "default_web_command")]
    pub command: String,

    /// Arguments placed before the grep flag.
    #[serde(default = "default_web_args")]
    pub args: Vec<String>,

    /// Flag that introduces the name-filter pattern.
    #[serde(default = "default_grep_flag")]
    pub grep_flag: String,
}

fn default_web_command() -> String {
    "npm".to_string()
}

fn default_web_args() -> Vec<String> {
    vec![
        "--prefix".to_string(),
        "web-client".to_string(),
        "test".to_string(),
        "--".to_string(),
    ]
}

fn default_grep_flag() -> String {
    "--grep".to_string()
}

impl Default for WebSection {
    fn default() -> Self {
        Self {
            command: default_web_command(),
            args: default_web_args(),
            grep_flag: default_grep_flag(),
        }
    }
}

/// Validated configuration handed to the rest of the application.
///
/// Construct via `Config::try_from(raw)` (see `validate.rs`) or
/// [`crate::config::load_and_validate`].
#[derive(Debug, Clone)]
pub struct Config {
    pub runner: RunnerSection,
    pub native: NativeSection,
    pub web: WebSection,
}

impl Config {
    /// Internal constructor used after validation has passed.
    pub(crate) fn new_unchecked(
        runner: RunnerSection,
        native: NativeSection,
        web: WebSection,
    ) -> Self {
        Self {
            runner,
            native,
            web,
        }
    }

    /// The fixed wait between a failed attempt and its retry.
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.runner.retry_delay_secs)
    }
}
