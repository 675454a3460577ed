// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::{Config, RawConfigFile};
use crate::errors::{Result, RunnerError};

/// Environment variable overriding `[runner].retries`.
pub const RETRIES_ENV: &str = "EXRUN_RETRIES";

/// Load a configuration file from a given path and return the raw
/// `RawConfigFile`.
///
/// A missing file is not an error: every setting has a default, so the
/// config file only exists to override them. This only performs TOML
/// deserialization; use [`load_and_validate`] for semantic validation.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(RawConfigFile::default());
        }
        Err(e) => return Err(e.into()),
    };

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path, apply environment overrides, and run
/// validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML (defaults if the file is missing).
/// - Applies `EXRUN_RETRIES` on top of the file value.
/// - Checks retry budget, run-directory and web-command sanity.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Config> {
    let mut raw = load_from_path(&path)?;
    apply_env_overrides(&mut raw)?;
    let config = Config::try_from(raw)?;
    Ok(config)
}

fn apply_env_overrides(raw: &mut RawConfigFile) -> Result<()> {
    if let Ok(value) = std::env::var(RETRIES_ENV) {
        let retries = value.trim().parse::<u32>().map_err(|_| {
            RunnerError::ConfigError(format!(
                "{RETRIES_ENV} must be a non-negative integer (got '{value}')"
            ))
        })?;
        raw.runner.retries = retries;
    }
    Ok(())
}
