// src/config/validate.rs

use crate::config::model::{Config, RawConfigFile};
use crate::errors::{Result, RunnerError};

impl TryFrom<RawConfigFile> for Config {
    type Error = crate::errors::RunnerError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(Config::new_unchecked(raw.runner, raw.native, raw.web))
    }
}

fn validate_raw_config(raw: &RawConfigFile) -> Result<()> {
    validate_runner(raw)?;
    validate_native(raw)?;
    validate_web(raw)?;
    Ok(())
}

fn validate_runner(raw: &RawConfigFile) -> Result<()> {
    if raw.runner.retries == 0 {
        return Err(RunnerError::ConfigError(
            "[runner].retries must be >= 1 (got 0)".to_string(),
        ));
    }

    if raw.runner.runs_dir.trim().is_empty() {
        return Err(RunnerError::ConfigError(
            "[runner].runs_dir must not be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_native(raw: &RawConfigFile) -> Result<()> {
    if raw.native.manifest.trim().is_empty() {
        return Err(RunnerError::ConfigError(
            "[native].manifest must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_web(raw: &RawConfigFile) -> Result<()> {
    if raw.web.command.trim().is_empty() {
        return Err(RunnerError::ConfigError(
            "[web].command must not be empty".to_string(),
        ));
    }
    Ok(())
}
