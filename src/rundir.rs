// src/rundir.rs

//! Run-directory management for native attempts.
//!
//! Every attempt of every native example gets its own directory under the
//! base runs directory, so any local state an example writes (SQLite store,
//! keystore files) cannot bleed into a retry or a sibling run. The directory
//! and its log persist after the run for postmortem inspection.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use tracing::{debug, info};

use crate::errors::{Result, RunnerError};

/// Name of the shared assembly-sources link inside the runs directory.
pub const MASM_LINK_NAME: &str = "masm";

/// Name of the captured-output file inside each attempt directory.
pub const LOG_FILE_NAME: &str = "output.log";

/// The base runs directory, prepared once per invocation.
#[derive(Debug, Clone)]
pub struct RunWorkspace {
    base: PathBuf,
}

impl RunWorkspace {
    /// Create the base runs directory if absent and ensure the shared `masm`
    /// link points at the canonical assembly-sources location.
    ///
    /// If the link path exists but is not a symlink, this fails fast instead
    /// of running in an unexpected layout.
    pub fn prepare(base: impl Into<PathBuf>, masm_dir: &Path) -> Result<Self> {
        let base = base.into();

        fs::create_dir_all(&base)
            .with_context(|| format!("creating runs directory {}", base.display()))?;
        ensure_masm_link(&base, masm_dir)?;

        Ok(Self { base })
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Create a fresh directory for one attempt of one example.
    ///
    /// The name combines example name, unix timestamp, process id, and the
    /// 1-based attempt number, so no two attempts ever share a directory.
    pub fn attempt_dir(&self, example: &str, attempt: u32) -> Result<PathBuf> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let pid = std::process::id();

        let dir = self.base.join(format!("{example}-{timestamp}-{pid}-a{attempt}"));
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating attempt directory {}", dir.display()))?;

        debug!(example = %example, attempt, dir = %dir.display(), "created attempt directory");
        Ok(dir)
    }
}

/// Make sure `<base>/masm` is a symlink to the assembly sources.
///
/// The link target is made absolute first; a relative target would resolve
/// relative to the runs directory, not the working directory it was
/// configured against.
fn ensure_masm_link(base: &Path, masm_dir: &Path) -> Result<()> {
    let link = base.join(MASM_LINK_NAME);

    match fs::symlink_metadata(&link) {
        Ok(meta) if meta.file_type().is_symlink() => Ok(()),
        Ok(_) => Err(RunnerError::ConfigError(format!(
            "{} exists but is not a symlink; move it out of the way before running",
            link.display()
        ))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let target = std::path::absolute(masm_dir)
                .with_context(|| format!("resolving masm directory {}", masm_dir.display()))?;
            make_symlink(&target, &link).with_context(|| {
                format!("linking {} -> {}", link.display(), target.display())
            })?;
            info!(link = %link.display(), target = %target.display(), "created shared masm link");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(unix)]
fn make_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn make_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}
