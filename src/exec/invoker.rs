// src/exec/invoker.rs

//! Production invoker: drives `cargo` for native examples and the configured
//! browser-test command for the web suite.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::process::Stdio;
use std::sync::Arc;

use anyhow::Context;
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::{Result, RunnerError};
use crate::exec::backend::ExampleInvoker;
use crate::exec::tee;
use crate::types::AttemptOutcome;

/// Debug-backtrace toggle forwarded to native children.
pub const BACKTRACE_ENV: &str = "RUST_BACKTRACE";

/// Invoker backed by real OS processes.
pub struct ProcessInvoker {
    cargo: String,
    manifest: PathBuf,
    backtrace: String,
    web_command: String,
    web_args: Vec<String>,
    grep_flag: String,
}

impl ProcessInvoker {
    pub fn from_config(cfg: &Config) -> Result<Self> {
        // The manifest path must be absolute: every attempt runs with its
        // working directory set to the attempt directory.
        let manifest = std::path::absolute(&cfg.native.manifest)
            .with_context(|| format!("resolving manifest path {}", cfg.native.manifest))?;

        Ok(Self {
            cargo: "cargo".to_string(),
            manifest,
            backtrace: std::env::var(BACKTRACE_ENV).unwrap_or_else(|_| "1".to_string()),
            web_command: cfg.web.command.clone(),
            web_args: cfg.web.args.clone(),
            grep_flag: cfg.web.grep_flag.clone(),
        })
    }

    /// Replace the `cargo` executable. Lets tests point the invoker at a
    /// stub command instead of a real cargo build.
    pub fn with_cargo(mut self, cargo: impl Into<String>) -> Self {
        self.cargo = cargo.into();
        self
    }
}

impl ExampleInvoker for ProcessInvoker {
    fn clean_native(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            info!(manifest = %self.manifest.display(), "cleaning previous native build outputs");

            let status = Command::new(&self.cargo)
                .arg("clean")
                .arg("--manifest-path")
                .arg(&self.manifest)
                .status()
                .await
                .context("running cargo clean")?;

            if !status.success() {
                return Err(RunnerError::ConfigError(format!(
                    "cargo clean exited with {status}"
                )));
            }
            Ok(())
        })
    }

    fn run_native<'a>(
        &'a mut self,
        name: &'a str,
        run_dir: &'a Path,
        log_path: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<AttemptOutcome>> + Send + 'a>> {
        Box::pin(async move {
            debug!(example = %name, dir = %run_dir.display(), "spawning native example");

            let mut cmd = Command::new(&self.cargo);
            cmd.arg("run")
                .arg("--release")
                .arg("--manifest-path")
                .arg(&self.manifest)
                .arg("--bin")
                .arg(name)
                .current_dir(run_dir)
                .env(BACKTRACE_ENV, &self.backtrace)
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(true);

            let mut child = cmd
                .spawn()
                .with_context(|| format!("spawning native example '{name}'"))?;

            let sink = tee::open_log(log_path).await?;
            let mut readers = Vec::new();
            if let Some(stdout) = child.stdout.take() {
                readers.push(tee::spawn_tee(stdout, Arc::clone(&sink)));
            }
            if let Some(stderr) = child.stderr.take() {
                readers.push(tee::spawn_tee(stderr, Arc::clone(&sink)));
            }

            let status = child
                .wait()
                .await
                .with_context(|| format!("waiting for native example '{name}'"))?;

            // Drain both streams fully before the outcome is reported, so
            // the log is complete when a retry decision is made.
            for reader in readers {
                let _ = reader.await;
            }
            tee::finish_log(sink).await;

            Ok(outcome_from_status(status))
        })
    }

    fn run_web_suite<'a>(
        &'a mut self,
        pattern: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<AttemptOutcome>> + Send + 'a>> {
        Box::pin(async move {
            info!(
                command = %self.web_command,
                pattern = %pattern,
                "delegating web examples to the browser-test command"
            );

            let status = Command::new(&self.web_command)
                .args(&self.web_args)
                .arg(&self.grep_flag)
                .arg(pattern)
                .status()
                .await
                .with_context(|| {
                    format!("running browser-test command '{}'", self.web_command)
                })?;

            Ok(outcome_from_status(status))
        })
    }
}

fn outcome_from_status(status: std::process::ExitStatus) -> AttemptOutcome {
    if status.success() {
        AttemptOutcome::Success
    } else {
        AttemptOutcome::Failed(status.code().unwrap_or(-1))
    }
}
