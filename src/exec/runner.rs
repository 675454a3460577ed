// src/exec/runner.rs

//! The native retry loop and the web-suite delegation.

use tracing::{info, warn};

use crate::config::Config;
use crate::errors::Result;
use crate::exec::backend::{ExampleInvoker, RetryDelay};
use crate::rundir::{LOG_FILE_NAME, RunWorkspace};
use crate::types::{AttemptOutcome, FailureRecord};

/// Run every selected native example, one at a time, retrying failures.
///
/// Each attempt gets a fresh directory from the workspace. A failing attempt
/// is retried after the configured delay; only exhaustion of the attempt
/// budget produces a [`FailureRecord`], and the loop always proceeds to the
/// remaining examples. Infrastructure errors (spawn failure, IO) abort the
/// whole run instead.
pub async fn run_native_examples<I, D>(
    names: &[String],
    cfg: &Config,
    workspace: &RunWorkspace,
    invoker: &mut I,
    delay: &mut D,
) -> Result<Vec<FailureRecord>>
where
    I: ExampleInvoker,
    D: RetryDelay,
{
    let retries = cfg.runner.retries;
    let pause = cfg.retry_delay();
    let mut failures = Vec::new();

    for name in names {
        let mut succeeded = false;

        for attempt in 1..=retries {
            let dir = workspace.attempt_dir(name, attempt)?;
            let log_path = dir.join(LOG_FILE_NAME);

            info!(
                example = %name,
                attempt,
                budget = retries,
                dir = %dir.display(),
                "starting native attempt"
            );

            match invoker.run_native(name, &dir, &log_path).await? {
                AttemptOutcome::Success => {
                    info!(example = %name, attempt, "native example succeeded");
                    succeeded = true;
                    break;
                }
                AttemptOutcome::Failed(code) => {
                    if attempt == retries {
                        warn!(
                            example = %name,
                            attempt,
                            exit_code = code,
                            "native example failed; attempt budget exhausted"
                        );
                    } else {
                        warn!(
                            example = %name,
                            attempt,
                            exit_code = code,
                            delay_secs = pause.as_secs(),
                            "native example failed; retrying after delay"
                        );
                        delay.wait(pause).await;
                    }
                }
            }
        }

        if !succeeded {
            failures.push(FailureRecord::Native { name: name.clone() });
        }
    }

    Ok(failures)
}

/// Join the selected web example names into one alternation pattern.
///
/// Names are regex-escaped so none of them can widen the filter.
pub fn web_filter_pattern(names: &[String]) -> String {
    names
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|")
}

/// Delegate the selected web examples to the browser-test command.
///
/// One invocation covers the whole class; a non-zero exit yields a single
/// suite-level [`FailureRecord`], since per-example results are not visible
/// in the aggregate exit code.
pub async fn run_web_examples<I>(names: &[String], invoker: &mut I) -> Result<Vec<FailureRecord>>
where
    I: ExampleInvoker,
{
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let pattern = web_filter_pattern(names);
    match invoker.run_web_suite(&pattern).await? {
        AttemptOutcome::Success => Ok(Vec::new()),
        AttemptOutcome::Failed(code) => {
            warn!(exit_code = code, "browser-test command failed");
            Ok(vec![FailureRecord::WebSuite])
        }
    }
}
