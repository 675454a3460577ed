// src/exec/backend.rs

//! Pluggable invoker and delay abstractions.
//!
//! The retry loop talks to these traits instead of spawning processes and
//! sleeping directly. This makes it easy to swap in fakes in tests while
//! keeping the production implementations in [`invoker`] and [`TokioDelay`]:
//!
//! - `ProcessInvoker` drives real `cargo` and browser-test processes.
//! - Tests can provide their own `ExampleInvoker` that records invocations
//!   and answers with scripted outcomes, and a `RetryDelay` that records
//!   waits without real elapsed time.
//!
//! [`invoker`]: crate::exec::invoker

use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::time::Duration;

use crate::errors::Result;
use crate::types::AttemptOutcome;

/// Trait abstracting how example processes are invoked.
pub trait ExampleInvoker: Send {
    /// Remove previous build outputs for the native example programs, so
    /// attempt 1 of every example starts from a cold build.
    fn clean_native(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;

    /// Run one attempt of one native example with its working directory set
    /// to `run_dir`, teeing combined output to the terminal and `log_path`.
    fn run_native<'a>(
        &'a mut self,
        name: &'a str,
        run_dir: &'a Path,
        log_path: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<AttemptOutcome>> + Send + 'a>>;

    /// Run the browser-test command once with `pattern` as its name filter.
    fn run_web_suite<'a>(
        &'a mut self,
        pattern: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<AttemptOutcome>> + Send + 'a>>;
}

/// Trait abstracting the wait between a failed attempt and its retry.
pub trait RetryDelay: Send {
    fn wait(&mut self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

/// Real delay backed by `tokio::time::sleep`.
#[derive(Debug, Default)]
pub struct TokioDelay;

impl RetryDelay for TokioDelay {
    fn wait(&mut self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(tokio::time::sleep(duration))
    }
}
