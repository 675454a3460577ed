// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running the example programs and
//! the browser-test command, and for the retry semantics around them.
//!
//! - [`backend`] provides the `ExampleInvoker` and `RetryDelay` traits that
//!   the retry loop depends on, so tests can substitute fakes.
//! - [`invoker`] contains the production `ProcessInvoker` built on
//!   `tokio::process::Command`.
//! - [`runner`] owns the per-example retry loop and the single-shot web
//!   delegation.
//! - [`tee`] fans child output out to the terminal and the attempt log.

pub mod backend;
pub mod invoker;
pub mod runner;
pub mod tee;

pub use backend::{ExampleInvoker, RetryDelay, TokioDelay};
pub use invoker::ProcessInvoker;
pub use runner::{run_native_examples, run_web_examples, web_filter_pattern};
