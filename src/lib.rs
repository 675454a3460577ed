// src/lib.rs

pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod report;
pub mod rundir;
pub mod selection;
pub mod types;

use std::path::Path;

use crate::catalog::{ExampleCatalog, native_catalog, web_catalog};
use crate::cli::CliArgs;
use crate::config::load_and_validate;
use crate::errors::Result;
use crate::exec::{
    ExampleInvoker, ProcessInvoker, TokioDelay, run_native_examples, run_web_examples,
};
use crate::rundir::RunWorkspace;
use crate::selection::Selection;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - catalog construction
/// - config loading
/// - selection resolution
/// - run-directory preparation and the cold-build clean (native path only)
/// - the native and web runners
/// - the final summary
///
/// Returns the process exit code.
pub async fn run(args: CliArgs) -> Result<i32> {
    let native = native_catalog()?;
    let web = web_catalog()?;

    if args.list {
        print_listing(&native, &web);
        return Ok(0);
    }

    let cfg = load_and_validate(&args.config)?;
    let selection = Selection::resolve(&args, &native, &web)?;

    let mut invoker = ProcessInvoker::from_config(&cfg)?;
    let mut delay = TokioDelay;
    let mut failures = Vec::new();

    if !selection.native.is_empty() {
        let workspace =
            RunWorkspace::prepare(&cfg.runner.runs_dir, Path::new(&cfg.native.masm_dir))?;

        // Cold build for attempt 1 of every example: no stale artifacts.
        invoker.clean_native().await?;

        failures.extend(
            run_native_examples(&selection.native, &cfg, &workspace, &mut invoker, &mut delay)
                .await?,
        );
    }

    failures.extend(run_web_examples(&selection.web, &mut invoker).await?);

    Ok(report::summarize(&failures))
}

/// `--list` output: default-enabled names, then skip-by-default names,
/// per class.
fn print_listing(native: &ExampleCatalog, web: &ExampleCatalog) {
    for catalog in [native, web] {
        println!("{} examples:", catalog.class());
        for name in catalog.default_enabled() {
            println!("  {name}");
        }
        for name in catalog.skip_by_default() {
            println!("  {name} (skipped by default)");
        }
        println!();
    }
}
