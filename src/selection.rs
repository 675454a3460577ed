// src/selection.rs

//! Resolving which examples to run from the CLI flags and the catalogs.

use tracing::info;

use crate::catalog::ExampleCatalog;
use crate::cli::CliArgs;
use crate::errors::{Result, RunnerError};

/// Resolved per-class list of example names to run.
///
/// Computed once per invocation, immutable afterwards. Explicit CLI names
/// keep their CLI order; defaults keep catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub native: Vec<String>,
    pub web: Vec<String>,
}

impl Selection {
    /// Resolve the selection from CLI flags.
    ///
    /// - No class flag at all: both classes run their default-enabled subset.
    /// - `--rust` / `--web` without names: that class's default-enabled
    ///   subset, and the other class runs nothing.
    /// - `--rust=a,b`: exactly those names. Skip-by-default names are allowed
    ///   (with an informational notice); unknown names are fatal before
    ///   anything runs.
    pub fn resolve(
        args: &CliArgs,
        native: &ExampleCatalog,
        web: &ExampleCatalog,
    ) -> Result<Self> {
        let run_both = args.rust.is_none() && args.web.is_none();

        let native_names = match &args.rust {
            Some(request) => resolve_class(request.as_deref(), native)?,
            None if run_both => native.default_enabled(),
            None => Vec::new(),
        };

        let web_names = match &args.web {
            Some(request) => resolve_class(request.as_deref(), web)?,
            None if run_both => web.default_enabled(),
            None => Vec::new(),
        };

        Ok(Self {
            native: native_names,
            web: web_names,
        })
    }
}

fn resolve_class(request: Option<&str>, catalog: &ExampleCatalog) -> Result<Vec<String>> {
    let Some(csv) = request else {
        return Ok(catalog.default_enabled());
    };

    let names: Vec<String> = csv
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    if names.is_empty() {
        return Err(RunnerError::ConfigError(format!(
            "--{}= requires at least one example name",
            catalog.class()
        )));
    }

    for name in &names {
        if !catalog.contains(name) {
            return Err(RunnerError::UnknownExample(format!(
                "'{}' is not a known {} example; valid names: {}",
                name,
                catalog.class(),
                catalog.all().join(", ")
            )));
        }
        if catalog.is_skipped(name) {
            info!(
                example = %name,
                class = %catalog.class(),
                "example is skipped by default; running it because it was requested explicitly"
            );
        }
    }

    Ok(names)
}
