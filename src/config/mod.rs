// src/config/mod.rs

//! Orchestrator configuration: TOML model, loader, and validation.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{RETRIES_ENV, load_and_validate, load_from_path};
pub use model::{Config, NativeSection, RawConfigFile, RunnerSection, WebSection};
