// src/catalog.rs

//! Static registry of known example names.
//!
//! Each execution class (native, web) has an ordered catalog of names plus a
//! skip-by-default subset: examples that exist but need something beyond a
//! plain devnet connection (a remote prover, oracle data, network-transaction
//! support on the node) and therefore only run when explicitly requested.

use std::collections::HashSet;

use crate::errors::{Result, RunnerError};
use crate::types::ExampleClass;

/// Native example binaries, in catalog (and default execution) order.
const NATIVE_EXAMPLES: &[&str] = &[
    "create_mint_consume_send",
    "counter_contract_deploy",
    "counter_contract_increment",
    "counter_contract_fpi",
    "hash_preimage_note",
    "note_creation_in_masm",
    "mapping_example",
    "unauthenticated_note_transfer",
    "network_notes_counter_contract",
    "delegated_prover",
    "oracle_data_query",
];

/// Native examples excluded from the default run.
const NATIVE_SKIPPED: &[&str] = &[
    "network_notes_counter_contract",
    "delegated_prover",
    "oracle_data_query",
];

/// Browser examples, as named in the browser test suite.
const WEB_EXAMPLES: &[&str] = &[
    "create_mint_consume",
    "counter_contract",
    "note_transfer",
    "delegated_proving",
];

const WEB_SKIPPED: &[&str] = &["delegated_proving"];

/// Catalog of known example names for one execution class.
///
/// Constructed once at startup and read-only afterwards. Membership checks
/// go through a set; ordering comes from the full name list.
#[derive(Debug, Clone)]
pub struct ExampleCatalog {
    class: ExampleClass,
    names: Vec<String>,
    skipped: HashSet<String>,
}

impl ExampleCatalog {
    /// Build a catalog, checking that every skip-by-default name is also
    /// present in the full name list.
    pub fn new(class: ExampleClass, names: &[&str], skipped: &[&str]) -> Result<Self> {
        let names: Vec<String> = names.iter().map(|s| s.to_string()).collect();

        for skip in skipped {
            if !names.iter().any(|n| n == skip) {
                return Err(RunnerError::ConfigError(format!(
                    "skip-by-default example '{skip}' is not in the {class} catalog"
                )));
            }
        }

        let skipped = skipped.iter().map(|s| s.to_string()).collect();
        Ok(Self {
            class,
            names,
            skipped,
        })
    }

    pub fn class(&self) -> ExampleClass {
        self.class
    }

    /// All known names, in catalog order.
    pub fn all(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn is_skipped(&self, name: &str) -> bool {
        self.skipped.contains(name)
    }

    /// Names run when the class is selected without explicit names,
    /// in catalog order.
    pub fn default_enabled(&self) -> Vec<String> {
        self.names
            .iter()
            .filter(|n| !self.skipped.contains(n.as_str()))
            .cloned()
            .collect()
    }

    /// Names excluded from the default run, in catalog order.
    pub fn skip_by_default(&self) -> Vec<String> {
        self.names
            .iter()
            .filter(|n| self.skipped.contains(n.as_str()))
            .cloned()
            .collect()
    }
}

/// The native example catalog.
pub fn native_catalog() -> Result<ExampleCatalog> {
    ExampleCatalog::new(ExampleClass::Native, NATIVE_EXAMPLES, NATIVE_SKIPPED)
}

/// The browser example catalog.
pub fn web_catalog() -> Result<ExampleCatalog> {
    ExampleCatalog::new(ExampleClass::Web, WEB_EXAMPLES, WEB_SKIPPED)
}
