#![allow(dead_code)]

use exrun::config::{Config, RawConfigFile};

/// Builder for `Config` to simplify test setup.
pub struct ConfigBuilder {
    raw: RawConfigFile,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawConfigFile::default(),
        }
    }

    pub fn retries(mut self, retries: u32) -> Self {
        self.raw.runner.retries = retries;
        self
    }

    pub fn retry_delay_secs(mut self, secs: u64) -> Self {
        self.raw.runner.retry_delay_secs = secs;
        self
    }

    pub fn runs_dir(mut self, dir: &str) -> Self {
        self.raw.runner.runs_dir = dir.to_string();
        self
    }

    pub fn manifest(mut self, path: &str) -> Self {
        self.raw.native.manifest = path.to_string();
        self
    }

    pub fn masm_dir(mut self, dir: &str) -> Self {
        self.raw.native.masm_dir = dir.to_string();
        self
    }

    pub fn web_command(mut self, command: &str) -> Self {
        self.raw.web.command = command.to_string();
        self
    }

    pub fn web_args(mut self, args: &[&str]) -> Self {
        self.raw.web.args = args.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> Config {
        Config::try_from(self.raw).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
