//! Suite file configuration types
//!
//! Defines the data structures for deserializing YAML suite files.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::adapter::SuiteConfig;
use crate::common::{Error, Result};

/// A suite definition loaded from a YAML file
#[derive(Deserialize, Debug)]
pub struct SuiteFile {
    /// Name of the suite
    pub name: String,
    /// Optional description of what the suite covers
    pub description: Option<String>,
    /// Runner executable; bare names are looked up on PATH
    pub runner: PathBuf,
    /// Harness script, relative to the suite file
    pub script: PathBuf,
    /// HTML fixture, relative to the suite file
    pub fixture: PathBuf,
    /// Extra runner arguments
    #[serde(default)]
    pub args: Vec<String>,
    /// Kill the runner after this many seconds
    pub timeout_secs: Option<u64>,
    /// Fail on any failed assertion
    #[serde(default)]
    pub strict: bool,
    /// Additional expectations on the counts
    pub expect: Option<CountExpectation>,
}

/// Expectations on the scraped counts
#[derive(Deserialize, Debug, Default, Clone)]
pub struct CountExpectation {
    /// Minimum number of assertions that must have run
    pub min_total: Option<u64>,
    /// Maximum number of failed assertions tolerated
    pub max_failed: Option<u64>,
}

impl SuiteFile {
    /// Load and parse a suite file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read suite file '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse suite file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Build the runner configuration, resolving paths against `base_dir`
    pub fn to_suite_config(&self, base_dir: &Path) -> SuiteConfig {
        let resolve = |p: &PathBuf| {
            if p.is_relative() {
                base_dir.join(p)
            } else {
                p.clone()
            }
        };

        // Bare runner names stay as-is for PATH lookup
        let runner = if self.runner.components().count() > 1 {
            resolve(&self.runner)
        } else {
            self.runner.clone()
        };

        SuiteConfig {
            runner,
            script: resolve(&self.script),
            fixture: resolve(&self.fixture),
            args: self.args.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
