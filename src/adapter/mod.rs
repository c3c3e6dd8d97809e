//! External test-suite result adapter
//!
//! Runs a headless-browser test runner against an HTML fixture, captures
//! everything it prints, and reduces that text to a [`TestRunSummary`].
//! Pass/fail is decided from the summary line alone; the runner's exit
//! status is recorded but never consulted.

mod runner;
mod summary;

pub use runner::{run_suite, verify, RunOutcome};
pub use summary::{
    find_summary_line, parse_summary, parse_summary_line, TestRunSummary, SUMMARY_MARKER,
};

use serde::Deserialize;
use std::path::PathBuf;

/// Where the runner, its harness script and the HTML fixture live
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Runner executable (e.g. `phantomjs`)
    pub runner: PathBuf,
    /// Harness script passed to the runner (e.g. `run-qunit.js`)
    pub script: PathBuf,
    /// HTML page that hosts the tests
    pub fixture: PathBuf,
    /// Extra runner arguments, placed before the script
    #[serde(default)]
    pub args: Vec<String>,
    /// Kill the runner after this many seconds. Unbounded when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl SuiteConfig {
    pub fn new(
        runner: impl Into<PathBuf>,
        script: impl Into<PathBuf>,
        fixture: impl Into<PathBuf>,
    ) -> Self {
        Self {
            runner: runner.into(),
            script: script.into(),
            fixture: fixture.into(),
            args: Vec::new(),
            timeout_secs: None,
        }
    }

    /// Human-readable command line, for logs and reports only
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.runner.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.push(self.script.display().to_string());
        parts.push(self.fixture.display().to_string());
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_order() {
        let mut suite = SuiteConfig::new("phantomjs", "run-qunit.js", "tests.html");
        suite.args.push("--debug=false".to_string());
        assert_eq!(
            suite.command_line(),
            "phantomjs --debug=false run-qunit.js tests.html"
        );
    }
}
