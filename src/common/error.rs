//! Error types for the suite adapter
//!
//! Every way a suite run can fail maps to one variant here. The binary
//! prints the message and exits non-zero, so messages say what went wrong
//! and, where it helps, what to try next.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the suite adapter
#[derive(Error, Debug)]
pub enum Error {
    // === Runner Errors ===
    #[error("Failed to start runner '{runner}': {error}")]
    RunnerSpawnFailed { runner: String, error: String },

    #[error("Runner '{0}' not found on PATH")]
    RunnerNotFound(String),

    #[error("Runner timed out after {0} seconds and was killed")]
    RunnerTimeout(u64),

    // === Summary Errors ===
    #[error("No summary line containing 'assertions of' in runner output")]
    SummaryNotFound,

    #[error("Malformed summary line, bad {field} count: '{line}'")]
    MalformedSummary { field: String, line: String },

    #[error("Suite reported 0 assertions. Check that the fixture loads its tests")]
    EmptySuite,

    #[error("{failed} of {total} assertions failed")]
    AssertionsFailed { failed: u64, total: u64 },

    #[error("Expectation not met: {0}")]
    ExpectationFailed(String),

    #[error("{failed} of {total} suite(s) failed")]
    SuitesFailed { failed: usize, total: usize },

    // === Configuration Errors ===
    #[error("Suite '{name}' not configured. Available: {available}")]
    SuiteNotFound { name: String, available: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Internal Errors ===
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a runner spawn error
    pub fn spawn_failed(runner: &str, error: &io::Error) -> Self {
        Self::RunnerSpawnFailed {
            runner: runner.to_string(),
            error: error.to_string(),
        }
    }

    /// Create a malformed summary error for one count field
    pub fn malformed(field: &str, line: &str) -> Self {
        Self::MalformedSummary {
            field: field.to_string(),
            line: line.trim().to_string(),
        }
    }

    /// Create a suite not found error listing configured names
    pub fn suite_not_found<S: AsRef<str>>(name: &str, available: &[S]) -> Self {
        let available = if available.is_empty() {
            "(none)".to_string()
        } else {
            available
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join(", ")
        };
        Self::SuiteNotFound {
            name: name.to_string(),
            available,
        }
    }

    /// Short machine-readable code, used in JSON reports
    pub fn code(&self) -> &'static str {
        match self {
            Error::RunnerSpawnFailed { .. } | Error::RunnerNotFound(_) => "RUNNER_FAILED",
            Error::RunnerTimeout(_) => "TIMEOUT",
            Error::SummaryNotFound => "SUMMARY_NOT_FOUND",
            Error::MalformedSummary { .. } => "MALFORMED_SUMMARY",
            Error::EmptySuite => "EMPTY_SUITE",
            Error::AssertionsFailed { .. } => "ASSERTIONS_FAILED",
            Error::ExpectationFailed(_) => "EXPECTATION_FAILED",
            Error::SuitesFailed { .. } => "SUITES_FAILED",
            Error::SuiteNotFound { .. } => "SUITE_NOT_FOUND",
            Error::Config(_) | Error::ConfigParse(_) => "CONFIG_ERROR",
            _ => "INTERNAL_ERROR",
        }
    }
}
