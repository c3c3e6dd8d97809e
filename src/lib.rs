//! Suite Adapter - external test-suite result adapter
//!
//! This library runs a headless-browser test runner against an HTML
//! fixture and turns its QUnit summary line into a pass/fail verdict.

pub mod adapter;
pub mod cli;
pub mod commands;
pub mod common;
pub mod testing;

// Re-export commonly used types for tests
pub use adapter::{run_suite, verify, RunOutcome, SuiteConfig, TestRunSummary};
pub use common::{Error, Result};
