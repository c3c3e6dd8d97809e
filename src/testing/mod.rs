//! Suite runner
//!
//! Wraps the adapter with pass/fail checks and reporting, and reads
//! suite definitions from YAML files so every fixture/runner variant is
//! just another file.

mod config;
mod report;
mod runner;

pub use config::*;
pub use report::{print_json, SuiteReport};
pub use runner::{check, run_checked, run_suite_file, Checks, ReportOptions};
