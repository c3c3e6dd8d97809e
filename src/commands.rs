//! CLI command definitions
//!
//! Defines the clap commands for the suite adapter CLI.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run a suite from the config file or from explicit paths
    Run {
        /// Configured suite name (default: [defaults] suite)
        suite: Option<String>,

        /// Runner executable, e.g. phantomjs
        #[arg(long)]
        runner: Option<PathBuf>,

        /// Harness script passed to the runner, e.g. run-qunit.js
        #[arg(long)]
        script: Option<PathBuf>,

        /// HTML page hosting the tests
        #[arg(long)]
        fixture: Option<PathBuf>,

        /// Extra runner argument, placed before the script (repeatable)
        #[arg(long = "arg", allow_hyphen_values = true)]
        args: Vec<String>,

        /// Kill the runner after this many seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Fail when any assertion failed
        #[arg(long)]
        strict: bool,
    },

    /// Run suites described by YAML files
    Test {
        /// Paths to YAML suite files
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Check captured runner output offline
    Parse {
        /// File holding the captured output (stdin when omitted)
        file: Option<PathBuf>,

        /// Fail when any assertion failed
        #[arg(long)]
        strict: bool,
    },

    /// List configured suites
    List,
}
