//! Logging and tracing configuration
//!
//! Log lines always go to stderr so that reports on stdout (in particular
//! `--json`) stay machine-readable. An optional log file receives the same
//! events with full source locations.

use std::path::Path;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::paths;

/// Default filter when `RUST_LOG` is unset
fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("suite_adapter=debug,warn")
        } else {
            EnvFilter::new("suite_adapter=info,warn")
        }
    })
}

/// Initialize tracing for the CLI
///
/// Logs are controlled by the `RUST_LOG` environment variable. With
/// `log_file` set, events are also appended to that file. Failure to open
/// the file is reported and logging continues on stderr only.
pub fn init_cli(verbose: bool, log_file: Option<&Path>) {
    let filter = default_filter(verbose);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    let file = log_file.and_then(|path| {
        if let Err(e) = paths::ensure_parent_dir(path) {
            eprintln!("Warning: Could not create log directory: {}", e);
            return None;
        }
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
        {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("Warning: Could not open log file: {}", e);
                None
            }
        }
    });

    match file {
        Some(file) => {
            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true);

            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
        }
    }
}
