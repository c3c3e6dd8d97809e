//! suite-adapter - run an external browser test suite and check its summary
//!
//! Spawns a headless-browser runner (e.g. `phantomjs run-qunit.js tests.html`),
//! captures its output and decides pass/fail from the QUnit summary line.

use std::path::PathBuf;

use clap::Parser;
use commands::Commands;
use suite_adapter::common::{config::Config, logging, paths};
use suite_adapter::testing::ReportOptions;
use suite_adapter::{cli, commands};

#[derive(Parser)]
#[command(name = "suite-adapter", about = "Run a browser test suite and check its summary line")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print raw runner output and debug logs
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Print reports as JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    /// Also append logs to a file (default location when given without a value)
    #[arg(long, global = true, num_args = 0..=1)]
    log_file: Option<Option<PathBuf>>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_file = match cli.log_file {
        Some(Some(path)) => Some(path),
        Some(None) => paths::default_log_file(),
        None => Config::load().ok().and_then(|c| c.logging.file),
    };
    logging::init_cli(cli.verbose, log_file.as_deref());

    let opts = ReportOptions {
        verbose: cli.verbose,
        json: cli.json,
    };

    if let Err(e) = cli::dispatch(cli.command, opts).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
