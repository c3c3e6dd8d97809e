//! CLI command handling
//!
//! Dispatches CLI commands and formats output.

use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use colored::Colorize;

use crate::adapter::{RunOutcome, SuiteConfig};
use crate::commands::Commands;
use crate::common::config::Config;
use crate::common::{paths, Error, Result};
use crate::testing::{self, Checks, ReportOptions, SuiteReport};

/// Dispatch a CLI command
pub async fn dispatch(command: Commands, opts: ReportOptions) -> Result<()> {
    match command {
        Commands::Run {
            suite,
            runner,
            script,
            fixture,
            args,
            timeout,
            strict,
        } => {
            let config = Config::load()?;

            let (name, mut suite_config) = match (runner.clone(), script.clone(), fixture.clone())
            {
                (Some(runner), Some(script), Some(fixture)) => (
                    suite.unwrap_or_else(|| "suite".to_string()),
                    SuiteConfig::new(runner, script, fixture),
                ),
                _ => config.get_suite(suite.as_deref())?,
            };

            // Command-line paths override the configured ones
            if let Some(runner) = runner {
                suite_config.runner = runner;
            }
            if let Some(script) = script {
                suite_config.script = script;
            }
            if let Some(fixture) = fixture {
                suite_config.fixture = fixture;
            }
            if !args.is_empty() {
                suite_config.args = args;
            }
            if timeout.is_some() {
                suite_config.timeout_secs = timeout;
            }

            let checks = Checks {
                strict: strict || config.defaults.strict,
                expect: None,
            };

            let report = testing::run_checked(&name, None, &suite_config, &checks, opts).await;
            finish(vec![report], opts)
        }

        Commands::Test { paths } => {
            let mut reports = Vec::with_capacity(paths.len());
            for path in &paths {
                let report = match testing::run_suite_file(path, opts).await {
                    Ok(report) => report,
                    Err(e) => {
                        if !opts.json {
                            println!("{} {}: {}", "✗".red(), path.display(), e);
                        }
                        SuiteReport::from_error(&path.display().to_string(), String::new(), &e)
                    }
                };
                reports.push(report);
            }

            if !opts.json && reports.len() > 1 {
                let passed = reports.iter().filter(|r| r.success).count();
                println!(
                    "{} {}/{} suites passed",
                    "Summary:".cyan().bold(),
                    passed,
                    reports.len()
                );
            }

            finish(reports, opts)
        }

        Commands::Parse { file, strict } => {
            let (name, text) = read_captured(file)?;

            let checks = Checks {
                strict,
                expect: None,
            };
            let report = match RunOutcome::from_output(text, None, Duration::ZERO) {
                Ok(outcome) => {
                    let verdict = testing::check(&outcome, &checks);
                    SuiteReport::from_run(&name, String::new(), outcome, verdict)
                }
                Err(e) => SuiteReport::from_error(&name, String::new(), &e),
            };

            if !opts.json {
                match &report.summary_line {
                    Some(line) => println!("{} {}", "Summary line:".cyan(), line),
                    None => println!("{}", "No summary line found".yellow()),
                }
                println!(
                    "passed={} total={} failed={}",
                    report.summary.passed, report.summary.total, report.summary.failed
                );
                match &report.error {
                    None => println!("{} {}", "✓".green().bold(), "Output passes".green().bold()),
                    Some(e) => println!("{} {}", "✗".red().bold(), e),
                }
            }

            finish(vec![report], opts)
        }

        Commands::List => {
            let config = Config::load()?;

            if let Some(path) = paths::config_path() {
                println!("Config: {}", path.display().to_string().dimmed());
            }

            if config.suites.is_empty() {
                println!("No suites configured");
                return Ok(());
            }

            let default = config.defaults.suite.as_deref();
            println!("Suites:");
            for (name, suite) in &config.suites {
                let marker = if Some(name.as_str()) == default { "*" } else { " " };
                println!("  {} {}", marker, name.bold());
                println!("      $ {}", suite.command_line().dimmed());
                if let Some(secs) = suite.timeout_secs {
                    println!("      timeout: {}s", secs);
                }
            }

            Ok(())
        }
    }
}

/// Print JSON if requested and turn failed reports into an error
fn finish(reports: Vec<SuiteReport>, opts: ReportOptions) -> Result<()> {
    if opts.json {
        testing::print_json(&reports)?;
    }

    let failed = reports.iter().filter(|r| !r.success).count();
    if failed > 0 {
        return Err(Error::SuitesFailed {
            failed,
            total: reports.len(),
        });
    }
    Ok(())
}

/// Read captured output from a file or stdin
fn read_captured(file: Option<PathBuf>) -> Result<(String, String)> {
    match file {
        Some(path) => {
            let bytes = std::fs::read(&path).map_err(|e| Error::FileRead {
                path: path.display().to_string(),
                error: e.to_string(),
            })?;
            Ok((
                path.display().to_string(),
                String::from_utf8_lossy(&bytes).into_owned(),
            ))
        }
        None => {
            let mut bytes = Vec::new();
            std::io::stdin().read_to_end(&mut bytes)?;
            Ok((
                "stdin".to_string(),
                String::from_utf8_lossy(&bytes).into_owned(),
            ))
        }
    }
}
