//! Suite runner implementation
//!
//! Runs a suite through the adapter, applies the pass/fail checks and
//! turns the result into a [`SuiteReport`].

use std::path::Path;

use crate::adapter::{self, RunOutcome, SuiteConfig};
use crate::common::config::resolve_runner;
use crate::common::{Error, Result};

use super::config::{CountExpectation, SuiteFile};
use super::report::{self, SuiteReport};

/// Pass/fail rules applied on top of the summary scrape
#[derive(Debug, Default, Clone)]
pub struct Checks {
    /// Fail on any failed assertion
    pub strict: bool,
    /// Extra count expectations
    pub expect: Option<CountExpectation>,
}

/// How reports are printed
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportOptions {
    pub verbose: bool,
    /// Suppress human output; the caller prints JSON at the end
    pub json: bool,
}

/// Run a suite and build its report
///
/// Errors from the run itself (spawn failure, timeout, malformed summary)
/// are folded into a failed report rather than returned.
pub async fn run_checked(
    name: &str,
    description: Option<&str>,
    suite: &SuiteConfig,
    checks: &Checks,
    opts: ReportOptions,
) -> SuiteReport {
    let command = suite.command_line();
    if !opts.json {
        report::print_header(name, description, &command);
    }

    let report = match execute(suite).await {
        Ok(outcome) => {
            let verdict = check(&outcome, checks);
            SuiteReport::from_run(name, command, outcome, verdict)
        }
        Err(e) => SuiteReport::from_error(name, command, &e),
    };

    match &report.error {
        None => tracing::info!(
            suite = name,
            total = report.summary.total,
            failed = report.summary.failed,
            "Suite passed"
        ),
        Some(error) => tracing::info!(suite = name, %error, "Suite failed"),
    }

    if !opts.json {
        report::print_human(&report, opts.verbose);
    }

    report
}

/// Run a suite described by a YAML file
pub async fn run_suite_file(path: &Path, opts: ReportOptions) -> Result<SuiteReport> {
    let file = SuiteFile::load(path)?;

    let base_dir = path.parent().unwrap_or(Path::new("."));
    let suite = file.to_suite_config(base_dir);

    let checks = Checks {
        strict: file.strict,
        expect: file.expect.clone(),
    };

    Ok(run_checked(&file.name, file.description.as_deref(), &suite, &checks, opts).await)
}

async fn execute(suite: &SuiteConfig) -> Result<RunOutcome> {
    let mut suite = suite.clone();
    suite.runner = resolve_runner(&suite.runner)?;
    adapter::run_suite(&suite).await
}

/// Apply the adapter's post-conditions, then any count expectations
pub fn check(outcome: &RunOutcome, checks: &Checks) -> Result<()> {
    adapter::verify(outcome, checks.strict)?;

    if let Some(expect) = &checks.expect {
        let summary = &outcome.summary;

        if let Some(min_total) = expect.min_total {
            if summary.total < min_total {
                return Err(Error::ExpectationFailed(format!(
                    "expected at least {} assertions, got {}",
                    min_total, summary.total
                )));
            }
        }

        if let Some(max_failed) = expect.max_failed {
            if summary.failed > max_failed {
                return Err(Error::ExpectationFailed(format!(
                    "expected at most {} failed assertions, got {}",
                    max_failed, summary.failed
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn outcome(line: &str) -> RunOutcome {
        RunOutcome::from_output(format!("{}\n", line), Some(0), Duration::ZERO).unwrap()
    }

    #[test]
    fn test_check_min_total() {
        let checks = Checks {
            strict: false,
            expect: Some(CountExpectation {
                min_total: Some(100),
                max_failed: None,
            }),
        };
        let err = check(&outcome("10 assertions of 10 passed, 0 failed."), &checks).unwrap_err();
        assert!(matches!(err, Error::ExpectationFailed(_)));
        assert!(check(&outcome("100 assertions of 100 passed, 0 failed."), &checks).is_ok());
    }

    #[test]
    fn test_check_max_failed() {
        let checks = Checks {
            strict: false,
            expect: Some(CountExpectation {
                min_total: None,
                max_failed: Some(1),
            }),
        };
        assert!(check(&outcome("443 assertions of 444 passed, 1 failed."), &checks).is_ok());
        assert!(check(&outcome("442 assertions of 444 passed, 2 failed."), &checks).is_err());
    }

    #[test]
    fn test_adapter_checks_run_first() {
        let checks = Checks {
            strict: false,
            expect: Some(CountExpectation {
                min_total: Some(0),
                max_failed: Some(10),
            }),
        };
        let err = check(&outcome("no summary here"), &checks).unwrap_err();
        assert!(matches!(err, Error::SummaryNotFound));
    }
}
