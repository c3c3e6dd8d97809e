//! Suite reports
//!
//! A report is what the CLI prints after a run, either as colored text or
//! as a single JSON object.

use colored::Colorize;
use serde::Serialize;

use crate::adapter::{RunOutcome, TestRunSummary};
use crate::common::Error;

/// Result of running one suite
#[derive(Debug, Serialize)]
pub struct SuiteReport {
    pub name: String,
    pub command: String,
    pub success: bool,
    #[serde(flatten)]
    pub summary: TestRunSummary,
    pub summary_line: Option<String>,
    pub exit_code: Option<i32>,
    pub duration_ms: u64,
    pub error_code: Option<&'static str>,
    pub error: Option<String>,
    /// Raw runner output, printed on failure or with `--verbose`
    #[serde(skip)]
    pub output: Option<String>,
}

impl SuiteReport {
    /// Build a report from a finished run and its verdict
    pub fn from_run(
        name: &str,
        command: String,
        outcome: RunOutcome,
        verdict: Result<(), Error>,
    ) -> Self {
        let (error_code, error) = match &verdict {
            Ok(()) => (None, None),
            Err(e) => (Some(e.code()), Some(e.to_string())),
        };

        Self {
            name: name.to_string(),
            command,
            success: verdict.is_ok(),
            summary: outcome.summary,
            summary_line: outcome.summary_line,
            exit_code: outcome.exit_code,
            duration_ms: outcome.duration.as_millis() as u64,
            error_code,
            error,
            output: Some(outcome.output),
        }
    }

    /// Build a report for a run that never produced an outcome
    pub fn from_error(name: &str, command: String, error: &Error) -> Self {
        Self {
            name: name.to_string(),
            command,
            success: false,
            summary: TestRunSummary::default(),
            summary_line: None,
            exit_code: None,
            duration_ms: 0,
            error_code: Some(error.code()),
            error: Some(error.to_string()),
            output: None,
        }
    }
}

/// Print the header shown before a suite starts
pub fn print_header(name: &str, description: Option<&str>, command: &str) {
    println!(
        "\n{} {}",
        "Running suite:".blue().bold(),
        name.white().bold()
    );
    if let Some(desc) = description {
        println!("  {}", desc.dimmed());
    }
    println!("  $ {}", command.dimmed());
}

/// Print a finished report for humans
pub fn print_human(report: &SuiteReport, verbose: bool) {
    if let Some(output) = &report.output {
        if verbose || !report.success {
            let rule = "=".repeat(56);
            println!("{}", rule.dimmed());
            print!("{}", output);
            println!("{}", rule.dimmed());
        }
    }

    if report.summary_line.is_some() {
        println!(
            "\nSUB RESULT: {} Tests, {} Failures",
            report.summary.total, report.summary.failed
        );
    }

    if let Some(code) = report.exit_code {
        if code != 0 && verbose {
            println!("  {}", format!("runner exit code {}", code).dimmed());
        }
    }

    if report.success {
        println!(
            "{} {} ({} ms)\n",
            "✓".green().bold(),
            "Suite passed".green().bold(),
            report.duration_ms
        );
    } else {
        println!(
            "{} {}: {}\n",
            "✗".red().bold(),
            "Suite failed".red().bold(),
            report.error.as_deref().unwrap_or("unknown error")
        );
    }
}

/// Print reports as JSON, one object for one report and an array otherwise
pub fn print_json(reports: &[SuiteReport]) -> Result<(), Error> {
    let text = match reports {
        [single] => serde_json::to_string_pretty(single)?,
        many => serde_json::to_string_pretty(many)?,
    };
    println!("{}", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_json_shape() {
        let outcome = RunOutcome::from_output(
            "443 assertions of 444 passed, 1 failed.\n".to_string(),
            Some(1),
            Duration::from_millis(1500),
        )
        .unwrap();
        let report = SuiteReport::from_run("jio", "phantomjs a b".to_string(), outcome, Ok(()));

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["name"], "jio");
        assert_eq!(value["passed"], 443);
        assert_eq!(value["total"], 444);
        assert_eq!(value["failed"], 1);
        assert_eq!(value["exit_code"], 1);
        assert_eq!(value["duration_ms"], 1500);
        assert_eq!(value["success"], true);
        assert!(value["error"].is_null());
        assert!(value.get("output").is_none());
    }

    #[test]
    fn test_error_report() {
        let report = SuiteReport::from_error("jio", String::new(), &Error::RunnerTimeout(5));
        assert!(!report.success);
        assert_eq!(report.error_code, Some("TIMEOUT"));
        assert_eq!(report.summary, TestRunSummary::default());
    }
}
