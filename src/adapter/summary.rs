//! QUnit summary line parsing
//!
//! The runner ends with a line such as
//! `443 assertions of 444 passed, 1 failed.` Counts sit at fixed
//! whitespace-split positions: passed at 0, total at 3, failed at 5.

use serde::Serialize;

use crate::common::{Error, Result};

/// Substring that identifies the summary line
pub const SUMMARY_MARKER: &str = "assertions of";

const PASSED_INDEX: usize = 0;
const TOTAL_INDEX: usize = 3;
const FAILED_INDEX: usize = 5;

/// Assertion counts scraped from one summary line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TestRunSummary {
    pub passed: u64,
    pub total: u64,
    pub failed: u64,
}

impl TestRunSummary {
    /// Whether `passed + failed == total`. Not enforced anywhere.
    pub fn is_consistent(&self) -> bool {
        self.passed.checked_add(self.failed) == Some(self.total)
    }
}

/// Find the first line containing the marker
///
/// This may be a page dump rather than the summary; use [`parse_summary`]
/// to get the first line that actually carries counts.
pub fn find_summary_line(output: &str) -> Option<&str> {
    output.lines().find(|line| line.contains(SUMMARY_MARKER))
}

/// Parse the counts out of a single summary line
pub fn parse_summary_line(line: &str) -> Result<TestRunSummary> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let count = |index: usize, field: &str| -> Result<u64> {
        tokens
            .get(index)
            .and_then(|token| token.parse::<u64>().ok())
            .ok_or_else(|| Error::malformed(field, line))
    };

    Ok(TestRunSummary {
        passed: count(PASSED_INDEX, "passed")?,
        total: count(TOTAL_INDEX, "total")?,
        failed: count(FAILED_INDEX, "failed")?,
    })
}

/// Scan captured output for the summary
///
/// Takes the first line that contains the marker and has numeric counts
/// at positions 0, 3 and 5. Marker lines that do not parse, such as the
/// `innerHTML` dump `run-qunit.js` prints before the result text, are
/// skipped. Returns `None` when no line contains the marker, and the first
/// line's `MalformedSummary` when marker lines exist but none parse.
pub fn parse_summary(output: &str) -> Result<Option<(TestRunSummary, &str)>> {
    let mut first_error = None;

    for line in output.lines().filter(|line| line.contains(SUMMARY_MARKER)) {
        match parse_summary_line(line) {
            Ok(summary) => return Ok(Some((summary, line))),
            Err(e) => {
                tracing::debug!(%e, "Skipping marker line without counts");
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_line() {
        let summary = parse_summary_line("12 assertions of 15 passed, 3 failed.").unwrap();
        assert_eq!(
            summary,
            TestRunSummary {
                passed: 12,
                total: 15,
                failed: 3
            }
        );
        assert!(summary.is_consistent());
    }

    #[test]
    fn test_first_matching_line_wins() {
        let output = "loading\n\
                      1 assertions of 2 passed, 1 failed.\n\
                      noise\n\
                      5 assertions of 5 passed, 0 failed.\n";
        let (summary, line) = parse_summary(output).unwrap().unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(line, "1 assertions of 2 passed, 1 failed.");
    }

    #[test]
    fn test_html_dump_before_result_text() {
        let output = "'waitFor()' finished in 2301ms.\n\
                      ========================================================\n\
                      <head><title>jIO</title></head><body><p id=\"qunit-testresult\" class=\"result\">Tests completed in 2200 milliseconds.<br><span class=\"passed\">443</span> assertions of <span class=\"total\">444</span> passed, <span class=\"failed\">1</span> failed.</p></body>\n\
                      ========================================================\n\
                      Tests completed in 2200 milliseconds.\n\
                      443 assertions of 444 passed, 1 failed.\n";

        assert!(find_summary_line(output).unwrap().starts_with("<head>"));

        let (summary, line) = parse_summary(output).unwrap().unwrap();
        assert_eq!(
            summary,
            TestRunSummary {
                passed: 443,
                total: 444,
                failed: 1
            }
        );
        assert_eq!(line, "443 assertions of 444 passed, 1 failed.");
    }

    #[test]
    fn test_only_unparseable_marker_lines() {
        let output = "<span class=\"passed\">1</span> assertions of <span>1</span>\n\
                      all assertions of the suite passed\n";
        let err = parse_summary(output).unwrap_err();
        match err {
            Error::MalformedSummary { line, .. } => assert!(line.starts_with("<span")),
            other => panic!("Expected MalformedSummary, got {other:?}"),
        }
    }

    #[test]
    fn test_no_marker() {
        let output = "'waitFor()' timeout\nUnable to access network\n";
        assert!(parse_summary(output).unwrap().is_none());
        assert!(parse_summary("").unwrap().is_none());
    }

    #[test]
    fn test_crlf_and_indentation() {
        let output = "header\r\n   443 assertions of 444 passed, 1 failed.\r\n";
        let (summary, _) = parse_summary(output).unwrap().unwrap();
        assert_eq!(summary.passed, 443);
        assert_eq!(summary.total, 444);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn test_zero_total_parses() {
        let summary = parse_summary_line("0 assertions of 0 passed, 0 failed.").unwrap();
        assert_eq!(summary, TestRunSummary::default());
    }

    #[test]
    fn test_malformed_lines() {
        let err = parse_summary_line("assertions of everything").unwrap_err();
        assert!(matches!(err, Error::MalformedSummary { ref field, .. } if field == "passed"));

        let err = parse_summary_line("3 assertions of many passed, 0 failed.").unwrap_err();
        assert!(matches!(err, Error::MalformedSummary { ref field, .. } if field == "total"));

        let err = parse_summary_line("3 assertions of 3 passed,").unwrap_err();
        assert!(matches!(err, Error::MalformedSummary { ref field, .. } if field == "failed"));
    }

    #[test]
    fn test_inconsistent_counts_still_parse() {
        let summary = parse_summary_line("4 assertions of 10 passed, 1 failed.").unwrap();
        assert!(!summary.is_consistent());
    }
}
