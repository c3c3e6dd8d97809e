//! Runner process invocation and output capture

use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::sync::mpsc;
use tokio::time::timeout;

use super::summary::{parse_summary, TestRunSummary};
use super::SuiteConfig;
use crate::common::{Error, Result};

/// Everything observed from one runner invocation
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Parsed counts, all zero when no summary line was printed
    pub summary: TestRunSummary,
    /// The line the counts came from
    pub summary_line: Option<String>,
    /// Combined stdout and stderr, in arrival order
    pub output: String,
    /// Runner exit code (`None` if killed by a signal)
    pub exit_code: Option<i32>,
    pub duration: Duration,
}

impl RunOutcome {
    /// Build an outcome from already-captured text
    pub fn from_output(output: String, exit_code: Option<i32>, duration: Duration) -> Result<Self> {
        let (summary, summary_line) = match parse_summary(&output)? {
            Some((summary, line)) => (summary, Some(line.trim().to_string())),
            None => (TestRunSummary::default(), None),
        };

        Ok(Self {
            summary,
            summary_line,
            output,
            exit_code,
            duration,
        })
    }
}

/// Run one suite to completion and scrape its summary
///
/// The runner is spawned directly (no shell) as
/// `runner [args..] script fixture`. A non-zero exit status is logged and
/// otherwise ignored.
pub async fn run_suite(suite: &SuiteConfig) -> Result<RunOutcome> {
    tracing::debug!(command = %suite.command_line(), "Starting runner");

    let runner_name = suite.runner.display().to_string();
    let mut child = Command::new(&suite.runner)
        .args(&suite.args)
        .arg(&suite.script)
        .arg(&suite.fixture)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| Error::spawn_failed(&runner_name, &e))?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| Error::Internal("Failed to get runner stdout".to_string()))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| Error::Internal("Failed to get runner stderr".to_string()))?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    tokio::spawn(forward_lines(stdout, tx.clone()));
    tokio::spawn(forward_lines(stderr, tx));

    let started = Instant::now();
    let capture = async {
        let mut output = String::new();
        while let Some(line) = rx.recv().await {
            output.push_str(&line);
            output.push('\n');
        }
        let status = child.wait().await?;
        Ok::<_, std::io::Error>((output, status))
    };

    let captured = match suite.timeout_secs {
        Some(secs) => timeout(Duration::from_secs(secs), capture).await.ok(),
        None => Some(capture.await),
    };
    let Some(captured) = captured else {
        let secs = suite.timeout_secs.unwrap_or_default();
        tracing::warn!(secs, "Runner timed out, killing it");
        // Closing the channel stops both forwarders at their next line
        drop(rx);
        // Only the direct child is killed; grandchildren holding the pipes
        // keep the forwarders parked in read until they exit
        let _ = child.kill().await;
        return Err(Error::RunnerTimeout(secs));
    };
    let (output, status) = captured?;
    let duration = started.elapsed();

    if !status.success() {
        tracing::warn!(
            code = ?status.code(),
            "Runner exited unsuccessfully; using its printed summary only"
        );
    }
    tracing::debug!(
        bytes = output.len(),
        ms = duration.as_millis() as u64,
        "Runner finished"
    );

    RunOutcome::from_output(output, status.code(), duration)
}

/// Check the post-conditions of a run
///
/// Fails when no summary line was printed or the total is zero. With
/// `strict`, any failed assertion fails the run as well.
pub fn verify(outcome: &RunOutcome, strict: bool) -> Result<()> {
    if outcome.summary_line.is_none() {
        return Err(Error::SummaryNotFound);
    }

    let summary = &outcome.summary;
    if summary.total == 0 {
        return Err(Error::EmptySuite);
    }

    if !summary.is_consistent() {
        tracing::debug!(?summary, "Summary counts do not add up");
    }

    if strict && summary.failed > 0 {
        return Err(Error::AssertionsFailed {
            failed: summary.failed,
            total: summary.total,
        });
    }

    Ok(())
}

/// Forward lines from one pipe into the shared channel
async fn forward_lines<R>(reader: R, tx: mpsc::UnboundedSender<String>)
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
                if tx.send(line.to_string()).is_err() {
                    break;
                }
            }
            Err(e) => {
                tracing::warn!("Failed to read runner output: {}", e);
                break;
            }
        }
    }
}
