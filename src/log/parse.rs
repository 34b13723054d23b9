use crate::log::sample::{LogSample, ParsedLog};
use anyhow::Context;
use std::fs;
use std::path::Path;

/// CPU percentage a sample must exceed to mark the start of a run.
pub const DEFAULT_THRESHOLD: f64 = 10.0;

/// Prefix of the aggregate rows pidstat prints at the end of a run.
const SUMMARY_PREFIX: &str = "Average:";

/// Zero-based column holding the CPU percentage.
const CPU_COLUMN: usize = 5;

/// Lines need strictly more tokens than this to be considered.
const MIN_TOKENS: usize = 6;

/// Parse a CPU utilization log file and align it at the first threshold crossing.
///
/// Expected columns (whitespace-separated), pidstat style:
/// time  UID  PID  %usr  %system  %CPU  CPU  Command
///
/// Example:
/// 10:00:01   1000   4242   35.00   2.00   37.00   3   worker
pub fn parse_log_file(path: &Path, threshold: f64) -> anyhow::Result<ParsedLog> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read log file {}", path.display()))?;
    Ok(parse_log_text(&text, threshold))
}

/// Parse log text. Malformed lines are skipped, never reported as errors.
pub fn parse_log_text(text: &str, threshold: f64) -> ParsedLog {
    let mut samples = Vec::new();
    let mut skipped_lines = 0usize;

    for line in text.lines() {
        if line.starts_with(SUMMARY_PREFIX) {
            continue;
        }
        match parse_sample(line) {
            Some(s) => samples.push(s),
            None => skipped_lines += 1,
        }
    }

    let (samples, aligned_at) = align_at_threshold(samples, threshold);

    ParsedLog {
        samples,
        aligned_at,
        skipped_lines,
    }
}

/// Extract the CPU column of one line, if it has enough columns and parses.
pub fn parse_sample(line: &str) -> Option<LogSample> {
    let cols: Vec<&str> = line.split_whitespace().collect();
    if cols.len() <= MIN_TOKENS {
        return None;
    }
    let total_cpu = cols[CPU_COLUMN].parse::<f64>().ok()?;
    Some(LogSample { total_cpu })
}

/// Drop every sample before the first one strictly above `threshold`.
///
/// Returns the samples untouched (and `None`) when nothing crosses.
pub fn align_at_threshold(
    mut samples: Vec<LogSample>,
    threshold: f64,
) -> (Vec<LogSample>, Option<usize>) {
    match samples.iter().position(|s| s.total_cpu > threshold) {
        Some(start) => {
            samples.drain(..start);
            (samples, Some(start))
        }
        None => (samples, None),
    }
}
