//! Comparison model: pair parsed logs with their source files.

use crate::Result;
use crate::log::ParsedLog;
use anyhow::bail;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Series {
    pub source: PathBuf,
    pub label: String,
    pub log: ParsedLog,
}

#[derive(Debug, Clone)]
pub struct Comparison {
    pub series: Vec<Series>,
    pub output_name: String,
}

impl Comparison {
    /// Length of the longest series.
    pub fn max_len(&self) -> usize {
        self.series.iter().map(|s| s.log.len()).max().unwrap_or(0)
    }

    /// Largest sample across all series, ignoring NaN.
    pub fn peak(&self) -> Option<f64> {
        self.series
            .iter()
            .filter_map(|s| SeriesStats::of(&s.log).peak)
            .reduce(f64::max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStats {
    pub samples: usize,
    pub peak: Option<f64>,
    pub mean: Option<f64>,
}

impl SeriesStats {
    pub fn of(log: &ParsedLog) -> Self {
        let finite: Vec<f64> = log.values().filter(|v| v.is_finite()).collect();
        let peak = finite.iter().copied().reduce(f64::max);
        let mean = if finite.is_empty() {
            None
        } else {
            Some(finite.iter().sum::<f64>() / finite.len() as f64)
        };
        SeriesStats {
            samples: log.len(),
            peak,
            mean,
        }
    }
}

/// Base name of `path` with its last extension removed.
///
/// ./logs/t2500.log  =>  t2500
pub fn series_label(path: &Path) -> String {
    match path.file_stem() {
        Some(stem) => stem.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

/// Labels of all inputs joined with '-', plus ".png".
pub fn output_file_name(paths: &[PathBuf]) -> String {
    let labels: Vec<String> = paths.iter().map(|p| series_label(p)).collect();
    format!("{}.png", labels.join("-"))
}

/// Build the comparison. `paths` and `logs` must line up one-to-one.
pub fn build_comparison(paths: &[PathBuf], logs: Vec<ParsedLog>) -> Result<Comparison> {
    if paths.len() != logs.len() {
        bail!(
            "got {} log files but {} parsed logs",
            paths.len(),
            logs.len()
        );
    }

    let series = paths
        .iter()
        .zip(logs)
        .map(|(path, log)| Series {
            source: path.clone(),
            label: series_label(path),
            log,
        })
        .collect();

    Ok(Comparison {
        series,
        output_name: output_file_name(paths),
    })
}
