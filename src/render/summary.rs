use crate::model::{Comparison, SeriesStats};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct SeriesSummary {
    pub label: String,
    pub source: String,
    /// Index of the crossing sample in the raw log; null if never crossed.
    pub aligned_at: Option<usize>,
    pub samples: usize,
    pub skipped_lines: usize,
    pub peak: Option<f64>,
    pub mean: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub threshold: f64,
    pub plot: String,
    pub series: Vec<SeriesSummary>,
}

pub fn build_summary(comparison: &Comparison, threshold: f64, plot: &Path) -> Summary {
    let series = comparison
        .series
        .iter()
        .map(|s| {
            let stats = SeriesStats::of(&s.log);
            SeriesSummary {
                label: s.label.clone(),
                source: s.source.display().to_string(),
                aligned_at: s.log.aligned_at,
                samples: stats.samples,
                skipped_lines: s.log.skipped_lines,
                peak: stats.peak,
                mean: stats.mean,
            }
        })
        .collect();

    Summary {
        threshold,
        plot: plot.display().to_string(),
        series,
    }
}

pub fn render_summary_json(summary: &Summary) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}
