use crate::model::Comparison;
use anyhow::Context;
use plotters::prelude::*;
use std::path::Path;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

/// The tab10 palette; series beyond the tenth wrap around.
const COLOURS: &[RGBColor] = &[
    hexcolour!(0x1F77B4),
    hexcolour!(0xFF7F0E),
    hexcolour!(0x2CA02C),
    hexcolour!(0xD62728),
    hexcolour!(0x9467BD),
    hexcolour!(0x8C564B),
    hexcolour!(0xE377C2),
    hexcolour!(0x7F7F7F),
    hexcolour!(0xBCBD22),
    hexcolour!(0x17BECF),
];

const SIZE: (u32, u32) = (1000, 600);
const TITLE: &str = "Comparison of total CPU usage across log entries (aligned by CPU spike)";
const X_DESC: &str = "Log Entry (Step)";
const Y_DESC: &str = "Total CPU Usage (%)";

pub fn series_colour(index: usize) -> RGBColor {
    COLOURS[index % COLOURS.len()]
}

/// Render all series of `comparison` as one PNG line chart at `out`.
///
/// Any existing file at `out` is overwritten.
pub fn render_chart(comparison: &Comparison, out: &Path) -> anyhow::Result<()> {
    draw(comparison, out).with_context(|| format!("render chart {}", out.display()))
}

fn draw(comparison: &Comparison, out: &Path) -> anyhow::Result<()> {
    let x_max = comparison.max_len().max(1);
    let y_max = y_upper(comparison.peak());

    let root = BitMapBackend::new(out, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 22))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .build_cartesian_2d(0usize..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 14))
        .draw()?;

    for (i, series) in comparison.series.iter().enumerate() {
        let colour = series_colour(i);
        let mut runs = finite_runs(series.log.values());
        if runs.is_empty() {
            // Keep the legend entry for series with nothing drawable.
            runs.push(Vec::new());
        }
        for (j, run) in runs.into_iter().enumerate() {
            let anno = chart.draw_series(LineSeries::new(run, colour.stroke_width(2)))?;
            if j == 0 {
                anno.label(series.label.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], colour));
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Upper bound of the y axis: 5% above the peak, at least 1.0.
fn y_upper(peak: Option<f64>) -> f64 {
    let padded = peak.unwrap_or(0.0) * 1.05;
    let padded = if padded.is_finite() { padded } else { f64::MAX };
    padded.max(1.0)
}

/// Split a series into runs of consecutive finite points.
///
/// Non-finite samples break the line instead of being bridged.
fn finite_runs(values: impl Iterator<Item = f64>) -> Vec<Vec<(usize, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (x, y) in values.enumerate() {
        if y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}
