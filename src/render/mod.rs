//! Output rendering: the comparison chart and the optional JSON summary.

pub mod chart;
pub mod summary;

pub use chart::render_chart;
pub use summary::{build_summary, render_summary_json};
