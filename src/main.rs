use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod log;
mod model;
mod render;

pub type Result<T> = anyhow::Result<T>;

const USAGE: &str = "input log file";

#[derive(Parser)]
#[command(name = "cpu-spike-plot", version)]
#[command(about = "Compare CPU usage logs aligned at their first CPU spike", long_about = None)]
struct Cli {
    /// pidstat-style log files, plotted in the given order.
    #[arg(allow_hyphen_values = true)]
    files: Vec<PathBuf>,

    /// CPU percentage a sample must exceed to start the aligned series.
    #[arg(short, long, default_value_t = log::DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Directory the chart is written to (defaults to the current directory).
    #[arg(short = 'o', long)]
    out_dir: Option<PathBuf>,

    /// Also write a JSON summary of each series' alignment to this path.
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.files.is_empty() {
        println!("{}", USAGE);
        return Ok(ExitCode::FAILURE);
    }

    // 1) Parse every log; the first unreadable file aborts the run.
    let mut logs = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        let parsed = log::parse_log_file(path, cli.threshold)?;
        if parsed.is_empty() {
            ::log::warn!("{}: no CPU samples found", path.display());
        } else if let Some(at) = parsed.aligned_at {
            ::log::info!(
                "{}: {} samples, aligned at raw sample {}",
                path.display(),
                parsed.len(),
                at
            );
        } else {
            ::log::warn!(
                "{}: no sample above {}%, plotting unaligned",
                path.display(),
                cli.threshold
            );
        }
        if parsed.skipped_lines > 0 {
            ::log::debug!(
                "{}: skipped {} unparsable lines",
                path.display(),
                parsed.skipped_lines
            );
        }
        logs.push(parsed);
    }

    // 2) Pair logs with their sources.
    let comparison = model::build_comparison(&cli.files, logs)?;

    // 3) Render the chart.
    let out = match &cli.out_dir {
        Some(dir) => dir.join(&comparison.output_name),
        None => PathBuf::from(&comparison.output_name),
    };
    render::render_chart(&comparison, &out)?;
    println!("Plot saved as {}", out.display());

    // 4) Optional summary.
    if let Some(summary_path) = &cli.summary {
        let summary = render::build_summary(&comparison, cli.threshold, &out);
        let json = render::render_summary_json(&summary)?;
        std::fs::write(summary_path, json)?;
        println!("Summary saved as {}", summary_path.display());
    }

    Ok(ExitCode::SUCCESS)
}
