//! benchplot - tables and charts from Google Benchmark JSON output

use std::path::PathBuf;

use benchplot::{ChartOptions, ReportConfig, pipeline};
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "benchplot")]
#[command(about = "Plot Google Benchmark results and export them as a CSV table")]
#[command(version)]
struct Cli {
  /// Path to benchmark JSON file
  #[arg(long)]
  input: PathBuf,

  /// Directory for table and plot
  #[arg(long)]
  artifacts: PathBuf,

  /// Where to save the plot (svg, png, jpg, bmp), relative to the artifacts directory
  #[arg(long)]
  output_plot: PathBuf,

  /// Where to save the table (CSV), relative to the artifacts directory
  #[arg(long)]
  output_table: PathBuf,

  /// Chart width in pixels
  #[arg(long, default_value_t = ChartOptions::default().width)]
  width: u32,

  /// Chart height in pixels
  #[arg(long, default_value_t = ChartOptions::default().height)]
  height: u32,

  /// Enable verbose logging
  #[arg(short, long)]
  verbose: bool,
}

impl Cli {
  fn into_config(self) -> ReportConfig {
    ReportConfig {
      input: self.input,
      artifacts_dir: self.artifacts,
      table_file: self.output_table,
      chart_file: self.output_plot,
      chart: ChartOptions {
        width: self.width,
        height: self.height,
      },
    }
  }
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  // Setup logging (RUST_LOG overrides the default level)
  let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
  let env_filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
  tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();

  let config = cli.into_config();
  let outputs = pipeline::run(&config)?;
  info!("Report complete: {} rows", outputs.rows);

  println!("Table saved to {}", outputs.table.display());
  println!("Plot saved to {}", outputs.chart.display());

  Ok(())
}
