//! End-to-end report pipeline: load → extract → table → chart.

use crate::extract::extract_rows;
use crate::records::load_document;
use crate::reports::{ChartFormat, ChartOptions, render_chart, write_table};
use crate::{ReportError, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything one pipeline run needs.
#[derive(Debug, Clone)]
pub struct ReportConfig {
  /// Benchmark JSON file
  pub input: PathBuf,
  /// Directory both outputs are written under
  pub artifacts_dir: PathBuf,
  /// Table file name, relative to `artifacts_dir`
  pub table_file: PathBuf,
  /// Chart file name, relative to `artifacts_dir`; extension picks the format
  pub chart_file: PathBuf,
  pub chart: ChartOptions,
}

/// Paths written by a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutputs {
  pub table: PathBuf,
  pub chart: PathBuf,
  /// Number of rows in the table
  pub rows: usize,
}

impl ReportConfig {
  pub fn table_path(&self) -> PathBuf {
    self.artifacts_dir.join(&self.table_file)
  }

  pub fn chart_path(&self) -> PathBuf {
    self.artifacts_dir.join(&self.chart_file)
  }
}

/// Create the artifacts directory and any missing parents.
pub fn ensure_artifacts_dir(dir: &Path) -> Result<()> {
  std::fs::create_dir_all(dir)?;
  Ok(())
}

/// Run the whole pipeline.
///
/// Fails with [`ReportError::NoRows`] before writing anything when the input
/// yields no rows. Other errors propagate as they happen; outputs already
/// written are left in place.
pub fn run(config: &ReportConfig) -> Result<ReportOutputs> {
  let table_path = config.table_path();
  let chart_path = config.chart_path();

  // Reject an unknown chart format before any output exists
  ChartFormat::from_path(&chart_path)?;

  ensure_artifacts_dir(&config.artifacts_dir)?;

  info!("Loading benchmark results from: {}", config.input.display());
  let rows = {
    let document = load_document(&config.input)?;
    extract_rows(&document.benchmarks)
  };

  if rows.is_empty() {
    return Err(ReportError::NoRows {
      input: config.input.clone(),
    });
  }
  info!("Extracted {} rows", rows.len());

  write_table(&rows, &table_path)?;
  info!("Wrote table: {}", table_path.display());

  render_chart(&rows, &chart_path, &config.chart)?;
  info!("Wrote chart: {}", chart_path.display());

  Ok(ReportOutputs {
    table: table_path,
    chart: chart_path,
    rows: rows.len(),
  })
}
