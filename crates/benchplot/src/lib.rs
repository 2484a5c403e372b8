//! Table and chart generation for Google Benchmark results
//!
//! This crate turns the JSON output of a benchmark run into two artifacts:
//! a CSV table of per-case timings and a line chart of CPU time against
//! input size, one series per benchmarked variant.
//!
//! ## Key Concepts
//!
//! - **Records**: the raw `benchmarks` entries of a Google Benchmark document
//! - **Extraction**: `Variant/size` case names become normalized rows; aggregate
//!   records (mean, median, stddev) and unrecognised names are dropped
//! - **Reports**: CSV table (sorted by variant, then size) and a log-x chart
//! - **Pipeline**: load → extract → table → chart, driven by a [`ReportConfig`]

pub mod extract;
pub mod pipeline;
pub mod records;
pub mod reports;

pub use extract::{CaseKey, NormalizedRow, extract_rows, parse_case_name};
pub use pipeline::{ReportConfig, ReportOutputs};
pub use records::{BenchmarkContext, BenchmarkDocument, RawRecord};
pub use reports::{ChartFormat, ChartOptions, ChartSeries};

use thiserror::Error;

/// Report generation errors
#[derive(Debug, Error)]
pub enum ReportError {
  #[error("No benchmark rows found in {}", .input.display())]
  NoRows { input: std::path::PathBuf },

  #[error("Unsupported chart format: {0} (expected svg, png, jpg, jpeg or bmp)")]
  UnsupportedChartFormat(String),

  #[error("Chart error: {0}")]
  Chart(String),

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("CSV error: {0}")]
  Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
