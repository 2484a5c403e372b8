//! Google Benchmark JSON document types.
//!
//! Only the fields the reports need are modelled; everything else in the
//! document (`run_name`, `run_type`, `time_unit`, counters...) is ignored.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// A parsed benchmark output document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchmarkDocument {
  /// Run description, when the producer wrote one
  #[serde(default)]
  pub context: Option<BenchmarkContext>,
  /// Per-case records; missing means no records
  #[serde(default)]
  pub benchmarks: Vec<RawRecord>,
}

/// Run context written by Google Benchmark ahead of the records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchmarkContext {
  #[serde(default)]
  pub date: Option<String>,
  #[serde(default)]
  pub host_name: Option<String>,
  #[serde(default)]
  pub executable: Option<String>,
  #[serde(default)]
  pub num_cpus: Option<u32>,
  #[serde(default)]
  pub mhz_per_cpu: Option<f64>,
  #[serde(default)]
  pub library_build_type: Option<String>,
}

/// A single entry of the `benchmarks` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
  /// Case name, e.g. `BenchHeap<BinaryHeap>/1024`
  #[serde(default)]
  pub name: String,
  /// Set on summary records (`mean`, `median`, `stddev`, ...)
  #[serde(default)]
  pub aggregate_name: Option<String>,
  /// CPU time in nanoseconds
  #[serde(default)]
  pub cpu_time: Option<f64>,
  /// Wall-clock time in nanoseconds
  #[serde(default)]
  pub real_time: Option<f64>,
  #[serde(default)]
  pub iterations: Option<u64>,
}

impl RawRecord {
  /// Whether this record is a statistic over repetitions rather than a run.
  pub fn is_aggregate(&self) -> bool {
    self.aggregate_name.as_deref().is_some_and(|name| !name.is_empty())
  }
}

impl BenchmarkDocument {
  /// Parse a document from its JSON text.
  pub fn from_json(json: &str) -> Result<Self> {
    let document = serde_json::from_str(json)?;
    Ok(document)
  }
}

/// Read and parse a benchmark output file.
pub fn load_document(path: &Path) -> Result<BenchmarkDocument> {
  let json = std::fs::read_to_string(path)?;
  let document = BenchmarkDocument::from_json(&json)?;

  if let Some(context) = &document.context {
    info!(
      "Benchmark run from {} on {} ({} CPUs, {} build)",
      context.date.as_deref().unwrap_or("unknown date"),
      context.host_name.as_deref().unwrap_or("unknown host"),
      context.num_cpus.map_or_else(|| "?".to_string(), |n| n.to_string()),
      context.library_build_type.as_deref().unwrap_or("unknown")
    );
  }
  debug!("Loaded {} records from {}", document.benchmarks.len(), path.display());

  Ok(document)
}
