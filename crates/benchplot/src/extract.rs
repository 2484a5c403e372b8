//! Extraction of normalized rows from raw benchmark records.
//!
//! Case names follow the `Variant/size` convention: everything before the
//! first slash names the variant, the digit run after it is the input size.
//! Trailing text (`/real_time`, `_mean`, extra arguments) is ignored.

use crate::records::RawRecord;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

static CASE_NAME: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^([^/]+)/([0-9]+)").expect("case name pattern is valid"));

/// The `(variant, size)` key parsed from a case name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaseKey {
  pub variant: String,
  pub size: u64,
}

/// One measured case, as persisted in the table export.
///
/// Field order is the column order of the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRow {
  pub variant: String,
  pub size: u64,
  pub cpu_time_ns: f64,
  pub real_time_ns: f64,
  pub iterations: u64,
}

/// Parse a `Variant/size` case name.
///
/// Returns `None` when the name does not start with that shape, or when the
/// size does not fit in a `u64`.
pub fn parse_case_name(name: &str) -> Option<CaseKey> {
  let captures = CASE_NAME.captures(name)?;
  let size = captures[2].parse().ok()?;

  Some(CaseKey {
    variant: captures[1].to_string(),
    size,
  })
}

impl NormalizedRow {
  /// Build a row from a raw record, or `None` if the record is an aggregate
  /// or its name is not a `Variant/size` case.
  pub fn from_record(record: &RawRecord) -> Option<Self> {
    if record.is_aggregate() {
      return None;
    }

    parse_case_name(&record.name).map(|key| Self::from_case(key, record))
  }

  fn from_case(key: CaseKey, record: &RawRecord) -> Self {
    Self {
      variant: key.variant,
      size: key.size,
      cpu_time_ns: record.cpu_time.unwrap_or(0.0),
      real_time_ns: record.real_time.unwrap_or(0.0),
      iterations: record.iterations.unwrap_or(0),
    }
  }

  /// CPU time converted to milliseconds.
  pub fn cpu_time_ms(&self) -> f64 {
    self.cpu_time_ns / 1_000_000.0
  }
}

/// Records dropped during extraction, by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Skipped {
  aggregate: usize,
  unmatched: usize,
}

fn extract_counted(records: &[RawRecord]) -> (Vec<NormalizedRow>, Skipped) {
  let mut rows = Vec::with_capacity(records.len());
  let mut skipped = Skipped::default();

  for record in records {
    if record.is_aggregate() {
      skipped.aggregate += 1;
      continue;
    }
    match parse_case_name(&record.name) {
      Some(key) => rows.push(NormalizedRow::from_case(key, record)),
      None => skipped.unmatched += 1,
    }
  }

  (rows, skipped)
}

/// Extract rows from raw records, in input order.
///
/// An empty result is not an error here; the caller decides.
pub fn extract_rows(records: &[RawRecord]) -> Vec<NormalizedRow> {
  let (rows, skipped) = extract_counted(records);

  debug!(
    "Extracted {} rows ({} aggregate records skipped, {} unmatched names skipped)",
    rows.len(),
    skipped.aggregate,
    skipped.unmatched
  );

  rows
}
