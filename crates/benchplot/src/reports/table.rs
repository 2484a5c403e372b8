//! CSV table export.

use crate::Result;
use crate::extract::NormalizedRow;
use std::cmp::Ordering;
use std::path::Path;

fn row_order(a: &NormalizedRow, b: &NormalizedRow) -> Ordering {
  a.variant.cmp(&b.variant).then(a.size.cmp(&b.size))
}

/// Rows ordered by variant, then size. Ties keep their input order.
pub fn sorted_rows(rows: &[NormalizedRow]) -> Vec<&NormalizedRow> {
  let mut sorted: Vec<&NormalizedRow> = rows.iter().collect();
  sorted.sort_by(|a, b| row_order(a, b));
  sorted
}

/// Write rows to a CSV file, replacing any existing file.
///
/// The header names the row fields in declaration order. Rows are sorted here
/// regardless of the order they arrive in.
pub fn write_table(rows: &[NormalizedRow], path: &Path) -> Result<()> {
  let mut writer = csv::Writer::from_path(path)?;
  for row in sorted_rows(rows) {
    writer.serialize(row)?;
  }
  writer.flush()?;
  Ok(())
}

/// Read a table previously written by [`write_table`].
pub fn load_table(path: &Path) -> Result<Vec<NormalizedRow>> {
  let mut reader = csv::Reader::from_path(path)?;
  let rows = reader.deserialize().collect::<std::result::Result<Vec<NormalizedRow>, _>>()?;
  Ok(rows)
}
