//! Report generation for extracted rows.
//!
//! - Table: CSV export, sorted by variant then size
//! - Chart: CPU time against input size, one series per variant

mod chart;
mod table;

pub use chart::{ChartFormat, ChartOptions, ChartSeries, chart_series, render_chart};
pub use table::{load_table, sorted_rows, write_table};
