//! Line chart of CPU time against input size.

use crate::extract::NormalizedRow;
use crate::{ReportError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

const TITLE: &str = "Benchmark results";
const X_DESC: &str = "Input size (elements)";
const Y_DESC: &str = "CPU time (ms)";

const TITLE_FONT_SIZE: u32 = 28;
const MARKER_RADIUS: u32 = 4;

/// Image format of the chart file, picked from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
  Svg,
  Png,
  Jpeg,
  Bmp,
}

impl ChartFormat {
  /// Infer the format from a file extension (case-insensitive).
  pub fn from_path(path: &Path) -> Result<Self> {
    let extension = path
      .extension()
      .and_then(|ext| ext.to_str())
      .map(|ext| ext.to_ascii_lowercase())
      .unwrap_or_default();

    match extension.as_str() {
      "svg" => Ok(Self::Svg),
      "png" => Ok(Self::Png),
      "jpg" | "jpeg" => Ok(Self::Jpeg),
      "bmp" => Ok(Self::Bmp),
      _ => Err(ReportError::UnsupportedChartFormat(path.display().to_string())),
    }
  }

  /// Whether the format is drawn through the bitmap backend.
  pub fn is_raster(self) -> bool {
    !matches!(self, Self::Svg)
  }
}

/// Chart canvas settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
  /// Canvas width in pixels
  pub width: u32,
  /// Canvas height in pixels
  pub height: u32,
}

impl Default for ChartOptions {
  fn default() -> Self {
    // 10x6 inches at 100 dpi
    Self {
      width: 1000,
      height: 600,
    }
  }
}

/// Points of one variant, ordered by size.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
  pub variant: String,
  /// `(size, cpu time in ms)`
  pub points: Vec<(u64, f64)>,
}

/// Group rows into one series per variant, in variant order.
///
/// Each series is sorted by size on its own; the input order does not matter.
pub fn chart_series(rows: &[NormalizedRow]) -> Vec<ChartSeries> {
  let mut groups: BTreeMap<&str, Vec<(u64, f64)>> = BTreeMap::new();
  for row in rows {
    groups
      .entry(row.variant.as_str())
      .or_default()
      .push((row.size, row.cpu_time_ms()));
  }

  groups
    .into_iter()
    .map(|(variant, mut points)| {
      points.sort_by_key(|p| p.0);
      ChartSeries {
        variant: variant.to_string(),
        points,
      }
    })
    .collect()
}

/// Render the chart to `path`, replacing any existing file.
pub fn render_chart(rows: &[NormalizedRow], path: &Path, options: &ChartOptions) -> Result<()> {
  let format = ChartFormat::from_path(path)?;
  let series = chart_series(rows);
  let size = (options.width, options.height);

  debug!("Rendering {} series to {} ({:?})", series.len(), path.display(), format);

  if format.is_raster() {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    draw(&root, &series)
  } else {
    let root = SVGBackend::new(path, size).into_drawing_area();
    draw(&root, &series)
  }
}

fn chart_error<E: std::fmt::Display>(e: E) -> ReportError {
  ReportError::Chart(e.to_string())
}

/// Axis ranges covering every plottable point.
///
/// Sizes of zero have no place on a log axis and are left out.
fn axis_ranges(series: &[ChartSeries]) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
  let sizes = || series.iter().flat_map(|s| s.points.iter()).filter(|p| p.0 > 0);

  let x_min = sizes().map(|p| p.0).min().unwrap_or(1) as f64;
  let x_max = sizes().map(|p| p.0).max().unwrap_or(10) as f64;
  let (x_min, x_max) = if x_min < x_max {
    (x_min, x_max)
  } else {
    (x_min / 2.0, x_max * 2.0)
  };

  let y_max = sizes().map(|p| p.1).fold(0.0_f64, f64::max);
  let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

  (x_min..x_max, 0.0..y_max)
}

fn draw<DB>(root: &DrawingArea<DB, Shift>, series: &[ChartSeries]) -> Result<()>
where
  DB: DrawingBackend,
  DB::ErrorType: 'static,
{
  root.fill(&WHITE).map_err(chart_error)?;

  let (x_range, y_range) = axis_ranges(series);

  let mut chart = ChartBuilder::on(root)
    .caption(TITLE, ("sans-serif", TITLE_FONT_SIZE).into_font())
    .margin(15)
    .x_label_area_size(50)
    .y_label_area_size(70)
    .build_cartesian_2d(x_range.log_scale(), y_range)
    .map_err(chart_error)?;

  chart
    .configure_mesh()
    .x_desc(X_DESC)
    .y_desc(Y_DESC)
    .bold_line_style(BLACK.mix(0.2))
    .light_line_style(BLACK.mix(0.08))
    .y_label_formatter(&|v| format!("{:.3}", v))
    .draw()
    .map_err(chart_error)?;

  for (i, s) in series.iter().enumerate() {
    let color = Palette99::pick(i).mix(1.0);
    let points: Vec<(f64, f64)> = s
      .points
      .iter()
      .filter(|p| p.0 > 0)
      .map(|&(size, ms)| (size as f64, ms))
      .collect();

    if points.len() < s.points.len() {
      debug!("{}: {} points of size 0 not drawn", s.variant, s.points.len() - points.len());
    }

    chart
      .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
      .map_err(chart_error)?
      .label(s.variant.as_str())
      .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

    chart
      .draw_series(points.into_iter().map(|p| Circle::new(p, MARKER_RADIUS, color.filled())))
      .map_err(chart_error)?;
  }

  chart
    .configure_series_labels()
    .position(SeriesLabelPosition::UpperLeft)
    .background_style(WHITE.mix(0.8))
    .border_style(BLACK)
    .draw()
    .map_err(chart_error)?;

  root.present().map_err(chart_error)?;
  Ok(())
}
