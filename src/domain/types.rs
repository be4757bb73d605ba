//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - read from CSV/JSON inputs
//! - exported to JSON/CSV and reloaded later for plotting

use std::path::PathBuf;

use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Lower bound for the number of points a fitter produces.
pub const MIN_SPLINE_SIZE: usize = 10;

/// Number of output points a fitter produces unless configured otherwise.
pub const DEFAULT_SPLINE_SIZE: usize = 250;

/// A 2-D sample point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Control values of one cubic segment, already scaled by 3.
///
/// `min` belongs to the left endpoint of the segment, `max` to the right one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BezierInterval {
    pub min: f64,
    pub max: f64,
}

impl BezierInterval {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Which fitting strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FitterKind {
    /// Stateless engine walking the input with a segment cursor.
    Bezier,
    /// Object-owned fitter sampling a reusable spline state.
    Spline,
}

impl FitterKind {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            FitterKind::Bezier => "bezier (segment cursor)",
            FitterKind::Spline => "spline (object-owned state)",
        }
    }
}

/// On-disk format for point sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PointFormat {
    /// Guess from the file extension (`.json` is JSON, anything else CSV).
    Auto,
    Csv,
    Json,
}

impl PointFormat {
    /// Resolve `Auto` against a path. Concrete formats are returned unchanged.
    pub fn resolve(self, path: Option<&std::path::Path>) -> PointFormat {
        match self {
            PointFormat::Auto => {
                let is_json = path
                    .and_then(|p| p.extension())
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case("json"));
                if is_json { PointFormat::Json } else { PointFormat::Csv }
            }
            other => other,
        }
    }
}

/// Summary statistics of a point sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointStats {
    pub n_points: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PointStats {
    /// Compute ranges over `points`; `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut stats = PointStats {
            n_points: points.len(),
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        };
        for p in points {
            stats.x_min = stats.x_min.min(p.x);
            stats.x_max = stats.x_max.max(p.x);
            stats.y_min = stats.y_min.min(p.y);
            stats.y_max = stats.y_max.max(p.y);
        }
        Some(stats)
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus `.env` / environment fallbacks).
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub input_path: PathBuf,
    pub input_format: PointFormat,

    pub fitter: FitterKind,
    /// Requested output size; fitters clamp this to [`MIN_SPLINE_SIZE`].
    pub spline_size: usize,

    pub output_path: Option<PathBuf>,
    pub output_format: PointFormat,
    /// Export the full curve file (input + fitted points) as JSON.
    pub export_curve: Option<PathBuf>,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
}

/// A saved fitted curve (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub generated_at: DateTime<Local>,
    pub fitter: FitterKind,
    pub spline_size: usize,
    pub input: Vec<Point>,
    pub fitted: Vec<Point>,
}
