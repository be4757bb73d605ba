//! Command-line parsing for the Bezier curve fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the fitting code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{DEFAULT_SPLINE_SIZE, FitterKind, PointFormat};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "bzfit", version, about = "Smooth Bezier curve fitting through 2-D sample points")]
pub struct Cli {
    /// Enable debug logging (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a smooth curve through input points and write the dense polygon.
    Fit(FitArgs),
    /// Generate a synthetic noisy sine sample (sorted by x).
    Sample(SampleArgs),
    /// Plot a previously exported curve JSON.
    Plot(PlotArgs),
}

/// Options for fitting.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Input points (CSV with `x,y` columns, or a JSON array of `{x, y}`).
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Input format.
    #[arg(long, value_enum, default_value_t = PointFormat::Auto)]
    pub format: PointFormat,

    /// Fitting strategy.
    #[arg(long, value_enum, env = "BZFIT_FITTER", default_value_t = FitterKind::Bezier)]
    pub fitter: FitterKind,

    /// Number of output points (values below 10 are raised to 10).
    #[arg(short = 'n', long = "size", env = "BZFIT_SPLINE_SIZE", default_value_t = DEFAULT_SPLINE_SIZE)]
    pub spline_size: usize,

    /// Write fitted points here instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format for fitted points.
    #[arg(long, value_enum, default_value_t = PointFormat::Auto)]
    pub output_format: PointFormat,

    /// Export the curve (input + fitted points + metadata) to JSON.
    #[arg(long = "export-curve", value_name = "JSON")]
    pub export_curve: Option<PathBuf>,

    /// Render an ASCII plot and the run summary to stderr.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

/// Options for synthetic sample generation.
#[derive(Debug, Parser, Clone)]
pub struct SampleArgs {
    /// Number of points to generate.
    #[arg(short = 'n', long, default_value_t = 25)]
    pub count: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Lower end of the x range.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub x_min: f64,

    /// Upper end of the x range.
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    pub x_max: f64,

    /// Sine amplitude.
    #[arg(long, default_value_t = 1.0)]
    pub amplitude: f64,

    /// Number of sine periods across the x range.
    #[arg(long, default_value_t = 1.5)]
    pub cycles: f64,

    /// Standard deviation of the y noise.
    #[arg(long, default_value_t = 0.1)]
    pub noise: f64,

    /// Write the sample here instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = PointFormat::Auto)]
    pub output_format: PointFormat,
}

/// Options for plotting a saved curve.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Curve JSON file produced by `bzfit fit --export-curve`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
