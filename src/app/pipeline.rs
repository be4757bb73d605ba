//! Shared "fit pipeline" logic.
//!
//! Keeping this in one place keeps the workflow testable without a terminal:
//! read points -> fit -> stats
//!
//! The CLI handlers then focus on presentation and exports.

use crate::domain::{FitConfig, Point, PointStats};
use crate::error::AppError;
use crate::fit::make_fitter;
use crate::io::ingest::{IngestedPoints, load_points};

/// All computed outputs of a single `bzfit fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestedPoints,
    pub fitted: Vec<Point>,
    pub fitted_stats: Option<PointStats>,
    /// Output size after clamping.
    pub spline_size: usize,
}

/// Execute the full fitting pipeline and return the computed outputs.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    let ingest = load_points(&config.input_path, config.input_format)?;
    run_fit_with_points(config, ingest)
}

/// Execute the fitting pipeline on already ingested points.
pub fn run_fit_with_points(config: &FitConfig, ingest: IngestedPoints) -> Result<RunOutput, AppError> {
    let mut fitter = make_fitter(config.fitter, config.spline_size);
    let spline_size = fitter.spline_size();

    log::debug!(
        "fitting {} points with {:?} (spline size {spline_size})",
        ingest.points.len(),
        config.fitter
    );

    let fitted = fitter.fit_curve(&ingest.points);
    if fitted.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
        return Err(AppError::new(
            4,
            "Fit produced non-finite values; check for repeated x-values between distinct points.",
        ));
    }

    let fitted_stats = PointStats::from_points(&fitted);
    Ok(RunOutput {
        ingest,
        fitted,
        fitted_stats,
        spline_size,
    })
}
