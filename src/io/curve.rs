//! Read/write curve JSON files.
//!
//! Curve JSON is the "portable" representation of a fit:
//! - which fitter produced it and with what output size
//! - the input points
//! - the fitted polygon, for quick plotting without refitting
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::path::Path;

use chrono::Local;

use crate::domain::{CurveFile, FitterKind, Point};
use crate::error::AppError;

/// Assemble a curve file for the given fit.
pub fn build_curve_file(fitter: FitterKind, spline_size: usize, input: &[Point], fitted: &[Point]) -> CurveFile {
    CurveFile {
        tool: "bzfit".to_string(),
        generated_at: Local::now(),
        fitter,
        spline_size,
        input: input.to_vec(),
        fitted: fitted.to_vec(),
    }
}

/// Write a curve JSON file.
pub fn write_curve_json(path: &Path, curve: &CurveFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create curve JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, curve)
        .map_err(|e| AppError::new(2, format!("Failed to write curve JSON: {e}")))?;

    log::debug!("wrote curve JSON to {}", path.display());
    Ok(())
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open curve JSON '{}': {e}", path.display())))?;
    let curve: CurveFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid curve JSON: {e}")))?;
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_file_survives_disk() {
        let input = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)];
        let fitted = crate::fit::fit_bezier(&input, 10);
        let curve = build_curve_file(FitterKind::Bezier, 10, &input, &fitted);

        let path = std::env::temp_dir().join(format!("bzfit_curve_{}.json", std::process::id()));
        write_curve_json(&path, &curve).unwrap();
        let back = read_curve_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(back.tool, "bzfit");
        assert_eq!(back.fitter, FitterKind::Bezier);
        assert_eq!(back.input, input);
        assert_eq!(back.fitted, fitted);
    }
}
