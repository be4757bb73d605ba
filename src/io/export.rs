//! Export fitted points to CSV or JSON.
//!
//! The export is meant to be easy to consume in spreadsheets, plotting scripts, or
//! as input to another `bzfit fit` run.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{Point, PointFormat};
use crate::error::AppError;

/// Write points to `path`, or to stdout when `path` is `None`.
pub fn write_points(path: Option<&Path>, points: &[Point], format: PointFormat) -> Result<(), AppError> {
    let format = format.resolve(path);
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                AppError::new(2, format!("Failed to create output '{}': {e}", path.display()))
            })?;
            log::debug!("writing {} points to {}", points.len(), path.display());
            write_points_to(file, points, format)
        }
        None => write_points_to(std::io::stdout().lock(), points, format),
    }
}

/// Write points to any writer.
pub fn write_points_to<W: Write>(writer: W, points: &[Point], format: PointFormat) -> Result<(), AppError> {
    match format {
        PointFormat::Json => {
            serde_json::to_writer_pretty(writer, points)
                .map_err(|e| AppError::new(2, format!("Failed to write points JSON: {e}")))
        }
        _ => write_points_csv(writer, points),
    }
}

fn write_points_csv<W: Write>(writer: W, points: &[Point]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer
        .write_record(["x", "y"])
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for p in points {
        // `{}` on f64 prints the shortest representation that round-trips.
        writer
            .write_record([p.x.to_string(), p.y.to_string()])
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush export CSV: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ingest::read_points_csv;

    #[test]
    fn csv_export_has_header_and_full_precision() {
        let points = vec![Point::new(0.0, 1.0 / 3.0), Point::new(0.5, -2.0)];
        let mut buf = Vec::new();
        write_points_to(&mut buf, &points, PointFormat::Csv).unwrap();

        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with("x,y\n"));

        let back = read_points_csv(buf.as_slice()).unwrap();
        assert_eq!(back.points, points);
    }

    #[test]
    fn json_export_is_an_array_of_points() {
        let mut buf = Vec::new();
        write_points_to(&mut buf, &[Point::new(1.0, 2.0)], PointFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["x"], 1.0);
        assert_eq!(value[0]["y"], 2.0);
    }
}
