//! Point ingest from CSV or JSON.
//!
//! CSV inputs carry two columns, `x` and `y`. A header row is optional: when the
//! first record does not parse as two numbers it is treated as a header and the
//! `x`/`y` columns are located by name (case-insensitive). Bad rows are collected
//! as row errors instead of aborting the whole file.
//!
//! JSON inputs are an array of `{"x": .., "y": ..}` objects.
//!
//! After parsing, the sequence must have non-decreasing x; the fitters rely on it
//! and do not check it themselves.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{Point, PointFormat, PointStats};
use crate::error::AppError;

/// A row that could not be turned into a point.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Ingest output: parsed points + stats + row errors.
#[derive(Debug, Clone)]
pub struct IngestedPoints {
    pub points: Vec<Point>,
    pub stats: PointStats,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Load points from `path`, resolving `PointFormat::Auto` by extension.
pub fn load_points(path: &Path, format: PointFormat) -> Result<IngestedPoints, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open input '{}': {e}", path.display())))?;

    log::debug!("reading points from {}", path.display());

    match format.resolve(Some(path)) {
        PointFormat::Json => read_points_json(file),
        _ => read_points_csv(file),
    }
}

/// Parse a CSV point stream.
pub fn read_points_csv<R: Read>(reader: R) -> Result<IngestedPoints, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut columns = (0usize, 1usize);
    let mut points = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        let line = result
            .as_ref()
            .ok()
            .and_then(|r| r.position())
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 1);

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                rows_read += 1;
                continue;
            }
        };

        if idx == 0 && !looks_numeric(&record, columns) {
            columns = resolve_columns(&record)?;
            continue;
        }

        rows_read += 1;
        match parse_row(&record, columns) {
            Ok(point) => points.push(point),
            Err(message) => row_errors.push(RowError { line, message }),
        }
    }

    finish(points, row_errors, rows_read)
}

/// Parse a JSON point array.
pub fn read_points_json<R: Read>(reader: R) -> Result<IngestedPoints, AppError> {
    let points: Vec<Point> = serde_json::from_reader(reader)
        .map_err(|e| AppError::new(2, format!("Invalid points JSON: {e}")))?;

    let mut kept = Vec::with_capacity(points.len());
    let mut row_errors = Vec::new();
    for (idx, p) in points.iter().enumerate() {
        if p.x.is_finite() && p.y.is_finite() {
            kept.push(*p);
        } else {
            row_errors.push(RowError {
                line: idx + 1,
                message: format!("Non-finite point ({}, {}).", p.x, p.y),
            });
        }
    }

    let rows_read = points.len();
    finish(kept, row_errors, rows_read)
}

fn finish(points: Vec<Point>, row_errors: Vec<RowError>, rows_read: usize) -> Result<IngestedPoints, AppError> {
    if points.is_empty() {
        return Err(AppError::new(3, "No valid points found in input."));
    }

    ensure_monotonic(&points)?;

    let stats = PointStats::from_points(&points)
        .ok_or_else(|| AppError::new(3, "No valid points found in input."))?;

    if !row_errors.is_empty() {
        log::warn!("skipped {} invalid input rows", row_errors.len());
    }

    Ok(IngestedPoints {
        points,
        stats,
        row_errors,
        rows_read,
    })
}

/// Reject sequences whose x-coordinates decrease anywhere.
pub fn ensure_monotonic(points: &[Point]) -> Result<(), AppError> {
    if let Some(i) = points.windows(2).position(|w| w[1].x < w[0].x) {
        return Err(AppError::new(
            2,
            format!(
                "Input x must be non-decreasing: point {} (x={}) follows x={}.",
                i + 2,
                points[i + 1].x,
                points[i].x
            ),
        ));
    }
    Ok(())
}

fn looks_numeric(record: &StringRecord, (xi, yi): (usize, usize)) -> bool {
    let parses = |i: usize| record.get(i).is_some_and(|s| s.parse::<f64>().is_ok());
    parses(xi) && parses(yi)
}

fn resolve_columns(headers: &StringRecord) -> Result<(usize, usize), AppError> {
    let header_map: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect();

    let x = header_map
        .get("x")
        .copied()
        .ok_or_else(|| AppError::new(2, "Missing required column: `x`"))?;
    let y = header_map
        .get("y")
        .copied()
        .ok_or_else(|| AppError::new(2, "Missing required column: `y`"))?;
    Ok((x, y))
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a UTF-8 BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn parse_row(record: &StringRecord, (xi, yi): (usize, usize)) -> Result<Point, String> {
    let x = parse_f64(record.get(xi), "x")?;
    let y = parse_f64(record.get(yi), "y")?;
    Ok(Point::new(x, y))
}

fn parse_f64(raw: Option<&str>, name: &str) -> Result<f64, String> {
    let raw = raw
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing `{name}` value."))?;
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("Invalid `{name}` value: '{raw}'."))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("Non-finite `{name}` value: '{raw}'."))
    }
}
