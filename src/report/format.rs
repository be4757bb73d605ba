//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the fitting code stays clean and testable
//! - output changes are localized

use crate::domain::{FitConfig, PointStats};
use crate::io::ingest::IngestedPoints;

/// Format the run summary (input stats + fitter + output ranges).
pub fn format_fit_summary(
    ingest: &IngestedPoints,
    fitted: Option<&PointStats>,
    spline_size: usize,
    config: &FitConfig,
) -> String {
    let mut out = String::new();

    out.push_str("=== bzfit - Bezier curve fit ===\n");
    out.push_str(&format!("Input: {}\n", config.input_path.display()));
    out.push_str(&format!(
        "Rows: read={} | used={} | errors={}\n",
        ingest.rows_read,
        ingest.points.len(),
        ingest.row_errors.len()
    ));
    out.push_str(&format!("Points: {}\n", fmt_stats(&ingest.stats)));
    out.push_str(&format!(
        "Fitter: {} | spline size={}\n",
        config.fitter.display_name(),
        spline_size
    ));

    match fitted {
        Some(stats) if ingest.points.len() > 2 => {
            out.push_str(&format!("Fitted: {}\n", fmt_stats(stats)));
        }
        _ => out.push_str("Fitted: input returned unchanged (fewer than 3 points)\n"),
    }

    for e in ingest.row_errors.iter().take(5) {
        out.push_str(&format!("  (line {}) {}\n", e.line, e.message));
    }
    if ingest.row_errors.len() > 5 {
        out.push_str(&format!("  ... {} more row errors\n", ingest.row_errors.len() - 5));
    }

    out
}

fn fmt_stats(stats: &PointStats) -> String {
    format!(
        "n={} | x=[{:.4}, {:.4}] | y=[{:.4}, {:.4}]",
        stats.n_points, stats.x_min, stats.x_max, stats.y_min, stats.y_max
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FitterKind, Point, PointFormat};
    use crate::io::ingest::RowError;
    use std::path::PathBuf;

    fn config() -> FitConfig {
        FitConfig {
            input_path: PathBuf::from("points.csv"),
            input_format: PointFormat::Auto,
            fitter: FitterKind::Bezier,
            spline_size: 250,
            output_path: None,
            output_format: PointFormat::Csv,
            export_curve: None,
            plot: false,
            plot_width: 80,
            plot_height: 20,
        }
    }

    #[test]
    fn summary_lists_stats_and_errors() {
        let points = vec![Point::new(0.0, 1.0), Point::new(1.0, 2.0), Point::new(2.0, 0.0)];
        let stats = PointStats::from_points(&points).unwrap();
        let ingest = IngestedPoints {
            points,
            stats,
            row_errors: vec![RowError { line: 4, message: "Invalid `y` value: 'q'.".to_string() }],
            rows_read: 4,
        };

        let txt = format_fit_summary(&ingest, Some(&stats), 250, &config());
        assert!(txt.contains("Rows: read=4 | used=3 | errors=1"));
        assert!(txt.contains("Points: n=3 | x=[0.0000, 2.0000] | y=[0.0000, 2.0000]"));
        assert!(txt.contains("spline size=250"));
        assert!(txt.contains("(line 4) Invalid `y` value: 'q'."));
    }

    #[test]
    fn summary_notes_passthrough() {
        let points = vec![Point::new(0.0, 1.0), Point::new(1.0, 2.0)];
        let stats = PointStats::from_points(&points).unwrap();
        let ingest = IngestedPoints { points, stats, row_errors: Vec::new(), rows_read: 2 };

        let txt = format_fit_summary(&ingest, Some(&stats), 250, &config());
        assert!(txt.contains("returned unchanged"));
    }
}
