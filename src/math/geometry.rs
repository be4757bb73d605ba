//! Planar geometry helpers.

use crate::domain::Point;

/// Euclidean distance between two points.
#[inline]
pub fn line_length(start: Point, end: Point) -> f64 {
    let dx = start.x - end.x;
    let dy = start.y - end.y;

    (dx * dx + dy * dy).sqrt()
}

/// Whether `points` has non-decreasing x-coordinates.
pub fn is_x_monotonic(points: &[Point]) -> bool {
    points.windows(2).all(|w| w[0].x <= w[1].x)
}
