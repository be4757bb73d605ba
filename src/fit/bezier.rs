//! Stateless Bezier fitting over an input point slice.
//!
//! Given input points with non-decreasing x, we sample `num_points` evenly spaced
//! x-coordinates between the first and last input x and evaluate the local cubic of
//! the segment enclosing each x.
//!
//! The sample x-values are themselves increasing, so the enclosing segment can be
//! tracked with a cursor that only moves forward. Control intervals are computed
//! once per segment crossing instead of once per sample.

use rayon::prelude::*;

use crate::domain::{BezierInterval, Point};
use crate::fit::grid::lin_space;
use crate::math::{bezier_interval, bezier_value};

/// Control interval of segment `j` (`points[j]..points[j + 1]`).
///
/// The left neighbour of the first segment is the first point itself; the right
/// neighbour index is clamped to the last point.
///
/// # Panics
/// Panics if `j + 1 >= points.len()`.
pub fn segment_interval(points: &[Point], j: usize) -> BezierInterval {
    let last = points.len() - 1;
    bezier_interval(
        points[j.saturating_sub(1)],
        points[j],
        points[j + 1],
        points[(j + 2).min(last)],
    )
}

/// Index of the segment enclosing `x`: the first `j` with `x <= points[j + 1].x`,
/// clamped to the last segment.
///
/// Requires `points.len() >= 2` and non-decreasing x.
pub fn find_segment(points: &[Point], x: f64) -> usize {
    let n = points.len();
    points[1..n - 1].partition_point(|p| x > p.x)
}

/// Fit a smooth curve through `points`, returning `num_points` samples.
///
/// Inputs with fewer than 3 points are returned unchanged.
///
/// Preconditions (not checked): x is non-decreasing, no segment that a sample
/// falls into has zero width, and `num_points >= 2`.
pub fn fit_bezier(points: &[Point], num_points: usize) -> Vec<Point> {
    let n = points.len();
    if n <= 2 {
        return points.to_vec();
    }

    let xs = lin_space(points[0].x, points[n - 1].x, num_points);
    let mut fitted = Vec::with_capacity(xs.len());

    let mut j = 0;
    let mut interval = segment_interval(points, j);
    let mut crossings = 0usize;

    for x in xs {
        if x > points[j + 1].x && j + 2 < n {
            while x > points[j + 1].x && j + 2 < n {
                j += 1;
            }
            interval = segment_interval(points, j);
            crossings += 1;
        }

        let y = bezier_value(points[j], points[j + 1], interval, x);
        fitted.push(Point::new(x, y));
    }

    log::trace!(
        "fit_bezier: {n} input points, {} samples, {crossings} interval recomputations",
        fitted.len()
    );

    fitted
}

/// Same contract as [`fit_bezier`], but every sample looks up its segment by
/// binary search and builds the interval from scratch.
///
/// Does not rely on the samples being visited in order.
pub fn fit_bezier_searched(points: &[Point], num_points: usize) -> Vec<Point> {
    let n = points.len();
    if n <= 2 {
        return points.to_vec();
    }

    lin_space(points[0].x, points[n - 1].x, num_points)
        .into_iter()
        .map(|x| {
            let j = find_segment(points, x);
            let y = bezier_value(points[j], points[j + 1], segment_interval(points, j), x);
            Point::new(x, y)
        })
        .collect()
}

/// Fit many independent point sequences in parallel.
///
/// Output order matches input order.
pub fn fit_bezier_batch<P>(curves: &[P], num_points: usize) -> Vec<Vec<Point>>
where
    P: AsRef<[Point]> + Sync,
{
    curves
        .par_iter()
        .map(|points| fit_bezier(points.as_ref(), num_points))
        .collect()
}
