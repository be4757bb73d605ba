//! Reusable spline state for the object-owned fitter.
//!
//! A [`SplineState`] accumulates input points and answers point-wise queries over
//! their x-domain. The fitter drives it through a fixed cycle:
//!
//! ```text
//! Idle -> Loaded (set_points) -> Sampling (value, repeated) -> Idle (reset)
//! ```

use crate::domain::{BezierInterval, Point};
use crate::fit::bezier::{find_segment, segment_interval};
use crate::math::{bezier_value, is_x_monotonic};

/// Stateful spline evaluated by [`crate::fit::BezierSplineCurveFitter`].
pub trait SplineState {
    /// Load a point sequence, replacing anything held before.
    fn set_points(&mut self, points: &[Point]);
    /// Whether the loaded points can be evaluated.
    fn is_valid(&self) -> bool;
    /// Curve value at `x`. Only meaningful while [`SplineState::is_valid`] holds.
    fn value(&self, x: f64) -> f64;
    /// Drop all loaded points and derived data.
    fn reset(&mut self);
}

/// Piecewise cubic Bezier spline with one precomputed control interval per segment.
///
/// Uses the same neighbour rule as [`crate::fit::fit_bezier`], so both produce the
/// same curve for the same input.
#[derive(Debug, Clone, Default)]
pub struct BezierSpline {
    points: Vec<Point>,
    intervals: Vec<BezierInterval>,
}

impl BezierSpline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently loaded points (empty after [`SplineState::reset`]).
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of segments with a computed interval.
    pub fn segment_count(&self) -> usize {
        self.intervals.len()
    }

    fn can_fit(points: &[Point]) -> bool {
        let n = points.len();
        n >= 3
            && points.iter().all(|p| p.x.is_finite() && p.y.is_finite())
            && is_x_monotonic(points)
            && points[n - 1].x > points[0].x
    }
}

impl SplineState for BezierSpline {
    fn set_points(&mut self, points: &[Point]) {
        self.reset();
        self.points.extend_from_slice(points);

        if !Self::can_fit(points) {
            log::debug!("spline: {} points cannot be fitted", points.len());
            return;
        }

        self.intervals = (0..points.len() - 1)
            .map(|j| segment_interval(points, j))
            .collect();
    }

    fn is_valid(&self) -> bool {
        !self.intervals.is_empty()
    }

    fn value(&self, x: f64) -> f64 {
        if !self.is_valid() {
            return f64::NAN;
        }
        let j = find_segment(&self.points, x);
        bezier_value(self.points[j], self.points[j + 1], self.intervals[j], x)
    }

    fn reset(&mut self) {
        self.points.clear();
        self.intervals.clear();
    }
}
