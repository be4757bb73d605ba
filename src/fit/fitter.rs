//! Curve fitters: configuration plus a fitting strategy.
//!
//! Two strategies implement [`CurveFitter`]:
//!
//! - [`BezierSplineCurveFitter`] owns a reusable [`SplineState`], loads each input
//!   into it, samples it, and resets it afterwards
//! - [`BezierCurveFitter`] runs the stateless [`fit_bezier`] engine
//!
//! Both clamp their output size to [`MIN_SPLINE_SIZE`] and return inputs with
//! fewer than 3 points unchanged.

use std::ops::Deref;

use crate::domain::{DEFAULT_SPLINE_SIZE, FitterKind, MIN_SPLINE_SIZE, Point};
use crate::fit::bezier::fit_bezier;
use crate::fit::grid::lin_space;
use crate::fit::spline::{BezierSpline, SplineState};

/// Turns a point sequence into a denser, smooth point sequence.
///
/// `fit_curve` takes `&mut self` because some fitters reuse internal state between
/// calls; sharing one fitter across threads needs external locking.
pub trait CurveFitter {
    fn fit_curve(&mut self, points: &[Point]) -> Vec<Point>;

    /// Number of points produced for fittable inputs.
    fn spline_size(&self) -> usize;
}

/// Apply the output-size floor.
pub fn clamp_spline_size(spline_size: usize) -> usize {
    spline_size.max(MIN_SPLINE_SIZE)
}

/// Build a boxed fitter for `kind`.
pub fn make_fitter(kind: FitterKind, spline_size: usize) -> Box<dyn CurveFitter + Send> {
    match kind {
        FitterKind::Bezier => Box::new(BezierCurveFitter::new(spline_size)),
        FitterKind::Spline => Box::new(BezierSplineCurveFitter::<BezierSpline>::new(spline_size)),
    }
}

/// Spline state loaded for the duration of one fit.
///
/// Dropping the guard resets the state, so every return path of a fit leaves the
/// spline idle.
struct LoadedSpline<'a, S: SplineState> {
    spline: &'a mut S,
}

impl<'a, S: SplineState> LoadedSpline<'a, S> {
    fn load(spline: &'a mut S, points: &[Point]) -> Self {
        spline.set_points(points);
        Self { spline }
    }
}

impl<S: SplineState> Deref for LoadedSpline<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.spline
    }
}

impl<S: SplineState> Drop for LoadedSpline<'_, S> {
    fn drop(&mut self) {
        self.spline.reset();
    }
}

/// Fitter that samples an object-owned spline state.
#[derive(Debug, Clone)]
pub struct BezierSplineCurveFitter<S = BezierSpline> {
    spline: S,
    spline_size: usize,
}

impl<S: SplineState + Default> BezierSplineCurveFitter<S> {
    pub fn new(spline_size: usize) -> Self {
        Self::with_spline(S::default(), spline_size)
    }
}

impl<S: SplineState + Default> Default for BezierSplineCurveFitter<S> {
    fn default() -> Self {
        Self::new(DEFAULT_SPLINE_SIZE)
    }
}

impl<S: SplineState> BezierSplineCurveFitter<S> {
    pub fn with_spline(spline: S, spline_size: usize) -> Self {
        let mut fitter = Self {
            spline,
            spline_size: MIN_SPLINE_SIZE,
        };
        fitter.spline.reset();
        fitter.set_spline_size(spline_size);
        fitter
    }

    /// Replace the spline state. The new state is reset before use.
    pub fn set_spline(&mut self, spline: S) {
        self.spline = spline;
        self.spline.reset();
    }

    pub fn spline(&self) -> &S {
        &self.spline
    }

    pub fn spline_mut(&mut self) -> &mut S {
        &mut self.spline
    }

    /// Set the number of output points (at least [`MIN_SPLINE_SIZE`]).
    pub fn set_spline_size(&mut self, spline_size: usize) {
        self.spline_size = clamp_spline_size(spline_size);
    }
}

impl<S: SplineState> CurveFitter for BezierSplineCurveFitter<S> {
    fn fit_curve(&mut self, points: &[Point]) -> Vec<Point> {
        if points.len() <= 2 {
            return points.to_vec();
        }

        let spline = LoadedSpline::load(&mut self.spline, points);
        if !spline.is_valid() {
            log::debug!(
                "spline state rejected {} points; returning input unchanged",
                points.len()
            );
            return points.to_vec();
        }

        let x1 = points[0].x;
        let x2 = points[points.len() - 1].x;

        lin_space(x1, x2, self.spline_size)
            .into_iter()
            .map(|x| Point::new(x, spline.value(x)))
            .collect()
    }

    fn spline_size(&self) -> usize {
        self.spline_size
    }
}

/// Fitter running the stateless segment-cursor engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BezierCurveFitter {
    spline_size: usize,
}

impl BezierCurveFitter {
    pub fn new(spline_size: usize) -> Self {
        Self {
            spline_size: clamp_spline_size(spline_size),
        }
    }

    /// Set the number of output points (at least [`MIN_SPLINE_SIZE`]).
    pub fn set_spline_size(&mut self, spline_size: usize) {
        self.spline_size = clamp_spline_size(spline_size);
    }

    /// Shared-reference form of [`CurveFitter::fit_curve`]; this fitter holds no state.
    pub fn fit(&self, points: &[Point]) -> Vec<Point> {
        fit_bezier(points, self.spline_size)
    }
}

impl Default for BezierCurveFitter {
    fn default() -> Self {
        Self::new(DEFAULT_SPLINE_SIZE)
    }
}

impl CurveFitter for BezierCurveFitter {
    fn fit_curve(&mut self, points: &[Point]) -> Vec<Point> {
        self.fit(points)
    }

    fn spline_size(&self) -> usize {
        self.spline_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn zigzag() -> Vec<Point> {
        [(0.0, 0.0), (1.0, 2.0), (2.0, 0.0), (3.0, 2.0), (4.0, 0.0)]
            .into_iter()
            .map(Point::from)
            .collect()
    }

    /// Spline state that records its lifecycle.
    #[derive(Debug, Default)]
    struct RecordingSpline {
        loaded: usize,
        resets: usize,
        valid: bool,
        accept: bool,
    }

    impl SplineState for RecordingSpline {
        fn set_points(&mut self, _points: &[Point]) {
            self.loaded += 1;
            self.valid = self.accept;
        }

        fn is_valid(&self) -> bool {
            self.valid
        }

        fn value(&self, x: f64) -> f64 {
            2.0 * x
        }

        fn reset(&mut self) {
            self.resets += 1;
            self.valid = false;
        }
    }

    #[test]
    fn spline_size_is_clamped() {
        let mut fitter = BezierSplineCurveFitter::<BezierSpline>::new(3);
        assert_eq!(fitter.spline_size(), MIN_SPLINE_SIZE);
        for n in 0..10 {
            fitter.set_spline_size(n);
            assert_eq!(fitter.spline_size(), 10);
        }
        fitter.set_spline_size(250);
        fitter.set_spline_size(250);
        assert_eq!(fitter.spline_size(), 250);

        let mut stateless = BezierCurveFitter::new(0);
        assert_eq!(stateless.spline_size(), 10);
        stateless.set_spline_size(11);
        assert_eq!(stateless.spline_size(), 11);
    }

    #[test]
    fn defaults_use_250_points() {
        assert_eq!(BezierCurveFitter::default().spline_size(), 250);
        assert_eq!(BezierSplineCurveFitter::<BezierSpline>::default().spline_size(), 250);
    }

    #[test]
    fn state_is_reset_after_successful_fit() {
        let mut fitter = BezierSplineCurveFitter::with_spline(
            RecordingSpline { accept: true, ..Default::default() },
            10,
        );
        let out = fitter.fit_curve(&zigzag());
        assert_eq!(out.len(), 10);
        assert_abs_diff_eq!(out[9].y, 8.0);
        assert_eq!(fitter.spline().loaded, 1);
        // One reset from construction, one after the fit.
        assert_eq!(fitter.spline().resets, 2);
        assert!(!fitter.spline().is_valid());
    }

    #[test]
    fn state_is_reset_after_rejected_fit() {
        let mut fitter = BezierSplineCurveFitter::with_spline(RecordingSpline::default(), 10);
        let input = zigzag();
        assert_eq!(fitter.fit_curve(&input), input);
        assert_eq!(fitter.spline().loaded, 1);
        assert_eq!(fitter.spline().resets, 2);
    }

    #[test]
    fn short_input_never_touches_the_state() {
        let mut fitter = BezierSplineCurveFitter::with_spline(RecordingSpline::default(), 10);
        let input = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert_eq!(fitter.fit_curve(&input), input);
        assert_eq!(fitter.spline().loaded, 0);
    }

    #[test]
    fn set_spline_resets_the_new_state() {
        let mut fitter = BezierSplineCurveFitter::<BezierSpline>::new(10);
        let mut loaded = BezierSpline::new();
        loaded.set_points(&zigzag());
        assert!(loaded.is_valid());

        fitter.set_spline(loaded);
        assert!(!fitter.spline().is_valid());
        assert!(fitter.spline().points().is_empty());
    }

    #[test]
    fn both_strategies_agree_with_the_default_spline() {
        let input = zigzag();
        let mut a = make_fitter(FitterKind::Bezier, 33);
        let mut b = make_fitter(FitterKind::Spline, 33);
        let fa = a.fit_curve(&input);
        let fb = b.fit_curve(&input);
        assert_eq!(fa.len(), 33);
        assert_eq!(fb.len(), 33);
        for (p, q) in fa.iter().zip(&fb) {
            assert_eq!(p.x, q.x);
            assert_abs_diff_eq!(p.y, q.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn fitter_is_reusable_across_inputs() {
        let mut fitter = BezierSplineCurveFitter::<BezierSpline>::new(10);
        let first = fitter.fit_curve(&zigzag());
        let line: Vec<Point> = (0..4).map(|i| Point::new(i as f64, i as f64)).collect();
        let second = fitter.fit_curve(&line);
        assert_eq!(first.len(), 10);
        for p in &second {
            assert_abs_diff_eq!(p.y, p.x, epsilon = 1e-12);
        }
        assert!(fitter.spline().points().is_empty());
    }
}
