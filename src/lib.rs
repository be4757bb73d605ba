//! `bezier-fit` library crate.
//!
//! Smooth piecewise cubic Bezier curves through 2-D points with non-decreasing x.
//!
//! The binary (`bzfit`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the fitters can be embedded in other plotting code
//!
//! ```
//! use bezier_fit::domain::Point;
//! use bezier_fit::fit::{BezierSpline, BezierSplineCurveFitter, CurveFitter, fit_bezier};
//!
//! let points = [Point::new(0.0, 0.0), Point::new(1.0, 2.0), Point::new(2.0, 0.0)];
//!
//! let dense = fit_bezier(&points, 50);
//! assert_eq!(dense.len(), 50);
//!
//! let mut fitter = BezierSplineCurveFitter::<BezierSpline>::default();
//! assert_eq!(fitter.fit_curve(&points).len(), 250);
//! ```

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
