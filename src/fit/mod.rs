//! Curve fitting.
//!
//! Responsibilities:
//!
//! - build evenly spaced sample grids
//! - run the stateless segment-cursor engine (single curve or parallel batch)
//! - drive an object-owned spline state through load / sample / reset

pub mod bezier;
pub mod fitter;
pub mod grid;
pub mod spline;

pub use bezier::*;
pub use fitter::*;
pub use grid::*;
pub use spline::*;
