//! Mathematical utilities: point geometry and local cubic Bezier segments.

pub mod bezier;
pub mod geometry;

pub use bezier::*;
pub use geometry::*;
