//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the geometric primitives (`Point`, `BezierInterval`)
//! - configuration enums (`FitterKind`, `PointFormat`) and `FitConfig`
//! - the exported curve file (`CurveFile`)

pub mod types;

pub use types::*;
