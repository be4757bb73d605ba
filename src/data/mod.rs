//! Input data sources beyond files: seeded synthetic samples.

pub mod sample;

pub use sample::*;
