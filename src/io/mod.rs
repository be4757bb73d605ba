//! Input/output helpers.
//!
//! - CSV/JSON point ingest + validation (`ingest`)
//! - fitted point exports (CSV/JSON) (`export`)
//! - curve JSON read/write (`curve`)

pub mod curve;
pub mod export;
pub mod ingest;

pub use curve::*;
pub use export::*;
pub use ingest::*;
