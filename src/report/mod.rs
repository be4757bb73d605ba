//! Reporting: formatted terminal summaries of a fit run.

pub mod format;

pub use format::*;
