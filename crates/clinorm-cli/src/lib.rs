//! CLI library components for the clinical measurement normalizer.

pub mod batch;
pub mod interactive;
pub mod logging;
