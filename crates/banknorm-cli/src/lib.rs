//! CLI library components for the bank statement normalizer.

pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
