//! Arrow data handling utilities
//!
//! Helpers for turning Arrow record batches read from CSV or Parquet sources
//! into untyped rows.

pub mod extractors;

// Re-export commonly used functions for convenience
pub use extractors::{batch_to_rows, extract_values};
