//! Shared helpers: Arrow extraction, logging and number formatting

pub mod arrow;
pub mod format;
pub mod logging;

pub use format::{NumberFormat, format_number, round2};
