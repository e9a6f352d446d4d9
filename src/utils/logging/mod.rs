//! Logging utilities

pub mod log;

pub use self::log::{SourceOperation, log_source_warning};
