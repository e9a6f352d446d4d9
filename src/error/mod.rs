//! Error handling for the equipment dashboard pipeline.

use std::io;
use std::path::{Path, PathBuf};

use arrow::error::ArrowError;
use parquet::errors::ParquetError;
use thiserror::Error;

/// Specialized error type for loading and summarising equipment data
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The data source does not exist or cannot be opened
    #[error("Data source not found: {} ({source})", path.display())]
    SourceNotFound {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The data source exists but cannot be read as a table
    #[error("Data source {} is malformed: {message}", path.display())]
    SourceMalformed {
        /// Path of the offending source
        path: PathBuf,
        /// Cause reported by the reader
        message: String,
    },

    /// A metric that needs at least one record was asked for on an empty set
    #[error("Record set is empty")]
    EmptyRecordSet,

    /// A selector received a value outside its enumeration
    #[error("Invalid option '{value}' for {selector}")]
    InvalidOption {
        /// Which selector rejected the value
        selector: &'static str,
        /// The rejected value
        value: String,
    },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DashboardError {
    /// Build a `SourceMalformed` error for `path`
    pub fn malformed(path: &Path, message: impl Into<String>) -> Self {
        Self::SourceMalformed {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Classify an I/O failure on `path`: missing or unreadable files are
    /// `SourceNotFound`, everything else means the content could not be parsed
    pub fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => Self::SourceNotFound {
                path: path.to_path_buf(),
                source: error,
            },
            _ => Self::malformed(path, error.to_string()),
        }
    }

    /// Wrap an Arrow failure raised while decoding `path`
    pub fn from_arrow(path: &Path, error: &ArrowError) -> Self {
        Self::malformed(path, format!("Arrow error: {error}"))
    }

    /// Wrap a Parquet failure raised while decoding `path`
    pub fn from_parquet(path: &Path, error: &ParquetError) -> Self {
        Self::malformed(path, format!("Parquet error: {error}"))
    }

    /// Whether this error aborts the whole request
    #[must_use]
    pub const fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::SourceNotFound { .. } | Self::SourceMalformed { .. }
        )
    }
}

/// Result type for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
