//! Logging helpers for operations on a data source

use std::path::Path;
use std::time::{Duration, Instant};

/// A running operation on a source file
///
/// Logs when created and again, with row count and elapsed time, when
/// [`complete`](Self::complete) is called.
#[derive(Debug)]
pub struct SourceOperation<'a> {
    description: String,
    path: &'a Path,
    started: Instant,
}

impl<'a> SourceOperation<'a> {
    /// Log the start of an operation
    ///
    /// # Arguments
    /// * `description` - What is being done, e.g. "Reading CSV source"
    /// * `path` - The source being operated on
    pub fn start(description: impl Into<String>, path: &'a Path) -> Self {
        let description = description.into();
        log::info!("{description}: {}", path.display());
        Self {
            description,
            path,
            started: Instant::now(),
        }
    }

    /// Time since the operation started
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Log completion with the number of rows handled
    pub fn complete(self, rows: usize) {
        log::info!(
            "{} finished: {} rows from {} in {:?}",
            self.description,
            rows,
            self.path.display(),
            self.elapsed()
        );
    }
}

/// Log a warning about a source
pub fn log_source_warning(path: &Path, message: &str) {
    log::warn!("{}: {message}", path.display());
}
