//! Loading equipment data
//!
//! Reads a source table from disk and normalizes it into a record set.

use std::path::Path;

use crate::error::Result;
use crate::metrics::data_summary;
use crate::models::RecordSet;
use crate::normalize::{NormalizationReport, normalize_with_report};
use crate::reader::read_table;
use crate::utils::logging::{SourceOperation, log_source_warning};

/// Load and normalize the equipment data at `path`
///
/// # Arguments
/// * `path` - Spreadsheet, CSV or Parquet file
///
/// # Returns
/// The normalized record set. Per-row repairs are logged and never fail the
/// load.
pub fn load_data(path: &Path) -> Result<RecordSet> {
    load_data_with_report(path).map(|(set, _)| set)
}

/// Load and normalize the data at `path`, also returning what normalization
/// had to repair
pub fn load_data_with_report(path: &Path) -> Result<(RecordSet, NormalizationReport)> {
    let table = read_table(path)?;

    let operation = SourceOperation::start("Normalizing records", path);
    let (set, report) = normalize_with_report(&table);
    report.log();
    if report.has_repairs() {
        log_source_warning(path, "some cells were repaired during normalization");
    }
    operation.complete(set.len());

    data_summary(&set).log();
    Ok((set, report))
}
