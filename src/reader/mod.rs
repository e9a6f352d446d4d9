//! Readers that turn a tabular source on disk into a [`RawTable`].
//!
//! The format is picked from the file extension. Excel workbooks go through
//! `calamine`; CSV and Parquet go through Arrow record batches.

pub mod csv;
pub mod excel;
pub mod parquet;

use std::fmt;
use std::path::Path;

use arrow::datatypes::Schema;
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;

use crate::error::{DashboardError, Result};
use crate::models::RawTable;
use crate::utils::arrow::batch_to_rows;
use crate::utils::logging::SourceOperation;

/// Supported source formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// `.xlsx`, `.xlsm`, `.xlsb`, `.xls` or `.ods`
    Excel,
    /// `.csv`
    Csv,
    /// `.parquet`
    Parquet,
}

impl SourceFormat {
    /// Determine the format from the extension of `path`
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => Ok(Self::Excel),
            Some("csv") => Ok(Self::Csv),
            Some("parquet") => Ok(Self::Parquet),
            Some(other) => Err(DashboardError::malformed(
                path,
                format!("unsupported file extension '.{other}'"),
            )),
            None => Err(DashboardError::malformed(path, "file has no extension")),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excel => f.write_str("Excel"),
            Self::Csv => f.write_str("CSV"),
            Self::Parquet => f.write_str("Parquet"),
        }
    }
}

/// Read the source at `path` into a raw table
///
/// Fails with `SourceNotFound` when the file is missing or unreadable and
/// with `SourceMalformed` when it cannot be parsed or holds no data rows.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let metadata = std::fs::metadata(path).map_err(|e| DashboardError::from_io(path, e))?;
    if !metadata.is_file() {
        return Err(DashboardError::malformed(path, "path is not a file"));
    }

    let format = SourceFormat::from_path(path)?;
    let operation = SourceOperation::start(format!("Reading {format} source"), path);

    let table = match format {
        SourceFormat::Excel => excel::read_excel(path)?,
        SourceFormat::Csv => csv::read_csv(path)?,
        SourceFormat::Parquet => parquet::read_parquet(path)?,
    };

    if table.is_empty() {
        return Err(DashboardError::malformed(path, "source contains no data rows"));
    }

    log::info!("Columns found: {:?}", table.columns());
    operation.complete(table.len());
    Ok(table)
}

/// Collect Arrow record batches into a raw table
pub(crate) fn batches_to_table<I>(path: &Path, schema: &Schema, batches: I) -> Result<RawTable>
where
    I: IntoIterator<Item = std::result::Result<RecordBatch, ArrowError>>,
{
    let columns = schema
        .fields()
        .iter()
        .map(|f| f.name().trim().to_string())
        .collect();
    let mut table = RawTable::new(columns);

    for batch in batches {
        let batch = batch.map_err(|e| DashboardError::from_arrow(path, &e))?;
        for row in batch_to_rows(&batch).map_err(|e| DashboardError::from_arrow(path, &e))? {
            table.push_row(row);
        }
    }

    Ok(table)
}
