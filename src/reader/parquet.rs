//! Parquet sources

use std::fs::File;
use std::path::Path;

use ::parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::batches_to_table;
use crate::error::{DashboardError, Result};
use crate::models::RawTable;

/// Read every row group of a Parquet file
pub fn read_parquet(path: &Path) -> Result<RawTable> {
    let file = File::open(path).map_err(|e| DashboardError::from_io(path, e))?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .map_err(|e| DashboardError::from_parquet(path, &e))?;
    let schema = builder.schema().clone();
    let reader = builder
        .build()
        .map_err(|e| DashboardError::from_parquet(path, &e))?;

    batches_to_table(path, &schema, reader)
}
