//! CSV sources, read through the Arrow CSV reader with an inferred schema

use std::fs::File;
use std::io::Seek;
use std::path::Path;
use std::sync::Arc;

use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::{DataType, Field, Schema};

use super::batches_to_table;
use crate::error::{DashboardError, Result};
use crate::models::{Column, ColumnKind, RawTable};

/// Read a CSV file with a header row
///
/// Rows shorter than the header are padded with nulls.
pub fn read_csv(path: &Path) -> Result<RawTable> {
    let mut file = File::open(path).map_err(|e| DashboardError::from_io(path, e))?;

    let (inferred, _) = Format::default()
        .with_header(true)
        .with_truncated_rows(true)
        .infer_schema(&mut file, None)
        .map_err(|e| DashboardError::from_arrow(path, &e))?;
    file.rewind().map_err(|e| DashboardError::from_io(path, e))?;

    let schema = Arc::new(text_columns_as_utf8(&inferred));
    let reader = ReaderBuilder::new(schema.clone())
        .with_header(true)
        .with_truncated_rows(true)
        .build(file)
        .map_err(|e| DashboardError::from_arrow(path, &e))?;

    batches_to_table(path, &schema, reader)
}

/// Keep recognized text columns as strings so values like `007` survive
fn text_columns_as_utf8(schema: &Schema) -> Schema {
    let fields: Vec<Field> = schema
        .fields()
        .iter()
        .map(|field| {
            let is_text = Column::from_header(field.name().trim())
                .is_some_and(|column| column.kind() == ColumnKind::Text);
            if is_text {
                Field::new(field.name(), DataType::Utf8, true)
            } else {
                field.as_ref().clone()
            }
        })
        .collect();
    Schema::new(fields)
}
