//! Cell extraction from Arrow record batches
//!
//! Converts typed Arrow columns into untyped [`RawValue`] cells so that CSV
//! and Parquet sources feed the same normalizer as spreadsheets.

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type, TimeUnit, TimestampMillisecondType};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;

use crate::models::{RawRow, RawValue};

/// Extract every cell of `array`
///
/// Numeric arrays become numbers, date and timestamp arrays become
/// timestamps, everything else is rendered as text. Nulls are missing.
pub fn extract_values(array: &ArrayRef) -> Result<Vec<RawValue>, ArrowError> {
    match array.data_type() {
        DataType::Null => Ok(vec![RawValue::Missing; array.len()]),
        dt if dt.is_numeric() => extract_numbers(array),
        DataType::Date32 | DataType::Date64 | DataType::Timestamp(..) => extract_timestamps(array),
        _ => extract_text(array),
    }
}

fn extract_numbers(array: &ArrayRef) -> Result<Vec<RawValue>, ArrowError> {
    let floats = cast(array, &DataType::Float64)?;
    let floats = floats.as_primitive::<Float64Type>();
    Ok((0..floats.len())
        .map(|i| {
            if floats.is_null(i) {
                RawValue::Missing
            } else {
                RawValue::number(floats.value(i))
            }
        })
        .collect())
}

fn extract_timestamps(array: &ArrayRef) -> Result<Vec<RawValue>, ArrowError> {
    let millis = cast(array, &DataType::Timestamp(TimeUnit::Millisecond, None))?;
    let millis = millis.as_primitive::<TimestampMillisecondType>();
    Ok((0..millis.len())
        .map(|i| {
            if millis.is_null(i) {
                RawValue::Missing
            } else {
                millis
                    .value_as_datetime(i)
                    .map_or(RawValue::Missing, RawValue::Timestamp)
            }
        })
        .collect())
}

fn extract_text(array: &ArrayRef) -> Result<Vec<RawValue>, ArrowError> {
    let strings = cast(array, &DataType::Utf8)?;
    let strings = strings.as_string::<i32>();
    Ok((0..strings.len())
        .map(|i| {
            if strings.is_null(i) {
                RawValue::Missing
            } else {
                RawValue::text(strings.value(i))
            }
        })
        .collect())
}

/// Convert a record batch into rows keyed by trimmed column name
pub fn batch_to_rows(batch: &RecordBatch) -> Result<Vec<RawRow>, ArrowError> {
    let schema = batch.schema();
    let mut rows: Vec<RawRow> = vec![RawRow::default(); batch.num_rows()];

    for (field, column) in schema.fields().iter().zip(batch.columns()) {
        let name = field.name().trim().to_string();
        for (row, value) in rows.iter_mut().zip(extract_values(column)?) {
            row.insert(name.clone(), value);
        }
    }

    Ok(rows)
}
