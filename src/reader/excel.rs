//! Excel and OpenDocument workbooks
//!
//! Only the first worksheet is read. Its first row is the header.

use std::fs::File;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::error::{DashboardError, Result};
use crate::models::{RawRow, RawTable, RawValue};
use crate::normalize::coerce::parse_timestamp;

/// Read the first worksheet of a workbook
pub fn read_excel(path: &Path) -> Result<RawTable> {
    // calamine wraps open failures in its per-format errors
    File::open(path).map_err(|e| DashboardError::from_io(path, e))?;
    let mut workbook = open_workbook_auto(path).map_err(|e| match e {
        calamine::Error::Io(io) => DashboardError::from_io(path, io),
        other => DashboardError::malformed(path, other.to_string()),
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| DashboardError::malformed(path, "workbook has no worksheets"))?
        .map_err(|e| DashboardError::malformed(path, e.to_string()))?;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .map(|cells| {
            cells
                .iter()
                .enumerate()
                .map(|(idx, cell)| header_name(idx, cell))
                .collect()
        })
        .unwrap_or_default();

    let mut table = RawTable::new(header.clone());
    for cells in rows {
        let row: RawRow = header
            .iter()
            .zip(cells)
            .map(|(name, cell)| (name.clone(), cell_value(cell)))
            .collect();

        // Blank lines inside the used range carry no record
        if row.values().all(RawValue::is_missing) {
            continue;
        }
        table.push_row(row);
    }

    Ok(table)
}

fn header_name(idx: usize, cell: &Data) -> String {
    let name = match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    };
    if name.is_empty() {
        format!("Unnamed: {idx}")
    } else {
        name
    }
}

/// Convert a worksheet cell
fn cell_value(cell: &Data) -> RawValue {
    match cell {
        Data::Int(i) => RawValue::number(*i as f64),
        Data::Float(f) => RawValue::number(*f),
        Data::String(s) => RawValue::text(s.as_str()),
        Data::Bool(b) => RawValue::text(b.to_string()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map_or(RawValue::Missing, RawValue::Timestamp),
        Data::DateTimeIso(s) => {
            parse_timestamp(s).map_or_else(|| RawValue::text(s.as_str()), RawValue::Timestamp)
        }
        Data::DurationIso(s) => RawValue::text(s.as_str()),
        Data::Error(_) | Data::Empty => RawValue::Missing,
    }
}
