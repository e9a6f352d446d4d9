use std::io::Write;
use std::sync::Arc;

use arrow::array::{ArrayRef, Date32Array, Float64Array, StringArray};
use arrow::record_batch::RecordBatch;
use chrono::{NaiveDate, NaiveDateTime};
use parquet::arrow::ArrowWriter;
use rust_xlsxwriter::{Format, Workbook};
use tempfile::NamedTempFile;

use equiptrack::{RawTable, RawValue, RecordSet, normalize};

/// Header of the fleet fixture
pub const FLEET_HEADER: &str =
    "Machine_ID,Machine_Type,Status,Site,Hours_Daily,Cost_Daily,Target_Utilization,Start_Date";

/// A small fleet across two sites, dated relative to [`reference_now`]
pub const FLEET_ROWS: [&str; 6] = [
    "EX-001,Excavator,Working,North Yard,12,1500,80,2024-06-01",
    "EX-002,Excavator,Idle,South Yard,6,1400,75,2024-06-10",
    "CR-001,Crane,Maintenance,North Yard,0,2500,70,2024-01-15",
    "CR-002,Crane,Working,South Yard,18,2600,85,2024-05-20",
    "LD-001,Loader,Broken,North Yard,9,900,75,",
    "LD-002,Loader,Maintenance,South Yard,3,950,60,2023-11-02",
];

/// Fixed "now" for date window tests
#[must_use]
pub fn reference_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid reference date")
}

/// Write `header` and `rows` to a temporary CSV file
pub fn write_csv(header: &str, rows: &[&str]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    writeln!(file, "{header}").expect("write header");
    for row in rows {
        writeln!(file, "{row}").expect("write row");
    }
    file.flush().expect("flush csv");
    file
}

/// The fleet fixture as a CSV file
pub fn fleet_csv() -> NamedTempFile {
    write_csv(FLEET_HEADER, &FLEET_ROWS)
}

/// Write a record batch to a temporary Parquet file
pub fn write_parquet(batch: &RecordBatch) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".parquet")
        .tempfile()
        .expect("create temp parquet");
    let mut writer = ArrowWriter::try_new(
        file.reopen().expect("reopen parquet"),
        batch.schema(),
        None,
    )
    .expect("create parquet writer");
    writer.write(batch).expect("write batch");
    writer.close().expect("close parquet writer");
    file
}

/// A worksheet cell for [`write_xlsx`]
#[derive(Debug, Clone, Copy)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    /// Stored as a serial number with a date format, as Excel does
    Date(NaiveDate),
    Blank,
}

/// Write `header` and `rows` to the first sheet of a temporary workbook
pub fn write_xlsx(header: &[&str], rows: &[Vec<Cell<'_>>]) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".xlsx")
        .tempfile()
        .expect("create temp xlsx");
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30).expect("excel epoch");
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, name) in header.iter().enumerate() {
        sheet
            .write_string(0, col as u16, *name)
            .expect("write header cell");
    }
    for (idx, cells) in rows.iter().enumerate() {
        let row = idx as u32 + 1;
        for (col, cell) in cells.iter().enumerate() {
            let col = col as u16;
            match *cell {
                Cell::Text(text) => {
                    sheet.write_string(row, col, text).expect("write text cell");
                }
                Cell::Number(value) => {
                    sheet.write_number(row, col, value).expect("write number cell");
                }
                Cell::Date(date) => {
                    let serial = (date - excel_epoch).num_days() as f64;
                    sheet
                        .write_number_with_format(row, col, serial, &date_format)
                        .expect("write date cell");
                }
                Cell::Blank => {}
            }
        }
    }
    workbook.save(file.path()).expect("save workbook");
    file
}

/// A Parquet fleet with typed columns and no `Hours_Daily`
pub fn fleet_parquet() -> NamedTempFile {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).expect("epoch");
    let days = |y, m, d| {
        NaiveDate::from_ymd_opt(y, m, d)
            .map(|date| (date - epoch).num_days() as i32)
            .expect("valid date")
    };

    let batch = RecordBatch::try_from_iter(vec![
        (
            "Machine_ID",
            Arc::new(StringArray::from(vec!["P-1", "P-2", "P-3"])) as ArrayRef,
        ),
        (
            "Status",
            Arc::new(StringArray::from(vec![Some("Working"), None, Some("Idle")])) as ArrayRef,
        ),
        (
            "Utilization_Percent",
            Arc::new(Float64Array::from(vec![40.0, 60.0, 80.0])) as ArrayRef,
        ),
        (
            "Start_Date",
            Arc::new(Date32Array::from(vec![
                Some(days(2024, 6, 1)),
                Some(days(2022, 2, 1)),
                None,
            ])) as ArrayRef,
        ),
    ])
    .expect("build batch");

    write_parquet(&batch)
}

/// Normalize rows given as (column, value) pairs
pub fn records(rows: Vec<Vec<(&str, RawValue)>>) -> RecordSet {
    normalize(&RawTable::from_rows(rows))
}

/// One column of statuses
pub fn with_statuses(statuses: &[&str]) -> RecordSet {
    records(
        statuses
            .iter()
            .map(|s| vec![("Status", RawValue::text(*s))])
            .collect(),
    )
}
