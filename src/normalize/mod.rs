//! Record normalization
//!
//! Turns a [`RawTable`] of unknown or partial schema into a [`RecordSet`] in
//! which every record is fully populated:
//!
//! - absent columns are synthesized from [`DEFAULT_POLICIES`],
//! - unparseable dates become absent,
//! - status values outside {Working, Idle, Maintenance} become Working,
//! - missing numeric cells become 0 and missing text cells get a per-field
//!   fill value.
//!
//! No row is ever rejected. What was repaired is collected in a
//! [`NormalizationReport`].

pub mod coerce;
pub mod defaults;

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::config::defaults::{HOURS_PER_DAY, NUMERIC_FILL};
use crate::models::{
    Column, ColumnKind, EquipmentRecord, MachineStatus, RawRow, RawTable, RawValue, RecordSet,
};

pub use defaults::{DEFAULT_POLICIES, DefaultPolicy, missing_text_fill};

/// Utilization percentage implied by daily operating hours
///
/// Not clamped: more than 24 hours a day yields more than 100 percent.
#[must_use]
pub fn utilization_from_hours(hours_daily: f64) -> f64 {
    (hours_daily / HOURS_PER_DAY) * 100.0
}

/// What the normalizer had to repair
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizationReport {
    /// Rows normalized
    pub rows: usize,
    /// Recognized columns absent from the source and synthesized
    pub synthesized_columns: Vec<Column>,
    /// Source columns the normalizer does not use
    pub unrecognized_columns: Vec<String>,
    /// Missing text cells filled with a default
    pub text_fills: usize,
    /// Missing or unusable numeric cells set to 0
    pub numeric_fills: usize,
    /// Status cells replaced with Working
    pub status_repairs: usize,
    /// Distinct status labels that were replaced
    pub invalid_statuses: BTreeSet<String>,
    /// Non-empty date cells that could not be parsed
    pub unparsed_dates: usize,
}

impl NormalizationReport {
    /// Whether any cell had to be changed
    #[must_use]
    pub fn has_repairs(&self) -> bool {
        self.text_fills > 0
            || self.numeric_fills > 0
            || self.status_repairs > 0
            || self.unparsed_dates > 0
    }

    /// Write the report to the log
    pub fn log(&self) {
        for column in &self.synthesized_columns {
            log::info!("Added column '{column}' with default values");
        }
        if !self.unrecognized_columns.is_empty() {
            log::debug!(
                "Ignoring unrecognized columns: {:?}",
                self.unrecognized_columns
            );
        }
        if self.status_repairs > 0 {
            log::warn!(
                "Replaced {} invalid status values with Working: {:?}",
                self.status_repairs,
                self.invalid_statuses
            );
        }
        if self.unparsed_dates > 0 {
            log::warn!(
                "{} date values could not be parsed and were left empty",
                self.unparsed_dates
            );
        }
        if self.numeric_fills > 0 || self.text_fills > 0 {
            log::warn!(
                "Filled {} missing numeric and {} missing text cells",
                self.numeric_fills,
                self.text_fills
            );
        }
    }
}

/// A field value while a row is being resolved
#[derive(Debug, Clone)]
enum Resolved {
    Text(String),
    Number(f64),
    Timestamp(Option<NaiveDateTime>),
}

/// Normalize a raw table into a record set
#[must_use]
pub fn normalize(table: &RawTable) -> RecordSet {
    normalize_with_report(table).0
}

/// Normalize a raw table and report what was repaired
#[must_use]
pub fn normalize_with_report(table: &RawTable) -> (RecordSet, NormalizationReport) {
    let source_columns: BTreeSet<Column> = Column::ALL
        .into_iter()
        .filter(|c| table.has_column(c.header()))
        .collect();

    let mut report = NormalizationReport {
        rows: table.len(),
        synthesized_columns: DEFAULT_POLICIES
            .iter()
            .map(|(column, _)| *column)
            .filter(|c| !source_columns.contains(c))
            .collect(),
        unrecognized_columns: table
            .columns()
            .iter()
            .filter(|name| Column::from_header(name).is_none())
            .cloned()
            .collect(),
        ..NormalizationReport::default()
    };

    let records = table
        .rows()
        .iter()
        .enumerate()
        .map(|(idx, row)| normalize_row(idx, row, &source_columns, &mut report))
        .collect();

    (RecordSet::new(records, source_columns), report)
}

fn normalize_row(
    idx: usize,
    row: &RawRow,
    source_columns: &BTreeSet<Column>,
    report: &mut NormalizationReport,
) -> EquipmentRecord {
    let mut values: FxHashMap<Column, Resolved> = FxHashMap::default();

    for (column, policy) in DEFAULT_POLICIES {
        let value = if source_columns.contains(&column) {
            let cell = row.get(column.header()).unwrap_or(&RawValue::Missing);
            resolve_cell(column, cell, report)
        } else {
            resolve_default(idx, policy, &values)
        };
        values.insert(column, value);
    }

    let status = repair_status(take_text(&mut values, Column::Status), report);

    EquipmentRecord {
        machine_id: take_text(&mut values, Column::MachineId),
        machine_type: take_text(&mut values, Column::MachineType),
        status,
        site: take_text(&mut values, Column::Site),
        hours_daily: number(&values, Column::HoursDaily),
        cost_daily: number(&values, Column::CostDaily),
        target_utilization: number(&values, Column::TargetUtilization),
        current_project: take_text(&mut values, Column::CurrentProject),
        utilization_percent: number(&values, Column::UtilizationPercent),
        start_date: timestamp(&values, Column::StartDate),
        end_date: timestamp(&values, Column::EndDate),
        hours_monthly: number(&values, Column::HoursMonthly),
        hours_yearly: number(&values, Column::HoursYearly),
        cost_monthly: number(&values, Column::CostMonthly),
    }
}

/// Coerce a cell from a column the source has
fn resolve_cell(column: Column, cell: &RawValue, report: &mut NormalizationReport) -> Resolved {
    match column.kind() {
        ColumnKind::Text => Resolved::Text(coerce::coerce_text(cell).unwrap_or_else(|| {
            report.text_fills += 1;
            missing_text_fill(column).to_string()
        })),
        ColumnKind::Numeric => Resolved::Number(coerce::coerce_number(cell).unwrap_or_else(|| {
            report.numeric_fills += 1;
            NUMERIC_FILL
        })),
        ColumnKind::Timestamp => {
            let parsed = coerce::coerce_timestamp(cell);
            if parsed.is_none() && !cell.is_missing() {
                log::debug!("Unparseable {column} value {cell:?}");
                report.unparsed_dates += 1;
            }
            Resolved::Timestamp(parsed)
        }
    }
}

/// Synthesize a value for a column the source lacks
fn resolve_default(
    idx: usize,
    policy: DefaultPolicy,
    resolved: &FxHashMap<Column, Resolved>,
) -> Resolved {
    match policy {
        DefaultPolicy::Sequence(prefix) => Resolved::Text(format!("{prefix}{}", idx + 1)),
        DefaultPolicy::Text(text) => Resolved::Text(text.to_string()),
        DefaultPolicy::Number(value) => Resolved::Number(value),
        DefaultPolicy::PerDay { daily, days } => Resolved::Number(number(resolved, daily) * days),
        DefaultPolicy::UtilizationOf(hours) => {
            Resolved::Number(utilization_from_hours(number(resolved, hours)))
        }
        DefaultPolicy::Absent => Resolved::Timestamp(None),
    }
}

fn repair_status(label: String, report: &mut NormalizationReport) -> MachineStatus {
    MachineStatus::parse(&label).unwrap_or_else(|| {
        report.status_repairs += 1;
        report.invalid_statuses.insert(label);
        MachineStatus::Working
    })
}

fn take_text(values: &mut FxHashMap<Column, Resolved>, column: Column) -> String {
    match values.remove(&column) {
        Some(Resolved::Text(text)) => text,
        _ => missing_text_fill(column).to_string(),
    }
}

fn number(values: &FxHashMap<Column, Resolved>, column: Column) -> f64 {
    match values.get(&column) {
        Some(Resolved::Number(n)) => *n,
        _ => NUMERIC_FILL,
    }
}

fn timestamp(values: &FxHashMap<Column, Resolved>, column: Column) -> Option<NaiveDateTime> {
    match values.get(&column) {
        Some(Resolved::Timestamp(ts)) => *ts,
        _ => None,
    }
}
