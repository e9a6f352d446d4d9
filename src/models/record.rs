//! Equipment record model
//!
//! An `EquipmentRecord` is one fully populated row after normalization. A
//! `RecordSet` groups records with the provenance of the source table they
//! came from.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use itertools::Itertools;
use serde::Serialize;

use super::types::{Column, MachineStatus};

/// One machine after normalization; every field is populated
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentRecord {
    #[serde(rename = "Machine_ID")]
    pub machine_id: String,
    #[serde(rename = "Machine_Type")]
    pub machine_type: String,
    #[serde(rename = "Status")]
    pub status: MachineStatus,
    #[serde(rename = "Site")]
    pub site: String,
    #[serde(rename = "Hours_Daily")]
    pub hours_daily: f64,
    #[serde(rename = "Cost_Daily")]
    pub cost_daily: f64,
    #[serde(rename = "Target_Utilization")]
    pub target_utilization: f64,
    #[serde(rename = "Current_Project")]
    pub current_project: String,
    #[serde(rename = "Utilization_Percent")]
    pub utilization_percent: f64,
    #[serde(rename = "Start_Date")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(rename = "End_Date")]
    pub end_date: Option<NaiveDateTime>,
    #[serde(rename = "Hours_Monthly")]
    pub hours_monthly: f64,
    #[serde(rename = "Hours_Yearly")]
    pub hours_yearly: f64,
    #[serde(rename = "Cost_Monthly")]
    pub cost_monthly: f64,
}

impl EquipmentRecord {
    /// Utilization implied by the daily hours, `(hours_daily / 24) * 100`
    #[must_use]
    pub fn utilization_from_hours(&self) -> f64 {
        crate::normalize::utilization_from_hours(self.hours_daily)
    }
}

/// Normalized records together with the columns the source physically had
///
/// The set is read-only once built; filtering yields a new set that shares
/// the same provenance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordSet {
    records: Vec<EquipmentRecord>,
    #[serde(skip)]
    source_columns: BTreeSet<Column>,
}

impl RecordSet {
    #[must_use]
    pub fn new(records: Vec<EquipmentRecord>, source_columns: BTreeSet<Column>) -> Self {
        Self {
            records,
            source_columns,
        }
    }

    /// A new set holding `records` with this set's provenance
    #[must_use]
    pub fn derive(&self, records: Vec<EquipmentRecord>) -> Self {
        Self {
            records,
            source_columns: self.source_columns.clone(),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[EquipmentRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EquipmentRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether `column` existed in the source before defaults were filled in
    #[must_use]
    pub fn had_column(&self, column: Column) -> bool {
        self.source_columns.contains(&column)
    }

    /// Columns present in the source
    #[must_use]
    pub fn source_columns(&self) -> &BTreeSet<Column> {
        &self.source_columns
    }

    /// True when the source had a `Start_Date` column and at least one
    /// record carries a parsed start date
    #[must_use]
    pub fn has_date_information(&self) -> bool {
        self.had_column(Column::StartDate) && self.records.iter().any(|r| r.start_date.is_some())
    }

    /// Distinct site names, sorted
    #[must_use]
    pub fn distinct_sites(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.site.clone())
            .sorted()
            .dedup()
            .collect()
    }

    /// Distinct machine types, sorted
    #[must_use]
    pub fn distinct_machine_types(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.machine_type.clone())
            .sorted()
            .dedup()
            .collect()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a EquipmentRecord;
    type IntoIter = std::slice::Iter<'a, EquipmentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
