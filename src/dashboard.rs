//! Dashboard pipeline
//!
//! Wires loader, filter engine, metric calculator and chart preparer together
//! for a single request. A [`Dashboard`] owns the normalized data; every call
//! to [`Dashboard::build`] filters it afresh and derives a new view.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::charts::{ChartData, prepare_chart_data};
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::filter::{DateRangePreset, DateWindow, FilterCriteria, Sentinels, filter_records};
use crate::loader::load_data;
use crate::metrics::{Kpis, Totals, UtilizationSummary, compute_kpis, totals, utilization_summary};
use crate::models::{EquipmentRecord, MachineStatus, RecordSet};
use crate::utils::round2;

/// Values offered by the three selectors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorOptions {
    pub date_ranges: Vec<String>,
    /// The "every site" sentinel followed by the sorted distinct sites
    pub sites: Vec<String>,
    /// The "every machine type" sentinel followed by the sorted distinct types
    pub machine_types: Vec<String>,
}

impl SelectorOptions {
    /// Options for the unfiltered set
    #[must_use]
    pub fn from_records(set: &RecordSet, sentinels: &Sentinels) -> Self {
        let with_sentinel = |sentinel: &str, values: Vec<String>| -> Vec<String> {
            std::iter::once(sentinel.to_string()).chain(values).collect()
        };

        Self {
            date_ranges: DateRangePreset::labels()
                .into_iter()
                .map(str::to_string)
                .collect(),
            sites: with_sentinel(&sentinels.all_sites, set.distinct_sites()),
            machine_types: with_sentinel(&sentinels.all_equipment, set.distinct_machine_types()),
        }
    }
}

/// One user selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardRequest {
    pub preset: DateRangePreset,
    pub site: Option<String>,
    pub machine_type: Option<String>,
}

/// A row of the equipment table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
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
    #[serde(rename = "Current_Project")]
    pub current_project: String,
    #[serde(rename = "Target_Utilization")]
    pub target_utilization: f64,
}

impl From<&EquipmentRecord> for TableRow {
    fn from(record: &EquipmentRecord) -> Self {
        Self {
            machine_id: record.machine_id.clone(),
            machine_type: record.machine_type.clone(),
            status: record.status,
            site: record.site.clone(),
            hours_daily: round2(record.hours_daily),
            current_project: record.current_project.clone(),
            target_utilization: round2(record.target_utilization),
        }
    }
}

/// Everything rendered for a non-empty selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub kpis: Kpis,
    pub utilization: UtilizationSummary,
    pub charts: ChartData,
    pub table: Vec<TableRow>,
    pub totals: Totals,
}

/// Result of a dashboard request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome")]
pub enum DashboardOutcome {
    Ready(Box<DashboardView>),
    /// The filters left no records; nothing was computed
    NoData { request_summary: String },
}

impl DashboardOutcome {
    #[must_use]
    pub fn view(&self) -> Option<&DashboardView> {
        match self {
            Self::Ready(view) => Some(view.as_ref()),
            Self::NoData { .. } => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }
}

/// Normalized data plus the settings used to build views from it
#[derive(Debug, Clone)]
pub struct Dashboard {
    records: RecordSet,
    config: DashboardConfig,
}

impl Dashboard {
    /// Load the data source named by `config`
    pub fn load(config: DashboardConfig) -> Result<Self> {
        let records = load_data(&config.data_path)?;
        Ok(Self::new(records, config))
    }

    #[must_use]
    pub fn new(records: RecordSet, config: DashboardConfig) -> Self {
        Self { records, config }
    }

    #[must_use]
    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Selector options computed from the unfiltered data
    #[must_use]
    pub fn options(&self) -> SelectorOptions {
        SelectorOptions::from_records(&self.records, &Sentinels::from(&self.config))
    }

    /// Build the view for `request`, with date windows ending now
    pub fn build(&self, request: &DashboardRequest) -> Result<DashboardOutcome> {
        self.build_with_window(request, request.preset.window())
    }

    /// Build the view for `request`, with date windows ending at `now`
    pub fn build_at(
        &self,
        request: &DashboardRequest,
        now: NaiveDateTime,
    ) -> Result<DashboardOutcome> {
        self.build_with_window(request, request.preset.window_at(now))
    }

    fn build_with_window(
        &self,
        request: &DashboardRequest,
        window: DateWindow,
    ) -> Result<DashboardOutcome> {
        let mut criteria = FilterCriteria::new()
            .with_sentinels(Sentinels::from(&self.config))
            .with_date_window(window);
        criteria.site = request.site.clone();
        criteria.machine_type = request.machine_type.clone();

        let filtered = filter_records(&self.records, &criteria);
        if filtered.is_empty() {
            log::info!("No records match {}", describe(request));
            return Ok(DashboardOutcome::NoData {
                request_summary: describe(request),
            });
        }

        let view = DashboardView {
            kpis: compute_kpis(&filtered)?,
            utilization: utilization_summary(&filtered)?,
            charts: prepare_chart_data(&filtered, &self.config.charts)?,
            table: filtered.iter().map(TableRow::from).collect(),
            totals: totals(&filtered),
        };
        Ok(DashboardOutcome::Ready(Box::new(view)))
    }
}

fn describe(request: &DashboardRequest) -> String {
    format!(
        "range '{}', site '{}', machine type '{}'",
        request.preset,
        request.site.as_deref().unwrap_or("any"),
        request.machine_type.as_deref().unwrap_or("any")
    )
}
