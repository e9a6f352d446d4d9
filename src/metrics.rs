//! Metric calculator
//!
//! Scalar KPIs over a record set. Averages are undefined for an empty set, so
//! every function that averages returns [`DashboardError::EmptyRecordSet`]
//! instead of a value; callers check for an empty filter result first.

use serde::Serialize;

use crate::charts::{StatusCount, status_histogram};
use crate::config::defaults;
use crate::error::{DashboardError, Result};
use crate::models::{Column, MachineStatus, RecordSet};

/// Summary cards shown above the charts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    /// Machines in the set
    pub total: usize,
    /// Machines under maintenance
    pub maintenance_count: usize,
    /// Machines working or idle
    pub available_count: usize,
    /// Mean utilization in percent
    pub avg_utilization: f64,
}

/// Compute the KPI bundle for a non-empty set
pub fn compute_kpis(set: &RecordSet) -> Result<Kpis> {
    let avg_utilization = average_utilization(set)?;

    Ok(Kpis {
        total: set.len(),
        maintenance_count: set
            .iter()
            .filter(|r| r.status == MachineStatus::Maintenance)
            .count(),
        available_count: set.iter().filter(|r| r.status.is_available()).count(),
        avg_utilization,
    })
}

/// Mean of `Utilization_Percent`, or of the utilization implied by daily
/// hours when the source had no utilization column
pub fn average_utilization(set: &RecordSet) -> Result<f64> {
    if set.had_column(Column::UtilizationPercent) {
        mean(set.iter().map(|r| r.utilization_percent))
    } else {
        mean(set.iter().map(|r| r.utilization_from_hours()))
    }
}

/// Mean of `Target_Utilization`, or the default target when the source had
/// no target column
pub fn average_target_utilization(set: &RecordSet) -> Result<f64> {
    if set.had_column(Column::TargetUtilization) {
        mean(set.iter().map(|r| r.target_utilization))
    } else if set.is_empty() {
        Err(DashboardError::EmptyRecordSet)
    } else {
        Ok(defaults::TARGET_UTILIZATION)
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Result<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return Err(DashboardError::EmptyRecordSet);
    }
    Ok(sum / count as f64)
}

/// Whether average utilization reaches the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TargetStatus {
    AboveTarget,
    BelowTarget,
}

impl TargetStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AboveTarget => "Above Target",
            Self::BelowTarget => "Below Target",
        }
    }
}

/// Average utilization compared with the average target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtilizationSummary {
    pub average: f64,
    pub target: f64,
    pub status: TargetStatus,
}

/// Compare average utilization with the average target
pub fn utilization_summary(set: &RecordSet) -> Result<UtilizationSummary> {
    let average = average_utilization(set)?;
    let target = average_target_utilization(set)?;
    let status = if average >= target {
        TargetStatus::AboveTarget
    } else {
        TargetStatus::BelowTarget
    };

    Ok(UtilizationSummary {
        average,
        target,
        status,
    })
}

/// Totals shown under the equipment table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totals {
    pub records: usize,
    pub total_daily_cost: f64,
    pub total_daily_hours: f64,
}

/// Sum daily cost and hours; defined for empty sets
#[must_use]
pub fn totals(set: &RecordSet) -> Totals {
    Totals {
        records: set.len(),
        total_daily_cost: set.iter().map(|r| r.cost_daily).sum(),
        total_daily_hours: set.iter().map(|r| r.hours_daily).sum(),
    }
}

/// Overview of a freshly loaded set, for diagnostics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSummary {
    pub machines: usize,
    pub status_counts: Vec<StatusCount>,
    pub site_count: usize,
    pub machine_type_count: usize,
}

impl DataSummary {
    /// Write the summary to the log
    pub fn log(&self) {
        log::info!("Data summary:");
        log::info!("  - Machines: {}", self.machines);
        for count in &self.status_counts {
            log::info!("  - {}: {} machines", count.status, count.count);
        }
        log::info!("  - Sites: {}", self.site_count);
        log::info!("  - Machine types: {}", self.machine_type_count);
    }
}

/// Summarize a set by status, site and machine type
#[must_use]
pub fn data_summary(set: &RecordSet) -> DataSummary {
    DataSummary {
        machines: set.len(),
        status_counts: status_histogram(set),
        site_count: set.distinct_sites().len(),
        machine_type_count: set.distinct_machine_types().len(),
    }
}
