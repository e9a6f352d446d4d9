//! The ordered table of default policies
//!
//! When a recognized column is absent from the source, the normalizer walks
//! this table once, in order, and synthesizes the column from its policy.
//! Derived policies read columns resolved earlier in the table, so a source
//! column must always precede the columns computed from it.

use crate::config::defaults;
use crate::models::Column;

/// How an absent column is synthesized
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultPolicy {
    /// `<prefix><row number>`, numbering from 1
    Sequence(&'static str),
    /// A constant text value
    Text(&'static str),
    /// A constant number
    Number(f64),
    /// A daily figure from another column projected over `days`
    PerDay { daily: Column, days: f64 },
    /// Utilization percentage implied by a daily hours column
    UtilizationOf(Column),
    /// The column stays absent on every record
    Absent,
}

/// Default policy per recognized column, in resolution order
pub const DEFAULT_POLICIES: [(Column, DefaultPolicy); 14] = [
    (
        Column::MachineId,
        DefaultPolicy::Sequence(defaults::MACHINE_ID_PREFIX),
    ),
    (
        Column::MachineType,
        DefaultPolicy::Text(defaults::MACHINE_TYPE),
    ),
    (
        Column::Status,
        DefaultPolicy::Text(crate::models::MachineStatus::Working.as_str()),
    ),
    (Column::HoursDaily, DefaultPolicy::Number(defaults::HOURS_DAILY)),
    (Column::Site, DefaultPolicy::Text(defaults::SITE)),
    (
        Column::TargetUtilization,
        DefaultPolicy::Number(defaults::TARGET_UTILIZATION),
    ),
    (
        Column::CurrentProject,
        DefaultPolicy::Text(defaults::CURRENT_PROJECT),
    ),
    (Column::CostDaily, DefaultPolicy::Number(defaults::COST_DAILY)),
    (
        Column::HoursMonthly,
        DefaultPolicy::PerDay {
            daily: Column::HoursDaily,
            days: defaults::DAYS_PER_MONTH,
        },
    ),
    (
        Column::HoursYearly,
        DefaultPolicy::PerDay {
            daily: Column::HoursDaily,
            days: defaults::DAYS_PER_YEAR,
        },
    ),
    (
        Column::CostMonthly,
        DefaultPolicy::PerDay {
            daily: Column::CostDaily,
            days: defaults::DAYS_PER_MONTH,
        },
    ),
    (
        Column::UtilizationPercent,
        DefaultPolicy::UtilizationOf(Column::HoursDaily),
    ),
    (Column::StartDate, DefaultPolicy::Absent),
    (Column::EndDate, DefaultPolicy::Absent),
];

/// Replacement for a missing cell in a text column that is present
#[must_use]
pub const fn missing_text_fill(column: Column) -> &'static str {
    match column {
        Column::Status => crate::models::MachineStatus::Working.as_str(),
        Column::Site => defaults::SITE,
        Column::MachineType => defaults::MACHINE_TYPE,
        _ => defaults::TEXT_FILL,
    }
}
