//! Chart data preparer
//!
//! Aggregate series for the dashboard charts. The monthly and weekly series
//! are synthetic: each draws from its own generator seeded with
//! [`ChartConfig::seed`], so the same input always yields the same series no
//! matter which series is prepared first.

use itertools::Itertools;
use rand::prelude::*;
use serde::Serialize;

use crate::config::ChartConfig;
use crate::error::Result;
use crate::metrics::{average_target_utilization, average_utilization};
use crate::models::{MachineStatus, RecordSet};

/// Bucket labels of the monthly series
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Number of buckets in the weekly trend
pub const WEEKS: usize = 4;

const MONTHLY_FACTOR: std::ops::RangeInclusive<f64> = 0.8..=1.2;
const CURRENT_JITTER: std::ops::RangeInclusive<f64> = -5.0..=5.0;
const BASELINE_JITTER: std::ops::RangeInclusive<f64> = -2.0..=2.0;

/// Records sharing one status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: MachineStatus,
    pub count: usize,
}

/// Count records per status
///
/// Ordered by count descending, ties in status order. Statuses with no
/// records are left out.
#[must_use]
pub fn status_histogram(set: &RecordSet) -> Vec<StatusCount> {
    let counts = set.iter().counts_by(|r| r.status);

    MachineStatus::ALL
        .into_iter()
        .filter_map(|status| {
            counts
                .get(&status)
                .map(|&count| StatusCount { status, count })
        })
        .sorted_by(|a, b| b.count.cmp(&a.count).then(a.status.cmp(&b.status)))
        .collect()
}

/// One month of synthetic operating hours
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyHours {
    pub month: &'static str,
    pub hours: f64,
}

/// Synthetic operating hours per calendar month
///
/// Each bucket is the summed daily hours scaled by a factor drawn from
/// `[0.8, 1.2]` and by the configured days per month.
#[must_use]
pub fn monthly_hours(set: &RecordSet, config: &ChartConfig) -> Vec<MonthlyHours> {
    let daily_hours: f64 = set.iter().map(|r| r.hours_daily).sum();
    let mut rng = StdRng::seed_from_u64(config.seed);

    MONTHS
        .into_iter()
        .map(|month| MonthlyHours {
            month,
            hours: daily_hours * rng.random_range(MONTHLY_FACTOR) * config.days_per_month,
        })
        .collect()
}

/// One week of the utilization trend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyUtilization {
    pub week: String,
    /// Jittered average utilization
    pub current: f64,
    /// Jittered average target
    pub baseline: f64,
}

/// Synthetic utilization trend over four weeks
///
/// # Errors
///
/// Returns [`crate::DashboardError::EmptyRecordSet`] for an empty set.
pub fn weekly_trend(set: &RecordSet, config: &ChartConfig) -> Result<Vec<WeeklyUtilization>> {
    let utilization = average_utilization(set)?;
    let target = average_target_utilization(set)?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    Ok((1..=WEEKS)
        .map(|week| {
            let current = (utilization + rng.random_range(CURRENT_JITTER)).clamp(0.0, 100.0);
            let baseline = (target + rng.random_range(BASELINE_JITTER)).clamp(0.0, 100.0);
            WeeklyUtilization {
                week: format!("Week {week}"),
                current,
                baseline,
            }
        })
        .collect())
}

/// Everything the chart panels need for one view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub status_histogram: Vec<StatusCount>,
    pub monthly_hours: Vec<MonthlyHours>,
    pub weekly_trend: Vec<WeeklyUtilization>,
}

/// Prepare all chart series for a non-empty set
pub fn prepare_chart_data(set: &RecordSet, config: &ChartConfig) -> Result<ChartData> {
    Ok(ChartData {
        weekly_trend: weekly_trend(set, config)?,
        status_histogram: status_histogram(set),
        monthly_hours: monthly_hours(set, config),
    })
}
