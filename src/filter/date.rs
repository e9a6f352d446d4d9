//! Date filtering functionality
//!
//! Date windows, the named presets offered to the user, and the filter that
//! keeps records whose start date falls inside a window.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::Serialize;

use crate::error::DashboardError;
use crate::filter::core::RecordFilter;
use crate::models::{Column, EquipmentRecord};

/// First year covered by the "All Time" preset
const ALL_TIME_START_YEAR: i32 = 2000;

/// An inclusive range of timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateWindow {
    #[must_use]
    pub const fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Whether `ts` lies within `[start, end]`
    #[must_use]
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        self.start <= ts && ts <= self.end
    }
}

/// Named date ranges offered by the date selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum DateRangePreset {
    #[default]
    LastThirtyDays,
    LastThreeMonths,
    LastSixMonths,
    ThisYear,
    AllTime,
}

impl DateRangePreset {
    /// Every preset in selector order
    pub const ALL: [Self; 5] = [
        Self::LastThirtyDays,
        Self::LastThreeMonths,
        Self::LastSixMonths,
        Self::ThisYear,
        Self::AllTime,
    ];

    /// Label shown in the selector
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LastThirtyDays => "Last 30 Days",
            Self::LastThreeMonths => "Last 3 Months",
            Self::LastSixMonths => "Last 6 Months",
            Self::ThisYear => "This Year",
            Self::AllTime => "All Time",
        }
    }

    /// Labels of every preset in selector order
    #[must_use]
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|p| p.label()).collect()
    }

    /// Window ending at the current local time
    #[must_use]
    pub fn window(self) -> DateWindow {
        self.window_at(Local::now().naive_local())
    }

    /// Window ending at `now`
    #[must_use]
    pub fn window_at(self, now: NaiveDateTime) -> DateWindow {
        let start = match self {
            Self::LastThirtyDays => days_before(now, 30),
            Self::LastThreeMonths => days_before(now, 90),
            Self::LastSixMonths => days_before(now, 180),
            Self::ThisYear => start_of_year(now.year()),
            Self::AllTime => start_of_year(ALL_TIME_START_YEAR),
        };
        DateWindow::new(start, now)
    }
}

fn days_before(now: NaiveDateTime, days: i64) -> NaiveDateTime {
    now.checked_sub_signed(TimeDelta::days(days))
        .unwrap_or(NaiveDateTime::MIN)
}

fn start_of_year(year: i32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .unwrap_or(NaiveDate::MIN)
        .and_time(NaiveTime::MIN)
}

impl fmt::Display for DateRangePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DateRangePreset {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| DashboardError::InvalidOption {
                selector: "date range",
                value: s.to_string(),
            })
    }
}

/// A filter that keeps records whose start date lies in a window
///
/// Records without a start date are kept.
#[derive(Debug, Clone)]
pub struct DateRangeFilter {
    window: DateWindow,
}

impl DateRangeFilter {
    #[must_use]
    pub const fn new(window: DateWindow) -> Self {
        Self { window }
    }

    #[must_use]
    pub const fn window(&self) -> DateWindow {
        self.window
    }
}

impl RecordFilter for DateRangeFilter {
    fn matches(&self, record: &EquipmentRecord) -> bool {
        record
            .start_date
            .is_none_or(|start| self.window.contains(start))
    }

    fn required_columns(&self) -> BTreeSet<Column> {
        BTreeSet::from([Column::StartDate])
    }
}
