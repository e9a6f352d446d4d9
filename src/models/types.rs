//! Common domain type definitions
//!
//! Enumerations shared by the normalizer, the filter engine and the metric
//! calculator.

use std::fmt;

use serde::Serialize;

/// Operating status of a machine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum MachineStatus {
    /// Running on a project
    #[default]
    Working,
    /// Available but not running
    Idle,
    /// Out of service for maintenance
    Maintenance,
}

impl MachineStatus {
    /// All statuses in canonical order
    pub const ALL: [Self; 3] = [Self::Working, Self::Idle, Self::Maintenance];

    /// Parse a status label. Matching is exact and case-sensitive; anything
    /// else is not a status.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Working" => Some(Self::Working),
            "Idle" => Some(Self::Idle),
            "Maintenance" => Some(Self::Maintenance),
            _ => None,
        }
    }

    /// The label used in source tables and output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Working => "Working",
            Self::Idle => "Idle",
            Self::Maintenance => "Maintenance",
        }
    }

    /// Whether a machine in this status can take work
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Working | Self::Idle)
    }
}

impl fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a column's cells are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Free text
    Text,
    /// Real number
    Numeric,
    /// Optional timestamp
    Timestamp,
}

/// A column recognized in the equipment source table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Column {
    MachineId,
    MachineType,
    Status,
    Site,
    HoursDaily,
    CostDaily,
    TargetUtilization,
    CurrentProject,
    StartDate,
    EndDate,
    UtilizationPercent,
    HoursMonthly,
    HoursYearly,
    CostMonthly,
}

impl Column {
    /// Every recognized column
    pub const ALL: [Self; 14] = [
        Self::MachineId,
        Self::MachineType,
        Self::Status,
        Self::Site,
        Self::HoursDaily,
        Self::CostDaily,
        Self::TargetUtilization,
        Self::CurrentProject,
        Self::StartDate,
        Self::EndDate,
        Self::UtilizationPercent,
        Self::HoursMonthly,
        Self::HoursYearly,
        Self::CostMonthly,
    ];

    /// Header name in the source table
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::MachineId => "Machine_ID",
            Self::MachineType => "Machine_Type",
            Self::Status => "Status",
            Self::Site => "Site",
            Self::HoursDaily => "Hours_Daily",
            Self::CostDaily => "Cost_Daily",
            Self::TargetUtilization => "Target_Utilization",
            Self::CurrentProject => "Current_Project",
            Self::StartDate => "Start_Date",
            Self::EndDate => "End_Date",
            Self::UtilizationPercent => "Utilization_Percent",
            Self::HoursMonthly => "Hours_Monthly",
            Self::HoursYearly => "Hours_Yearly",
            Self::CostMonthly => "Cost_Monthly",
        }
    }

    /// Look up a column by its header name
    #[must_use]
    pub fn from_header(header: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.header() == header)
    }

    /// How cells of this column are coerced
    #[must_use]
    pub const fn kind(self) -> ColumnKind {
        match self {
            Self::MachineId
            | Self::MachineType
            | Self::Status
            | Self::Site
            | Self::CurrentProject => ColumnKind::Text,
            Self::StartDate | Self::EndDate => ColumnKind::Timestamp,
            Self::HoursDaily
            | Self::CostDaily
            | Self::TargetUtilization
            | Self::UtilizationPercent
            | Self::HoursMonthly
            | Self::HoursYearly
            | Self::CostMonthly => ColumnKind::Numeric,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}
