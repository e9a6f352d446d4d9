//! Default values used when the source table lacks a column
//!
//! Every constant here backs one row of the normalization defaults table, so
//! this module is the single place to change what a missing column becomes.

/// Prefix for synthesized machine identifiers (`Machine_1`, `Machine_2`, ...)
pub const MACHINE_ID_PREFIX: &str = "Machine_";

/// Machine type for absent columns and missing cells
pub const MACHINE_TYPE: &str = "Unknown";

/// Site for absent columns and missing cells
pub const SITE: &str = "Default Site";

/// Project assigned when the `Current_Project` column is absent
pub const CURRENT_PROJECT: &str = "Project A";

/// Fallback for any other missing text cell
pub const TEXT_FILL: &str = "Unknown";

/// Daily operating hours when `Hours_Daily` is absent
pub const HOURS_DAILY: f64 = 8.0;

/// Daily cost when `Cost_Daily` is absent
pub const COST_DAILY: f64 = 1000.0;

/// Target utilization in percent when `Target_Utilization` is absent
pub const TARGET_UTILIZATION: f64 = 75.0;

/// Value for a missing cell in a numeric column that is present
pub const NUMERIC_FILL: f64 = 0.0;

/// Hours in a day, the denominator of the utilization percentage
pub const HOURS_PER_DAY: f64 = 24.0;

/// Days used to project daily figures onto a month
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Days used to project daily figures onto a year
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Seed for the synthetic chart series
pub const CHART_SEED: u64 = 42;

/// Selector value that disables the site filter
pub const ALL_SITES: &str = "All Sites";

/// Selector value that disables the machine type filter
pub const ALL_EQUIPMENT: &str = "All Equipment";

/// Default location of the data source
pub const DATA_PATH: &str = "data/machine_data.xlsx";
