//! Equipment usage reporting.
//!
//! Loads a machine spreadsheet (Excel, CSV or Parquet), normalizes it into a
//! fully populated record set, filters it by date range, site and machine
//! type, and derives KPIs and chart series for a dashboard front end.

pub mod charts;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod loader;
pub mod metrics;
pub mod models;
pub mod normalize;
pub mod reader;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{ChartConfig, DashboardConfig};
pub use error::{DashboardError, Result};
pub use models::{Column, EquipmentRecord, MachineStatus, RawTable, RawValue, RecordSet};

// Pipeline stages
pub use charts::{ChartData, prepare_chart_data, status_histogram};
pub use dashboard::{Dashboard, DashboardOutcome, DashboardRequest, DashboardView, SelectorOptions};
pub use filter::{DateRangePreset, FilterCriteria, filter_records};
pub use loader::{load_data, load_data_with_report};
pub use metrics::{Kpis, compute_kpis};
pub use normalize::{NormalizationReport, normalize, normalize_with_report};
pub use reader::read_table;

// Formatting
pub use utils::{NumberFormat, format_number};
