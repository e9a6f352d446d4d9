//! Configuration for the dashboard pipeline.

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DashboardError, Result};

/// Settings for the synthetic chart series
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Seed every synthetic series is generated from
    pub seed: u64,
    /// Multiplier turning summed daily hours into a monthly figure
    pub days_per_month: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            seed: defaults::CHART_SEED,
            days_per_month: defaults::DAYS_PER_MONTH,
        }
    }
}

/// Configuration for a dashboard run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Location of the equipment spreadsheet
    pub data_path: PathBuf,
    /// Selector value meaning "every site"
    pub all_sites_label: String,
    /// Selector value meaning "every machine type"
    pub all_equipment_label: String,
    /// Chart generation settings
    pub charts: ChartConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(defaults::DATA_PATH),
            all_sites_label: defaults::ALL_SITES.to_string(),
            all_equipment_label: defaults::ALL_EQUIPMENT.to_string(),
            charts: ChartConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Read a configuration from a JSON file; omitted keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DashboardError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
            .map_err(|e| DashboardError::Config(format!("{}: {e}", path.display())))
    }

    /// Parse a configuration from a JSON document
    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Override the data source location
    #[must_use]
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }
}
