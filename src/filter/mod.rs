//! Filter engine
//!
//! Selects a subset of a [`RecordSet`] by date window, site and machine type.
//! Predicates combine with AND. A predicate that is omitted, or given its
//! "no filter" sentinel value, accepts everything. The date predicate is also
//! skipped when the set carries no date information at all.

pub mod core;
pub mod date;

use std::sync::Arc;

use serde::Serialize;

use crate::config::{DashboardConfig, defaults};
use crate::models::RecordSet;

pub use self::core::{AndFilter, ExactMatchFilter, IncludeAllFilter, RecordFilter, apply_filters};
pub use self::date::{DateRangeFilter, DateRangePreset, DateWindow};

/// Selector values that disable a predicate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentinels {
    /// Site selector value meaning "every site"
    pub all_sites: String,
    /// Machine type selector value meaning "every machine type"
    pub all_equipment: String,
}

impl Default for Sentinels {
    fn default() -> Self {
        Self {
            all_sites: defaults::ALL_SITES.to_string(),
            all_equipment: defaults::ALL_EQUIPMENT.to_string(),
        }
    }
}

impl From<&DashboardConfig> for Sentinels {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            all_sites: config.all_sites_label.clone(),
            all_equipment: config.all_equipment_label.clone(),
        }
    }
}

/// The user's filter selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub date_window: Option<DateWindow>,
    pub site: Option<String>,
    pub machine_type: Option<String>,
    pub sentinels: Sentinels,
}

impl FilterCriteria {
    /// Criteria that accept every record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_date_window(mut self, window: DateWindow) -> Self {
        self.date_window = Some(window);
        self
    }

    #[must_use]
    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    #[must_use]
    pub fn with_machine_type(mut self, machine_type: impl Into<String>) -> Self {
        self.machine_type = Some(machine_type.into());
        self
    }

    #[must_use]
    pub fn with_sentinels(mut self, sentinels: Sentinels) -> Self {
        self.sentinels = sentinels;
        self
    }

    /// Site to match, unless omitted or the sentinel
    #[must_use]
    pub fn effective_site(&self) -> Option<&str> {
        self.site
            .as_deref()
            .filter(|site| *site != self.sentinels.all_sites)
    }

    /// Machine type to match, unless omitted or the sentinel
    #[must_use]
    pub fn effective_machine_type(&self) -> Option<&str> {
        self.machine_type
            .as_deref()
            .filter(|machine_type| *machine_type != self.sentinels.all_equipment)
    }

    /// Build the conjunction of active predicates for `set`
    #[must_use]
    pub fn build_filter(&self, set: &RecordSet) -> AndFilter {
        let mut filter = AndFilter::default();

        match self.date_window {
            Some(window) if set.has_date_information() => {
                filter.push(Arc::new(DateRangeFilter::new(window)));
            }
            Some(_) => log::debug!("No start dates in data, skipping date filter"),
            None => {}
        }
        if let Some(site) = self.effective_site() {
            filter.push(Arc::new(ExactMatchFilter::site(site)));
        }
        if let Some(machine_type) = self.effective_machine_type() {
            filter.push(Arc::new(ExactMatchFilter::machine_type(machine_type)));
        }

        filter
    }
}

/// Apply `criteria` to `set`, returning a new (possibly empty) subset
#[must_use]
pub fn filter_records(set: &RecordSet, criteria: &FilterCriteria) -> RecordSet {
    let filtered = criteria.build_filter(set).filter(set);
    log::debug!("Filter kept {} of {} records", filtered.len(), set.len());
    filtered
}
