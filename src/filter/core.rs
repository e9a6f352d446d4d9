//! Core filtering functionality for record sets
//!
//! Defines the [`RecordFilter`] trait and the generic combinators used to
//! compose filters.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::models::{Column, EquipmentRecord, RecordSet};

/// Trait for objects that select records from a set
pub trait RecordFilter: std::fmt::Debug {
    /// Whether `record` passes the filter
    fn matches(&self, record: &EquipmentRecord) -> bool;

    /// Returns the set of columns this filter reads
    fn required_columns(&self) -> BTreeSet<Column>;

    /// Filter a record set
    ///
    /// Returns a new set in source order; the input is left untouched.
    fn filter(&self, set: &RecordSet) -> RecordSet {
        set.derive(set.iter().filter(|r| self.matches(r)).cloned().collect())
    }
}

/// A filter that always includes all records
#[derive(Debug, Clone, Default)]
pub struct IncludeAllFilter;

impl RecordFilter for IncludeAllFilter {
    fn matches(&self, _record: &EquipmentRecord) -> bool {
        true
    }

    fn required_columns(&self) -> BTreeSet<Column> {
        BTreeSet::new()
    }
}

/// A filter that combines multiple filters with a logical AND
#[derive(Debug, Clone, Default)]
pub struct AndFilter {
    filters: Vec<Arc<dyn RecordFilter + Send + Sync>>,
}

impl AndFilter {
    /// Create a new AND filter
    #[must_use]
    pub fn new(filters: Vec<Arc<dyn RecordFilter + Send + Sync>>) -> Self {
        Self { filters }
    }

    /// Add another filter to the conjunction
    pub fn push(&mut self, filter: Arc<dyn RecordFilter + Send + Sync>) {
        self.filters.push(filter);
    }

    /// Number of combined filters
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// An empty conjunction accepts every record
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl RecordFilter for AndFilter {
    fn matches(&self, record: &EquipmentRecord) -> bool {
        self.filters.iter().all(|f| f.matches(record))
    }

    fn required_columns(&self) -> BTreeSet<Column> {
        self.filters
            .iter()
            .flat_map(|f| f.required_columns())
            .collect()
    }

    fn filter(&self, set: &RecordSet) -> RecordSet {
        if self.filters.is_empty() {
            return IncludeAllFilter.filter(set);
        }
        set.derive(set.iter().filter(|r| self.matches(r)).cloned().collect())
    }
}

/// Keeps records whose text field equals a value exactly
#[derive(Debug, Clone)]
pub struct ExactMatchFilter {
    column: Column,
    value: String,
}

impl ExactMatchFilter {
    /// Match `Site` exactly
    #[must_use]
    pub fn site(value: impl Into<String>) -> Self {
        Self {
            column: Column::Site,
            value: value.into(),
        }
    }

    /// Match `Machine_Type` exactly
    #[must_use]
    pub fn machine_type(value: impl Into<String>) -> Self {
        Self {
            column: Column::MachineType,
            value: value.into(),
        }
    }

    /// The value compared against
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl RecordFilter for ExactMatchFilter {
    fn matches(&self, record: &EquipmentRecord) -> bool {
        let field = match self.column {
            Column::Site => &record.site,
            Column::MachineType => &record.machine_type,
            _ => return false,
        };
        *field == self.value
    }

    fn required_columns(&self) -> BTreeSet<Column> {
        BTreeSet::from([self.column])
    }
}

/// Apply several filters with AND semantics
#[must_use]
pub fn apply_filters(set: &RecordSet, filters: &[Arc<dyn RecordFilter + Send + Sync>]) -> RecordSet {
    AndFilter::new(filters.to_vec()).filter(set)
}
