//! Untyped rows as they come out of a source reader

use chrono::NaiveDateTime;
use rustc_hash::FxHashMap;

/// A single cell of unspecified type
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Text cell
    Text(String),
    /// Numeric cell
    Number(f64),
    /// Date or date-time cell
    Timestamp(NaiveDateTime),
    /// Empty cell
    Missing,
}

impl RawValue {
    /// Text cell, with empty strings treated as missing
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self::Missing
        } else {
            Self::Text(value)
        }
    }

    /// Numeric cell, with NaN treated as missing
    #[must_use]
    pub fn number(value: f64) -> Self {
        if value.is_nan() {
            Self::Missing
        } else {
            Self::Number(value)
        }
    }

    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// One row: column name to cell
pub type RawRow = FxHashMap<String, RawValue>;

/// A table of rows with heterogeneous, possibly partial columns
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<RawRow>,
}

impl RawTable {
    /// Create an empty table with the given header
    #[must_use]
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Header names in source order
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Whether the header contains `name`
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row. Cells for columns not in the header are kept but the
    /// header is extended so `has_column` stays truthful.
    pub fn push_row(&mut self, row: RawRow) {
        for name in row.keys() {
            if !self.has_column(name) {
                self.columns.push(name.clone());
            }
        }
        self.rows.push(row);
    }

    /// Build a table from `(column, value)` pairs per row; handy for
    /// callers that assemble data in memory
    pub fn from_rows<I, R, K>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (K, RawValue)>,
        K: Into<String>,
    {
        let mut table = Self::default();
        for row in rows {
            let row: RawRow = row.into_iter().map(|(k, v)| (k.into(), v)).collect();
            table.push_row(row);
        }
        table
    }
}
