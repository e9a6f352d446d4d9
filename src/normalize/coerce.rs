//! Cell coercion from raw values to typed fields
//!
//! Every function returns `None` where the cell cannot be used; the caller
//! decides which fill value applies.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::RawValue;

/// Date-time layouts accepted in text cells, tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Date-only layouts; month-first for slashed dates
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];

/// Parse a date or date-time string
///
/// Strings carrying a UTC offset are converted to UTC, matching how Arrow
/// reads offset timestamps from CSV and Parquet.
#[must_use]
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Coerce a cell of a timestamp column
#[must_use]
pub fn coerce_timestamp(value: &RawValue) -> Option<NaiveDateTime> {
    match value {
        RawValue::Timestamp(ts) => Some(*ts),
        RawValue::Text(text) => parse_timestamp(text),
        RawValue::Number(_) | RawValue::Missing => None,
    }
}

/// Coerce a cell of a numeric column; non-finite values are unusable
#[must_use]
pub fn coerce_number(value: &RawValue) -> Option<f64> {
    let number = match value {
        RawValue::Number(n) => *n,
        RawValue::Text(text) => text.trim().parse::<f64>().ok()?,
        RawValue::Timestamp(_) | RawValue::Missing => return None,
    };
    number.is_finite().then_some(number)
}

/// Coerce a cell of a text column
#[must_use]
pub fn coerce_text(value: &RawValue) -> Option<String> {
    match value {
        RawValue::Text(text) if !text.is_empty() => Some(text.clone()),
        RawValue::Text(_) | RawValue::Missing => None,
        RawValue::Number(n) => Some(format_number_cell(*n)),
        RawValue::Timestamp(ts) => Some(ts.format("%Y-%m-%d %H:%M:%S").to_string()),
    }
}

/// Render a numeric cell as text; whole numbers drop the fraction
fn format_number_cell(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
