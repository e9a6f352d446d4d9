//! Number formatting for summary figures

use serde::Serialize;

/// Display style for a figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum NumberFormat {
    /// `$1,234.56`
    Currency,
    /// `12.3%`
    Percentage,
    /// `1,235`
    #[default]
    Default,
}

/// Format `value` in the given style. Non-finite values format as `0`.
#[must_use]
pub fn format_number(value: f64, format: NumberFormat) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    match format {
        NumberFormat::Currency => format!("${}", with_thousands(value, 2)),
        NumberFormat::Percentage => format!("{value:.1}%"),
        NumberFormat::Default => with_thousands(value, 0),
    }
}

/// Round to two decimals for tabular display
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn with_thousands(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // "-0" is not a useful rendering of a tiny negative number
    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}
