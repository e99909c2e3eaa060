//! Utilities for date formatting
//!
//! Timestamps arrive as ISO strings; the calendar date is taken in the
//! timestamp's own offset.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Format an ISO date or datetime string as a short date, M/D/YYYY
/// Example: "2024-03-05T14:02:26.123Z" -> "3/5/2024"
///
/// Unparseable input is returned unchanged.
pub fn format_short_date(value: &str) -> String {
    match parse_date(value.trim()) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => value.to_string(),
    }
}
