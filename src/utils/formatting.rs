//! Formatting utilities for display

use chrono::{DateTime, NaiveDateTime, Utc};

/// Format a timestamp the way the tables display it.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

/// Parse the value of a `datetime-local` input ("2024-11-05T14:30").
pub fn parse_datetime_local(value: &str) -> Result<DateTime<Utc>, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .map(|naive| naive.and_utc())
        .map_err(|err| format!("invalid date and time: {err}"))
}

/// Group a count with thousands separators: 150000 -> "150,000".
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
