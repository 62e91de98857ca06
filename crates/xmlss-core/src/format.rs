//! Canonical value formatting
//!
//! Spreadsheet applications parse these strings strictly, so the output is
//! locale independent: `.` as decimal separator, no grouping, no exponent.

use chrono::NaiveDateTime;

/// Number of decimal places kept when formatting doubles
pub const DOUBLE_PRECISION: usize = 5;

/// Pattern used for `DateTime` values (`yyyy-MM-ddTHH:mm:ss.SSS`)
pub const DATE_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Format a double with at most five decimals, trailing zeros trimmed
///
/// `1.00056` renders as `"1.00056"`, `3.0` as `"3"`. Non-finite values
/// render as `NaN`, `INF` or `-INF`.
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "INF" } else { "-INF" }.to_string();
    }

    let mut text = format!("{:.*}", DOUBLE_PRECISION, value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}

/// Format a boolean as `1` / `0`
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Format a naive timestamp with millisecond precision and no offset
pub fn format_date(value: &NaiveDateTime) -> String {
    value.format(DATE_PATTERN).to_string()
}
