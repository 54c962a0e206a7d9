//! Date display helpers

use chrono::NaiveDateTime;

/// Medium date with short time, e.g. `May 1, 2024, 10:15 AM`
const MEDIUM_SHORT: &str = "%b %-d, %Y, %-I:%M %p";

/// Format a creation timestamp for list display
pub fn format_date_to_locale(value: &NaiveDateTime) -> String {
    value.format(MEDIUM_SHORT).to_string()
}

/// Format with a caller-supplied strftime pattern
pub fn format_date_with(value: &NaiveDateTime, pattern: &str) -> String {
    value.format(pattern).to_string()
}
