//! Human-readable block durations.

use crate::clock::parse_wall_clock;

/// Format the span between two wall-clock times as `"1h 30min"`, `"1h"` or `"45min"`.
///
/// Returns an empty string when either time is missing or malformed, or when
/// `end <= start`.
pub fn calculate_duration(start: &str, end: &str) -> String {
    let (Some(start), Some(end)) = (parse_wall_clock(start), parse_wall_clock(end)) else {
        return String::new();
    };
    if end <= start {
        return String::new();
    }
    format_minutes((end - start).num_minutes())
}

/// Format a positive minute count; non-positive counts format as an empty string.
pub fn format_minutes(total_minutes: i64) -> String {
    if total_minutes <= 0 {
        return String::new();
    }
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    match (hours, minutes) {
        (0, m) => format!("{m}min"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}min"),
    }
}
