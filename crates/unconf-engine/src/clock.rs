//! `HH:MM` wall-clock parsing.
//!
//! Time blocks are entered as 24-hour wall-clock strings against an implicit
//! common day. The accepted shape is `H:MM` or `HH:MM` with hours `0..=23` and
//! minutes `00..=59`; seconds, suffixes and offsets are rejected.

use chrono::{NaiveTime, Timelike};

/// Parse a wall-clock time, returning `None` for anything that is not `H:MM`/`HH:MM`.
///
/// Surrounding whitespace is ignored.
pub fn parse_wall_clock(input: &str) -> Option<NaiveTime> {
    let (hours, minutes) = input.trim().split_once(':')?;

    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return None;
    }
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    NaiveTime::from_hms_opt(hours, minutes, 0)
}

/// Format a time as zero-padded `HH:MM`.
pub fn format_wall_clock(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
