//! Time block and time range value types.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::parse_wall_clock;

/// A proposed session slot as entered by an organizer, in wall-clock form.
///
/// Either time may be empty or malformed while a schedule is being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBlock {
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
}

impl TimeBlock {
    pub fn new(start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Both ends parsed, or `None` if either is missing or malformed.
    ///
    /// No ordering check is made; `end <= start` is returned as-is.
    pub fn parsed(&self) -> Option<(NaiveTime, NaiveTime)> {
        Some((parse_wall_clock(&self.start_time)?, parse_wall_clock(&self.end_time)?))
    }

    /// Anchor the block to a calendar date, interpreting times as UTC.
    pub fn on(&self, date: NaiveDate) -> Option<TimeRange> {
        let (start, end) = self.parsed()?;
        Some(TimeRange {
            starts_at: date.and_time(start).and_utc(),
            ends_at: date.and_time(end).and_utc(),
        })
    }
}

/// An absolute time range. Callers keep `ends_at > starts_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl TimeRange {
    pub fn duration_minutes(&self) -> i64 {
        (self.ends_at - self.starts_at).num_minutes()
    }

    /// Half-open overlap: ranges that only touch do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.starts_at < other.ends_at && other.starts_at < self.ends_at
    }
}
