//! Time-block list validation and next-block suggestions.
//!
//! A schedule is a human-curated list of at most [`MAX_TIME_BLOCKS`] session
//! slots. Wall-clock lists are checked before an event is created; absolute
//! ranges are checked when a stored schedule is replaced wholesale.

use chrono::Duration;
use serde::Serialize;

use crate::block::{TimeBlock, TimeRange};
use crate::clock::{format_wall_clock, parse_wall_clock};
use crate::conflict::find_overlaps;
use crate::error::ScheduleError;

pub const MAX_TIME_BLOCKS: usize = 12;

/// Length of a suggested block, in minutes.
pub const DEFAULT_BLOCK_MINUTES: i64 = 90;

const DEFAULT_START: &str = "09:00";
const DEFAULT_END: &str = "10:30";

/// A labelled, commonly used unconference slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotSuggestion {
    pub label: &'static str,
    pub start_time: &'static str,
    pub end_time: &'static str,
}

impl SlotSuggestion {
    pub fn to_block(&self) -> TimeBlock {
        TimeBlock::new(self.start_time, self.end_time)
    }
}

pub const COMMON_TIME_SLOTS: [SlotSuggestion; 5] = [
    SlotSuggestion {
        label: "Morning Session",
        start_time: "09:00",
        end_time: "10:30",
    },
    SlotSuggestion {
        label: "Late Morning",
        start_time: "10:45",
        end_time: "12:15",
    },
    SlotSuggestion {
        label: "Afternoon Session",
        start_time: "13:30",
        end_time: "15:00",
    },
    SlotSuggestion {
        label: "Late Afternoon",
        start_time: "15:15",
        end_time: "16:45",
    },
    SlotSuggestion {
        label: "Evening Session",
        start_time: "18:00",
        end_time: "19:30",
    },
];

/// Check a wall-clock schedule before it is submitted.
///
/// Checks, in order: the list holds 1..=12 blocks; every block has well-formed
/// start and end times with end after start; no two blocks overlap. The first
/// failure is returned.
pub fn validate_time_blocks(blocks: &[TimeBlock]) -> Result<(), ScheduleError> {
    if blocks.is_empty() {
        return Err(ScheduleError::NoTimeBlocks);
    }
    if blocks.len() > MAX_TIME_BLOCKS {
        return Err(ScheduleError::TooManyTimeBlocks {
            count: blocks.len(),
            max: MAX_TIME_BLOCKS,
        });
    }

    for (index, block) in blocks.iter().enumerate() {
        let start = require_time(index, "start time", &block.start_time)?;
        let end = require_time(index, "end time", &block.end_time)?;
        if end <= start {
            return Err(ScheduleError::EndNotAfterStart { index });
        }
    }

    match find_overlaps(blocks).first() {
        Some(overlap) => Err(ScheduleError::Overlap {
            first: overlap.first,
            second: overlap.second,
        }),
        None => Ok(()),
    }
}

fn require_time(
    index: usize,
    field: &'static str,
    value: &str,
) -> Result<chrono::NaiveTime, ScheduleError> {
    if value.trim().is_empty() {
        return Err(ScheduleError::MissingTime { index, field });
    }
    parse_wall_clock(value).ok_or_else(|| ScheduleError::InvalidTimeFormat {
        index,
        value: value.to_string(),
    })
}

/// Check a list of absolute ranges replacing a stored schedule.
///
/// Every range must be positive. Ranges are then sorted by start and each must
/// not overlap the next one; touching ranges are allowed. Reported
/// indices refer to the input order.
pub fn validate_time_ranges(ranges: &[TimeRange]) -> Result<(), ScheduleError> {
    for (index, range) in ranges.iter().enumerate() {
        if range.ends_at <= range.starts_at {
            return Err(ScheduleError::EndNotAfterStart { index });
        }
    }

    let mut order: Vec<usize> = (0..ranges.len()).collect();
    order.sort_by_key(|&i| (ranges[i].starts_at, ranges[i].ends_at));

    for pair in order.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        if ranges[current].overlaps(&ranges[next]) {
            return Err(ScheduleError::Overlap {
                first: current.min(next),
                second: current.max(next),
            });
        }
    }

    Ok(())
}

/// Propose the block an organizer is most likely to add next.
///
/// Returns `None` once the list is full. An empty list gets the default
/// morning slot; otherwise the suggestion starts where the last block ends and
/// runs for [`DEFAULT_BLOCK_MINUTES`], wrapping past midnight.
pub fn suggest_next_block(blocks: &[TimeBlock]) -> Option<TimeBlock> {
    if blocks.len() >= MAX_TIME_BLOCKS {
        return None;
    }

    let suggestion = blocks
        .last()
        .and_then(|last| parse_wall_clock(&last.end_time))
        .map(|start| {
            let end = start + Duration::minutes(DEFAULT_BLOCK_MINUTES);
            TimeBlock::new(format_wall_clock(start), format_wall_clock(end))
        })
        .unwrap_or_else(|| TimeBlock::new(DEFAULT_START, DEFAULT_END));

    Some(suggestion)
}
