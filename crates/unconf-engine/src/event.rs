//! Event draft validation.
//!
//! An [`EventDraft`] is what the organizer wizard collects: event details,
//! rooms and the time-block schedule. [`EventDraft::validate`] checks all three
//! and anchors the wall-clock times to the event date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::block::{TimeBlock, TimeRange};
use crate::clock::parse_wall_clock;
use crate::error::ScheduleError;
use crate::schedule::validate_time_blocks;

pub const MIN_TITLE_LEN: usize = 3;
pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_ROOMS: usize = 10;
pub const MAX_ROOM_NAME_LEN: usize = 50;
pub const MAX_ROOM_CAPACITY: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub time_blocks: Vec<TimeBlock>,
}

/// A draft that passed validation, with times anchored to the event date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedEvent {
    pub title: String,
    pub span: TimeRange,
    pub rooms: Vec<Room>,
    pub time_blocks: Vec<TimeRange>,
}

impl EventDraft {
    /// Validate the draft against the date `today`.
    ///
    /// Details are checked first, then rooms, then the time blocks; the first
    /// failure is returned.
    pub fn validate(&self, today: NaiveDate) -> Result<ValidatedEvent, ScheduleError> {
        let title = self.title.trim();
        let title_len = title.chars().count();
        if !(MIN_TITLE_LEN..=MAX_TITLE_LEN).contains(&title_len) {
            return Err(ScheduleError::InvalidTitle {
                min: MIN_TITLE_LEN,
                max: MAX_TITLE_LEN,
            });
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| ScheduleError::InvalidDate(self.date.clone()))?;
        if date < today {
            return Err(ScheduleError::DateInPast { date });
        }

        let span = TimeBlock::new(self.start_time.as_str(), self.end_time.as_str());
        let span_range = span.on(date).ok_or_else(|| {
            let (field, value) = if parse_wall_clock(&self.start_time).is_none() {
                ("start time", &self.start_time)
            } else {
                ("end time", &self.end_time)
            };
            ScheduleError::InvalidEventTime {
                field,
                value: value.clone(),
            }
        })?;
        if span_range.ends_at <= span_range.starts_at {
            return Err(ScheduleError::EventEndNotAfterStart);
        }

        validate_rooms(&self.rooms)?;
        validate_time_blocks(&self.time_blocks)?;

        let time_blocks = self
            .time_blocks
            .iter()
            .filter_map(|block| block.on(date))
            .collect();

        tracing::debug!(
            title,
            %date,
            rooms = self.rooms.len(),
            time_blocks = self.time_blocks.len(),
            "event draft validated"
        );

        Ok(ValidatedEvent {
            title: title.to_string(),
            span: span_range,
            rooms: self.rooms.clone(),
            time_blocks,
        })
    }
}

/// Check the room list: 1..=10 rooms, each named (1..=50 chars) with capacity 1..=1000.
pub fn validate_rooms(rooms: &[Room]) -> Result<(), ScheduleError> {
    if rooms.is_empty() {
        return Err(ScheduleError::NoRooms);
    }
    if rooms.len() > MAX_ROOMS {
        return Err(ScheduleError::TooManyRooms {
            count: rooms.len(),
            max: MAX_ROOMS,
        });
    }

    for (index, room) in rooms.iter().enumerate() {
        let name_len = room.name.trim().chars().count();
        if name_len == 0 || name_len > MAX_ROOM_NAME_LEN {
            return Err(ScheduleError::InvalidRoomName {
                index,
                max: MAX_ROOM_NAME_LEN,
            });
        }
        if !(1..=MAX_ROOM_CAPACITY).contains(&room.capacity) {
            return Err(ScheduleError::InvalidRoomCapacity {
                index,
                capacity: room.capacity,
                max: MAX_ROOM_CAPACITY,
            });
        }
    }

    Ok(())
}
