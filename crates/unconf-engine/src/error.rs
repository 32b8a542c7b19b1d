//! Error types for unconf-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to generate a unique short id after {attempts} attempts")]
    ShortIdExhausted { attempts: usize },
}

/// Reasons a schedule, room list or event draft is rejected.
///
/// Indices are 0-based positions in the submitted list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("At least one time block is required")]
    NoTimeBlocks,

    #[error("Maximum {max} time blocks allowed, got {count}")]
    TooManyTimeBlocks { count: usize, max: usize },

    #[error("Time block {index}: {field} is required")]
    MissingTime { index: usize, field: &'static str },

    #[error("Time block {index}: invalid time format '{value}' (expected HH:MM)")]
    InvalidTimeFormat { index: usize, value: String },

    #[error("Time block {index}: end time must be after start time")]
    EndNotAfterStart { index: usize },

    #[error("Time block {first} overlaps with time block {second}")]
    Overlap { first: usize, second: usize },

    #[error("Event title must be between {min} and {max} characters")]
    InvalidTitle { min: usize, max: usize },

    #[error("Invalid event date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Event date {date} is in the past")]
    DateInPast { date: chrono::NaiveDate },

    #[error("Event {field} '{value}' is not a valid time (expected HH:MM)")]
    InvalidEventTime { field: &'static str, value: String },

    #[error("Event end time must be after start time")]
    EventEndNotAfterStart,

    #[error("At least one room is required")]
    NoRooms,

    #[error("Maximum {max} rooms allowed, got {count}")]
    TooManyRooms { count: usize, max: usize },

    #[error("Room {index}: name must be between 1 and {max} characters")]
    InvalidRoomName { index: usize, max: usize },

    #[error("Room {index}: capacity {capacity} is outside 1..={max}")]
    InvalidRoomCapacity {
        index: usize,
        capacity: u32,
        max: u32,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
