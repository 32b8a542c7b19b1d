//! # unconf-engine
//!
//! Slug generation and time-block conflict detection for unconference scheduling.
//!
//! Organizers describe an event's schedule as a short list of wall-clock time
//! blocks (`HH:MM` start and end). This crate flags overlapping blocks before a
//! schedule is accepted, formats block durations for display, and mints the
//! short human-readable identifiers that event URLs are built from.
//!
//! ## Modules
//!
//! - [`slug`] — `adjective-noun` slugs, validation and sanitizing
//! - [`short_id`] — six-character opaque event identifiers
//! - [`clock`] — `HH:MM` wall-clock parsing
//! - [`block`] — time block and time range value types
//! - [`conflict`] — Detect overlapping time blocks
//! - [`duration`] — Human-readable block durations
//! - [`schedule`] — Time-block list validation and next-block suggestions
//! - [`event`] — Event draft validation (details, rooms, blocks)
//! - [`error`] — Error types

pub mod block;
pub mod clock;
pub mod conflict;
pub mod duration;
pub mod error;
pub mod event;
pub mod schedule;
pub mod short_id;
pub mod slug;

pub use block::{TimeBlock, TimeRange};
pub use conflict::{detect_conflicts, find_overlaps, ConflictStatus, Overlap};
pub use duration::calculate_duration;
pub use error::{EngineError, ScheduleError};
pub use slug::{generate_slug, generate_unique_slug, is_valid_slug, sanitize_slug};
