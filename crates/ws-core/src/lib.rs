//! Core domain logic for the weekly schedule builder.
//!
//! This crate contains the fundamental types and logic for:
//! - Activities: catalog courses and user events, with field validation
//! - Meeting patterns: weekday sets and 24-hour time ranges
//! - Conflict detection: inclusive day/time overlap between two activities

pub mod activity;
pub mod conflict;
pub mod course;
pub mod event;
pub mod types;

pub use activity::{Activity, LongDisplayRow, Meeting, ShortDisplayRow};
pub use conflict::{ConflictError, check_conflict};
pub use course::Course;
pub use event::Event;
pub use types::{ARRANGED, DaySet, TimeOfDay, ValidationError, validate_time_range};
