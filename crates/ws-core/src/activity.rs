//! Schedulable activities and their shared meeting pattern.
//!
//! An [`Activity`] is either a catalog [`Course`] or a user-defined [`Event`].
//! Both carry a title and a [`Meeting`]; the kinds differ in which day markers
//! they allow and in what extra fields they hold.

use std::fmt;

use serde::Serialize;

use crate::conflict::ConflictError;
use crate::course::Course;
use crate::event::Event;
use crate::types::{DaySet, TimeOfDay, ValidationError, validate_time_range};

/// Catalog-style row: name, section, title, meeting.
pub type ShortDisplayRow = [String; 4];

/// Full row: name, section, title, credits, instructor, meeting, details.
pub type LongDisplayRow = [String; 7];

/// Validates an activity title.
pub(crate) fn validate_title(title: impl Into<String>) -> Result<String, ValidationError> {
    let title = title.into();
    if title.is_empty() {
        return Err(ValidationError::Title);
    }
    Ok(title)
}

/// When an activity meets: a day set plus an inclusive time range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Meeting {
    days: DaySet,
    start: TimeOfDay,
    end: TimeOfDay,
}

impl Meeting {
    /// Pairs already-validated days with a start/end range.
    ///
    /// The time range check runs here, after the caller's day checks.
    pub(crate) fn new(days: DaySet, start: i32, end: i32) -> Result<Self, ValidationError> {
        let (start, end) = validate_time_range(start, end)?;
        Ok(Self { days, start, end })
    }

    pub const fn days(&self) -> &DaySet {
        &self.days
    }

    pub const fn start(&self) -> TimeOfDay {
        self.start
    }

    pub const fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn is_arranged(&self) -> bool {
        self.days.is_arranged()
    }

    /// Human-readable meeting string, e.g. `MW 1:30PM-2:45PM` or `Arranged`.
    pub fn meeting_string(&self) -> String {
        if self.is_arranged() {
            return "Arranged".to_string();
        }
        format!(
            "{} {}-{}",
            self.days,
            self.start.to_twelve_hour(),
            self.end.to_twelve_hour()
        )
    }

    /// Whether two meetings share a day and their time ranges touch or overlap.
    ///
    /// Arranged meetings never overlap anything.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.days.intersects(&other.days) && self.start <= other.end && other.start <= self.end
    }
}

/// A schedule entry: either a course from the catalog or a user event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Activity {
    Course(Course),
    Event(Event),
}

impl Activity {
    pub fn title(&self) -> &str {
        match self {
            Self::Course(course) => course.title(),
            Self::Event(event) => event.title(),
        }
    }

    pub const fn meeting(&self) -> &Meeting {
        match self {
            Self::Course(course) => course.meeting(),
            Self::Event(event) => event.meeting(),
        }
    }

    pub fn meeting_string(&self) -> String {
        self.meeting().meeting_string()
    }

    /// Title-based "already added" check.
    ///
    /// Only activities of the same kind with equal titles are duplicates, so
    /// two sections of one course collide while a course and an event never do.
    pub fn is_duplicate(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Course(a), Self::Course(b)) => a.title() == b.title(),
            (Self::Event(a), Self::Event(b)) => a.title() == b.title(),
            _ => false,
        }
    }

    /// Fails with a [`ConflictError`] when the two activities overlap in time.
    ///
    /// The result is the same whichever side the check is called on.
    pub fn check_conflict(&self, other: &Self) -> Result<(), ConflictError> {
        crate::conflict::check_conflict(self.meeting(), other.meeting())
    }

    pub fn short_display_row(&self) -> ShortDisplayRow {
        match self {
            Self::Course(course) => course.short_display_row(),
            Self::Event(event) => event.short_display_row(),
        }
    }

    pub fn long_display_row(&self) -> LongDisplayRow {
        match self {
            Self::Course(course) => course.long_display_row(),
            Self::Event(event) => event.long_display_row(),
        }
    }
}

impl From<Course> for Activity {
    fn from(course: Course) -> Self {
        Self::Course(course)
    }
}

impl From<Event> for Activity {
    fn from(event: Event) -> Self {
        Self::Event(event)
    }
}

/// Writes the flat-line record form of the activity.
impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Course(course) => fmt::Display::fmt(course, f),
            Self::Event(event) => fmt::Display::fmt(event, f),
        }
    }
}
