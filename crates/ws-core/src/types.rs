//! Core type definitions with validation.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Day marker for a course with no fixed meeting time.
pub const ARRANGED: &str = "A";

/// Day markers a course may meet on.
pub const COURSE_DAYS: &[char] = &['M', 'T', 'W', 'H', 'F'];

/// Day markers an event may meet on, weekends included.
pub const EVENT_DAYS: &[char] = &['M', 'T', 'W', 'H', 'F', 'S', 'U'];

/// Validation errors for activity fields.
///
/// Messages are user-facing and name the offending field.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid title.")]
    Title,

    #[error("Invalid course name.")]
    CourseName,

    #[error("Invalid section.")]
    Section,

    #[error("Invalid credits.")]
    Credits,

    #[error("Invalid instructor id.")]
    InstructorId,

    /// Bad day markers, an out-of-range clock value, or end before start.
    #[error("Invalid meeting days and times.")]
    MeetingDaysAndTime,
}

/// A wall-clock time encoded as `HHMM` on a 24-hour clock.
///
/// `1330` is 1:30 PM. Hours run 0-23 and minutes 0-59. The default is
/// midnight, which arranged courses use as their placeholder time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Decodes an `HHMM` value.
    pub fn new(hhmm: i32) -> Result<Self, ValidationError> {
        let hhmm = u32::try_from(hhmm).map_err(|_| ValidationError::MeetingDaysAndTime)?;
        NaiveTime::from_hms_opt(hhmm / 100, hhmm % 100, 0)
            .map(Self)
            .ok_or(ValidationError::MeetingDaysAndTime)
    }

    /// Returns the `HHMM` encoding.
    pub fn hhmm(self) -> u32 {
        self.0.hour() * 100 + self.0.minute()
    }

    /// Renders civil 12-hour time, e.g. `1:30PM` or `12:05AM`.
    pub fn to_twelve_hour(self) -> String {
        self.0.format("%-I:%M%p").to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hhmm())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.hhmm())
    }
}

/// Validates a start/end pair shared by every activity kind.
///
/// Fails when `end < start` or either value is not a valid `HHMM` time.
pub fn validate_time_range(start: i32, end: i32) -> Result<(TimeOfDay, TimeOfDay), ValidationError> {
    if end < start {
        return Err(ValidationError::MeetingDaysAndTime);
    }
    Ok((TimeOfDay::new(start)?, TimeOfDay::new(end)?))
}

/// The weekdays an activity meets on, as a string of distinct markers.
///
/// Marker order is kept as supplied so display and export reproduce the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DaySet(String);

impl DaySet {
    /// The arranged sentinel. It intersects no other day set.
    pub fn arranged() -> Self {
        Self(ARRANGED.to_string())
    }

    /// Builds a day set whose markers are all drawn from `alphabet`.
    ///
    /// Fails on an empty string, an unknown marker, or a repeated marker.
    pub fn from_markers(days: &str, alphabet: &[char]) -> Result<Self, ValidationError> {
        if days.is_empty() {
            return Err(ValidationError::MeetingDaysAndTime);
        }

        let mut seen = Vec::with_capacity(alphabet.len());
        for day in days.chars() {
            if !alphabet.contains(&day) || seen.contains(&day) {
                return Err(ValidationError::MeetingDaysAndTime);
            }
            seen.push(day);
        }

        Ok(Self(days.to_string()))
    }

    pub fn is_arranged(&self) -> bool {
        self.0 == ARRANGED
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether both sets share at least one real day.
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_arranged() || other.is_arranged() {
            return false;
        }
        self.0.chars().any(|day| other.0.contains(day))
    }
}

impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_of_day_accepts_clock_range() {
        assert_eq!(TimeOfDay::new(0).unwrap(), TimeOfDay::default());
        assert_eq!(TimeOfDay::new(2359).unwrap().hhmm(), 2359);
        assert_eq!(TimeOfDay::new(830).unwrap().hhmm(), 830);
    }

    #[test]
    fn time_of_day_rejects_bad_hour_or_minute() {
        assert_eq!(TimeOfDay::new(2400), Err(ValidationError::MeetingDaysAndTime));
        assert_eq!(TimeOfDay::new(1360), Err(ValidationError::MeetingDaysAndTime));
        assert_eq!(TimeOfDay::new(-1), Err(ValidationError::MeetingDaysAndTime));
        assert_eq!(TimeOfDay::new(-100), Err(ValidationError::MeetingDaysAndTime));
    }

    #[test]
    fn twelve_hour_rendering() {
        let render = |hhmm| TimeOfDay::new(hhmm).unwrap().to_twelve_hour();
        assert_eq!(render(0), "12:00AM");
        assert_eq!(render(5), "12:05AM");
        assert_eq!(render(830), "8:30AM");
        assert_eq!(render(1159), "11:59AM");
        assert_eq!(render(1200), "12:00PM");
        assert_eq!(render(1330), "1:30PM");
        assert_eq!(render(2359), "11:59PM");
    }

    #[test]
    fn time_range_requires_ordered_valid_times() {
        assert!(validate_time_range(1330, 1445).is_ok());
        assert!(validate_time_range(1330, 1330).is_ok());
        assert!(validate_time_range(1445, 1330).is_err());
        assert!(validate_time_range(1330, 2400).is_err());
        assert!(validate_time_range(1275, 1300).is_err());
    }

    #[test]
    fn day_set_rejects_repeats_and_unknown_markers() {
        assert!(DaySet::from_markers("MWF", COURSE_DAYS).is_ok());
        assert!(DaySet::from_markers("", COURSE_DAYS).is_err());
        assert!(DaySet::from_markers("MM", COURSE_DAYS).is_err());
        assert!(DaySet::from_markers("MS", COURSE_DAYS).is_err());
        assert!(DaySet::from_markers("MS", EVENT_DAYS).is_ok());
        assert!(DaySet::from_markers("A", EVENT_DAYS).is_err());
    }

    #[test]
    fn day_set_intersection() {
        let mw = DaySet::from_markers("MW", COURSE_DAYS).unwrap();
        let th = DaySet::from_markers("TH", COURSE_DAYS).unwrap();
        let wf = DaySet::from_markers("WF", COURSE_DAYS).unwrap();

        assert!(!mw.intersects(&th));
        assert!(mw.intersects(&wf));
        assert!(wf.intersects(&mw));
        assert!(!DaySet::arranged().intersects(&DaySet::arranged()));
        assert!(!DaySet::arranged().intersects(&mw));
    }

    #[test]
    fn serializes_as_plain_values() {
        let time = TimeOfDay::new(1330).unwrap();
        assert_eq!(serde_json::to_string(&time).unwrap(), "1330");

        let days = DaySet::from_markers("MW", COURSE_DAYS).unwrap();
        assert_eq!(serde_json::to_string(&days).unwrap(), "\"MW\"");
    }
}
