//! User-defined events such as study time or exercise.

use std::fmt;

use serde::Serialize;

use crate::activity::{LongDisplayRow, Meeting, ShortDisplayRow, validate_title};
use crate::types::{DaySet, EVENT_DAYS, ValidationError};

/// A freeform weekly event. Events may fall on weekends and are never arranged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Event {
    title: String,
    #[serde(flatten)]
    meeting: Meeting,
    details: String,
}

impl Event {
    pub fn new(
        title: &str,
        days: &str,
        start: i32,
        end: i32,
        details: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: validate_title(title)?,
            meeting: event_meeting(days, start, end)?,
            details: details.into(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub const fn meeting(&self) -> &Meeting {
        &self.meeting
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn meeting_string(&self) -> String {
        self.meeting.meeting_string()
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), ValidationError> {
        self.title = validate_title(title)?;
        Ok(())
    }

    /// Details are free text and may be empty.
    pub fn set_event_details(&mut self, details: impl Into<String>) {
        self.details = details.into();
    }

    /// Replaces the meeting pattern. Days are drawn from `MTWHFSU` without repeats.
    pub fn set_meeting_days_and_time(
        &mut self,
        days: &str,
        start: i32,
        end: i32,
    ) -> Result<(), ValidationError> {
        self.meeting = event_meeting(days, start, end)?;
        Ok(())
    }

    pub fn short_display_row(&self) -> ShortDisplayRow {
        [
            String::new(),
            String::new(),
            self.title.clone(),
            self.meeting_string(),
        ]
    }

    pub fn long_display_row(&self) -> LongDisplayRow {
        [
            String::new(),
            String::new(),
            self.title.clone(),
            String::new(),
            String::new(),
            self.meeting_string(),
            self.details.clone(),
        ]
    }
}

/// Record form: `title,days,start,end,details`.
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.title,
            self.meeting.days(),
            self.meeting.start(),
            self.meeting.end(),
            self.details
        )
    }
}

fn event_meeting(days: &str, start: i32, end: i32) -> Result<Meeting, ValidationError> {
    Meeting::new(DaySet::from_markers(days, EVENT_DAYS)?, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_event() {
        let event = Event::new("Exercise", "MWFSU", 800, 900, "Cardio").unwrap();
        assert_eq!(event.title(), "Exercise");
        assert_eq!(event.details(), "Cardio");
        assert_eq!(event.meeting_string(), "MWFSU 8:00AM-9:00AM");
    }

    #[test]
    fn empty_details_allowed() {
        let event = Event::new("Exercise", "S", 1000, 1100, "").unwrap();
        assert_eq!(event.details(), "");
        assert_eq!(event.to_string(), "Exercise,S,1000,1100,");
    }

    #[test]
    fn event_days_validation() {
        for days in ["", "A", "MM", "SUS", "X"] {
            assert_eq!(
                Event::new("Exercise", days, 800, 900, ""),
                Err(ValidationError::MeetingDaysAndTime),
                "days {days:?} should be rejected"
            );
        }
    }

    #[test]
    fn midnight_range_is_an_ordinary_time() {
        let event = Event::new("Sleep", "U", 0, 0, "").unwrap();
        assert!(!event.meeting().is_arranged());
        assert_eq!(event.meeting_string(), "U 12:00AM-12:00AM");
    }

    #[test]
    fn event_times_validated() {
        assert_eq!(
            Event::new("Exercise", "M", 900, 800, ""),
            Err(ValidationError::MeetingDaysAndTime)
        );
        assert_eq!(
            Event::new("Exercise", "M", 800, 2460, ""),
            Err(ValidationError::MeetingDaysAndTime)
        );
        assert_eq!(Event::new("", "M", 800, 900, ""), Err(ValidationError::Title));
    }

    #[test]
    fn empty_title_rejected_on_existing_event() {
        let mut event = Event::new("Exercise", "MW", 800, 900, "").unwrap();
        assert_eq!(event.set_title(""), Err(ValidationError::Title));
        assert_eq!(event.title(), "Exercise");

        event.set_title("Gym").unwrap();
        assert_eq!(event.title(), "Gym");
    }

    #[test]
    fn failed_meeting_update_keeps_previous_meeting() {
        let mut event = Event::new("Exercise", "MW", 800, 900, "").unwrap();
        assert!(event.set_meeting_days_and_time("MWX", 800, 900).is_err());
        assert_eq!(event.meeting_string(), "MW 8:00AM-9:00AM");

        event.set_meeting_days_and_time("SU", 1000, 1130).unwrap();
        event.set_event_details("Weekend long run");
        assert_eq!(event.to_string(), "Exercise,SU,1000,1130,Weekend long run");
    }
}
