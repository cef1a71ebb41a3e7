//! Schedule conflict detection between two activities.

use thiserror::Error;

use crate::activity::Meeting;

/// Raised when two activities share a day and their times overlap.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ConflictError {
    message: String,
}

impl ConflictError {
    pub const DEFAULT_MESSAGE: &'static str = "Schedule conflict.";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for ConflictError {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MESSAGE)
    }
}

/// Checks two meetings for a conflict.
///
/// Ranges are inclusive: one meeting ending at 1445 conflicts with another
/// starting at 1445 on a shared day. Arranged meetings never conflict.
pub fn check_conflict(a: &Meeting, b: &Meeting) -> Result<(), ConflictError> {
    if a.overlaps(b) {
        return Err(ConflictError::default());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{Activity, ConflictError, Course, Event};

    fn activity(days: &str, start: i32, end: i32) -> Activity {
        Event::new("Block", days, start, end, "").unwrap().into()
    }

    fn course(days: &str, start: i32, end: i32) -> Activity {
        Course::new("CSC 216", "Software Development Fundamentals", "001", 3, "sesmith5", days, start, end)
            .unwrap()
            .into()
    }

    fn assert_symmetric(a: &Activity, b: &Activity) -> Result<(), ConflictError> {
        let forward = a.check_conflict(b);
        let backward = b.check_conflict(a);
        assert_eq!(forward, backward, "conflict check must be order-independent");
        forward
    }

    #[test]
    fn no_conflict_for_disjoint_times() {
        let a = course("MW", 1330, 1445);
        let b = activity("MW", 1500, 1600);
        assert!(assert_symmetric(&a, &b).is_ok());
    }

    #[test]
    fn conflict_for_overlapping_times() {
        let a = course("MW", 1330, 1445);
        let b = activity("M", 1400, 1500);
        let err = assert_symmetric(&a, &b).unwrap_err();
        assert_eq!(err.to_string(), "Schedule conflict.");
    }

    #[test]
    fn same_time_different_days() {
        let a = course("MW", 1330, 1445);
        let b = course("TH", 1330, 1445);
        assert!(assert_symmetric(&a, &b).is_ok());
    }

    #[test]
    fn end_time_equals_start_time() {
        let a = course("MW", 1330, 1445);
        let b = activity("TW", 1445, 1530);
        let err = assert_symmetric(&a, &b).unwrap_err();
        assert_eq!(err.message(), ConflictError::DEFAULT_MESSAGE);
    }

    #[test]
    fn conflict_on_single_shared_day() {
        let a = course("MWF", 900, 950);
        let b = activity("FSU", 930, 1030);
        assert!(assert_symmetric(&a, &b).is_err());
    }

    #[test]
    fn contained_range_conflicts() {
        let a = activity("T", 800, 1700);
        let b = activity("T", 1200, 1300);
        assert!(assert_symmetric(&a, &b).is_err());
    }

    #[test]
    fn arranged_course_never_conflicts() {
        let arranged: Activity = Course::arranged("CSC 116", "Intro", "601", 3, "jdyoung2")
            .unwrap()
            .into();
        let midnight = activity("MTWHFSU", 0, 100);
        assert!(assert_symmetric(&arranged, &midnight).is_ok());
        assert!(assert_symmetric(&arranged, &arranged.clone()).is_ok());
    }

    #[test]
    fn custom_message() {
        let err = ConflictError::new("Gym overlaps lecture.");
        assert_eq!(err.to_string(), "Gym overlaps lecture.");
        assert_eq!(ConflictError::default().to_string(), "Schedule conflict.");
    }
}
