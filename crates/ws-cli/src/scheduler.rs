//! Scheduler facade: the course catalog plus the schedule being built.
//!
//! The catalog is loaded once when the scheduler is opened and is read-only
//! afterward. The schedule is an ordered list of activities; only title
//! duplicates are rejected on add. Time conflicts are reported on request by
//! [`Scheduler::check_conflicts`] and never block an add.

use std::path::Path;

use thiserror::Error;
use ws_core::{Activity, ConflictError, Course, Event, LongDisplayRow, ShortDisplayRow, ValidationError};
use ws_records::RecordError;

/// Title given to a new schedule.
pub const DEFAULT_SCHEDULE_TITLE: &str = "My Schedule";

/// Scheduler errors.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The catalog source could not be opened or read.
    #[error("cannot load course catalog")]
    Catalog(#[source] RecordError),

    /// A course with the same title is already on the schedule.
    #[error("You are already enrolled in {name}")]
    AlreadyEnrolled { name: String },

    /// An event with the same title is already on the schedule.
    #[error("You have already created an event called {title}")]
    DuplicateEvent { title: String },

    /// The event failed field validation.
    #[error(transparent)]
    InvalidEvent(#[from] ValidationError),

    /// Writing the exported schedule failed.
    #[error("The file cannot be saved.")]
    Export(#[source] RecordError),
}

/// Two schedule entries whose meetings overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConflict {
    /// Index of the earlier entry.
    pub first: usize,
    /// Index of the later entry.
    pub second: usize,
    pub error: ConflictError,
}

/// Holds the catalog and the user's in-progress schedule.
#[derive(Debug, Clone)]
pub struct Scheduler {
    catalog: Vec<Course>,
    schedule: Vec<Activity>,
    title: String,
}

impl Scheduler {
    /// Opens a scheduler, loading the catalog from `catalog_path`.
    ///
    /// Fails only when the file cannot be read; invalid lines are skipped.
    pub fn open(catalog_path: &Path) -> Result<Self, ScheduleError> {
        let catalog = ws_records::read_course_records(catalog_path).map_err(ScheduleError::Catalog)?;
        Ok(Self::from_catalog(catalog))
    }

    /// Creates a scheduler over an already-loaded catalog.
    pub fn from_catalog(catalog: Vec<Course>) -> Self {
        Self {
            catalog,
            schedule: Vec::new(),
            title: DEFAULT_SCHEDULE_TITLE.to_string(),
        }
    }

    pub fn catalog(&self) -> &[Course] {
        &self.catalog
    }

    pub fn schedule(&self) -> &[Activity] {
        &self.schedule
    }

    pub fn schedule_title(&self) -> &str {
        &self.title
    }

    /// Any title is accepted, including an empty one.
    pub fn set_schedule_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Catalog rows in catalog order.
    pub fn course_catalog(&self) -> Vec<ShortDisplayRow> {
        self.catalog.iter().map(Course::short_display_row).collect()
    }

    /// Schedule rows in insertion order.
    pub fn scheduled_activities(&self) -> Vec<ShortDisplayRow> {
        self.schedule.iter().map(Activity::short_display_row).collect()
    }

    /// Schedule rows with credits, instructor and event details.
    pub fn full_scheduled_activities(&self) -> Vec<LongDisplayRow> {
        self.schedule.iter().map(Activity::long_display_row).collect()
    }

    pub fn get_course_from_catalog(&self, name: &str, section: &str) -> Option<&Course> {
        self.catalog
            .iter()
            .find(|course| course.name() == name && course.section() == section)
    }

    /// Adds a catalog course to the schedule.
    ///
    /// Returns `Ok(false)` when no such course is in the catalog, and an error
    /// when a course with the same title is already scheduled.
    pub fn add_course_to_schedule(&mut self, name: &str, section: &str) -> Result<bool, ScheduleError> {
        let Some(course) = self.get_course_from_catalog(name, section) else {
            tracing::debug!(name, section, "course not in catalog");
            return Ok(false);
        };
        let activity = Activity::from(course.clone());

        if self.schedule.iter().any(|existing| activity.is_duplicate(existing)) {
            return Err(ScheduleError::AlreadyEnrolled {
                name: name.to_string(),
            });
        }

        tracing::debug!(name, section, "added course to schedule");
        self.schedule.push(activity);
        Ok(true)
    }

    /// Builds an event and adds it to the schedule.
    pub fn add_event_to_schedule(
        &mut self,
        title: &str,
        days: &str,
        start: i32,
        end: i32,
        details: &str,
    ) -> Result<(), ScheduleError> {
        let activity = Activity::from(Event::new(title, days, start, end, details)?);

        if self.schedule.iter().any(|existing| activity.is_duplicate(existing)) {
            return Err(ScheduleError::DuplicateEvent {
                title: title.to_string(),
            });
        }

        tracing::debug!(title, "added event to schedule");
        self.schedule.push(activity);
        Ok(())
    }

    /// Removes the entry at `index`. Returns `false` when out of range.
    pub fn remove_activity_from_schedule(&mut self, index: usize) -> bool {
        if index >= self.schedule.len() {
            return false;
        }
        let removed = self.schedule.remove(index);
        tracing::debug!(index, title = removed.title(), "removed activity from schedule");
        true
    }

    /// Empties the schedule. The catalog and title are kept.
    pub fn reset_schedule(&mut self) {
        self.schedule.clear();
    }

    /// Checks every pair of scheduled activities for a time conflict.
    pub fn check_conflicts(&self) -> Vec<ScheduleConflict> {
        let mut conflicts = Vec::new();
        for (first, a) in self.schedule.iter().enumerate() {
            for (offset, b) in self.schedule[first + 1..].iter().enumerate() {
                if let Err(error) = a.check_conflict(b) {
                    conflicts.push(ScheduleConflict {
                        first,
                        second: first + 1 + offset,
                        error,
                    });
                }
            }
        }
        conflicts
    }

    /// Writes the schedule as activity records.
    pub fn export_schedule(&self, path: &Path) -> Result<(), ScheduleError> {
        ws_records::write_activity_records(path, &self.schedule).map_err(ScheduleError::Export)
    }
}
