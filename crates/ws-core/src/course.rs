//! Catalog course offerings.

use std::fmt;

use serde::Serialize;

use crate::activity::{LongDisplayRow, Meeting, ShortDisplayRow, validate_title};
use crate::types::{ARRANGED, COURSE_DAYS, DaySet, ValidationError};

const MIN_NAME_LENGTH: usize = 5;
const MAX_NAME_LENGTH: usize = 8;
const MIN_LETTER_COUNT: usize = 1;
const MAX_LETTER_COUNT: usize = 4;
const DIGIT_COUNT: usize = 3;
const SECTION_LENGTH: usize = 3;
const MIN_CREDITS: i32 = 1;
const MAX_CREDITS: i32 = 5;

/// A course section offered in the catalog.
///
/// Every field is validated on construction and again by each setter. A failed
/// setter leaves the course unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Course {
    name: String,
    title: String,
    section: String,
    credits: u8,
    instructor_id: String,
    #[serde(flatten)]
    meeting: Meeting,
}

impl Course {
    /// Creates a course that meets at fixed times.
    ///
    /// Pass `"A"` with `0, 0` for an arranged course, or use [`Course::arranged`].
    #[expect(
        clippy::too_many_arguments,
        reason = "mirrors the flat catalog record layout"
    )]
    pub fn new(
        name: &str,
        title: &str,
        section: &str,
        credits: i32,
        instructor_id: &str,
        days: &str,
        start: i32,
        end: i32,
    ) -> Result<Self, ValidationError> {
        let title = validate_title(title)?;
        let meeting = course_meeting(days, start, end)?;
        Ok(Self {
            name: validate_name(name)?,
            title,
            section: validate_section(section)?,
            credits: validate_credits(credits)?,
            instructor_id: validate_instructor_id(instructor_id)?,
            meeting,
        })
    }

    /// Creates a course with no fixed meeting time.
    pub fn arranged(
        name: &str,
        title: &str,
        section: &str,
        credits: i32,
        instructor_id: &str,
    ) -> Result<Self, ValidationError> {
        Self::new(name, title, section, credits, instructor_id, ARRANGED, 0, 0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub const fn credits(&self) -> u8 {
        self.credits
    }

    pub fn instructor_id(&self) -> &str {
        &self.instructor_id
    }

    pub const fn meeting(&self) -> &Meeting {
        &self.meeting
    }

    pub fn meeting_string(&self) -> String {
        self.meeting.meeting_string()
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), ValidationError> {
        self.title = validate_title(title)?;
        Ok(())
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub fn set_section(&mut self, section: &str) -> Result<(), ValidationError> {
        self.section = validate_section(section)?;
        Ok(())
    }

    pub fn set_credits(&mut self, credits: i32) -> Result<(), ValidationError> {
        self.credits = validate_credits(credits)?;
        Ok(())
    }

    pub fn set_instructor_id(&mut self, instructor_id: &str) -> Result<(), ValidationError> {
        self.instructor_id = validate_instructor_id(instructor_id)?;
        Ok(())
    }

    /// Replaces the meeting pattern.
    ///
    /// Days are drawn from `MTWHF` without repeats, or are `"A"` with both
    /// times zero. The time range must be ordered and on the 24-hour clock.
    pub fn set_meeting_days_and_time(
        &mut self,
        days: &str,
        start: i32,
        end: i32,
    ) -> Result<(), ValidationError> {
        self.meeting = course_meeting(days, start, end)?;
        Ok(())
    }

    pub fn short_display_row(&self) -> ShortDisplayRow {
        [
            self.name.clone(),
            self.section.clone(),
            self.title.clone(),
            self.meeting_string(),
        ]
    }

    pub fn long_display_row(&self) -> LongDisplayRow {
        [
            self.name.clone(),
            self.section.clone(),
            self.title.clone(),
            self.credits.to_string(),
            self.instructor_id.clone(),
            self.meeting_string(),
            String::new(),
        ]
    }
}

/// Record form: `name,title,section,credits,instructor,days[,start,end]`.
impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.name,
            self.title,
            self.section,
            self.credits,
            self.instructor_id,
            self.meeting.days()
        )?;
        if !self.meeting.is_arranged() {
            write!(f, ",{},{}", self.meeting.start(), self.meeting.end())?;
        }
        Ok(())
    }
}

fn course_meeting(days: &str, start: i32, end: i32) -> Result<Meeting, ValidationError> {
    if days == ARRANGED {
        if start != 0 || end != 0 {
            return Err(ValidationError::MeetingDaysAndTime);
        }
        return Meeting::new(DaySet::arranged(), start, end);
    }
    Meeting::new(DaySet::from_markers(days, COURSE_DAYS)?, start, end)
}

/// Course names are 1-4 letters, one space, then exactly 3 digits.
fn validate_name(name: &str) -> Result<String, ValidationError> {
    let length = name.chars().count();
    if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
        return Err(ValidationError::CourseName);
    }

    let mut letters = 0;
    let mut digits = 0;
    let mut found_space = false;

    for c in name.chars() {
        if found_space {
            if !c.is_ascii_digit() {
                return Err(ValidationError::CourseName);
            }
            digits += 1;
        } else if c.is_alphabetic() {
            letters += 1;
        } else if c == ' ' {
            found_space = true;
        } else {
            return Err(ValidationError::CourseName);
        }
    }

    if !(MIN_LETTER_COUNT..=MAX_LETTER_COUNT).contains(&letters) || digits != DIGIT_COUNT {
        return Err(ValidationError::CourseName);
    }

    Ok(name.to_string())
}

fn validate_section(section: &str) -> Result<String, ValidationError> {
    if section.len() != SECTION_LENGTH || !section.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::Section);
    }
    Ok(section.to_string())
}

fn validate_credits(credits: i32) -> Result<u8, ValidationError> {
    if !(MIN_CREDITS..=MAX_CREDITS).contains(&credits) {
        return Err(ValidationError::Credits);
    }
    u8::try_from(credits).map_err(|_| ValidationError::Credits)
}

fn validate_instructor_id(instructor_id: &str) -> Result<String, ValidationError> {
    if instructor_id.is_empty() {
        return Err(ValidationError::InstructorId);
    }
    Ok(instructor_id.to_string())
}
