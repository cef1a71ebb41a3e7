//! Catalog reader: one comma-separated course record per line.
//!
//! Record grammar: `name,title,section,credits,instructor,days[,start,end]`.
//! Arranged courses (`days == "A"`) have exactly six fields; timed courses
//! have exactly eight. Lines that do not parse, or that fail course
//! validation, are skipped. So are repeats of an earlier `(name, section)`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use ws_core::{ARRANGED, Course, ValidationError};

use crate::RecordError;

const ARRANGED_FIELD_COUNT: usize = 6;
const TIMED_FIELD_COUNT: usize = 8;

/// Why a single catalog line was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRecord {
    /// Too few or too many comma-separated fields.
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// A numeric field did not hold an integer.
    #[error("{field} is not an integer: {value:?}")]
    NotAnInteger { field: &'static str, value: String },

    /// The fields parsed but the course itself is invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Parses one catalog line into a validated course.
pub fn parse_course_record(line: &str) -> Result<Course, InvalidRecord> {
    let fields: Vec<&str> = line.split(',').collect();

    // Days decide how many fields the record must have.
    let Some(&days) = fields.get(ARRANGED_FIELD_COUNT - 1) else {
        return Err(InvalidRecord::FieldCount {
            expected: ARRANGED_FIELD_COUNT,
            found: fields.len(),
        });
    };
    let expected = if days == ARRANGED {
        ARRANGED_FIELD_COUNT
    } else {
        TIMED_FIELD_COUNT
    };
    if fields.len() != expected {
        return Err(InvalidRecord::FieldCount {
            expected,
            found: fields.len(),
        });
    }

    let credits = parse_int("credits", fields[3])?;

    if days == ARRANGED {
        return Ok(Course::arranged(
            fields[0], fields[1], fields[2], credits, fields[4],
        )?);
    }

    let start = parse_int("start time", fields[6])?;
    let end = parse_int("end time", fields[7])?;
    Ok(Course::new(
        fields[0], fields[1], fields[2], credits, fields[4], days, start, end,
    )?)
}

fn parse_int(field: &'static str, value: &str) -> Result<i32, InvalidRecord> {
    value.parse().map_err(|_| InvalidRecord::NotAnInteger {
        field,
        value: value.to_string(),
    })
}

/// Reads a catalog file, skipping invalid and duplicate records.
///
/// Only failing to open or read the file is an error.
pub fn read_course_records(path: &Path) -> Result<Vec<Course>, RecordError> {
    let file = File::open(path).map_err(|source| RecordError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let courses = read_courses_from(BufReader::new(file)).map_err(|source| RecordError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), count = courses.len(), "loaded course catalog");
    Ok(courses)
}

/// Reads catalog records from any buffered source.
///
/// The first record for a given `(name, section)` wins. A line that is not
/// valid UTF-8 is skipped like any other malformed record.
pub fn read_courses_from<R: BufRead>(reader: R) -> std::io::Result<Vec<Course>> {
    let mut courses: Vec<Course> = Vec::new();

    for (index, bytes) in reader.split(b'\n').enumerate() {
        let mut bytes = bytes?;
        let line_number = index + 1;

        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(error) => {
                tracing::debug!(line_number, %error, "skipping undecodable catalog record");
                continue;
            }
        };

        let course = match parse_course_record(&line) {
            Ok(course) => course,
            Err(error) => {
                tracing::debug!(line_number, %error, "skipping invalid catalog record");
                continue;
            }
        };

        let duplicate = courses
            .iter()
            .any(|c| c.name() == course.name() && c.section() == course.section());
        if duplicate {
            tracing::debug!(
                line_number,
                name = course.name(),
                section = course.section(),
                "skipping duplicate catalog record"
            );
            continue;
        }

        courses.push(course);
    }

    Ok(courses)
}
