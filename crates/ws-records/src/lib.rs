//! Flat-line record I/O for the weekly schedule builder.
//!
//! Reads the course catalog and writes exported schedules. Both formats are
//! plain UTF-8 text with one comma-separated record per line and no escaping.

pub mod catalog;
pub mod export;

use std::path::PathBuf;

use thiserror::Error;

pub use catalog::{InvalidRecord, parse_course_record, read_course_records, read_courses_from};
pub use export::{write_activity_records, write_records};

/// Record I/O errors.
///
/// Malformed catalog lines are not errors; they are skipped by the reader.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The record file could not be opened.
    #[error("cannot open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading from an opened record file failed.
    #[error("cannot read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The export file could not be created or written.
    #[error("cannot write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
