//! Activity record writer.
//!
//! Courses are written in catalog form and events as
//! `title,days,start,end,details`, one record per line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ws_core::Activity;

use crate::RecordError;

/// Writes every activity as one record line.
pub fn write_records<W: Write>(writer: &mut W, activities: &[Activity]) -> std::io::Result<()> {
    for activity in activities {
        writeln!(writer, "{activity}")?;
    }
    writer.flush()
}

/// Writes activity records to `path`, replacing any existing file.
pub fn write_activity_records(path: &Path, activities: &[Activity]) -> Result<(), RecordError> {
    let to_write_error = |source| RecordError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);
    write_records(&mut writer, activities).map_err(to_write_error)?;

    tracing::info!(path = %path.display(), count = activities.len(), "exported activity records");
    Ok(())
}
