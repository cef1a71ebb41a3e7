//! Catalog command for listing the offered courses.

use std::io::Write;

use anyhow::Result;

use crate::Scheduler;
use crate::commands::util::format_catalog_row;

/// Runs the catalog command, writing one line per course.
pub fn run<W: Write>(writer: &mut W, scheduler: &Scheduler, json: bool) -> Result<()> {
    if json {
        let json = serde_json::to_string_pretty(scheduler.catalog())?;
        writeln!(writer, "{json}")?;
        return Ok(());
    }

    let rows = scheduler.course_catalog();
    if rows.is_empty() {
        writeln!(writer, "Catalog is empty.")?;
        return Ok(());
    }

    writeln!(writer, "Course catalog ({} offerings)", rows.len())?;
    for row in &rows {
        writeln!(writer, "{}", format_catalog_row(row))?;
    }

    Ok(())
}
