//! Schedule command for building, printing and exporting a schedule.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use ws_core::Activity;

use crate::cli::ScheduleArgs;
use crate::commands::util::{add_selection, format_row};
use crate::{ScheduleConflict, Scheduler};

#[derive(Serialize)]
struct ScheduleOutput<'a> {
    title: &'a str,
    activities: &'a [Activity],
}

/// Runs the schedule command.
pub fn run<W: Write>(writer: &mut W, scheduler: &mut Scheduler, args: &ScheduleArgs) -> Result<()> {
    if let Some(title) = &args.title {
        scheduler.set_schedule_title(title.as_str());
    }
    add_selection(scheduler, &args.selection)?;

    if args.json {
        let output = ScheduleOutput {
            title: scheduler.schedule_title(),
            activities: scheduler.schedule(),
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        write_schedule(writer, scheduler, args.full)?;
        if args.check_conflicts {
            write_conflicts(writer, scheduler, &scheduler.check_conflicts())?;
        }
    }

    if let Some(path) = &args.export {
        scheduler
            .export_schedule(path)
            .with_context(|| format!("failed to export schedule to {}", path.display()))?;
        if !args.json {
            writeln!(writer, "Exported to {}", path.display())?;
        }
    }

    Ok(())
}

fn write_schedule<W: Write>(writer: &mut W, scheduler: &Scheduler, full: bool) -> Result<()> {
    writeln!(writer, "{}", scheduler.schedule_title())?;

    if scheduler.schedule().is_empty() {
        writeln!(writer, "No activities scheduled.")?;
        return Ok(());
    }

    let rows: Vec<String> = if full {
        scheduler
            .full_scheduled_activities()
            .iter()
            .map(|row| format_row(row))
            .collect()
    } else {
        scheduler
            .scheduled_activities()
            .iter()
            .map(|row| format_row(row))
            .collect()
    };
    for (index, row) in rows.iter().enumerate() {
        writeln!(writer, "{}. {row}", index + 1)?;
    }

    Ok(())
}

/// Writes one line per conflicting pair, numbered as in the schedule listing.
pub(crate) fn write_conflicts<W: Write>(
    writer: &mut W,
    scheduler: &Scheduler,
    conflicts: &[ScheduleConflict],
) -> Result<()> {
    if conflicts.is_empty() {
        writeln!(writer, "No conflicts.")?;
        return Ok(());
    }

    writeln!(writer, "Conflicts:")?;
    let schedule = scheduler.schedule();
    for conflict in conflicts {
        writeln!(
            writer,
            "- {}. {} / {}. {}: {}",
            conflict.first + 1,
            schedule[conflict.first].title(),
            conflict.second + 1,
            schedule[conflict.second].title(),
            conflict.error
        )?;
    }

    Ok(())
}
