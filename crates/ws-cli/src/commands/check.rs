//! Check command for reporting time conflicts without printing the schedule.

use std::io::Write;

use anyhow::Result;

use crate::Scheduler;
use crate::cli::SelectionArgs;
use crate::commands::schedule::write_conflicts;
use crate::commands::util::add_selection;

/// Runs the check command. Fails when any two activities conflict.
pub fn run<W: Write>(writer: &mut W, scheduler: &mut Scheduler, selection: &SelectionArgs) -> Result<()> {
    add_selection(scheduler, selection)?;

    let conflicts = scheduler.check_conflicts();
    write_conflicts(writer, scheduler, &conflicts)?;

    if !conflicts.is_empty() {
        anyhow::bail!("found {} schedule conflict(s)", conflicts.len());
    }
    Ok(())
}
