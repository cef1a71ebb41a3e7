//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands::util::{CourseSelection, EventSpec};

/// Weekly schedule builder.
///
/// Builds a weekly schedule from a course catalog and freeform events,
/// rejecting duplicate enrollments and reporting time conflicts.
#[derive(Debug, Parser)]
#[command(name = "ws", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the course catalog.
    Catalog {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Build a schedule and print it.
    Schedule(ScheduleArgs),

    /// Report time conflicts between the selected activities.
    Check(SelectionArgs),
}

/// Activities to put on the schedule. Courses are added before events.
#[derive(Debug, Args)]
pub struct SelectionArgs {
    /// Catalog course to add, e.g. "CSC 216:001".
    #[arg(long = "course", value_name = "NAME:SECTION")]
    pub courses: Vec<CourseSelection>,

    /// Event to add, e.g. "Exercise,MWF,800,900,Gym".
    #[arg(long = "event", value_name = "TITLE,DAYS,START,END[,DETAILS]")]
    pub events: Vec<EventSpec>,
}

#[derive(Debug, Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Schedule title (overrides the configured title).
    #[arg(long)]
    pub title: Option<String>,

    /// Show credits, instructor and event details.
    #[arg(long)]
    pub full: bool,

    /// Output as JSON.
    #[arg(long, conflicts_with = "full")]
    pub json: bool,

    /// Also report time conflicts.
    #[arg(long)]
    pub check_conflicts: bool,

    /// Write the schedule as activity records to this file.
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}
