//! Weekly schedule builder CLI library.
//!
//! This crate provides the scheduler facade and the CLI interface.

mod cli;
pub mod commands;
mod config;
pub mod scheduler;

pub use cli::{Cli, Commands, ScheduleArgs, SelectionArgs};
pub use config::Config;
pub use scheduler::{DEFAULT_SCHEDULE_TITLE, ScheduleConflict, ScheduleError, Scheduler};
