//! CLI subcommand implementations.

pub mod catalog;
pub mod check;
pub mod schedule;
pub mod util;
