//! Shared utilities for CLI commands.

use std::str::FromStr;

use anyhow::{Context, Result};
use ws_core::ShortDisplayRow;

use crate::Scheduler;
use crate::cli::SelectionArgs;

/// A catalog course picked on the command line as `NAME:SECTION`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSelection {
    pub name: String,
    pub section: String,
}

impl FromStr for CourseSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((name, section)) = s.rsplit_once(':') else {
            return Err(format!("expected NAME:SECTION (e.g. \"CSC 216:001\"), got {s:?}"));
        };
        Ok(Self {
            name: name.to_string(),
            section: section.to_string(),
        })
    }
}

/// An event given on the command line as `TITLE,DAYS,START,END[,DETAILS]`.
///
/// Details are everything after the fourth comma, so they may contain commas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSpec {
    pub title: String,
    pub days: String,
    pub start: i32,
    pub end: i32,
    pub details: String,
}

impl FromStr for EventSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.splitn(5, ',');
        let (Some(title), Some(days), Some(start), Some(end)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(format!("expected TITLE,DAYS,START,END[,DETAILS], got {s:?}"));
        };
        let parse_time = |value: &str| {
            value
                .parse::<i32>()
                .map_err(|_| format!("time must be an HHMM integer, got {value:?}"))
        };

        Ok(Self {
            title: title.to_string(),
            days: days.to_string(),
            start: parse_time(start)?,
            end: parse_time(end)?,
            details: fields.next().unwrap_or_default().to_string(),
        })
    }
}

/// Adds the selected courses, then the selected events, to the schedule.
pub fn add_selection(scheduler: &mut Scheduler, selection: &SelectionArgs) -> Result<()> {
    for course in &selection.courses {
        let added = scheduler
            .add_course_to_schedule(&course.name, &course.section)
            .with_context(|| format!("cannot add {} section {}", course.name, course.section))?;
        if !added {
            anyhow::bail!("{} section {} is not in the catalog", course.name, course.section);
        }
    }

    for event in &selection.events {
        scheduler
            .add_event_to_schedule(&event.title, &event.days, event.start, event.end, &event.details)
            .with_context(|| format!("cannot add event {}", event.title))?;
    }

    Ok(())
}

/// Joins the non-empty fields of a display row.
pub fn format_row(row: &[String]) -> String {
    row.iter()
        .filter(|field| !field.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Formats a catalog row with fixed-width name and section columns.
pub fn format_catalog_row(row: &ShortDisplayRow) -> String {
    let [name, section, title, meeting] = row;
    format!("{name:<8} {section}  {title} ({meeting})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_course_selection() {
        let selection: CourseSelection = "CSC 216:001".parse().unwrap();
        assert_eq!(selection.name, "CSC 216");
        assert_eq!(selection.section, "001");
        assert!("CSC 216".parse::<CourseSelection>().is_err());
    }

    #[test]
    fn parses_event_spec_with_and_without_details() {
        let spec: EventSpec = "Exercise,MWF,800,900".parse().unwrap();
        assert_eq!(spec.title, "Exercise");
        assert_eq!(spec.days, "MWF");
        assert_eq!((spec.start, spec.end), (800, 900));
        assert_eq!(spec.details, "");

        let spec: EventSpec = "Study,SU,1300,1500,Chapters 3, 4 and 5".parse().unwrap();
        assert_eq!(spec.details, "Chapters 3, 4 and 5");
    }

    #[test]
    fn rejects_malformed_event_spec() {
        assert!("Exercise,MWF,800".parse::<EventSpec>().is_err());
        assert!("Exercise,MWF,8am,9am".parse::<EventSpec>().is_err());
    }

    #[test]
    fn format_row_skips_empty_fields() {
        let row = [
            String::new(),
            String::new(),
            "Exercise".to_string(),
            "M 8:00AM-9:00AM".to_string(),
        ];
        assert_eq!(format_row(&row), "Exercise | M 8:00AM-9:00AM");
    }
}
