//! Calendar export: timetable entries to an iCalendar document.
//
// Start times are the record's local wall clock; events are emitted as
// floating times with no zone suffix since the dataset carries no timezone.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use icalendar::{Calendar, CalendarDateTime, Component, Event, EventLike};
use log::{debug, info};
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::config::ExportConfig;
use crate::dataset::ExamRecord;
use crate::schedule::ScheduleError;


/// Build one VEVENT per entry. An empty entry list is a caller precondition
/// violation and is rejected before any event is built.
pub fn to_calendar(entries: &[ExamRecord], config: &ExportConfig) -> Result<Calendar> {
    if entries.is_empty() {
        return Err(ScheduleError::EmptySelection.into());
    }

    let mut calendar = Calendar::new();
    calendar.name(&config.calendar_name);
    for record in entries {
        calendar.push(build_event(record, config.duration_hours)?);
    }
    debug!("built calendar with {} events", entries.len());
    Ok(calendar)
}

/// Serialize the calendar for the given entries and write it to `path`.
pub fn write_calendar(path: &Path, entries: &[ExamRecord], config: &ExportConfig) -> Result<()> {
    let calendar = to_calendar(entries, config)?;
    fs::write(path, calendar.to_string())
        .with_context(|| format!("failed to write calendar to {}", path.display()))?;
    info!("wrote {} events to {}", entries.len(), path.display());
    Ok(())
}

fn build_event(record: &ExamRecord, duration_hours: i64) -> Result<Event> {
    let start = record
        .start_datetime()
        .with_context(|| format!("cannot schedule exam for module {}", record.module))?;
    let end = start + Duration::hours(duration_hours);

    let mut event = Event::new();
    event
        .uid(&format!("{}@examtable", Uuid::new_v4()))
        .timestamp(Utc::now())
        .summary(&format!("{} - {} Exam", record.module, record.exam))
        .starts(CalendarDateTime::Floating(start))
        .ends(CalendarDateTime::Floating(end))
        .location(&format!(
            "Faculty: {}, Department: {}",
            record.faculty, record.department
        ))
        .description(&event_description(record));
    Ok(event)
}

fn event_description(record: &ExamRecord) -> String {
    let time_line = if record.time_defaulted {
        format!("Time: {} (Default time - may not be accurate)", record.time)
    } else {
        format!("Time: {}", record.time)
    };
    format!("Code: {}\nDate: {}\n{}", record.code, record.date, time_line)
}
