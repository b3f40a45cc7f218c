//! Timetable display command.

use anyhow::Result;
use chrono::NaiveDate;

use super::{CommandArgs, CommandHandler};
use crate::session::Session;

#[derive(Debug)]
pub struct TimetableHandler;

impl CommandHandler for TimetableHandler {
    fn execute(&self, _args: CommandArgs, session: &mut Session) -> Result<()> {
        if session.selection.is_empty() {
            println!("No modules selected. Use 'add <module>' first.");
            return Ok(());
        }

        let timetable = session.timetable()?;

        for skipped in &timetable.skipped {
            println!(
                "Warning: skipped exam for {} with invalid date '{}' ({})",
                skipped.module, skipped.date, skipped.reason
            );
        }

        if timetable.is_empty() {
            println!("No exam entries for the selected modules.");
            return Ok(());
        }

        if timetable.has_clashes() {
            println!("!! Exam time conflicts detected");
            println!("!! Rows marked with '!' occur at the same date and time.");
            println!();
        }

        println!(
            "  {:<16} {:<16} {:<16} {:<6} {:<24} {}",
            "Date", "Time", "Module", "Exam", "Location", "Code"
        );
        for (index, entry) in timetable.entries.iter().enumerate() {
            let marker = if timetable.clashes.contains_key(&index) { "!" } else { " " };
            println!(
                "{} {:<16} {:<16} {:<16} {:<6} {:<24} {}",
                marker,
                display_date(&entry.date),
                entry.display_time(),
                entry.module,
                entry.exam,
                format!("{} - {}", entry.faculty, entry.department),
                entry.code
            );
            let clashing = timetable.clashing_modules(index);
            if !clashing.is_empty() {
                println!("      conflicts with: {}", clashing.join(", "));
            }
        }
        Ok(())
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "timetable"
    }
}

/// Render `DD/MM/YYYY` in a readable form, e.g. `Wed 05 Jun 2024`. Dates
/// that do not parse are shown verbatim.
fn display_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%d/%m/%Y")
        .map(|d| d.format("%a %d %b %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}
