//! Calendar export command.

use anyhow::Result;
use std::path::PathBuf;

use super::{CommandArgs, CommandHandler};
use crate::export;
use crate::schedule::ScheduleError;
use crate::session::Session;

#[derive(Debug)]
pub struct ExportHandler;

impl CommandHandler for ExportHandler {
    fn execute(&self, args: CommandArgs, session: &mut Session) -> Result<()> {
        // Precondition: reject before touching the filesystem.
        if session.selection.is_empty() {
            return Err(ScheduleError::EmptySelection.into());
        }

        let timetable = session.timetable()?;
        for skipped in &timetable.skipped {
            println!(
                "Warning: exam for {} not exported, invalid date '{}'",
                skipped.module, skipped.date
            );
        }

        let path = args
            .args
            .first()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(&session.config.export.default_output));

        let mut export_config = session.config.export.clone();
        if let Some(Some(name)) = args.flags.get("--name") {
            export_config.calendar_name = name.clone();
        }

        export::write_calendar(&path, &timetable.entries, &export_config)?;
        println!("Exported {} events to {}", timetable.len(), path.display());
        Ok(())
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "export"
    }
}
