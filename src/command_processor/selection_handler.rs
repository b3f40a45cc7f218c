//! Selection commands: add, remove, selected, clear.
//
// Every mutation recomputes the timetable so clashes are reported the moment
// they appear, matching the on-demand recomputation model of the engine.

use anyhow::{anyhow, Result};
use log::debug;

use super::{CommandArgs, CommandHandler};
use crate::schedule::ScheduleError;
use crate::session::Session;

#[derive(Debug)]
pub struct SelectionHandler;

impl CommandHandler for SelectionHandler {
    fn execute(&self, args: CommandArgs, session: &mut Session) -> Result<()> {
        match args.command.as_str() {
            "add" => add(&args, session),
            "remove" => remove(&args, session),
            "selected" => list(session),
            "clear" => clear(session),
            _ => unreachable!(),
        }
    }

    fn can_handle(&self, command: &str) -> bool {
        matches!(command, "add" | "remove" | "selected" | "clear")
    }
}

fn add(args: &CommandArgs, session: &mut Session) -> Result<()> {
    let module = args
        .args
        .first()
        .ok_or_else(|| anyhow!("usage: add <module>"))?;

    if !session.dataset()?.modules().contains(module) {
        return Err(ScheduleError::UnknownModule(module.clone()).into());
    }

    if session.selection.add(module) {
        println!("Added {} ({} selected)", module, session.selection.len());
    } else {
        println!("{} is already selected", module);
    }
    warn_on_clashes(session)
}

fn remove(args: &CommandArgs, session: &mut Session) -> Result<()> {
    let module = args
        .args
        .first()
        .ok_or_else(|| anyhow!("usage: remove <module>"))?;

    if session.selection.remove(module) {
        println!("Removed {} ({} selected)", module, session.selection.len());
    } else {
        println!("{} was not selected", module);
    }
    Ok(())
}

fn list(session: &Session) -> Result<()> {
    if session.selection.is_empty() {
        println!("No modules selected.");
        return Ok(());
    }
    for module in session.selection.sorted() {
        println!("{}", module);
    }
    Ok(())
}

fn clear(session: &mut Session) -> Result<()> {
    session.selection.clear();
    println!("Selection cleared.");
    Ok(())
}

fn warn_on_clashes(session: &Session) -> Result<()> {
    let timetable = session.timetable()?;
    debug!("selection changed, timetable rebuilt with {} entries", timetable.len());
    if timetable.has_clashes() {
        println!("Warning: exam time conflicts detected. Run 'timetable' for details.");
    }
    Ok(())
}
