//! Module search and detail commands.

use anyhow::{anyhow, Result};

use super::{CommandArgs, CommandHandler};
use crate::schedule::{ScheduleError, MIN_QUERY_LEN};
use crate::session::Session;

#[derive(Debug)]
pub struct SearchHandler;

impl CommandHandler for SearchHandler {
    fn execute(&self, args: CommandArgs, session: &mut Session) -> Result<()> {
        match args.command.as_str() {
            "search" => search(&args, session),
            "show" => show(&args, session),
            _ => unreachable!(),
        }
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "search" || command == "show"
    }
}

fn search(args: &CommandArgs, session: &Session) -> Result<()> {
    let query = args.args.join(" ");
    if query.trim().len() < MIN_QUERY_LEN {
        println!("Enter at least {} characters to search.", MIN_QUERY_LEN);
        return Ok(());
    }

    let results = session.dataset()?.modules().search(&query);
    if results.is_empty() {
        println!("No modules found matching your search.");
        return Ok(());
    }

    for (module, info) in &results {
        let marker = if session.selection.contains(module) { "*" } else { " " };
        println!("{} {:<16} {:<10} {}", marker, module, info.code, info.name);
    }
    println!("({} result(s); * = selected)", results.len());
    Ok(())
}

fn show(args: &CommandArgs, session: &Session) -> Result<()> {
    let module = args
        .args
        .first()
        .ok_or_else(|| anyhow!("usage: show <module>"))?;

    let dataset = session.dataset()?;
    let info = dataset
        .modules()
        .get(module)
        .ok_or_else(|| ScheduleError::UnknownModule(module.clone()))?;

    println!("{} ({})", module, info.code);
    if !info.name.is_empty() {
        println!("{}", info.name);
    }
    println!();
    println!(
        "{:<6} {:<20} {:<16} {:<10} {:<6} {:<12} {}",
        "Exam", "Faculty", "Department", "Code", "Day", "Date", "Time"
    );
    for record in dataset.records_for_module(module) {
        println!(
            "{:<6} {:<20} {:<16} {:<10} {:<6} {:<12} {}",
            record.exam,
            record.faculty,
            record.department,
            record.code,
            record.day,
            record.date,
            record.display_time()
        );
    }
    Ok(())
}
