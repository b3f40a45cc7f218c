//! Help command handler.

use anyhow::Result;

use super::{CommandArgs, CommandHandler};
use crate::session::Session;

#[derive(Debug)]
pub struct HelpHandler;

impl CommandHandler for HelpHandler {
    fn execute(&self, _args: CommandArgs, _session: &mut Session) -> Result<()> {
        print_help();
        Ok(())
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "help" || command == "--help" || command == "-h"
    }
}

fn print_help() {
    println!("examtable - exam schedule lookup, clash detection and calendar export");
    println!();
    println!("COMMANDS:");
    println!("  load [file]          Load an exam dataset (CSV)");
    println!("  search <query>       Search modules by identifier, name or code");
    println!("  show <module>        Show all exam entries for a module");
    println!("  add <module>         Add a module to the selection");
    println!("  remove <module>      Remove a module from the selection");
    println!("  selected             List selected modules");
    println!("  clear                Clear the selection");
    println!("  timetable            Show the sorted timetable with clash warnings");
    println!("  export [file]        Write an .ics calendar (--name <calendar name>)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!("  exit                 Exit the application");
}
