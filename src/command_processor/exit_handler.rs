//! Exit command handler.

use anyhow::Result;
use log::info;

use super::{CommandArgs, CommandHandler};
use crate::session::Session;

#[derive(Debug)]
pub struct ExitHandler;

impl CommandHandler for ExitHandler {
    fn execute(&self, _args: CommandArgs, _session: &mut Session) -> Result<()> {
        info!("Exiting examtable");
        println!("Goodbye!");
        std::process::exit(0);
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "exit" || command == "quit"
    }
}
