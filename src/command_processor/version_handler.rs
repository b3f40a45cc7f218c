//! Version command handler.

use anyhow::Result;

use super::{CommandArgs, CommandHandler};
use crate::session::Session;

#[derive(Debug)]
pub struct VersionHandler;

impl CommandHandler for VersionHandler {
    fn execute(&self, _args: CommandArgs, _session: &mut Session) -> Result<()> {
        println!("examtable {}", env!("CARGO_PKG_VERSION"));
        Ok(())
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "version" || command == "--version" || command == "-v"
    }
}
