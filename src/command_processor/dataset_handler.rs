//! Dataset loading command.

use anyhow::{anyhow, Result};
use std::path::PathBuf;

use super::{CommandArgs, CommandHandler};
use crate::session::Session;

#[derive(Debug)]
pub struct LoadHandler;

impl CommandHandler for LoadHandler {
    fn execute(&self, args: CommandArgs, session: &mut Session) -> Result<()> {
        let path = match args.args.first() {
            Some(arg) => PathBuf::from(arg),
            None => session
                .config
                .dataset
                .default_path
                .clone()
                .ok_or_else(|| {
                    anyhow!("usage: load <file> (or set dataset.default_path in the config)")
                })?,
        };

        session.load_dataset(&path)?;
        let dataset = session.dataset()?;
        println!(
            "Loaded {} exam records ({} modules) from {}",
            dataset.len(),
            dataset.modules().len(),
            path.display()
        );
        Ok(())
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "load"
    }
}
