//! Command dispatch for the interactive shell.
//
// Each command family has its own handler; the processor walks the handler
// list and hands the parsed arguments to the first one that claims the
// command. Handlers operate on the session passed to them, never on globals.

use anyhow::{anyhow, Result};
use log::debug;
use std::collections::HashMap;
use std::fmt::Debug;

pub mod dataset_handler;
pub mod exit_handler;
pub mod export_handler;
pub mod help_handler;
pub mod search_handler;
pub mod selection_handler;
pub mod timetable_handler;
pub mod version_handler;

use crate::session::Session;

/// Command line arguments structure
#[derive(Debug, Clone)]
pub struct CommandArgs {
    pub command: String,
    pub args: Vec<String>,
    pub flags: HashMap<String, Option<String>>,
}

impl CommandArgs {
    /// Parse a raw input line into command, positional args and `--flags`.
    /// Double quotes group words into a single argument.
    pub fn parse(input: &str) -> Result<Self> {
        let mut parts = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;

        for c in input.chars() {
            match c {
                '"' => {
                    in_quotes = !in_quotes;
                    if !in_quotes && !current.is_empty() {
                        parts.push(current.clone());
                        current.clear();
                    }
                }
                ' ' if !in_quotes => {
                    if !current.is_empty() {
                        parts.push(current.clone());
                        current.clear();
                    }
                }
                _ => current.push(c),
            }
        }
        if !current.is_empty() {
            parts.push(current);
        }

        if parts.is_empty() {
            return Err(anyhow!("No command provided"));
        }

        let command = parts.remove(0).to_lowercase();
        let mut args = Vec::new();
        let mut flags = HashMap::new();
        let mut i = 0;

        while i < parts.len() {
            if parts[i].starts_with("--") {
                let flag = parts[i].clone();
                if i + 1 < parts.len() && !parts[i + 1].starts_with("--") {
                    flags.insert(flag, Some(parts[i + 1].clone()));
                    i += 1;
                } else {
                    flags.insert(flag, None);
                }
            } else {
                args.push(parts[i].clone());
            }
            i += 1;
        }

        Ok(CommandArgs { command, args, flags })
    }
}

pub trait CommandHandler: Debug {
    fn execute(&self, args: CommandArgs, session: &mut Session) -> Result<()>;
    fn can_handle(&self, command: &str) -> bool;
}

#[derive(Debug)]
pub struct CommandProcessor {
    handlers: Vec<Box<dyn CommandHandler>>,
}

impl CommandProcessor {
    pub fn new() -> Self {
        let handlers: Vec<Box<dyn CommandHandler>> = vec![
            Box::new(dataset_handler::LoadHandler),
            Box::new(search_handler::SearchHandler),
            Box::new(selection_handler::SelectionHandler),
            Box::new(timetable_handler::TimetableHandler),
            Box::new(export_handler::ExportHandler),
            Box::new(help_handler::HelpHandler),
            Box::new(version_handler::VersionHandler),
            Box::new(exit_handler::ExitHandler),
        ];
        Self { handlers }
    }

    pub fn execute(&self, input: &str, session: &mut Session) -> Result<()> {
        let args = CommandArgs::parse(input)?;
        debug!("Processing command: {:?}", args);

        for handler in &self.handlers {
            if handler.can_handle(&args.command) {
                return handler.execute(args, session);
            }
        }
        Err(anyhow!(
            "Unknown command '{}'. Type 'help' for available commands.",
            args.command
        ))
    }
}

impl Default for CommandProcessor {
    fn default() -> Self {
        Self::new()
    }
}
