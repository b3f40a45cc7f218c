use crate::command_processor::CommandProcessor;
use crate::config::Config;
use crate::session::Session;
use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub struct Application {
    command_processor: CommandProcessor,
}

impl Application {
    pub fn new() -> Self {
        Self { command_processor: CommandProcessor::new() }
    }

    pub fn run(&self) -> Result<()> {
        log::info!("Starting examtable terminal");
        let config = Config::load()?;
        let mut session = Session::new(config);

        // Preload the configured dataset when one is set and present.
        if let Some(path) = session.config.dataset.default_path.clone() {
            if path.exists() {
                match session.load_dataset(&path) {
                    Ok(()) => log::info!("Preloaded dataset from {}", path.display()),
                    Err(e) => log::error!("Failed to preload dataset: {:?}", e),
                }
            }
        }

        let mut rl = DefaultEditor::new()?;

        println!("Welcome to examtable! Type 'help' for commands.");
        let prompt = "exam> ";

        loop {
            match rl.readline(prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line.as_str());
                    if let Err(err) = self.command_processor.execute(&line, &mut session) {
                        println!("Error: {}", err);
                        log::debug!("command failed: {:?}", err);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}
