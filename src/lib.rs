//! examtable: exam-schedule lookup, clash detection and calendar export.
//!
//! The library is the engine: CSV ingestion ([`dataset`]), module index,
//! selection and timetable construction ([`schedule`]) and iCalendar export
//! ([`export`]). The interactive shell in [`app`] is a thin consumer of
//! those pieces and owns all presentation.

pub mod app;
pub mod command_processor;
pub mod config;
pub mod dataset;
pub mod export;
pub mod schedule;
pub mod session;
pub mod validation;

use anyhow::Result;
use log::info;

/// Create and run the interactive application.
pub fn run() -> Result<()> {
    let app = app::Application::new();
    info!("Initializing examtable application");
    app.run()
}

pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

// Re-export commonly used types
pub use config::Config;
pub use dataset::{Dataset, DatasetError, ExamRecord};
pub use schedule::{ModuleIndex, ScheduleError, Selection, Timetable};
pub use session::Session;
