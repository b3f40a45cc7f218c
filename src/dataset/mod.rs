//! Exam dataset ingestion.
//
// Loads the delimited exam schedule, normalizes time values and derives the
// module index. Records are immutable once the dataset has been built.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use log::info;
use std::fs;
use std::path::Path;

mod csv_reader;
mod normalize;


pub use csv_reader::parse_records;
pub use normalize::{normalize_times, A1_DEFAULT_TIME, STANDARD_DEFAULT_TIME};

use crate::schedule::ModuleIndex;

/// Custom error type for dataset ingestion
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("required column '{0}' not found in header row")]
    MissingColumn(&'static str),
    #[error("failed to read dataset row: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
}

/// One row of the exam dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamRecord {
    pub module: String,
    pub name: String,
    pub code: String,
    /// Exam session label, e.g. `A1`.
    pub exam: String,
    pub faculty: String,
    pub department: String,
    pub day: String,
    /// `DD/MM/YYYY`, as supplied by the source.
    pub date: String,
    /// `HH:MM` once normalization has run; never empty afterwards.
    pub time: String,
    /// Set when the time was filled in by policy rather than supplied.
    pub time_defaulted: bool,
}

impl ExamRecord {
    /// Combined wall-clock start of the exam.
    pub fn start_datetime(&self) -> Result<NaiveDateTime> {
        NaiveDateTime::parse_from_str(
            &format!("{} {}", self.date, self.time),
            "%d/%m/%Y %H:%M",
        )
        .with_context(|| {
            format!(
                "invalid date/time '{} {}' for module {}",
                self.date, self.time, self.module
            )
        })
    }

    /// Time string for display, flagging values that were defaulted.
    pub fn display_time(&self) -> String {
        if self.time_defaulted {
            format!("{} (Default)", self.time)
        } else {
            self.time.clone()
        }
    }
}

/// The full record collection plus the derived module index.
///
/// Built once per load; read-only afterwards. Normalization runs before the
/// dataset is exposed, so callers only ever observe normalized records.
#[derive(Debug)]
pub struct Dataset {
    records: Vec<ExamRecord>,
    modules: ModuleIndex,
}

impl Dataset {
    pub fn from_csv(text: &str) -> Result<Self, DatasetError> {
        let mut records = parse_records(text)?;
        normalize_times(&mut records);
        let modules = ModuleIndex::build(&records);
        info!(
            "Loaded {} exam records covering {} modules",
            records.len(),
            modules.len()
        );
        Ok(Self { records, modules })
    }

    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let text = fs::read_to_string(path)?;
        Self::from_csv(&text)
    }

    pub fn records(&self) -> &[ExamRecord] {
        &self.records
    }

    pub fn modules(&self) -> &ModuleIndex {
        &self.modules
    }

    /// All exam rows belonging to one module, in source order.
    pub fn records_for_module(&self, module: &str) -> Vec<&ExamRecord> {
        self.records.iter().filter(|r| r.module == module).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
