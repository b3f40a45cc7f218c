//! Session state: the single owner of the loaded dataset and selection.
//
// All engine functions take the data they need by reference; nothing here is
// ambient or global. The record collection is write-once per load and the
// selection has exactly one synchronous writer.

use anyhow::{anyhow, Result};
use log::info;
use std::path::Path;

use crate::config::Config;
use crate::dataset::Dataset;
use crate::schedule::{Selection, Timetable};

pub struct Session {
    pub config: Config,
    pub selection: Selection,
    dataset: Option<Dataset>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self { config, selection: Selection::new(), dataset: None }
    }

    /// Replace the dataset. The selection is cleared since its identifiers
    /// referred to the previous dataset.
    pub fn load_dataset(&mut self, path: &Path) -> Result<()> {
        let dataset = Dataset::from_path(path)
            .map_err(|e| anyhow!("failed to load dataset from {}: {}", path.display(), e))?;
        info!("dataset replaced, clearing selection");
        self.selection.clear();
        self.dataset = Some(dataset);
        Ok(())
    }

    pub fn has_dataset(&self) -> bool {
        self.dataset.is_some()
    }

    pub fn dataset(&self) -> Result<&Dataset> {
        self.dataset
            .as_ref()
            .ok_or_else(|| anyhow!("no dataset loaded; run 'load <file>' first"))
    }

    /// Rebuild the timetable for the current selection.
    pub fn timetable(&self) -> Result<Timetable> {
        let dataset = self.dataset()?;
        Ok(Timetable::build(dataset.records(), &self.selection))
    }
}
