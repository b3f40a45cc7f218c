//! Module index, selection state and timetable construction.

use log::debug;
use std::collections::{HashMap, HashSet};

mod timetable;

#[cfg(test)]
mod schedule_tests;

pub use timetable::{SkippedEntry, Timetable};

use crate::dataset::ExamRecord;

/// Queries shorter than this return no results.
pub const MIN_QUERY_LEN: usize = 2;
/// Search results are capped for display purposes.
pub const MAX_SEARCH_RESULTS: usize = 20;

/// Custom error type for schedule operations
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("no modules are selected")]
    EmptySelection,
    #[error("unknown module '{0}'")]
    UnknownModule(String),
}

/// Descriptive metadata for one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    pub name: String,
    pub code: String,
}

/// Deduplicated module metadata keyed by module identifier.
///
/// Built once after parsing; the first record seen for a module wins.
#[derive(Debug, Default)]
pub struct ModuleIndex {
    modules: HashMap<String, ModuleInfo>,
}

impl ModuleIndex {
    pub fn build(records: &[ExamRecord]) -> Self {
        let mut modules = HashMap::new();
        for record in records {
            if record.module.is_empty() {
                continue;
            }
            modules
                .entry(record.module.clone())
                .or_insert_with(|| ModuleInfo {
                    name: record.name.clone(),
                    code: record.code.clone(),
                });
        }
        debug!("module index holds {} modules", modules.len());
        Self { modules }
    }

    pub fn get(&self, module: &str) -> Option<&ModuleInfo> {
        self.modules.get(module)
    }

    pub fn contains(&self, module: &str) -> bool {
        self.modules.contains_key(module)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Case-insensitive substring search over identifier, name and code.
    ///
    /// Results are sorted by module identifier so repeated searches are
    /// deterministic, and capped at [`MAX_SEARCH_RESULTS`].
    pub fn search(&self, query: &str) -> Vec<(&str, &ModuleInfo)> {
        let query = query.trim().to_lowercase();
        if query.len() < MIN_QUERY_LEN {
            return Vec::new();
        }

        let mut results: Vec<(&str, &ModuleInfo)> = self
            .modules
            .iter()
            .filter(|(id, info)| {
                id.to_lowercase().contains(&query)
                    || info.name.to_lowercase().contains(&query)
                    || info.code.to_lowercase().contains(&query)
            })
            .map(|(id, info)| (id.as_str(), info))
            .collect();

        results.sort_by(|a, b| a.0.cmp(b.0));
        results.truncate(MAX_SEARCH_RESULTS);
        results
    }
}

/// The set of module identifiers currently chosen by the user.
///
/// Membership only: order-irrelevant, no duplicates, single writer.
#[derive(Debug, Default)]
pub struct Selection {
    modules: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the module was not already selected.
    pub fn add(&mut self, module: &str) -> bool {
        self.modules.insert(module.to_string())
    }

    /// Returns true when the module was present.
    pub fn remove(&mut self, module: &str) -> bool {
        self.modules.remove(module)
    }

    pub fn clear(&mut self) {
        self.modules.clear();
    }

    pub fn contains(&self, module: &str) -> bool {
        self.modules.contains(module)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(String::as_str)
    }

    /// Module identifiers in a stable order for display.
    pub fn sorted(&self) -> Vec<&str> {
        let mut modules: Vec<&str> = self.iter().collect();
        modules.sort_unstable();
        modules
    }
}
