//! Timetable construction: chronological ordering and clash detection.

use chrono::NaiveDate;
use log::{debug, error, warn};
use std::collections::HashMap;

use super::Selection;
use crate::dataset::ExamRecord;

const DATE_FORMAT: &str = "%d/%m/%Y";

/// A record dropped from the timetable because its date could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub module: String,
    pub date: String,
    pub reason: String,
}

/// Sorted, clash-annotated exam entries for one selection.
///
/// Recomputed from scratch on every selection change; nothing here is
/// persisted.
#[derive(Debug, Default)]
pub struct Timetable {
    pub entries: Vec<ExamRecord>,
    /// Entry index to the indices of the other entries sharing its exact
    /// (date, time) slot. Entries without a clash carry no key.
    pub clashes: HashMap<usize, Vec<usize>>,
    /// Records excluded because of a malformed date, with diagnostics.
    pub skipped: Vec<SkippedEntry>,
}

impl Timetable {
    /// Gather the records of all selected modules, sort them by date then
    /// time of day, and annotate same-slot clashes.
    ///
    /// A record whose date field does not parse as `DD/MM/YYYY` is skipped
    /// and reported rather than failing the whole build.
    pub fn build(records: &[ExamRecord], selection: &Selection) -> Self {
        let mut keyed: Vec<(NaiveDate, (u32, u32), ExamRecord)> = Vec::new();
        let mut skipped = Vec::new();

        for record in records.iter().filter(|r| selection.contains(&r.module)) {
            match NaiveDate::parse_from_str(&record.date, DATE_FORMAT) {
                Ok(date) => keyed.push((date, time_key(&record.time), record.clone())),
                Err(e) => {
                    error!(
                        "skipping exam for {}: invalid date '{}' ({})",
                        record.module, record.date, e
                    );
                    skipped.push(SkippedEntry {
                        module: record.module.clone(),
                        date: record.date.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        // Stable sort: entries tied on (date, time) keep their input order.
        keyed.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));
        let entries: Vec<ExamRecord> = keyed.into_iter().map(|(_, _, record)| record).collect();

        let clashes = detect_clashes(&entries);
        if !clashes.is_empty() {
            warn!("{} timetable entries clash on date and time", clashes.len());
        }
        debug!(
            "built timetable with {} entries, {} skipped",
            entries.len(),
            skipped.len()
        );

        Self { entries, clashes, skipped }
    }

    pub fn has_clashes(&self) -> bool {
        !self.clashes.is_empty()
    }

    /// Identifiers of the modules clashing with the entry at `index`.
    pub fn clashing_modules(&self, index: usize) -> Vec<&str> {
        self.clashes
            .get(&index)
            .map(|others| {
                others
                    .iter()
                    .map(|&i| self.entries[i].module.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Time-of-day sort key. Unparseable components compare as zero, which keeps
/// the order total without rejecting odd leftover values.
fn time_key(time: &str) -> (u32, u32) {
    let mut parts = time.splitn(2, ':');
    let hour = parts.next().and_then(|p| p.trim().parse().ok()).unwrap_or(0);
    let minute = parts.next().and_then(|p| p.trim().parse().ok()).unwrap_or(0);
    (hour, minute)
}

/// Group entries by their exact (date, time) strings; every member of a
/// group larger than one is mapped to all the other members.
fn detect_clashes(entries: &[ExamRecord]) -> HashMap<usize, Vec<usize>> {
    let mut slots: HashMap<(&str, &str), Vec<usize>> = HashMap::new();
    for (index, entry) in entries.iter().enumerate() {
        slots
            .entry((entry.date.as_str(), entry.time.as_str()))
            .or_default()
            .push(index);
    }

    let mut clashes = HashMap::new();
    for members in slots.into_values() {
        if members.len() > 1 {
            for &index in &members {
                let others: Vec<usize> =
                    members.iter().copied().filter(|&other| other != index).collect();
                clashes.insert(index, others);
            }
        }
    }
    clashes
}
