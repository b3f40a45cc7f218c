//! CSV parsing for the exam dataset.
//
// Parsing is deliberately permissive: a missing or empty header row yields an
// empty record set, short rows are padded with empty fields and blank lines
// are skipped. Only the module and date columns are hard requirements.

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};

use super::{DatasetError, ExamRecord};
use crate::validation::validate_date_format;

const MODULE_ALIASES: &[&str] = &["Module"];
const NAME_ALIASES: &[&str] = &["Name (in Eng)", "Name"];
const CODE_ALIASES: &[&str] = &["Code/Kode", "Code"];
const EXAM_ALIASES: &[&str] = &["Exam"];
const FACULTY_ALIASES: &[&str] = &["Fac/Fakt", "Faculty"];
const DEPT_ALIASES: &[&str] = &["Dept", "Department"];
const DAY_ALIASES: &[&str] = &["Day/Dag", "Day"];
const DATE_ALIASES: &[&str] = &["Date/Datum", "Date"];
const TIME_ALIASES: &[&str] = &["Time/Tyd", "Time"];

/// Header positions of the semantic columns, resolved once per file.
struct ColumnMap {
    module: usize,
    name: Option<usize>,
    code: Option<usize>,
    exam: Option<usize>,
    faculty: Option<usize>,
    department: Option<usize>,
    day: Option<usize>,
    date: usize,
    time: Option<usize>,
}

impl ColumnMap {
    fn resolve(headers: &StringRecord) -> Result<Self, DatasetError> {
        let required = |aliases: &'static [&'static str]| {
            find_column(headers, aliases).ok_or(DatasetError::MissingColumn(aliases[0]))
        };
        let optional = |aliases: &'static [&'static str]| {
            let index = find_column(headers, aliases);
            if index.is_none() {
                warn!("column '{}' not found, values default to empty", aliases[0]);
            }
            index
        };

        Ok(Self {
            module: required(MODULE_ALIASES)?,
            name: optional(NAME_ALIASES),
            code: optional(CODE_ALIASES),
            exam: optional(EXAM_ALIASES),
            faculty: optional(FACULTY_ALIASES),
            department: optional(DEPT_ALIASES),
            day: optional(DAY_ALIASES),
            date: required(DATE_ALIASES)?,
            time: optional(TIME_ALIASES),
        })
    }
}

fn find_column(headers: &StringRecord, aliases: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|header| aliases.iter().any(|alias| header.eq_ignore_ascii_case(alias)))
}

/// Parse the full text of a delimited exam schedule into typed records.
pub fn parse_records(text: &str) -> Result<Vec<ExamRecord>, DatasetError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers = match reader.headers() {
        Ok(headers) if headers.iter().any(|h| !h.is_empty()) => headers.clone(),
        _ => {
            warn!("dataset has no usable header row, producing no records");
            return Ok(Vec::new());
        }
    };
    debug!("resolved headers: {:?}", headers);

    let columns = ColumnMap::resolve(&headers)?;

    let mut records = Vec::new();
    let mut bad_dates = 0usize;
    for row in reader.records() {
        let row = row?;
        if row.iter().all(|field| field.is_empty()) {
            continue;
        }

        // Short rows are tolerated: absent cells read as empty strings.
        let cell = |index: usize| row.get(index).unwrap_or("").to_string();
        let optional_cell = |index: Option<usize>| index.map(&cell).unwrap_or_default();

        let record = ExamRecord {
            module: cell(columns.module),
            name: optional_cell(columns.name),
            code: optional_cell(columns.code),
            exam: optional_cell(columns.exam),
            faculty: optional_cell(columns.faculty),
            department: optional_cell(columns.department),
            day: optional_cell(columns.day),
            date: cell(columns.date),
            time: optional_cell(columns.time),
            time_defaulted: false,
        };

        if !validate_date_format(&record.date) {
            // Kept in the collection; the timetable builder skips and
            // reports such records when they are actually requested.
            bad_dates += 1;
        }

        records.push(record);
    }

    if bad_dates > 0 {
        warn!("{} records carry a malformed date field", bad_dates);
    }
    debug!("parsed {} records", records.len());

    Ok(records)
}
