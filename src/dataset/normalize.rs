//! Time normalization policy for exam records.
//
// Records without a supplied time receive a session-dependent default and are
// flagged as defaulted. Bare hour values are coerced to `HH:MM`. Running the
// pass a second time is a no-op.

use log::warn;

use super::ExamRecord;

/// Default start for the evening `A1` session.
pub const A1_DEFAULT_TIME: &str = "17:00";
/// Default start for every other session.
pub const STANDARD_DEFAULT_TIME: &str = "09:00";

const A1_SESSION: &str = "A1";

pub fn normalize_times(records: &mut [ExamRecord]) {
    for record in records.iter_mut() {
        normalize_record(record);
    }
}

fn normalize_record(record: &mut ExamRecord) {
    if record.time.trim().is_empty() {
        record.time = if record.exam == A1_SESSION {
            A1_DEFAULT_TIME.to_string()
        } else {
            STANDARD_DEFAULT_TIME.to_string()
        };
        record.time_defaulted = true;
        return;
    }

    if !record.time.contains(':') {
        match record.time.trim().parse::<u32>() {
            Ok(hour) => record.time = format!("{hour:02}:00"),
            Err(_) => warn!(
                "unexpected time value '{}' for module {}, leaving as-is",
                record.time, record.module
            ),
        }
    }
}
