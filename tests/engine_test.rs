//! End-to-end flow over the library surface: parse a dataset, search,
//! select modules, build the timetable and export a calendar.

use anyhow::Result;
use pretty_assertions::assert_eq;

use examtable::config::ExportConfig;
use examtable::{export, Dataset, Selection, Timetable};

const DATASET: &str = "\
Module,Name (in Eng),Code/Kode,Exam,Fac/Fakt,Dept,Day/Dag,Date/Datum,Time/Tyd
MATH114,\"Mathematics, Calculus\",10553-114,A1,Science,Maths,Mon,03/06/2024,
CS101,Programming,5123-101,A1,Science,CS,Mon,03/06/2024,
PHYS144,Physics,11222-144,A2,Science,Physics,Sat,01/06/2024,09:00
CS101,Programming,5123-101,A2,Science,CS,Tue,11/06/2024,14
";

#[test]
fn full_flow_from_csv_to_calendar() -> Result<()> {
    let dataset = Dataset::from_csv(DATASET)?;
    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.modules().len(), 3);

    // Quoted field with an embedded comma stays one field.
    let math = dataset.modules().get("MATH114").unwrap();
    assert_eq!(math.name, "Mathematics, Calculus");

    // Search finds modules by name fragment, case-insensitively.
    let hits = dataset.modules().search("program");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0, "CS101");

    let mut selection = Selection::new();
    selection.add("MATH114");
    selection.add("CS101");
    selection.add("PHYS144");

    let timetable = Timetable::build(dataset.records(), &selection);
    assert!(timetable.skipped.is_empty());

    // Chronological order: 01/06 before 03/06 before 11/06; the two
    // defaulted 17:00 exams on 03/06 keep their input order.
    let order: Vec<&str> = timetable.entries.iter().map(|e| e.module.as_str()).collect();
    assert_eq!(order, vec!["PHYS144", "MATH114", "CS101", "CS101"]);

    // Both A1 exams were defaulted to 17:00 and clash with each other.
    assert!(timetable.has_clashes());
    assert_eq!(timetable.entries[1].time, "17:00");
    assert!(timetable.entries[1].time_defaulted);
    assert_eq!(timetable.clashing_modules(1), vec!["CS101"]);
    assert_eq!(timetable.clashing_modules(2), vec!["MATH114"]);
    assert!(timetable.clashing_modules(0).is_empty());

    // The bare-hour time was coerced during load.
    assert_eq!(timetable.entries[3].time, "14:00");

    // Unfold RFC 5545 line wrapping before matching on content.
    let output = export::to_calendar(&timetable.entries, &ExportConfig::default())?
        .to_string()
        .replace("\r\n ", "");
    assert_eq!(output.matches("BEGIN:VEVENT").count(), 4);
    assert!(output.contains("DTSTART:20240601T090000"));
    assert!(output.contains("DTEND:20240601T120000"));
    assert!(output.contains("SUMMARY:PHYS144 - A2 Exam"));
    assert!(output.contains("may not be accurate"));

    Ok(())
}

#[test]
fn removing_a_module_resolves_the_clash() -> Result<()> {
    let dataset = Dataset::from_csv(DATASET)?;

    let mut selection = Selection::new();
    selection.add("MATH114");
    selection.add("CS101");
    assert!(Timetable::build(dataset.records(), &selection).has_clashes());

    selection.remove("CS101");
    let timetable = Timetable::build(dataset.records(), &selection);
    assert!(!timetable.has_clashes());
    assert_eq!(timetable.len(), 1);

    Ok(())
}

#[test]
fn export_requires_a_selection() {
    let err = export::to_calendar(&[], &ExportConfig::default()).unwrap_err();
    assert_eq!(err.to_string(), "no modules are selected");
}
