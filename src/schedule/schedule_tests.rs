use pretty_assertions::assert_eq;

use super::*;
use crate::dataset::ExamRecord;

fn record(module: &str, date: &str, time: &str) -> ExamRecord {
    ExamRecord {
        module: module.to_string(),
        name: format!("{} name", module),
        code: format!("{}-code", module),
        exam: "A1".to_string(),
        faculty: "Science".to_string(),
        department: "CS".to_string(),
        day: "Mon".to_string(),
        date: date.to_string(),
        time: time.to_string(),
        time_defaulted: false,
    }
}

fn select(modules: &[&str]) -> Selection {
    let mut selection = Selection::new();
    for module in modules {
        selection.add(module);
    }
    selection
}

#[test]
fn test_index_first_seen_record_wins() {
    let mut first = record("CS101", "03/06/2024", "09:00");
    first.name = "Original name".to_string();
    let mut second = record("CS101", "11/06/2024", "14:00");
    second.name = "Later name".to_string();

    let index = ModuleIndex::build(&[first, second]);
    assert_eq!(index.len(), 1);
    assert_eq!(index.get("CS101").unwrap().name, "Original name");
}

#[test]
fn test_index_skips_records_without_module() {
    let index = ModuleIndex::build(&[record("", "03/06/2024", "09:00")]);
    assert!(index.is_empty());
}

#[test]
fn test_search_matches_id_name_and_code() {
    let mut by_name = record("CS101", "03/06/2024", "09:00");
    by_name.name = "Applied Statistics".to_string();
    by_name.code = "10553-114".to_string();
    let index = ModuleIndex::build(&[by_name]);

    assert_eq!(index.search("cs1").len(), 1);
    assert_eq!(index.search("statist").len(), 1);
    assert_eq!(index.search("10553").len(), 1);
    assert_eq!(index.search("biology").len(), 0);
}

#[test]
fn test_search_requires_two_characters() {
    let index = ModuleIndex::build(&[record("CS101", "03/06/2024", "09:00")]);
    assert!(index.search("c").is_empty());
    assert!(index.search(" c ").is_empty());
    assert!(!index.search("cs").is_empty());
}

#[test]
fn test_search_caps_and_sorts_results() {
    let records: Vec<ExamRecord> = (0..30)
        .map(|i| record(&format!("CS{:03}", i), "03/06/2024", "09:00"))
        .collect();
    let index = ModuleIndex::build(&records);

    let results = index.search("cs0");
    assert_eq!(results.len(), MAX_SEARCH_RESULTS);
    assert_eq!(results[0].0, "CS000");
    assert_eq!(results[1].0, "CS001");
}

#[test]
fn test_selection_membership_semantics() {
    let mut selection = Selection::new();
    assert!(selection.add("CS101"));
    assert!(!selection.add("CS101"));
    assert_eq!(selection.len(), 1);
    assert!(selection.contains("CS101"));

    assert!(selection.remove("CS101"));
    assert!(!selection.remove("CS101"));
    assert!(selection.is_empty());

    selection.add("B");
    selection.add("A");
    assert_eq!(selection.sorted(), vec!["A", "B"]);
    selection.clear();
    assert!(selection.is_empty());
}

#[test]
fn test_timetable_sorts_by_date_then_time() {
    let records = vec![
        record("CS101", "02/01/2024", "09:00"),
        record("CS102", "01/01/2024", "17:00"),
        record("CS103", "01/01/2024", "09:00"),
    ];
    let timetable = Timetable::build(&records, &select(&["CS101", "CS102", "CS103"]));

    let order: Vec<&str> = timetable.entries.iter().map(|e| e.module.as_str()).collect();
    assert_eq!(order, vec!["CS103", "CS102", "CS101"]);
}

#[test]
fn test_timetable_sort_parses_calendar_dates() {
    // 05/06 is before 20/05 lexicographically but after it chronologically.
    let records = vec![
        record("CS101", "05/06/2024", "09:00"),
        record("CS102", "20/05/2024", "09:00"),
    ];
    let timetable = Timetable::build(&records, &select(&["CS101", "CS102"]));

    assert_eq!(timetable.entries[0].module, "CS102");
    assert_eq!(timetable.entries[1].module, "CS101");
}

#[test]
fn test_timetable_ties_keep_input_order() {
    let records = vec![
        record("CS201", "01/01/2024", "09:00"),
        record("CS101", "01/01/2024", "09:00"),
        record("CS301", "01/01/2024", "09:00"),
    ];
    let timetable = Timetable::build(&records, &select(&["CS101", "CS201", "CS301"]));

    let order: Vec<&str> = timetable.entries.iter().map(|e| e.module.as_str()).collect();
    assert_eq!(order, vec!["CS201", "CS101", "CS301"]);
}

#[test]
fn test_timetable_only_includes_selected_modules() {
    let records = vec![
        record("CS101", "01/01/2024", "09:00"),
        record("CS102", "02/01/2024", "09:00"),
    ];
    let timetable = Timetable::build(&records, &select(&["CS102"]));

    assert_eq!(timetable.len(), 1);
    assert_eq!(timetable.entries[0].module, "CS102");
}

#[test]
fn test_empty_selection_builds_empty_timetable() {
    let records = vec![record("CS101", "01/01/2024", "09:00")];
    let timetable = Timetable::build(&records, &Selection::new());
    assert!(timetable.is_empty());
    assert!(!timetable.has_clashes());
}

#[test]
fn test_clash_detection_marks_same_slot_entries() {
    let records = vec![
        record("A", "01/02/2024", "09:00"),
        record("B", "01/02/2024", "09:00"),
        record("C", "02/02/2024", "09:00"),
    ];
    let timetable = Timetable::build(&records, &select(&["A", "B", "C"]));

    assert!(timetable.has_clashes());
    // A and B share the slot and reference each other; C is clash-free.
    assert_eq!(timetable.clashing_modules(0), vec!["B"]);
    assert_eq!(timetable.clashing_modules(1), vec!["A"]);
    assert!(timetable.clashing_modules(2).is_empty());
    assert!(!timetable.clashes.contains_key(&2));
}

#[test]
fn test_clash_group_of_three() {
    let records = vec![
        record("A", "01/02/2024", "09:00"),
        record("B", "01/02/2024", "09:00"),
        record("C", "01/02/2024", "09:00"),
    ];
    let timetable = Timetable::build(&records, &select(&["A", "B", "C"]));

    let mut others = timetable.clashing_modules(0);
    others.sort_unstable();
    assert_eq!(others, vec!["B", "C"]);
}

#[test]
fn test_same_date_different_time_is_not_a_clash() {
    let records = vec![
        record("A", "01/02/2024", "09:00"),
        record("B", "01/02/2024", "17:00"),
    ];
    let timetable = Timetable::build(&records, &select(&["A", "B"]));
    assert!(!timetable.has_clashes());
}

#[test]
fn test_malformed_date_is_skipped_and_reported() {
    let records = vec![
        record("CS101", "not-a-date", "09:00"),
        record("CS102", "01/01/2024", "09:00"),
    ];
    let timetable = Timetable::build(&records, &select(&["CS101", "CS102"]));

    assert_eq!(timetable.len(), 1);
    assert_eq!(timetable.entries[0].module, "CS102");
    assert_eq!(timetable.skipped.len(), 1);
    assert_eq!(timetable.skipped[0].module, "CS101");
    assert_eq!(timetable.skipped[0].date, "not-a-date");
    assert!(!timetable.skipped[0].reason.is_empty());
}
