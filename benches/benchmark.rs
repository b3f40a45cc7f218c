use criterion::{criterion_group, criterion_main, Criterion};

use examtable::{Dataset, Selection, Timetable};

fn synthetic_dataset(rows: usize) -> String {
    let mut text = String::from(
        "Module,Name (in Eng),Code/Kode,Exam,Fac/Fakt,Dept,Day/Dag,Date/Datum,Time/Tyd\n",
    );
    for i in 0..rows {
        let day = (i % 28) + 1;
        text.push_str(&format!(
            "MOD{:04},\"Module, number {}\",{:05}-{},A1,Science,CS,Mon,{:02}/06/2024,09:00\n",
            i % 500,
            i,
            i,
            i % 9,
            day
        ));
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let text = synthetic_dataset(5_000);
    c.bench_function("dataset_from_csv_5k_rows", |b| {
        b.iter(|| Dataset::from_csv(&text).unwrap())
    });
}

fn bench_timetable(c: &mut Criterion) {
    let text = synthetic_dataset(5_000);
    let dataset = Dataset::from_csv(&text).unwrap();
    let mut selection = Selection::new();
    for i in 0..100 {
        selection.add(&format!("MOD{:04}", i));
    }
    c.bench_function("timetable_build_100_modules", |b| {
        b.iter(|| Timetable::build(dataset.records(), &selection))
    });
}

criterion_group!(benches, bench_parse, bench_timetable);
criterion_main!(benches);
