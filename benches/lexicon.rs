//! Benchmarks for dataset parsing and lookups.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use twi_nlp::{Lexicon, TwiNlp};

/// CSV with `rows` synthetic entries
fn build_csv(rows: usize) -> String {
    let mut csv = String::from("Twi,English,POS\n");
    for i in 0..rows {
        csv.push_str(&format!("kɔ{i},going {i},VERB\n"));
    }
    csv
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for rows in [1_000, 10_000] {
        let csv = build_csv(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &csv, |b, csv| {
            b.iter(|| Lexicon::from_csv_bytes(black_box(csv.as_bytes())))
        });
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut nlp = TwiNlp::empty();
    if let Ok(lexicon) = Lexicon::from_csv_bytes(build_csv(10_000).as_bytes()) {
        nlp.set_lexicon(lexicon);
    }

    c.bench_function("translate", |b| b.iter(|| nlp.translate(black_box("kɔ5000"))));
    c.bench_function("search", |b| b.iter(|| nlp.search(black_box("99"))));
    c.bench_function("stem_and_lemmatize", |b| {
        b.iter(|| nlp.stem_and_lemmatize(black_box("kɔ42")))
    });
}

criterion_group!(benches, bench_parse, bench_queries);
criterion_main!(benches);
