use criterion::{criterion_group, criterion_main, Criterion};
use gazetteer_core::{GazetteerQuery, LocationRecord, LocationTable};
use std::hint::black_box;

/// A table of the size of a country dump (~20k rows) with a spread of names.
fn synthetic_table(rows: usize) -> LocationTable {
    const STEMS: [&str; 6] = ["Gounghin", "Ouaga", "Koudougou", "Zabre", "Tenkodogo", "Pô"];
    (0..rows)
        .map(|i| {
            let name = format!("{} {}", STEMS[i % STEMS.len()], i);
            let lat = 9.4 + (i % 600) as f64 * 0.01;
            let long = -5.5 + (i % 780) as f64 * 0.01;
            LocationRecord::new(i as i64, name, lat, long)
        })
        .collect()
}

fn bench_queries(c: &mut Criterion) {
    let table = synthetic_table(20_000);

    c.bench_function("substring_match", |b| {
        b.iter(|| black_box(table.substring_match(black_box("gounghin"))))
    });
    c.bench_function("alpha_range", |b| {
        b.iter(|| black_box(table.alpha_range('A', 'P')))
    });
    c.bench_function("extremes", |b| b.iter(|| black_box(table.extremes())));
    c.bench_function("bounding_filter", |b| {
        b.iter(|| black_box(table.bounding_filter(11.0, 0.5)))
    });
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
