//! Criterion benchmarks for the sort-and-filter transform and CSV loading.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use tripbench_core::dataset::Dataset;
use tripbench_core::split::splits;
use tripbench_core::transform::process_data;

fn durations(n: i64) -> Vec<i64> {
    (0..n).map(|i| (i * 7_919 + 13) % 3_600).collect()
}

fn bench_transform(c: &mut Criterion) {
    let values = durations(400_000);

    let mut group = c.benchmark_group("process_data");
    for split in splits(&values) {
        group.bench_with_input(BenchmarkId::from_parameter(split.name), &split, |b, split| {
            b.iter(|| process_data(split.values, 1000));
        });
    }
    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let mut csv = String::from("id,trip_duration\n");
    for (i, v) in durations(50_000).iter().enumerate() {
        csv.push_str(&format!("id{i},{v}\n"));
    }

    c.bench_function("Dataset::from_reader 50k rows", |b| {
        b.iter(|| Dataset::from_reader(csv.as_bytes(), "trip_duration").unwrap());
    });
}

criterion_group!(benches, bench_transform, bench_load);
criterion_main!(benches);
