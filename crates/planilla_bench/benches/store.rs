//! Record store benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use planilla_bench::{populate, random_row};
use planilla_store::{RecordChange, RecordId, RecordStore, StoreConfig};
use tempfile::TempDir;

const WIDTH: usize = 10;

/// Store that skips fsync so the numbers reflect the store, not the disk.
fn unsynced() -> RecordStore {
    RecordStore::with_config(StoreConfig::new().sync_on_write(false))
}

/// Benchmark append with and without fsync.
fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    group.sample_size(50);

    for (label, store) in [("unsynced", unsynced()), ("synced", RecordStore::new())] {
        group.bench_function(label, |b| {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("bench.txt");
            let row = random_row(1, WIDTH, 12);

            b.iter(|| {
                store.append(black_box(&path), black_box(&row)).unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark a full scan at several table sizes.
fn bench_read_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_all");
    let store = unsynced();

    for count in [100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("bench.txt");
            populate(&store, &path, count, WIDTH).unwrap();

            b.iter(|| {
                let rows = store.read_all(black_box(&path)).unwrap();
                black_box(rows);
            });
        });
    }

    group.finish();
}

/// Benchmark replacing the middle row of a table.
fn bench_replace(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace");
    group.sample_size(30);
    let store = unsynced();

    for count in [100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("bench.txt");
            populate(&store, &path, count, WIDTH).unwrap();

            let key = RecordId::new(count as i64 / 2);
            let change = RecordChange::Replace(random_row(key.get(), WIDTH, 12));

            b.iter(|| {
                let matched = store
                    .replace_or_delete(black_box(&path), key, black_box(&change))
                    .unwrap();
                black_box(matched);
            });
        });
    }

    group.finish();
}

/// Benchmark a rewrite that matches nothing.
fn bench_unmatched(c: &mut Criterion) {
    let store = unsynced();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bench.txt");
    populate(&store, &path, 1_000, WIDTH).unwrap();

    c.bench_function("replace_unmatched_1000", |b| {
        b.iter(|| {
            let matched = store
                .replace_or_delete(&path, RecordId::new(-1), &RecordChange::Delete)
                .unwrap();
            black_box(matched);
        });
    });
}

criterion_group!(
    benches,
    bench_append,
    bench_read_all,
    bench_replace,
    bench_unmatched,
);

criterion_main!(benches);
