//! ID allocator benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use planilla_store::{IdAllocator, StoreConfig};
use tempfile::TempDir;

/// Benchmark issuing IDs against ledgers with several names.
fn bench_next_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_id");
    group.sample_size(50);

    for names in [1, 10, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(names), names, |b, &names| {
            let temp_dir = TempDir::new().unwrap();
            let ids = IdAllocator::with_config(
                temp_dir.path().join("idControl.txt"),
                StoreConfig::new().sync_on_write(false),
            );
            for i in 0..names {
                ids.next_id(&format!("table_{i}.txt")).unwrap();
            }

            b.iter(|| {
                let id = ids.next_id(black_box("table_0.txt")).unwrap();
                black_box(id);
            });
        });
    }

    group.finish();
}

/// Benchmark with the cross-process file lock taken on every call.
fn bench_next_id_locked(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let ids = IdAllocator::with_config(
        temp_dir.path().join("idControl.txt"),
        StoreConfig::new().sync_on_write(false).advisory_lock(true),
    );

    c.bench_function("next_id_locked", |b| {
        b.iter(|| {
            let id = ids.next_id(black_box("empleados.txt")).unwrap();
            black_box(id);
        });
    });
}

criterion_group!(benches, bench_next_id, bench_next_id_locked);

criterion_main!(benches);
