use criterion::{criterion_group, criterion_main, Criterion};
use snowflake_worker::{Worker, WorkerConfig};
use std::hint::black_box;
use std::sync::Arc;

fn layouts() -> [(&'static str, WorkerConfig); 3] {
    let build = |node_bits, sequence_bits| {
        WorkerConfig::builder()
            .node_bits(node_bits)
            .sequence_bits(sequence_bits)
            .build()
            .unwrap()
    };
    [
        ("default", WorkerConfig::default()),
        ("max_sequence", build(0, 22)),
        ("no_sequence", build(5, 0)),
    ]
}

pub fn next_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Next");

    for (name, config) in layouts() {
        group.bench_function(name, |b| {
            let worker = Worker::with_config(0, config).unwrap();
            b.iter(|| {
                black_box(worker.next().unwrap());
            });
        });
    }

    group.finish();
}

pub fn next_blocking_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Next Blocking");

    for (name, config) in layouts() {
        group.bench_function(name, |b| {
            let worker = Worker::with_config(0, config).unwrap();
            b.iter(|| {
                black_box(worker.next_blocking().unwrap());
            });
        });
    }

    group.finish();
}

pub fn component_extraction_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Component Extraction");
    let worker = Worker::new(1).unwrap();
    let id = worker.next().unwrap();

    group.bench_function("extract_components", |b| {
        b.iter(|| {
            black_box(worker.extract().decompose(black_box(id)));
        });
    });

    group.finish();
}

pub fn concurrent_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent");

    for &thread_count in &[2, 4, 8] {
        group.bench_function(format!("threads/{}", thread_count), |b| {
            let worker = Arc::new(Worker::new(1).unwrap());
            b.iter(|| {
                let handles: Vec<_> = (0..thread_count)
                    .map(|_| {
                        let worker = Arc::clone(&worker);
                        std::thread::spawn(move || {
                            for _ in 0..100 {
                                black_box(worker.next().unwrap());
                            }
                        })
                    })
                    .collect();

                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    next_benchmarks,
    next_blocking_benchmarks,
    concurrent_benchmarks,
    component_extraction_benchmarks
);
criterion_main!(benches);
