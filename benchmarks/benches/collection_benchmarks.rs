//! Benchmarks for the ld collection helpers
//!
//! Measures performance of:
//! - Primitive traversal over sequences and mappings
//! - Derived transformations (map, filter, partition)
//! - Folds and short-circuiting searches
//! - unique, whose membership check is quadratic

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ld::{each, every, extend, filter, map, partition, pluck, reduce, some, unique, Value};
use ld_benchmarks::{mapping, numbers, records};

const SIZES: [usize; 3] = [10, 1_000, 100_000];

fn double(value: &Value) -> Value {
    Value::from(value.as_integer().unwrap_or_default() * 2)
}

fn is_even(value: &Value) -> bool {
    value.as_integer().is_some_and(|i| i % 2 == 0)
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for size in SIZES {
        let sequence = numbers(size);
        group.bench_with_input(BenchmarkId::new("each_sequence", size), &sequence, |b, sequence| {
            b.iter(|| {
                let mut count = 0usize;
                each(black_box(sequence), |_, _, _| count += 1).unwrap();
                count
            })
        });

        let object = mapping(size);
        group.bench_with_input(BenchmarkId::new("each_mapping", size), &object, |b, object| {
            b.iter(|| {
                let mut count = 0usize;
                each(black_box(object), |_, _, _| count += 1).unwrap();
                count
            })
        });
    }

    group.finish();
}

fn bench_transformation(c: &mut Criterion) {
    let mut group = c.benchmark_group("transformation");

    for size in SIZES {
        let sequence = numbers(size);
        group.bench_with_input(BenchmarkId::new("map", size), &sequence, |b, sequence| {
            b.iter(|| map(black_box(sequence), |v, _, _| double(v)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("filter", size), &sequence, |b, sequence| {
            b.iter(|| filter(black_box(sequence), |v, _, _| is_even(v)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("partition", size), &sequence, |b, sequence| {
            b.iter(|| partition(black_box(sequence), |v, _, _| is_even(v)).unwrap())
        });

        let rows = records(size, 8);
        group.bench_with_input(BenchmarkId::new("pluck", size), &rows, |b, rows| {
            b.iter(|| pluck(black_box(rows), "score").unwrap())
        });
    }

    group.finish();
}

fn bench_folding(c: &mut Criterion) {
    let mut group = c.benchmark_group("folding");

    for size in SIZES {
        let sequence = numbers(size);
        group.bench_with_input(BenchmarkId::new("reduce_sum", size), &sequence, |b, sequence| {
            b.iter(|| {
                reduce(
                    black_box(sequence),
                    |acc, v, _, _| {
                        Value::from(acc.as_integer().unwrap_or_default() + v.as_integer().unwrap_or_default())
                    },
                    Some(Value::from(0)),
                )
                .unwrap()
            })
        });
        // Worst case for both: the answer is only known after the last element.
        group.bench_with_input(BenchmarkId::new("some_miss", size), &sequence, |b, sequence| {
            b.iter(|| {
                let mut negative = |v: &Value, _: ld::Position, _: ld::Collection| {
                    v.as_integer().is_some_and(|i| i < 0)
                };
                some(black_box(sequence), Some(&mut negative)).unwrap()
            })
        });
        group.bench_with_input(BenchmarkId::new("every_truthy", size), &sequence, |b, sequence| {
            b.iter(|| every(black_box(sequence), None).unwrap())
        });
    }

    group.finish();
}

fn bench_unique(c: &mut Criterion) {
    let mut group = c.benchmark_group("unique");

    for (name, groups) in [("few_distinct", 8), ("all_distinct", usize::MAX)] {
        for size in [10, 500, 2_000] {
            let rows = records(size, groups);
            let keys = pluck(&rows, "group").unwrap();
            group.bench_with_input(BenchmarkId::new(name, size), &keys, |b, keys| {
                b.iter(|| unique(black_box(keys)).unwrap())
            });
        }
    }

    group.finish();
}

fn bench_extend(c: &mut Criterion) {
    let mut group = c.benchmark_group("extend");

    for size in SIZES {
        let source = mapping(size);
        group.bench_with_input(BenchmarkId::new("into_empty", size), &source, |b, source| {
            b.iter(|| {
                let mut target = Value::empty_object();
                extend(&mut target, std::slice::from_ref(black_box(source))).unwrap();
                target
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_traversal,
    bench_transformation,
    bench_folding,
    bench_unique,
    bench_extend
);
criterion_main!(benches);
