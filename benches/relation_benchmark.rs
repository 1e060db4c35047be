//! Microbenchmarks for the relation evaluation hot path.
//!
//! Filter UIs evaluate every registry relation over every annotation
//! pair in a tier, so per-call cost matters once tiers reach tens of
//! thousands of annotations.

use annotime::{Interval, IntervalRelation, Localization, Point, RelationOptions};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

fn spans(count: usize) -> Vec<Localization> {
    (0..count)
        .map(|n| {
            let begin = n as f64 * 0.8;
            let interval =
                Interval::new(Point::from(begin), Point::from(begin + 1.0)).unwrap();
            Localization::from(interval)
        })
        .collect()
}

fn bench_single_relation(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_relation");
    let locs = spans(1_000);
    group.throughput(Throughput::Elements(locs.len() as u64 - 1));
    let options = RelationOptions::new();

    group.bench_function("overlaps_adjacent_pairs", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for pair in locs.windows(2) {
                if IntervalRelation::Overlaps.eval(
                    black_box(&pair[0]),
                    black_box(&pair[1]),
                    &options,
                ) {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });

    group.finish();
}

fn bench_full_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_registry");
    let locs = spans(100);
    group.throughput(Throughput::Elements(
        (locs.len() as u64 - 1) * IntervalRelation::ALL.len() as u64,
    ));
    let options = RelationOptions::new();

    group.bench_function("all_relations_adjacent_pairs", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for pair in locs.windows(2) {
                for relation in IntervalRelation::ALL {
                    if relation.eval(black_box(&pair[0]), black_box(&pair[1]), &options) {
                        hits += 1;
                    }
                }
            }
            black_box(hits)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_single_relation, bench_full_registry);
criterion_main!(benches);
