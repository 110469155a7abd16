// Query pipeline vs. a plain iterator chain over the same data.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use query_demos::query::{Enumerable, Source};

fn filter_sort_take_pipeline(source: &Source<i32>) -> Vec<i32> {
    source
        .query()
        .filter(|x| x % 3 == 0)
        .sort_by_descending(|x| *x)
        .take(10)
        .to_vec()
}

fn filter_sort_take_iterator(data: &[i32]) -> Vec<i32> {
    let mut kept: Vec<i32> = data.iter().copied().filter(|x| x % 3 == 0).collect();
    kept.sort_by(|a, b| b.cmp(a));
    kept.truncate(10);
    kept
}

fn group_by_pipeline(source: &Source<i32>) -> usize {
    source.query().group_by(|x| x.rem_euclid(16)).count()
}

fn benchmark_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_sort_take");

    for size in [100usize, 10_000] {
        let data: Vec<i32> = (0..size as i32).map(|x| (x * 7919) % 10_007).collect();
        let source = Source::new(data.clone());

        group.bench_with_input(BenchmarkId::new("pipeline", size), &source, |b, source| {
            b.iter(|| filter_sort_take_pipeline(black_box(source)))
        });

        group.bench_with_input(BenchmarkId::new("iterator", size), &data, |b, data| {
            b.iter(|| filter_sort_take_iterator(black_box(data)))
        });

        group.bench_with_input(BenchmarkId::new("group_by", size), &source, |b, source| {
            b.iter(|| group_by_pipeline(black_box(source)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_pipeline);
criterion_main!(benches);
