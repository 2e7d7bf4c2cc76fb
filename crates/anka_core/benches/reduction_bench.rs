use anka_core::{LetterSystem, letter_value, reduce};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn reduction_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduction");
    group.bench_function("reduce_small", |b| b.iter(|| reduce(black_box(46), true)));
    group.bench_function("reduce_large", |b| {
        b.iter(|| reduce(black_box(987_654_321_987), false))
    });
    group.finish();
}

fn letter_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("letters");
    group.bench_function("letter_value", |b| {
        b.iter(|| letter_value(black_box('q'), LetterSystem::Chaldean))
    });
    group.finish();
}

criterion_group!(benches, reduction_bench, letter_bench);
criterion_main!(benches);
