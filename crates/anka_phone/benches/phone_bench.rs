use anka_phone::{PhoneOptions, SanitizeOptions, compute_phone_numerology, sanitize_and_validate};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn sanitize_bench(c: &mut Criterion) {
    let options = SanitizeOptions::default();
    let mut group = c.benchmark_group("sanitize");
    group.bench_function("formatted", |b| {
        b.iter(|| sanitize_and_validate(black_box("+1 (415) 555-2671 ext 42"), &options))
    });
    group.finish();
}

fn numerology_bench(c: &mut Criterion) {
    let options = PhoneOptions::default();
    let mut group = c.benchmark_group("phone_numerology");
    group.bench_function("national", |b| {
        b.iter(|| compute_phone_numerology(black_box("+14155552671"), &options))
    });
    group.finish();
}

criterion_group!(benches, sanitize_bench, numerology_bench);
criterion_main!(benches);
