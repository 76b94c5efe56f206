use criterion::{criterion_group, criterion_main, Criterion};
use profanity_filter::ProfanityFilter;
use std::hint::black_box;

fn clean_benchmark(c: &mut Criterion) {
    let filter = ProfanityFilter::new();

    c.bench_function("clean", |b| {
        b.iter(|| {
            black_box(
                filter
                    .clean(black_box(include_str!("data/input.txt")))
                    .unwrap(),
            )
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = clean_benchmark
}
criterion_main!(benches);
