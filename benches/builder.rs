use criterion::{criterion_group, criterion_main, Criterion};
use profanity_filter::ProfanityFilterBuilder;
use std::hint::black_box;

fn builder_benchmark(c: &mut Criterion) {
    c.bench_function("construction", |b| {
        b.iter(|| {
            black_box(
                ProfanityFilterBuilder::new()
                    .words(include_str!("data/words.txt").lines())
                    .build()
                    .unwrap(),
            )
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = builder_benchmark
}
criterion_main!(benches);
