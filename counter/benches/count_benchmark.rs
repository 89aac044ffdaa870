use criterion::{black_box, criterion_group, criterion_main, Criterion};
use primes_counter::{classify, count_primes};

fn count_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("count-benchmark");

    for limit in [100, 1_000, 10_000] {
        group.bench_function(format!("count_primes({limit})"), |b| {
            b.iter(|| count_primes(black_box(limit)))
        });
    }

    group.finish();
}

fn classify_benchmark(c: &mut Criterion) {
    // Largest prime below the reference limit, so the search runs to the end.
    c.bench_function("classify(9973)", |b| b.iter(|| classify(black_box(9973))));
}

criterion_group!(benches, count_benchmark, classify_benchmark);
criterion_main!(benches);
