use criterion::{criterion_group, criterion_main, Criterion};
use tscp::engine::Engine;
use tscp::perft::perft;

fn perft_benchmark(c: &mut Criterion) {
    c.bench_function("perft(5) from the starting position", |b| {
        b.iter(|| {
            let mut engine = Engine::new();
            perft(&mut engine, 5)
        });
    });
}

criterion_group!(benches, perft_benchmark);
criterion_main!(benches);
