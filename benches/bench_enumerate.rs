use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_enumerate_typical(c: &mut Criterion) {
    c.bench_function("enumerate_cuso4_hydrate", |b| {
        b.iter(|| formulate_lib::enumerate::enumerate(black_box("cuso4 · 5h2o")))
    });
}

fn bench_enumerate_long_run(c: &mut Criterion) {
    // 2^20 readings in total; only the first page is built
    let input = "co".repeat(20);
    c.bench_function("enumerate_limited_long_run", |b| {
        b.iter(|| formulate_lib::enumerate::enumerate_limited(black_box(&input), 9))
    });
}

fn bench_format_single(c: &mut Criterion) {
    c.bench_function("format_single_sulfuric", |b| {
        b.iter(|| formulate_lib::enumerate::format_single(black_box("h2so4")))
    });
}

criterion_group!(
    benches,
    bench_enumerate_typical,
    bench_enumerate_long_run,
    bench_format_single
);
criterion_main!(benches);
