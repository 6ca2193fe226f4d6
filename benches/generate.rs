//! Throughput of generation, parsing, and encoding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rfcuuid::{uuid3, uuid4, uuid4_batch, uuid5, uuid7, uuid7_batch, uuid8, Pool, Uuid};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.bench_function("uuid4", |b| b.iter(uuid4));
    group.bench_function("uuid7", |b| b.iter(uuid7));
    group.bench_function("uuid3", |b| {
        b.iter(|| uuid3(Uuid::NAMESPACE_DNS, black_box("www.example.com")))
    });
    group.bench_function("uuid5", |b| {
        b.iter(|| uuid5(Uuid::NAMESPACE_DNS, black_box("www.example.com")))
    });
    group.bench_function("uuid8", |b| b.iter(|| uuid8(black_box([0x5a; 16]))));

    let pool = Pool::new();
    group.bench_function("pool_v4", |b| b.iter(|| pool.generate_v4()));
    group.bench_function("pool_v7", |b| b.iter(|| pool.generate_v7()));
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    for n in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("uuid4_batch", n), &n, |b, &n| {
            b.iter(|| uuid4_batch(n))
        });
        group.bench_with_input(BenchmarkId::new("uuid7_batch", n), &n, |b, &n| {
            b.iter(|| uuid7_batch(n))
        });
    }
    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let text = "01809424-3e59-7c05-9219-566f82fff672";
    let braced = "{01809424-3e59-7c05-9219-566f82fff672}";
    let e = Uuid::must_parse(text);

    group.bench_function("parse", |b| b.iter(|| Uuid::parse(black_box(text))));
    group.bench_function("parse_lenient", |b| {
        b.iter(|| Uuid::parse_lenient(black_box(braced)))
    });
    group.bench_function("encode", |b| b.iter(|| black_box(e).encode()));
    group.bench_function("to_string", |b| b.iter(|| black_box(e).to_string()));
    group.finish();
}

criterion_group!(benches, bench_generate, bench_batch, bench_codec);
criterion_main!(benches);
