//! Criterion micro-benchmarks for effect-field rebuilds.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use veil_bench::scattered_emitters;
use veil_core::Vec2;
use veil_field::EffectField;

/// Benchmark: full rebuild with 32 emitters over a 100x100 area.
fn bench_rebuild_32_emitters(c: &mut Criterion) {
    let emitters = scattered_emitters(32, 100.0);
    let mut field = EffectField::new(1.0);

    c.bench_function("rebuild_32_emitters", |b| {
        b.iter(|| {
            field.rebuild(emitters.iter());
            black_box(field.len());
        });
    });
}

/// Benchmark: full rebuild with 256 emitters, the dense end of what a
/// level realistically carries.
fn bench_rebuild_256_emitters(c: &mut Criterion) {
    let emitters = scattered_emitters(256, 200.0);
    let mut field = EffectField::new(1.0);

    c.bench_function("rebuild_256_emitters", |b| {
        b.iter(|| {
            field.rebuild(emitters.iter());
            black_box(field.len());
        });
    });
}

/// Benchmark: 10K point samples against a populated field.
fn bench_sample_10k(c: &mut Criterion) {
    let emitters = scattered_emitters(64, 100.0);
    let mut field = EffectField::new(1.0);
    field.rebuild(emitters.iter());

    c.bench_function("sample_10k", |b| {
        b.iter(|| {
            for y in 0..100 {
                for x in 0..100 {
                    let mask = field.sample(Vec2::new(x as f32, y as f32));
                    black_box(mask);
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_rebuild_32_emitters,
    bench_rebuild_256_emitters,
    bench_sample_10k
);
criterion_main!(benches);
