//! Criterion micro-benchmarks for mask generation and caching.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use veil_bench::scattered_emitters;
use veil_core::{Bounds, EntityId, InfluenceMask, RevealPredicate, Vec2};
use veil_field::Emitter;
use veil_mask::{MaskConfig, MaskGenerator};

const RED: InfluenceMask = InfluenceMask(1 << 0);

fn generator() -> MaskGenerator {
    MaskGenerator::new(MaskConfig::default())
}

/// Benchmark: compute a 128x128 mask from 8 in-range emitters, cache
/// disabled in effect by clearing between iterations.
fn bench_generate_full_resolution(c: &mut Criterion) {
    let mut gen = generator();
    let emitters = scattered_emitters(8, 20.0);
    let refs: Vec<&Emitter> = emitters.iter().collect();
    let entity = EntityId::next();
    let bounds = Bounds::from_center_size(Vec2::new(10.0, 10.0), Vec2::new(8.0, 8.0));
    let predicate = RevealPredicate::any_of(InfluenceMask(0b1111));

    c.bench_function("generate_full_resolution", |b| {
        b.iter(|| {
            gen.cache_mut().clear();
            let mask = gen.generate(entity, predicate, bounds, &refs, Vec2::new(10.0, 10.0));
            black_box(mask.resolution());
        });
    });
}

/// Benchmark: the same request served from the cache.
fn bench_generate_cache_hit(c: &mut Criterion) {
    let mut gen = generator();
    let emitter = Emitter::new(Vec2::ZERO, 10.0, RED);
    let entity = EntityId::next();
    let bounds = Bounds::from_center_size(Vec2::ZERO, Vec2::new(4.0, 4.0));
    let predicate = RevealPredicate::all_of(RED);

    gen.generate(entity, predicate, bounds, &[&emitter], Vec2::ZERO);

    c.bench_function("generate_cache_hit", |b| {
        b.iter(|| {
            let mask = gen.generate(entity, predicate, bounds, &[&emitter], Vec2::ZERO);
            black_box(mask.resolution());
        });
    });
}

/// Benchmark: quarter-resolution generation for a distant viewer.
fn bench_generate_far_lod(c: &mut Criterion) {
    let mut gen = generator();
    let emitters = scattered_emitters(8, 20.0);
    let refs: Vec<&Emitter> = emitters.iter().collect();
    let entity = EntityId::next();
    let bounds = Bounds::from_center_size(Vec2::new(10.0, 10.0), Vec2::new(8.0, 8.0));
    let predicate = RevealPredicate::any_of(InfluenceMask(0b1111));

    c.bench_function("generate_far_lod", |b| {
        b.iter(|| {
            gen.cache_mut().clear();
            let mask = gen.generate(entity, predicate, bounds, &refs, Vec2::new(500.0, 500.0));
            black_box(mask.resolution());
        });
    });
}

criterion_group!(
    benches,
    bench_generate_full_resolution,
    bench_generate_cache_hit,
    bench_generate_far_lod
);
criterion_main!(benches);
