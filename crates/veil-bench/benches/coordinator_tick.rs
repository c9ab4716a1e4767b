//! Criterion benchmarks for whole coordinator ticks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use veil_bench::scattered_emitters;
use veil_core::{InfluenceMask, RevealPredicate, Vec2};
use veil_engine::{CoordinatorConfig, FieldCoordinator};
use veil_reveal::RevealEntity;
use veil_test_utils::RecordingSurface;

/// Build a running coordinator with `emitters` scattered emitters and
/// `entities` any-of entities spread over the same area.
fn scene(emitters: usize, entities: usize) -> FieldCoordinator {
    let mut c = FieldCoordinator::new(CoordinatorConfig::default()).unwrap();
    c.start();
    for e in scattered_emitters(emitters, 100.0) {
        c.register_emitter(e);
    }
    for i in 0..entities {
        let pos = Vec2::new((i % 10) as f32 * 10.0, (i / 10) as f32 * 10.0);
        c.register_entity(
            RevealEntity::new(pos, RevealPredicate::any_of(InfluenceMask(0b1111)))
                .with_surface(Box::new(RecordingSurface::new(1.0))),
        );
    }
    c
}

/// Benchmark: a steady-state tick with nothing dirty.
fn bench_quiet_tick(c: &mut Criterion) {
    let mut coordinator = scene(64, 50);
    coordinator.tick(0.1, Vec2::ZERO);

    c.bench_function("quiet_tick", |b| {
        b.iter(|| {
            coordinator.tick(0.016, Vec2::ZERO);
            black_box(coordinator.current_tick());
        });
    });
}

/// Benchmark: a tick that always rebuilds and re-evaluates.
fn bench_dirty_tick(c: &mut Criterion) {
    let mut coordinator = scene(64, 50);

    c.bench_function("dirty_tick", |b| {
        b.iter(|| {
            coordinator.mark_field_dirty();
            coordinator.tick(0.016, Vec2::ZERO);
            black_box(coordinator.metrics().rebuilds);
        });
    });
}

criterion_group!(benches, bench_quiet_tick, bench_dirty_tick);
criterion_main!(benches);
