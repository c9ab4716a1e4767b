//! Benchmark profiles and utilities for the Veil reveal-field pipeline.
//!
//! Provides deterministic scene builders shared by the benchmark
//! targets, so rebuild, mask-generation, and tick timings all run
//! against the same emitter layouts.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use veil_core::{InfluenceMask, Vec2};
use veil_field::Emitter;

/// Build `count` emitters scattered deterministically over a
/// `extent` x `extent` area, cycling through the first four influence
/// bits. Radii vary between 2 and 6 world units.
pub fn scattered_emitters(count: usize, extent: f32) -> Vec<Emitter> {
    (0..count)
        .map(|i| {
            let i = i as u64;
            // Fixed-seed splitmix-style scatter, stable across runs.
            let hx = i.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let hy = i.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
            let x = (hx % 10_000) as f32 / 10_000.0 * extent;
            let y = (hy % 10_000) as f32 / 10_000.0 * extent;
            let radius = 2.0 + (i % 5) as f32;
            Emitter::new(Vec2::new(x, y), radius, InfluenceMask::bit((i % 4) as u32))
        })
        .collect()
}
