//! The [`MaskGenerator`]: graded per-pixel coverage with caching.

use std::sync::Arc;

use veil_core::{Bounds, EntityId, RevealPredicate, Vec2};
use veil_field::Emitter;

use crate::bitmap::MaskBitmap;
use crate::cache::MaskCache;
use crate::config::MaskConfig;
use crate::key::MaskKey;
use crate::lod;

/// Bounds extents below this are treated as degenerate.
const MIN_EXTENT: f32 = 1e-3;

/// Produces graded coverage bitmaps for entity bounds, serving repeats
/// from a FIFO-bounded cache.
///
/// For each sample point inside the bounds the generator accumulates
/// the OR of influence bits from every active in-range emitter and
/// tracks the strongest coverage `1 − distance/radius`. The entity's
/// predicate then gates the pixel: reveal is binary at entity
/// granularity — strength only modulates edge softness, never whether
/// reveal occurs.
#[derive(Debug)]
pub struct MaskGenerator {
    config: MaskConfig,
    cache: MaskCache,
    fallback: Arc<MaskBitmap>,
    generation_count: u64,
}

impl MaskGenerator {
    /// Create a generator from a validated [`MaskConfig`].
    pub fn new(config: MaskConfig) -> Self {
        let fallback = Arc::new(MaskBitmap::hidden(config.min_resolution));
        let cache = MaskCache::new(config.cache_capacity);
        Self {
            config,
            cache,
            fallback,
            generation_count: 0,
        }
    }

    /// The generator's configuration.
    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    /// The bitmap cache, for inspection.
    pub fn cache(&self) -> &MaskCache {
        &self.cache
    }

    /// Mutable access to the bitmap cache, for explicit invalidation.
    pub fn cache_mut(&mut self) -> &mut MaskCache {
        &mut self.cache
    }

    /// How many bitmaps have actually been computed (cache hits do not
    /// increment this).
    pub fn generation_count(&self) -> u64 {
        self.generation_count
    }

    /// The pre-built all-hidden fallback bitmap.
    pub fn fallback(&self) -> Arc<MaskBitmap> {
        Arc::clone(&self.fallback)
    }

    /// Produce (or serve from cache) the coverage bitmap for one entity.
    ///
    /// Degenerate bounds and empty emitter sets short-circuit to the
    /// all-hidden fallback instead of attempting generation.
    pub fn generate(
        &mut self,
        entity: EntityId,
        predicate: RevealPredicate,
        bounds: Bounds,
        emitters: &[&Emitter],
        viewer: Vec2,
    ) -> Arc<MaskBitmap> {
        if bounds.is_degenerate(MIN_EXTENT) {
            log::debug!("mask for entity {entity}: degenerate bounds, serving hidden fallback");
            return self.fallback();
        }
        if !emitters.iter().any(|e| e.is_active()) {
            return self.fallback();
        }

        let resolution = lod::resolution_for(&self.config, bounds, viewer);
        let key = MaskKey::new(
            entity,
            predicate,
            resolution,
            bounds,
            emitters.iter().copied(),
        );
        if let Some(bitmap) = self.cache.get(&key) {
            return bitmap;
        }

        let bitmap = Arc::new(self.compute(predicate, bounds, emitters, resolution));
        self.generation_count += 1;
        self.cache.insert(key, Arc::clone(&bitmap));
        bitmap
    }

    /// Sample an R×R grid across the bounds at pixel centers.
    fn compute(
        &self,
        predicate: RevealPredicate,
        bounds: Bounds,
        emitters: &[&Emitter],
        resolution: u32,
    ) -> MaskBitmap {
        let r = resolution as usize;
        let size = bounds.size();
        let step_x = size.x / resolution as f32;
        let step_y = size.y / resolution as f32;

        let mut data = vec![0u8; r * r];
        for py in 0..r {
            let sy = bounds.min.y + (py as f32 + 0.5) * step_y;
            for px in 0..r {
                let sx = bounds.min.x + (px as f32 + 0.5) * step_x;
                let sample = Vec2::new(sx, sy);

                let mut accumulated = veil_core::InfluenceMask::EMPTY;
                let mut strength = 0.0f32;
                for emitter in emitters.iter().filter(|e| e.is_active()) {
                    let radius = emitter.radius();
                    let dist_sq = sample.distance_squared(emitter.position());
                    if dist_sq <= radius * radius {
                        accumulated |= emitter.influence();
                        let coverage = if radius > 0.0 {
                            (1.0 - dist_sq.sqrt() / radius).clamp(0.0, 1.0)
                        } else {
                            1.0
                        };
                        strength = strength.max(coverage);
                    }
                }

                if predicate.is_satisfied(accumulated) {
                    data[py * r + px] = (strength * 255.0).round() as u8;
                }
            }
        }
        MaskBitmap::new(resolution, data)
    }
}
