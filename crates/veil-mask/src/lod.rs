//! Level-of-detail resolution selection by viewer distance.

use veil_core::{Bounds, Vec2};

use crate::config::MaskConfig;

/// Pick a mask resolution for an entity by viewer distance to its
/// bounds center.
///
/// Full resolution inside `near_distance`, half between near and far,
/// quarter beyond far — each tier floor-clamped to `min_resolution`.
pub fn resolution_for(config: &MaskConfig, bounds: Bounds, viewer: Vec2) -> u32 {
    let distance = viewer.distance(bounds.center());
    let tier = if distance <= config.near_distance {
        config.full_resolution
    } else if distance <= config.far_distance {
        config.full_resolution / 2
    } else {
        config.full_resolution / 4
    };
    tier.max(config.min_resolution)
}
