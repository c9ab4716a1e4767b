//! Cache keys fingerprinting everything a mask depends on.

use veil_core::{Bounds, EntityId, RevealPredicate};
use veil_field::Emitter;

/// World units per quantization step (centi-units).
const QUANT_STEPS_PER_UNIT: f32 = 100.0;

/// Quantize a world-space value to centi-units.
///
/// Keys round continuous inputs so float noise from carried emitters
/// does not explode the key space: positions within the same centi-unit
/// produce the same key.
fn quantize(v: f32) -> i32 {
    (v * QUANT_STEPS_PER_UNIT).round() as i32
}

/// Compact fingerprint of one active emitter's contribution.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct EmitterFingerprint {
    influence: u32,
    x: i32,
    y: i32,
    radius: i32,
}

impl EmitterFingerprint {
    fn of(emitter: &Emitter) -> Self {
        let pos = emitter.position();
        Self {
            influence: emitter.influence().bits(),
            x: quantize(pos.x),
            y: quantize(pos.y),
            radius: quantize(emitter.radius()),
        }
    }
}

/// Identity of one generated mask.
///
/// Two requests with equal keys are guaranteed to produce bit-identical
/// bitmaps, so the cache can serve the stored one. The key covers the
/// entity, its requirement, the chosen resolution, the quantized bounds,
/// and a fingerprint of every **active** emitter in registry order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MaskKey {
    entity: EntityId,
    required_bits: u32,
    require_all: bool,
    resolution: u32,
    bounds: [i32; 4],
    emitters: Vec<EmitterFingerprint>,
}

impl MaskKey {
    /// Build a key from the inputs of one generation request.
    ///
    /// Inactive emitters are skipped; they contribute nothing to the
    /// bitmap, so they must not perturb the key either.
    pub fn new<'a>(
        entity: EntityId,
        predicate: RevealPredicate,
        resolution: u32,
        bounds: Bounds,
        emitters: impl IntoIterator<Item = &'a Emitter>,
    ) -> Self {
        Self {
            entity,
            required_bits: predicate.required.bits(),
            require_all: predicate.require_all,
            resolution,
            bounds: [
                quantize(bounds.min.x),
                quantize(bounds.min.y),
                quantize(bounds.max.x),
                quantize(bounds.max.y),
            ],
            emitters: emitters
                .into_iter()
                .filter(|e| e.is_active())
                .map(EmitterFingerprint::of)
                .collect(),
        }
    }

    /// The chosen resolution this key was built for.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }
}
