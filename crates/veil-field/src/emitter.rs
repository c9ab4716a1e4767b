//! The [`Emitter`] influence source and its movement dirty-check.

use veil_core::{EmitterId, InfluenceMask, Vec2};

/// A moving, typed, radius-bounded source of influence.
///
/// Emitters are mutated externally (movement, pickup) but advertise
/// movement through a baseline they own: the coordinator's periodic scan
/// asks [`moved_since_baseline`](Emitter::moved_since_baseline) and calls
/// [`rebaseline`](Emitter::rebaseline) after consuming the answer. The
/// threshold comparison filters floating-point jitter from carried
/// emitters that track a moving carrier.
#[derive(Clone, Debug)]
pub struct Emitter {
    id: EmitterId,
    position: Vec2,
    radius: f32,
    influence: InfluenceMask,
    active: bool,
    carried: bool,
    baseline: Vec2,
}

impl Emitter {
    /// Create an active, uncarried emitter.
    ///
    /// Negative radii are clamped to zero: a zero-radius emitter covers
    /// at most the cell whose sample point coincides with its position.
    pub fn new(position: Vec2, radius: f32, influence: InfluenceMask) -> Self {
        Self {
            id: EmitterId::next(),
            position,
            radius: radius.max(0.0),
            influence,
            active: true,
            carried: false,
            baseline: position,
        }
    }

    /// This emitter's unique ID.
    pub fn id(&self) -> EmitterId {
        self.id
    }

    /// Current world position.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Move the emitter. The baseline is untouched; the next scan
    /// observes the accumulated displacement.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Influence radius in world units.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Resize the influence footprint. Negative values clamp to zero.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(0.0);
    }

    /// The influence bits this emitter projects.
    pub fn influence(&self) -> InfluenceMask {
        self.influence
    }

    /// Whether the emitter currently contributes to the field.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activate or deactivate the emitter. Inactive emitters contribute
    /// nothing to field rebuilds or mask generation.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Whether the emitter is being carried by a player or carrier
    /// object. Carried emitters keep projecting; the flag suspends
    /// independent placement logic in the host.
    pub fn is_carried(&self) -> bool {
        self.carried
    }

    /// Mark the emitter as picked up. Position now tracks the carrier.
    pub fn pick_up(&mut self) {
        self.carried = true;
    }

    /// Mark the emitter as placed at its current position.
    pub fn put_down(&mut self) {
        self.carried = false;
    }

    /// Whether the emitter has moved more than `threshold` world units
    /// since the last [`rebaseline`](Emitter::rebaseline).
    pub fn moved_since_baseline(&self, threshold: f32) -> bool {
        self.position.distance_squared(self.baseline) > threshold * threshold
    }

    /// Reset the movement baseline to the current position.
    pub fn rebaseline(&mut self) {
        self.baseline = self.position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_emitter() -> Emitter {
        Emitter::new(Vec2::ZERO, 5.0, InfluenceMask::bit(0))
    }

    #[test]
    fn new_emitter_is_active_and_uncarried() {
        let e = red_emitter();
        assert!(e.is_active());
        assert!(!e.is_carried());
        assert_eq!(e.radius(), 5.0);
    }

    #[test]
    fn negative_radius_clamps_to_zero() {
        let e = Emitter::new(Vec2::ZERO, -2.0, InfluenceMask::bit(0));
        assert_eq!(e.radius(), 0.0);
        let mut e = red_emitter();
        e.set_radius(-1.0);
        assert_eq!(e.radius(), 0.0);
    }

    #[test]
    fn movement_below_threshold_is_not_dirty() {
        let mut e = red_emitter();
        e.set_position(Vec2::new(0.005, 0.0));
        assert!(!e.moved_since_baseline(0.01));
    }

    #[test]
    fn movement_above_threshold_is_dirty_until_rebaseline() {
        let mut e = red_emitter();
        e.set_position(Vec2::new(0.5, 0.0));
        assert!(e.moved_since_baseline(0.01));
        e.rebaseline();
        assert!(!e.moved_since_baseline(0.01));
    }

    #[test]
    fn small_steps_accumulate_against_baseline() {
        // Each step is below threshold, but the total displacement is not.
        let mut e = red_emitter();
        for i in 1..=10 {
            e.set_position(Vec2::new(i as f32 * 0.005, 0.0));
        }
        assert!(e.moved_since_baseline(0.01));
    }

    #[test]
    fn pickup_and_putdown_toggle_carried() {
        let mut e = red_emitter();
        e.pick_up();
        assert!(e.is_carried());
        e.put_down();
        assert!(!e.is_carried());
    }
}
