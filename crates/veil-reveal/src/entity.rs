//! The [`RevealEntity`] and its visibility transition.

use smallvec::SmallVec;
use veil_core::{Bounds, CollisionToggle, EntityId, RevealPredicate, Vec2, VisualSurface};

use crate::easing::ease;

/// Tolerance for "transition progress has reached its target".
const AMOUNT_EPSILON: f32 = 1e-4;

/// How a revealed entity is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderingMode {
    /// Whole-entity alpha fade driven by the eased transition progress.
    Transparency,
    /// Per-pixel reveal via a generated coverage mask, in addition to
    /// the alpha fade.
    PreciseMask,
}

/// Current phase of the visibility state machine.
///
/// Derived from the (`revealed`, `transitioning`) pair; the transitional
/// phases share one flag and one target amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    /// Fully hidden, not animating.
    Hidden,
    /// Animating toward revealed.
    Revealing,
    /// Fully revealed, not animating.
    Revealed,
    /// Animating toward hidden.
    Hiding,
}

/// One visual surface plus its authored alpha, captured at registration.
struct SurfaceBinding {
    surface: Box<dyn VisualSurface>,
    base_alpha: f32,
}

/// A revealable entity: a reveal requirement plus a continuous-valued
/// visibility transition.
///
/// The stored progress (`current_amount`) moves linearly toward the
/// target at a fixed rate — convergence time never depends on distance.
/// The easing curve is applied only when writing alpha to the attached
/// surfaces. The collider is toggled exactly once per completed
/// transition, at the moment the progress arrives.
///
/// Entities are mutated only by the coordinator's evaluation step
/// ([`set_revealed`](RevealEntity::set_revealed)) and their own per-tick
/// update ([`advance`](RevealEntity::advance)).
pub struct RevealEntity {
    id: EntityId,
    position: Vec2,
    predicate: RevealPredicate,
    current_amount: f32,
    target_amount: f32,
    revealed: bool,
    transitioning: bool,
    rendering: RenderingMode,
    surfaces: SmallVec<[SurfaceBinding; 4]>,
    collider: Option<Box<dyn CollisionToggle>>,
    bounds: Option<Bounds>,
}

impl RevealEntity {
    /// Create a fully hidden entity with no surfaces, collider, or
    /// bounds attached.
    pub fn new(position: Vec2, predicate: RevealPredicate) -> Self {
        Self {
            id: EntityId::next(),
            position,
            predicate,
            current_amount: 0.0,
            target_amount: 0.0,
            revealed: false,
            transitioning: false,
            rendering: RenderingMode::Transparency,
            surfaces: SmallVec::new(),
            collider: None,
            bounds: None,
        }
    }

    /// Attach a visual surface. Its base alpha is captured now and every
    /// later alpha write is `base_alpha * ease(progress)`.
    pub fn with_surface(mut self, surface: Box<dyn VisualSurface>) -> Self {
        let base_alpha = surface.base_alpha();
        self.surfaces.push(SurfaceBinding {
            surface,
            base_alpha,
        });
        self
    }

    /// Attach the collision handle toggled at transition completion.
    pub fn with_collider(mut self, collider: Box<dyn CollisionToggle>) -> Self {
        self.collider = Some(collider);
        self
    }

    /// Attach explicit world bounds for precise mask generation.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Select the rendering mode.
    pub fn with_rendering(mut self, rendering: RenderingMode) -> Self {
        self.rendering = rendering;
        self
    }

    /// This entity's unique ID.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Current world position (the field sample point).
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Move the entity.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// The entity's reveal requirement.
    pub fn predicate(&self) -> RevealPredicate {
        self.predicate
    }

    /// The selected rendering mode.
    pub fn rendering(&self) -> RenderingMode {
        self.rendering
    }

    /// Bounds for mask generation: the attached bounds, or a unit box at
    /// the entity position when none were registered.
    pub fn mask_bounds(&self) -> Bounds {
        self.bounds.unwrap_or_else(|| Bounds::unit_at(self.position))
    }

    /// Whether any visual surface is attached. Entities without surfaces
    /// cannot be rendered and are degraded to always-hidden by the
    /// coordinator.
    pub fn has_surfaces(&self) -> bool {
        !self.surfaces.is_empty()
    }

    /// Transition progress in `[0, 1]`.
    pub fn current_amount(&self) -> f32 {
        self.current_amount
    }

    /// Transition target: `0.0` or `1.0`.
    pub fn target_amount(&self) -> f32 {
        self.target_amount
    }

    /// The logical visibility (flips at the start of a transition).
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Whether a transition is in progress.
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// The derived state-machine phase.
    pub fn state(&self) -> RevealState {
        match (self.revealed, self.transitioning) {
            (false, false) => RevealState::Hidden,
            (true, true) => RevealState::Revealing,
            (true, false) => RevealState::Revealed,
            (false, true) => RevealState::Hiding,
        }
    }

    /// Set the logical visibility target.
    ///
    /// No-op returning `false` if `target` already matches. Otherwise
    /// flips `revealed`, retargets the transition, and returns `true` so
    /// the coordinator can emit a reveal-changed event. Reversing an
    /// in-flight transition keeps the current progress and animates from
    /// wherever it is.
    pub fn set_revealed(&mut self, target: bool) -> bool {
        if target == self.revealed {
            return false;
        }
        self.revealed = target;
        self.target_amount = if target { 1.0 } else { 0.0 };
        self.transitioning = true;
        true
    }

    /// Advance the transition by `dt` seconds at `rate` amount-units per
    /// second. No-op unless transitioning.
    ///
    /// Moves the stored progress linearly toward the target, applies the
    /// eased alpha to every attached surface, and on arrival (within
    /// tolerance) snaps to the target, clears the transitioning flag,
    /// and toggles the collider to match the revealed state. Returns
    /// `true` when the transition completed during this call.
    pub fn advance(&mut self, dt: f32, rate: f32) -> bool {
        if !self.transitioning {
            return false;
        }

        let step = rate * dt;
        if self.current_amount < self.target_amount {
            self.current_amount = (self.current_amount + step).min(self.target_amount);
        } else {
            self.current_amount = (self.current_amount - step).max(self.target_amount);
        }

        let arrived = (self.current_amount - self.target_amount).abs() <= AMOUNT_EPSILON;
        if arrived {
            self.current_amount = self.target_amount;
            self.transitioning = false;
        }

        self.apply_alpha();

        if arrived {
            if let Some(collider) = &mut self.collider {
                collider.set_enabled(self.revealed);
            }
        }
        arrived
    }

    /// Write `base_alpha * ease(progress)` to every attached surface.
    fn apply_alpha(&mut self) {
        let eased = ease(self.current_amount);
        for binding in &mut self.surfaces {
            binding.surface.set_alpha(binding.base_alpha * eased);
        }
    }
}

impl std::fmt::Debug for RevealEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealEntity")
            .field("id", &self.id)
            .field("state", &self.state())
            .field("current_amount", &self.current_amount)
            .field("surfaces", &self.surfaces.len())
            .field("rendering", &self.rendering)
            .finish()
    }
}
