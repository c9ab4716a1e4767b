//! Capability traits passed to the coordinator at registration time.
//!
//! Entities do not expose their scene-object internals; instead the host
//! hands over explicit handles for the two side effects the reveal
//! pipeline performs: alpha modulation on visual surfaces and collision
//! toggling at transition completion. This replaces runtime component
//! discovery with compile-time capability interfaces.

/// One visual surface of a revealable entity.
///
/// An entity may be composed of several surfaces (body, glow, outline);
/// the reveal pipeline modulates **all** of them, multiplying each
/// surface's base alpha by the eased reveal amount.
///
/// `base_alpha` is read once at registration; `set_alpha` receives the
/// final composited alpha every transition step.
pub trait VisualSurface: Send {
    /// The surface's authored alpha before reveal modulation.
    fn base_alpha(&self) -> f32;

    /// Apply the reveal-modulated alpha to the surface.
    fn set_alpha(&mut self, alpha: f32);
}

/// Collision-enable handle for a revealable entity.
///
/// Toggled only at transition completion: enabled once the entity is
/// fully revealed, disabled once fully hidden. Intermediate-alpha
/// entities never block or pass collision.
pub trait CollisionToggle: Send {
    /// Enable or disable the entity's collision.
    fn set_enabled(&mut self, enabled: bool);
}
