//! Reveal-changed notifications fanned out to subscribers.

use veil_core::{EntityId, TickId};

/// Emitted when an entity's logical visibility flips.
///
/// Events are sent the moment the coordinator's evaluation step flips
/// an entity, i.e. at the **start** of its transition, in evaluation
/// order. Subscribers receive them over an unbounded channel and are
/// expected to drain it once per tick; a dropped receiver silently
/// unsubscribes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealEvent {
    /// The entity whose visibility flipped.
    pub entity: EntityId,
    /// The new logical visibility.
    pub revealed: bool,
    /// The coordinator tick during which the flip happened. Tick 0 is
    /// used for flips caused by registration before the first tick.
    pub tick: TickId,
}
