//! Strongly-typed identifiers for emitters, entities, and ticks.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`EmitterId`] allocation.
static EMITTER_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Counter for unique [`EntityId`] allocation.
static ENTITY_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a filter emitter.
///
/// Allocated from a monotonic atomic counter via [`EmitterId::next`].
/// Two distinct emitters always have different IDs, even if one is
/// despawned and another spawned at the same position. Used as the
/// registry key in the coordinator and in mask cache fingerprints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmitterId(u64);

impl EmitterId {
    /// Allocate a fresh, unique emitter ID. Thread-safe.
    pub fn next() -> Self {
        Self(EMITTER_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for EmitterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a revealable entity.
///
/// Allocated from a monotonic atomic counter via [`EntityId::next`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl EntityId {
    /// Allocate a fresh, unique entity ID. Thread-safe.
    pub fn next() -> Self {
        Self(ENTITY_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonically increasing tick counter.
///
/// Incremented each time the coordinator advances one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
