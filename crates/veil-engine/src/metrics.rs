//! Cumulative coordinator metrics.

/// Counters and timings populated by the coordinator as it runs.
///
/// All counters are cumulative since construction; consumers (telemetry,
/// debug HUDs) read them between ticks.
#[derive(Clone, Debug, Default)]
pub struct CoordinatorMetrics {
    /// Number of full field rebuilds.
    pub rebuilds: u64,
    /// Wall-clock time of the most recent rebuild, in microseconds.
    pub last_rebuild_us: u64,
    /// Number of per-entity predicate evaluations.
    pub evaluations: u64,
    /// Number of reveal-changed events emitted.
    pub reveal_events: u64,
    /// Number of emitter movement scans that ran.
    pub movement_scans: u64,
    /// Number of scans that detected movement and triggered a rebuild.
    pub movement_rebuilds: u64,
    /// Mask regeneration requests considered by the policy.
    pub mask_requests: u64,
    /// Mask regenerations that actually ran (cache hits included).
    pub mask_regens: u64,
}
