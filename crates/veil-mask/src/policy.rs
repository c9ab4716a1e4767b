//! Regeneration throttling for one entity's mask.

use veil_core::Vec2;

/// Decides whether a mask regeneration request should proceed.
///
/// Regeneration runs when any of these fires:
///
/// - the minimum interval has elapsed since the last regeneration,
/// - the active emitter count changed,
/// - the viewer moved beyond the LOD threshold, or
/// - a forced update was requested (set right after a visibility flip).
///
/// Absent all four, the request is skipped even though the tick fired,
/// bounding per-frame cost. The first request always proceeds.
#[derive(Clone, Debug)]
pub struct RegenPolicy {
    min_interval: f32,
    viewer_threshold: f32,
    elapsed: f32,
    last_emitter_count: Option<usize>,
    last_viewer: Option<Vec2>,
    forced: bool,
}

impl RegenPolicy {
    /// Create a policy with the given interval and viewer threshold.
    pub fn new(min_interval: f32, viewer_threshold: f32) -> Self {
        Self {
            min_interval,
            viewer_threshold,
            elapsed: 0.0,
            last_emitter_count: None,
            last_viewer: None,
            forced: false,
        }
    }

    /// Accumulate elapsed time. Called once per tick.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Request an unconditional regeneration at the next check.
    pub fn force(&mut self) {
        self.forced = true;
    }

    /// Whether regeneration should run now.
    ///
    /// On `true` the policy resets: the interval restarts and the
    /// emitter count and viewer position become the new baselines.
    pub fn should_regenerate(&mut self, emitter_count: usize, viewer: Vec2) -> bool {
        let count_changed = self.last_emitter_count != Some(emitter_count);
        let viewer_moved = match self.last_viewer {
            Some(last) => {
                last.distance_squared(viewer) > self.viewer_threshold * self.viewer_threshold
            }
            None => true,
        };
        let interval_elapsed = self.elapsed >= self.min_interval;

        if self.forced || count_changed || viewer_moved || interval_elapsed {
            self.forced = false;
            self.elapsed = 0.0;
            self.last_emitter_count = Some(emitter_count);
            self.last_viewer = Some(viewer);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> RegenPolicy {
        RegenPolicy::new(0.5, 1.0)
    }

    #[test]
    fn first_request_always_proceeds() {
        let mut p = policy();
        assert!(p.should_regenerate(1, Vec2::ZERO));
    }

    #[test]
    fn quiet_ticks_are_skipped() {
        let mut p = policy();
        assert!(p.should_regenerate(1, Vec2::ZERO));

        p.tick(0.1);
        assert!(!p.should_regenerate(1, Vec2::ZERO));
    }

    #[test]
    fn interval_elapse_triggers() {
        let mut p = policy();
        assert!(p.should_regenerate(1, Vec2::ZERO));

        for _ in 0..5 {
            p.tick(0.1);
        }
        assert!(p.should_regenerate(1, Vec2::ZERO));
        // Interval restarted by the accepted request.
        assert!(!p.should_regenerate(1, Vec2::ZERO));
    }

    #[test]
    fn emitter_count_change_triggers() {
        let mut p = policy();
        assert!(p.should_regenerate(2, Vec2::ZERO));
        assert!(p.should_regenerate(3, Vec2::ZERO));
        assert!(!p.should_regenerate(3, Vec2::ZERO));
    }

    #[test]
    fn viewer_movement_triggers_beyond_threshold() {
        let mut p = policy();
        assert!(p.should_regenerate(1, Vec2::ZERO));

        // Within the threshold: skipped.
        assert!(!p.should_regenerate(1, Vec2::new(0.5, 0.0)));
        // Beyond it: regenerate, and the baseline moves.
        assert!(p.should_regenerate(1, Vec2::new(2.0, 0.0)));
        assert!(!p.should_regenerate(1, Vec2::new(2.5, 0.0)));
    }

    #[test]
    fn force_overrides_every_gate() {
        let mut p = policy();
        assert!(p.should_regenerate(1, Vec2::ZERO));
        assert!(!p.should_regenerate(1, Vec2::ZERO));

        p.force();
        assert!(p.should_regenerate(1, Vec2::ZERO));
        // Force is consumed.
        assert!(!p.should_regenerate(1, Vec2::ZERO));
    }
}
