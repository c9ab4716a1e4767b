//! Easing applied to rendered alpha.

/// Smoothstep easing: `3t² − 2t³`, clamped to `[0, 1]`.
///
/// Applied only to what is rendered — the stored transition progress
/// stays linear so convergence time is independent of the curve and the
/// monotonicity invariant is trivial to maintain.
pub fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
    }

    #[test]
    fn midpoint_is_half() {
        assert!((ease(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn monotonically_increasing() {
        let mut prev = ease(0.0);
        for i in 1..=100 {
            let next = ease(i as f32 / 100.0);
            assert!(next >= prev, "ease not monotone at step {i}");
            prev = next;
        }
    }

    #[test]
    fn out_of_range_inputs_clamp() {
        assert_eq!(ease(-0.5), 0.0);
        assert_eq!(ease(1.5), 1.0);
    }
}
