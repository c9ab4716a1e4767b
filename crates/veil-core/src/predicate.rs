//! The [`RevealPredicate`] AND/OR requirement test.

use crate::influence::InfluenceMask;

/// An entity's reveal requirement: a mask of required influence bits and
/// the combination rule applied to it.
///
/// - `require_all = true`: AND semantics — every required bit must be
///   present in the aggregated mask.
/// - `require_all = false`: OR semantics — any single required bit
///   suffices.
///
/// # The empty-requirement asymmetry
///
/// An empty `required` mask behaves differently under the two rules, and
/// the asymmetry is a deliberate policy:
///
/// - AND: vacuously satisfied by any aggregated mask (masking is a no-op;
///   the entity is always revealed).
/// - OR: never satisfied (there is no bit that could match; the entity is
///   always hidden).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RevealPredicate {
    /// The influence bits the entity requires.
    pub required: InfluenceMask,
    /// `true` for AND semantics, `false` for OR semantics.
    pub require_all: bool,
}

impl RevealPredicate {
    /// A predicate requiring every bit of `required` (AND semantics).
    pub fn all_of(required: InfluenceMask) -> Self {
        Self {
            required,
            require_all: true,
        }
    }

    /// A predicate requiring any bit of `required` (OR semantics).
    pub fn any_of(required: InfluenceMask) -> Self {
        Self {
            required,
            require_all: false,
        }
    }

    /// Whether the aggregated `mask` satisfies this requirement.
    pub fn is_satisfied(&self, mask: InfluenceMask) -> bool {
        if self.require_all {
            mask.contains_all(self.required)
        } else {
            mask.intersects(self.required)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: InfluenceMask = InfluenceMask(1 << 0);
    const GREEN: InfluenceMask = InfluenceMask(1 << 1);
    const BLUE: InfluenceMask = InfluenceMask(1 << 2);

    // ── AND semantics ────────────────────────────────────────

    #[test]
    fn all_of_rejects_partial_coverage() {
        let p = RevealPredicate::all_of(RED | BLUE);
        assert!(!p.is_satisfied(RED));
        assert!(!p.is_satisfied(BLUE));
        assert!(!p.is_satisfied(GREEN));
    }

    #[test]
    fn all_of_accepts_superset() {
        let p = RevealPredicate::all_of(RED | BLUE);
        assert!(p.is_satisfied(RED | BLUE));
        assert!(p.is_satisfied(RED | BLUE | GREEN));
    }

    // ── OR semantics ─────────────────────────────────────────

    #[test]
    fn any_of_accepts_single_bit() {
        let p = RevealPredicate::any_of(RED | BLUE);
        assert!(p.is_satisfied(RED));
        assert!(p.is_satisfied(BLUE));
        assert!(p.is_satisfied(RED | GREEN));
    }

    #[test]
    fn any_of_rejects_disjoint_mask() {
        let p = RevealPredicate::any_of(RED | BLUE);
        assert!(!p.is_satisfied(GREEN));
        assert!(!p.is_satisfied(InfluenceMask::EMPTY));
    }

    // ── Empty-requirement asymmetry ──────────────────────────

    #[test]
    fn empty_requirement_all_of_always_true() {
        let p = RevealPredicate::all_of(InfluenceMask::EMPTY);
        assert!(p.is_satisfied(InfluenceMask::EMPTY));
        assert!(p.is_satisfied(RED));
        assert!(p.is_satisfied(RED | GREEN | BLUE));
    }

    #[test]
    fn empty_requirement_any_of_always_false() {
        let p = RevealPredicate::any_of(InfluenceMask::EMPTY);
        assert!(!p.is_satisfied(InfluenceMask::EMPTY));
        assert!(!p.is_satisfied(RED));
        assert!(!p.is_satisfied(RED | GREEN | BLUE));
    }
}
