//! The [`InfluenceMask`] bitmask of influence types.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// A set of influence types, one bit per declared type.
///
/// Influence types are plain bit positions (bit 0, bit 1, ...) in a `u32`,
/// supporting up to 32 distinct types per world. Masks combine with bitwise
/// OR, which is commutative and associative — field aggregation over any
/// emitter ordering produces the same mask.
///
/// The empty mask ([`InfluenceMask::EMPTY`]) means "no influence" and is the
/// neutral value returned by field queries at uncovered positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InfluenceMask(pub u32);

impl InfluenceMask {
    /// The mask with no influence bits set.
    pub const EMPTY: InfluenceMask = InfluenceMask(0);

    /// A mask with the single influence type at bit position `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n >= 32`. Bit positions are declared statically per
    /// world; an out-of-range position is a programming error, not
    /// runtime input.
    pub fn bit(n: u32) -> Self {
        assert!(n < 32, "influence bit position {n} out of range (max 31)");
        InfluenceMask(1 << n)
    }

    /// The union of two masks (`self | other`).
    pub fn union(self, other: Self) -> Self {
        InfluenceMask(self.0 | other.0)
    }

    /// Whether every bit of `required` is present in `self`.
    ///
    /// The empty requirement is vacuously contained in any mask.
    pub fn contains_all(self, required: Self) -> bool {
        self.0 & required.0 == required.0
    }

    /// Whether `self` and `other` share at least one bit.
    ///
    /// Always `false` when either mask is empty.
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether no influence bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The raw bit representation.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// The number of influence types in the mask.
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }
}

impl BitOr for InfluenceMask {
    type Output = InfluenceMask;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for InfluenceMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for InfluenceMask {
    type Output = InfluenceMask;

    fn bitand(self, rhs: Self) -> Self {
        InfluenceMask(self.0 & rhs.0)
    }
}

impl BitAndAssign for InfluenceMask {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl fmt::Display for InfluenceMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010b}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_mask() -> impl Strategy<Value = InfluenceMask> {
        any::<u32>().prop_map(InfluenceMask)
    }

    #[test]
    fn bit_positions_are_single_bits() {
        for n in 0..32 {
            assert_eq!(InfluenceMask::bit(n).len(), 1);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn bit_position_32_panics() {
        let _ = InfluenceMask::bit(32);
    }

    #[test]
    fn empty_is_neutral() {
        let red = InfluenceMask::bit(0);
        assert_eq!(red | InfluenceMask::EMPTY, red);
        assert!(InfluenceMask::EMPTY.is_empty());
        assert!(!InfluenceMask::EMPTY.intersects(red));
    }

    #[test]
    fn contains_all_requires_every_bit() {
        let red = InfluenceMask::bit(0);
        let blue = InfluenceMask::bit(1);
        let both = red | blue;
        assert!(both.contains_all(red));
        assert!(both.contains_all(both));
        assert!(!red.contains_all(both));
    }

    proptest! {
        #[test]
        fn union_commutative(a in arb_mask(), b in arb_mask()) {
            prop_assert_eq!(a | b, b | a);
        }

        #[test]
        fn union_associative(a in arb_mask(), b in arb_mask(), c in arb_mask()) {
            prop_assert_eq!((a | b) | c, a | (b | c));
        }

        #[test]
        fn union_idempotent(a in arb_mask()) {
            prop_assert_eq!(a | a, a);
        }

        #[test]
        fn union_identity(a in arb_mask()) {
            prop_assert_eq!(a | InfluenceMask::EMPTY, a);
        }

        #[test]
        fn empty_requirement_vacuously_contained(a in arb_mask()) {
            prop_assert!(a.contains_all(InfluenceMask::EMPTY));
        }

        #[test]
        fn intersects_iff_shared_bit(a in arb_mask(), b in arb_mask()) {
            prop_assert_eq!(a.intersects(b), !(a & b).is_empty());
        }

        #[test]
        fn len_matches_popcount(a in arb_mask()) {
            prop_assert_eq!(a.len(), a.bits().count_ones());
        }
    }
}
