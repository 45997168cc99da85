//! Rounding up to a power of two.
//!
//! | Input        | exclusive | inclusive | nonzero |
//! |--------------|-----------|-----------|---------|
//! | `0`          | `0`       | `1`       | `1`     |
//! | `5`          | `8`       | `8`       | `8`     |
//! | `16`         | `16`      | `32`      | `16`    |
//! | `2^31`       | `2^31`    | `0`       | `2^31`  |
//! | `2^31 + 1`   | `0`       | `0`       | `0`     |
//! | `u32::MAX`   | `0`       | `0`       | `0`     |
//!
//! Results past `2^31` wrap to `0`. None of these functions panic,
//! regardless of the `overflow-checks` profile setting.

use std::fmt;

use super::smear::smear;

/// Round `v` up to a power of two, returning `v` itself when it already is one.
///
/// Decrements first, so an exact power smears back to itself minus one and
/// the increment restores it. Equivalent to `1 << (lg(v - 1) + 1)`.
///
/// `0` maps to `0`: the decrement wraps to `u32::MAX`, which smears to
/// all-ones and wraps back to zero. Use [`round_up_pow2_nonzero`] when `0`
/// must produce `1`.
#[must_use]
pub const fn round_up_pow2_exclusive(v: u32) -> u32 {
    smear(v.wrapping_sub(1)).wrapping_add(1)
}

/// Round `v` up to the next power of two strictly above its highest set bit.
///
/// No pre-decrement: an exact power of two advances to the next one
/// (`8 -> 16`), `0` maps to `1`, and anything with bit 31 set wraps to `0`.
#[must_use]
pub const fn round_up_pow2_inclusive(v: u32) -> u32 {
    smear(v).wrapping_add(1)
}

/// [`round_up_pow2_exclusive`] with zero bumped to one first.
///
/// Every input in `0..=2^31` yields a power of two.
#[must_use]
pub const fn round_up_pow2_nonzero(v: u32) -> u32 {
    round_up_pow2_exclusive(if v == 0 { 1 } else { v })
}

/// Selects one of the two rounding variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rounding {
    /// [`round_up_pow2_exclusive`]: exact powers are returned unchanged.
    Exclusive,
    /// [`round_up_pow2_inclusive`]: exact powers advance to the next power.
    Inclusive,
}

impl Rounding {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 2] = [Self::Exclusive, Self::Inclusive];

    /// Apply the selected rounding to `v`.
    #[must_use]
    pub const fn apply(self, v: u32) -> u32 {
        match self {
            Self::Exclusive => round_up_pow2_exclusive(v),
            Self::Inclusive => round_up_pow2_inclusive(v),
        }
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exclusive => "exclusive",
            Self::Inclusive => "inclusive",
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
