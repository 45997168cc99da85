//! `Pow2Capacity`: a validated, nonzero power-of-two size.
//!
//! Hash tables and ring buffers sized to a power of two replace `% cap`
//! with `& (cap - 1)`. This type carries that invariant so masking code
//! never sees zero or a multi-bit capacity.

use std::fmt;

use super::predicate::is_power_of_two_strict;
use super::round::round_up_pow2_nonzero;

/// Largest capacity representable in a `u32`.
pub const MAX_CAPACITY: u32 = 1 << 31;

/// Typed failure for building a [`Pow2Capacity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapacityError {
    /// Zero is not a usable capacity.
    Zero,
    /// The value has more than one bit set.
    NotPowerOfTwo { value: u32 },
    /// No `u32` power of two is large enough.
    Overflow { requested: u32 },
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "capacity must be nonzero"),
            Self::NotPowerOfTwo { value } => {
                write!(f, "capacity {value} is not a power of two")
            }
            Self::Overflow { requested } => write!(
                f,
                "no power-of-two capacity >= {requested} fits in u32 (max {MAX_CAPACITY})"
            ),
        }
    }
}

impl std::error::Error for CapacityError {}

/// A power of two in `1..=2^31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pow2Capacity(u32);

impl Pow2Capacity {
    /// Smallest capacity.
    pub const ONE: Self = Self(1);

    /// Largest capacity.
    pub const MAX: Self = Self(MAX_CAPACITY);

    /// Accept `value` only if it is exactly a power of two.
    ///
    /// # Errors
    ///
    /// [`CapacityError::Zero`] for `0`, [`CapacityError::NotPowerOfTwo`]
    /// for any value with more than one bit set.
    pub const fn new(value: u32) -> Result<Self, CapacityError> {
        if value == 0 {
            return Err(CapacityError::Zero);
        }
        if !is_power_of_two_strict(value) {
            return Err(CapacityError::NotPowerOfTwo { value });
        }
        Ok(Self(value))
    }

    /// Smallest capacity that holds at least `requested` entries.
    ///
    /// `0` yields [`Pow2Capacity::ONE`].
    ///
    /// # Errors
    ///
    /// [`CapacityError::Overflow`] when `requested > 2^31`.
    pub const fn at_least(requested: u32) -> Result<Self, CapacityError> {
        let rounded = round_up_pow2_nonzero(requested);
        if rounded == 0 {
            return Err(CapacityError::Overflow { requested });
        }
        Ok(Self(rounded))
    }

    /// The capacity as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// `capacity - 1`: all bits below the capacity bit.
    #[must_use]
    pub const fn mask(self) -> u32 {
        self.0 - 1
    }

    /// Exponent `k` such that `capacity == 2^k`.
    #[must_use]
    pub const fn log2(self) -> u32 {
        self.0.trailing_zeros()
    }

    /// Slot for `hash` in a table of this capacity.
    #[must_use]
    pub const fn index_of(self, hash: u32) -> u32 {
        hash & self.mask()
    }

    /// Slot after `offset`, wrapping to `0` at the end of the table.
    #[must_use]
    pub const fn wrap_next(self, offset: u32) -> u32 {
        offset.wrapping_add(1) & self.mask()
    }
}

impl TryFrom<u32> for Pow2Capacity {
    type Error = CapacityError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Pow2Capacity> for u32 {
    fn from(capacity: Pow2Capacity) -> Self {
        capacity.0
    }
}

impl fmt::Display for Pow2Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
