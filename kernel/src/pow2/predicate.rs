//! Power-of-two tests.

/// True if `v` has at most one bit set.
///
/// Tests `v & (v - 1) == 0`, which also holds for `0`. Zero is therefore
/// reported as a power of two. Callers that must reject zero use
/// [`is_power_of_two_strict`].
#[must_use]
pub const fn is_power_of_two(v: u32) -> bool {
    v & v.wrapping_sub(1) == 0
}

/// True if `v` has exactly one bit set. False for `0`.
#[must_use]
pub const fn is_power_of_two_strict(v: u32) -> bool {
    v != 0 && is_power_of_two(v)
}
