//! Bit-smear: copy the highest set bit into every lower position.
//!
//! Five OR-shift steps cover all 32 bits: after shifting by 1, the top two
//! bits below the leading one are set; by 2, the top four; and so on up to
//! 16, which fills the remaining half-word.

/// Shift amounts of the smear, in application order.
pub const SMEAR_SHIFTS: [u32; 5] = [1, 2, 4, 8, 16];

/// Propagate the highest set bit of `v` down through all lower bits.
///
/// The result is always `2^k - 1` where `k` is the bit length of `v`
/// (`0` for `v == 0`, `u32::MAX` whenever bit 31 is set).
#[must_use]
pub const fn smear(mut v: u32) -> u32 {
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v
}
