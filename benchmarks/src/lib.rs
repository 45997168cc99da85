//! Shared helpers for bitsmear benchmark suites.
//!
//! Inputs are generated deterministically so runs on different machines
//! time the same values.

use std::fmt;

/// Shape of a benchmark input corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusKind {
    /// Exact powers of two, cycling through `2^0..=2^31`.
    Powers,
    /// Values with at least two bits set.
    NonPowers,
    /// Pseudo-random values across the full `u32` range.
    Mixed,
}

impl CorpusKind {
    /// Every corpus kind, in declaration order.
    pub const ALL: [Self; 3] = [Self::Powers, Self::NonPowers, Self::Mixed];

    /// Stable lowercase name, used as the benchmark id.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Powers => "powers",
            Self::NonPowers => "non_powers",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for CorpusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed seed of the xorshift stream.
const XORSHIFT_SEED: u32 = 0x9E37_79B9;

/// Marsaglia xorshift32 step. Never yields `0` from a nonzero state.
#[must_use]
pub const fn xorshift32(mut x: u32) -> u32 {
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    x
}

/// Build `len` inputs of the given kind.
#[must_use]
pub fn input_corpus(kind: CorpusKind, len: usize) -> Vec<u32> {
    let mut state = XORSHIFT_SEED;
    (0..len)
        .map(|i| {
            state = xorshift32(state);
            match kind {
                CorpusKind::Powers => 1u32 << (i % 32),
                // Bits 0 and 1 forced on; bit 31 cleared so nothing wraps.
                CorpusKind::NonPowers => (state | 0b11) & !(1 << 31),
                CorpusKind::Mixed => state,
            }
        })
        .collect()
}
