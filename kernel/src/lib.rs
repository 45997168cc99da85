//! bitsmear kernel: power-of-two arithmetic on `u32`.
//!
//! # API Surface
//!
//! - [`pow2::round::round_up_pow2_exclusive`] -- next power of two, identity on exact powers
//! - [`pow2::round::round_up_pow2_inclusive`] -- next power of two, exact powers advance
//! - [`pow2::predicate::is_power_of_two`] -- single-bit test (true for zero)
//!
//! Everything is a `const fn` over plain `u32` values. No allocation, no
//! shared state, no I/O. Overflow at the domain edges wraps modulo 2^32.
//!
//! # Module Dependency Direction
//!
//! `smear` ← `round` ← `capacity`, `predicate` ← `capacity`
//!
//! The kernel has no dependencies: no external crates, nothing beyond `std::fmt`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod pow2;
