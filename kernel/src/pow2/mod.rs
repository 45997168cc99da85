//! Power-of-two utilities.
//!
//! The two rounding functions differ only in whether the input is
//! decremented before smearing. They disagree exactly at powers of two and
//! both are kept as-is; pick one explicitly (or through [`round::Rounding`]).

pub mod capacity;
pub mod predicate;
pub mod round;
pub mod smear;

pub use capacity::{CapacityError, Pow2Capacity};
pub use predicate::{is_power_of_two, is_power_of_two_strict};
pub use round::{
    round_up_pow2_exclusive, round_up_pow2_inclusive, round_up_pow2_nonzero, Rounding,
};
pub use smear::smear;
