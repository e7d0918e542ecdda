//! Integer division by divisors that are only known at runtime, but stay
//! fixed across many divisions.
//!
//! Constructing a divisor plan (`U32Divisor::new(d)`, `I64Divisor::new(d)`,
//! ...) picks a strategy for `d` once: identity, a shift, a multiply-high
//! by a precomputed magic number followed by a shift (with an optional
//! one-step correction), or a single comparison for the largest divisors.
//! Applying the plan never issues a hardware divide.
//!
//! ```
//! use magicdiv::{I32Divisor, U64Divisor};
//!
//! let buckets = U64Divisor::new(1_000_003).unwrap();
//! assert_eq!(buckets.modulo(u64::MAX), u64::MAX % 1_000_003);
//!
//! let by_minus_3 = I32Divisor::new(-3).unwrap();
//! assert_eq!(by_minus_3.div_rem(-10), (3, -1));
//! ```
//!
//! All kernels use wrapping arithmetic and match the native truncating
//! `wrapping_div`/`wrapping_rem`; the only failure is constructing a plan
//! for 0.

pub mod bits;
mod error;
pub mod magic;
pub mod mulhi;
mod signed;
mod strategy;
mod tables;
mod unsigned;

pub use error::DivisorError;
pub use signed::{I16Divisor, I32Divisor, I64Divisor};
pub use strategy::{SignedStrategy, UnsignedStrategy};
pub use unsigned::{U16Divisor, U32Divisor, U64Divisor};

/// Operations shared by every divisor plan.
pub trait Divisor: Copy {
    /// The integer type this plan divides.
    type Int: Copy;

    /// The divisor the plan was built for.
    fn divisor(&self) -> Self::Int;

    /// Computes `value / divisor`, truncated toward zero.
    fn divide(&self, value: Self::Int) -> Self::Int;

    /// Computes `value % divisor`, with the sign of `value`.
    fn modulo(&self, value: Self::Int) -> Self::Int;

    /// Computes the quotient and the remainder, in that order.
    fn div_rem(&self, value: Self::Int) -> (Self::Int, Self::Int);
}

/// Floor operations on unsigned plans.
pub trait UnsignedDivisor: Divisor {
    /// The largest multiple of the divisor that is at most `value`.
    fn floor(&self, value: Self::Int) -> Self::Int;

    /// `(value - floor(value), floor(value))`.
    fn floor_rem(&self, value: Self::Int) -> (Self::Int, Self::Int);
}

/// Magnitude-floor operations on signed plans.
pub trait SignedDivisor: Divisor {
    /// The multiple of the divisor with the largest magnitude not exceeding
    /// `|value|`, carrying the sign of `value`.
    fn abs_floor(&self, value: Self::Int) -> Self::Int;

    /// `(value - abs_floor(value), abs_floor(value))`.
    fn abs_floor_rem(&self, value: Self::Int) -> (Self::Int, Self::Int);
}
