//! Division plans for unsigned integers.

use core::ops::{Div, DivAssign, Rem, RemAssign};

use crate::bits::BitUtils;
use crate::error::DivisorError;
use crate::magic::{magic_u16, magic_u32, magic_u64};
use crate::mulhi::MulHi;
use crate::strategy::UnsignedStrategy;
use crate::tables;
use crate::{Divisor, UnsignedDivisor};

macro_rules! unsigned_divisor {
    ($(#[$attr:meta])* $name:ident, $int:ty, $magic:path, $table:path) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name {
            divisor: $int,
            multiplier: $int,
            strategy: UnsignedStrategy,
            shift: u8,
            mask: $int,
        }

        impl $name {
            /// Constructs the plan that divides by `divisor`.
            ///
            /// Returns `Err(DivisorError::DivideByZero)` iff `divisor == 0`.
            pub fn new(divisor: $int) -> Result<$name, DivisorError> {
                $name::classify(divisor, true)
            }

            fn classify(divisor: $int, use_table: bool) -> Result<$name, DivisorError> {
                if divisor == 0 {
                    return Err(DivisorError::DivideByZero);
                }

                if divisor == 1 {
                    return Ok($name::from_parts(divisor, 1, UnsignedStrategy::None, 0));
                }

                // Past half the range the multiply-high step would
                // overflow, but the quotient is only ever 0 or 1.
                if divisor >> (<$int>::BITS - 1) != 0 {
                    return Ok($name::from_parts(divisor, 1, UnsignedStrategy::Branch, 0));
                }

                if divisor.is_single_bit() {
                    let shift = divisor.trailing_zero_count() as u8;
                    return Ok($name::from_parts(divisor, 1, UnsignedStrategy::Shift, shift));
                }

                if use_table && divisor <= tables::LAST as $int {
                    let entry = $table[(divisor - tables::FIRST as $int) as usize];
                    return Ok($name::from_parts(
                        divisor,
                        entry.multiplier,
                        entry.strategy,
                        entry.shift,
                    ));
                }

                let magic = $magic(divisor);
                let strategy = if magic.needs_correction {
                    UnsignedStrategy::MultiplyAddShift
                } else {
                    UnsignedStrategy::MultiplyShift
                };

                log::trace!(
                    "{} divisor {}: {:?}, multiplier {:#x}, shift {}",
                    stringify!($int),
                    divisor,
                    strategy,
                    magic.multiplier,
                    magic.shift
                );

                Ok($name::from_parts(divisor, magic.multiplier, strategy, magic.shift))
            }

            fn from_parts(
                divisor: $int,
                multiplier: $int,
                strategy: UnsignedStrategy,
                shift: u8,
            ) -> $name {
                let mask = if strategy.is_shift() {
                    ((1 as $int) << shift) - 1
                } else {
                    0
                };

                $name {
                    divisor,
                    multiplier,
                    strategy,
                    shift,
                    mask,
                }
            }

            /// The divisor this plan was built for.
            #[inline]
            pub fn divisor(&self) -> $int {
                self.divisor
            }

            /// The magic multiplier (1 when the plan doesn't multiply).
            #[inline]
            pub fn multiplier(&self) -> $int {
                self.multiplier
            }

            #[inline]
            pub fn strategy(&self) -> UnsignedStrategy {
                self.strategy
            }

            #[inline]
            pub fn shift(&self) -> u8 {
                self.shift
            }

            /// `(1 << shift) - 1` for plans that only shift.
            #[inline]
            pub fn mask(&self) -> Option<$int> {
                if self.strategy.is_shift() {
                    Some(self.mask)
                } else {
                    None
                }
            }

            /// Computes `value / divisor`.
            #[inline]
            #[must_use]
            pub fn divide(&self, value: $int) -> $int {
                match self.strategy {
                    UnsignedStrategy::None | UnsignedStrategy::Shift => value >> self.shift,
                    UnsignedStrategy::MultiplyShift => value.mulhi(self.multiplier) >> self.shift,
                    UnsignedStrategy::MultiplyAddShift => {
                        // The true multiplier is `multiplier + 2^W`, so
                        // the product is `t + value`; average instead of
                        // adding, to stay within W bits.
                        let t = value.mulhi(self.multiplier);
                        ((value.wrapping_sub(t) >> 1).wrapping_add(t)) >> self.shift
                    }
                    UnsignedStrategy::Branch => <$int>::from(value >= self.divisor),
                }
            }

            /// Computes `value % divisor`.
            #[inline]
            #[must_use]
            pub fn modulo(&self, value: $int) -> $int {
                match self.strategy {
                    UnsignedStrategy::None | UnsignedStrategy::Shift => value & self.mask,
                    UnsignedStrategy::Branch => {
                        value.wrapping_sub(if value >= self.divisor { self.divisor } else { 0 })
                    }
                    UnsignedStrategy::MultiplyShift | UnsignedStrategy::MultiplyAddShift => {
                        value.wrapping_sub(self.divide(value).wrapping_mul(self.divisor))
                    }
                }
            }

            /// Computes `(value / divisor, value % divisor)`, quotient
            /// first.
            #[inline]
            #[must_use]
            pub fn div_rem(&self, value: $int) -> ($int, $int) {
                let quotient = self.divide(value);
                if self.strategy.is_shift() {
                    // The bits shifted out are exactly the remainder.
                    (quotient, value ^ (quotient << self.shift))
                } else {
                    (quotient, value.wrapping_sub(quotient.wrapping_mul(self.divisor)))
                }
            }

            /// Returns the largest multiple of the divisor that is at most
            /// `value`.
            #[inline]
            #[must_use]
            pub fn floor(&self, value: $int) -> $int {
                if self.strategy.is_shift() {
                    value & !self.mask
                } else {
                    self.divide(value).wrapping_mul(self.divisor)
                }
            }

            /// Returns `(value - floor(value), floor(value))`: the remainder
            /// first, then the largest multiple of the divisor that is at
            /// most `value`.
            #[inline]
            #[must_use]
            pub fn floor_rem(&self, value: $int) -> ($int, $int) {
                let multiple = self.floor(value);
                (value.wrapping_sub(multiple), multiple)
            }
        }

        impl Divisor for $name {
            type Int = $int;

            #[inline]
            fn divisor(&self) -> $int {
                $name::divisor(self)
            }

            #[inline]
            fn divide(&self, value: $int) -> $int {
                $name::divide(self, value)
            }

            #[inline]
            fn modulo(&self, value: $int) -> $int {
                $name::modulo(self, value)
            }

            #[inline]
            fn div_rem(&self, value: $int) -> ($int, $int) {
                $name::div_rem(self, value)
            }
        }

        impl UnsignedDivisor for $name {
            #[inline]
            fn floor(&self, value: $int) -> $int {
                $name::floor(self, value)
            }

            #[inline]
            fn floor_rem(&self, value: $int) -> ($int, $int) {
                $name::floor_rem(self, value)
            }
        }

        impl TryFrom<$int> for $name {
            type Error = DivisorError;

            fn try_from(divisor: $int) -> Result<$name, DivisorError> {
                $name::new(divisor)
            }
        }

        impl Div<$name> for $int {
            type Output = $int;

            #[inline]
            fn div(self, rhs: $name) -> $int {
                rhs.divide(self)
            }
        }

        impl Div<&$name> for $int {
            type Output = $int;

            #[inline]
            fn div(self, rhs: &$name) -> $int {
                rhs.divide(self)
            }
        }

        impl Rem<$name> for $int {
            type Output = $int;

            #[inline]
            fn rem(self, rhs: $name) -> $int {
                rhs.modulo(self)
            }
        }

        impl Rem<&$name> for $int {
            type Output = $int;

            #[inline]
            fn rem(self, rhs: &$name) -> $int {
                rhs.modulo(self)
            }
        }

        impl DivAssign<$name> for $int {
            #[inline]
            fn div_assign(&mut self, rhs: $name) {
                *self = rhs.divide(*self);
            }
        }

        impl RemAssign<$name> for $int {
            #[inline]
            fn rem_assign(&mut self, rhs: $name) {
                *self = rhs.modulo(*self);
            }
        }
    };
}

unsigned_divisor!(
    /// Divides `u16` values by a divisor fixed at construction.
    U16Divisor,
    u16,
    magic_u16,
    tables::SMALL_U16
);

unsigned_divisor!(
    /// Divides `u32` values by a divisor fixed at construction.
    ///
    /// ```
    /// use magicdiv::U32Divisor;
    ///
    /// let by_7 = U32Divisor::new(7).unwrap();
    /// assert_eq!(by_7.divide(100), 14);
    /// assert_eq!(by_7.div_rem(100), (14, 2));
    /// assert_eq!(100 / by_7, 14);
    /// assert_eq!(100 % by_7, 2);
    /// ```
    U32Divisor,
    u32,
    magic_u32,
    tables::SMALL_U32
);

unsigned_divisor!(
    /// Divides `u64` values by a divisor fixed at construction.
    U64Divisor,
    u64,
    magic_u64,
    tables::SMALL_U64
);
