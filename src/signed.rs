//! Division plans for signed integers.
//!
//! All quotients truncate toward zero, like the native `/` and `%`, and all
//! arithmetic wraps: `MIN / -1` is `MIN`, with remainder 0.

use core::ops::{Div, DivAssign, Rem, RemAssign};

use crate::bits::{AbsNoBranch, BitUtils};
use crate::error::DivisorError;
use crate::magic::{magic_i16, magic_i32, magic_i64};
use crate::mulhi::MulHi;
use crate::strategy::SignedStrategy;
use crate::tables;
use crate::{Divisor, SignedDivisor};

macro_rules! signed_divisor {
    ($(#[$attr:meta])* $name:ident, $int:ty, $uint:ty, $magic:path, $positive:path, $negative:path) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name {
            divisor: $int,
            multiplier: $int,
            strategy: SignedStrategy,
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
                    return Ok($name::from_parts(divisor, 1, SignedStrategy::None, 0));
                }

                // Negation, with `MIN / -1` wrapping to `MIN`.
                if divisor == -1 {
                    return Ok($name::from_parts(
                        divisor,
                        -1,
                        SignedStrategy::PowerOfTwoNegative,
                        0,
                    ));
                }

                // Only `MIN` itself is large enough to divide to 1.
                if divisor == <$int>::MIN {
                    return Ok($name::from_parts(divisor, 1, SignedStrategy::Branch, 0));
                }

                let abs_d = divisor.abs_no_branch();
                if abs_d.is_single_bit() {
                    let shift = abs_d.trailing_zero_count() as u8;
                    let strategy = if divisor > 0 {
                        SignedStrategy::PowerOfTwoPositive
                    } else {
                        SignedStrategy::PowerOfTwoNegative
                    };
                    return Ok($name::from_parts(divisor, 1, strategy, shift));
                }

                if use_table && abs_d <= tables::LAST as $uint {
                    let table = if divisor > 0 { &$positive } else { &$negative };
                    let entry = table[(abs_d - tables::FIRST as $uint) as usize];
                    return Ok($name::from_parts(
                        divisor,
                        entry.multiplier,
                        entry.strategy,
                        entry.shift,
                    ));
                }

                let magic = $magic(divisor);
                let strategy = match (magic.needs_correction, divisor > 0) {
                    (false, _) => SignedStrategy::MultiplyShift,
                    (true, true) => SignedStrategy::MultiplyAddShift,
                    (true, false) => SignedStrategy::MultiplySubtractShift,
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
                strategy: SignedStrategy,
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

            /// The magic multiplier (+/-1 when the plan doesn't multiply).
            #[inline]
            pub fn multiplier(&self) -> $int {
                self.multiplier
            }

            #[inline]
            pub fn strategy(&self) -> SignedStrategy {
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

            /// Adds `2^shift - 1` to negative dividends, so that the
            /// arithmetic shift rounds toward zero instead of down.
            #[inline]
            fn biased(&self, value: $int) -> $int {
                value.wrapping_add((value >> (<$int>::BITS - 1)) & self.mask)
            }

            /// Bumps a negative shifted product by one, turning floor into
            /// truncation.
            #[inline]
            fn round_toward_zero(q: $int) -> $int {
                q.wrapping_add(((q as $uint) >> (<$int>::BITS - 1)) as $int)
            }

            /// Computes `value / divisor`, truncated toward zero.
            #[inline]
            #[must_use]
            pub fn divide(&self, value: $int) -> $int {
                match self.strategy {
                    SignedStrategy::None => value,
                    SignedStrategy::PowerOfTwoPositive => self.biased(value) >> self.shift,
                    SignedStrategy::PowerOfTwoNegative => {
                        (self.biased(value) >> self.shift).wrapping_neg()
                    }
                    SignedStrategy::MultiplyShift => {
                        let t = value.mulhi(self.multiplier);
                        $name::round_toward_zero(t >> self.shift)
                    }
                    SignedStrategy::MultiplyAddShift => {
                        let t = value.mulhi(self.multiplier).wrapping_add(value);
                        $name::round_toward_zero(t >> self.shift)
                    }
                    SignedStrategy::MultiplySubtractShift => {
                        let t = value.mulhi(self.multiplier).wrapping_sub(value);
                        $name::round_toward_zero(t >> self.shift)
                    }
                    SignedStrategy::Branch => <$int>::from(value == <$int>::MIN),
                }
            }

            /// Computes `value % divisor`; the result has the sign of
            /// `value`, or is zero.
            #[inline]
            #[must_use]
            pub fn modulo(&self, value: $int) -> $int {
                match self.strategy {
                    SignedStrategy::None => 0,
                    SignedStrategy::PowerOfTwoPositive | SignedStrategy::PowerOfTwoNegative => {
                        value.wrapping_sub(self.biased(value) & !self.mask)
                    }
                    SignedStrategy::Branch => {
                        if value == <$int>::MIN {
                            0
                        } else {
                            value
                        }
                    }
                    SignedStrategy::MultiplyShift
                    | SignedStrategy::MultiplyAddShift
                    | SignedStrategy::MultiplySubtractShift => {
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
                    (quotient, value.wrapping_sub(self.biased(value) & !self.mask))
                } else {
                    (quotient, value.wrapping_sub(quotient.wrapping_mul(self.divisor)))
                }
            }

            /// Returns the multiple of the divisor with the largest
            /// magnitude not exceeding `|value|`, with the sign of `value`
            /// (or zero).
            #[inline]
            #[must_use]
            pub fn abs_floor(&self, value: $int) -> $int {
                match self.strategy {
                    SignedStrategy::None
                    | SignedStrategy::PowerOfTwoPositive
                    | SignedStrategy::PowerOfTwoNegative => self.biased(value) & !self.mask,
                    SignedStrategy::Branch => {
                        if value == <$int>::MIN {
                            <$int>::MIN
                        } else {
                            0
                        }
                    }
                    SignedStrategy::MultiplyShift
                    | SignedStrategy::MultiplyAddShift
                    | SignedStrategy::MultiplySubtractShift => {
                        self.divide(value).wrapping_mul(self.divisor)
                    }
                }
            }

            /// Returns `(value - abs_floor(value), abs_floor(value))`: the
            /// remainder first, then the largest-magnitude multiple.
            #[inline]
            #[must_use]
            pub fn abs_floor_rem(&self, value: $int) -> ($int, $int) {
                let multiple = self.abs_floor(value);
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

        impl SignedDivisor for $name {
            #[inline]
            fn abs_floor(&self, value: $int) -> $int {
                $name::abs_floor(self, value)
            }

            #[inline]
            fn abs_floor_rem(&self, value: $int) -> ($int, $int) {
                $name::abs_floor_rem(self, value)
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

signed_divisor!(
    /// Divides `i16` values by a divisor fixed at construction.
    I16Divisor,
    i16,
    u16,
    magic_i16,
    tables::SMALL_I16,
    tables::SMALL_NEG_I16
);

signed_divisor!(
    /// Divides `i32` values by a divisor fixed at construction.
    ///
    /// ```
    /// use magicdiv::I32Divisor;
    ///
    /// let by_minus_7 = I32Divisor::new(-7).unwrap();
    /// assert_eq!(by_minus_7.divide(100), -14);
    /// assert_eq!(by_minus_7.div_rem(-100), (14, -2));
    /// assert_eq!(by_minus_7.abs_floor(-100), -98);
    ///
    /// let by_minus_1 = I32Divisor::new(-1).unwrap();
    /// assert_eq!(by_minus_1.divide(i32::MIN), i32::MIN);
    /// ```
    I32Divisor,
    i32,
    u32,
    magic_i32,
    tables::SMALL_I32,
    tables::SMALL_NEG_I32
);

signed_divisor!(
    /// Divides `i64` values by a divisor fixed at construction.
    I64Divisor,
    i64,
    u64,
    magic_i64,
    tables::SMALL_I64,
    tables::SMALL_NEG_I64
);

#[cfg(test)]
mod tests {
    macro_rules! signed_checks {
        ($module:ident, $name:ident, $int:ty) => {
            mod $module {
                use crate::error::DivisorError;
                use crate::strategy::SignedStrategy;
                use crate::$name;

                const PROBE_RANGE: $int = 1 << 6;

                fn check(d: $int) {
                    let plan = match $name::new(d) {
                        Ok(plan) => plan,
                        Err(err) => {
                            assert_eq!(d, 0);
                            assert_eq!(err, DivisorError::DivideByZero);
                            return;
                        }
                    };

                    assert_eq!(plan.divisor(), d);
                    assert_eq!($name::new(d), Ok(plan));

                    let probe = |x: $int| {
                        let (q, r) = (x.wrapping_div(d), x.wrapping_rem(d));
                        let multiple = q.wrapping_mul(d);
                        assert_eq!(plan.divide(x), q, "d={}, x={}", d, x);
                        assert_eq!(plan.modulo(x), r, "d={}, x={}", d, x);
                        assert_eq!(plan.div_rem(x), (q, r), "d={}, x={}", d, x);
                        assert_eq!(plan.abs_floor(x), multiple, "d={}, x={}", d, x);
                        assert_eq!(plan.abs_floor_rem(x), (r, multiple), "d={}, x={}", d, x);
                    };

                    // The most extreme multiples of `d` of either sign.
                    let top = d.wrapping_mul(<$int>::MAX.wrapping_div(d));
                    let bottom = d.wrapping_mul(<$int>::MIN.wrapping_div(d));
                    for i in 0..=PROBE_RANGE {
                        probe(i);
                        probe(-i);
                        probe(<$int>::MIN.wrapping_add(i));
                        probe(<$int>::MAX.wrapping_sub(i));

                        for center in [d, d.wrapping_neg(), top, bottom].iter().copied() {
                            probe(center.wrapping_add(i));
                            probe(center.wrapping_sub(i));
                        }
                    }
                }

                #[test]
                fn check_edge_cases() {
                    let half = <$int>::MIN / 2;
                    let edges = [
                        0,
                        1,
                        -1,
                        2,
                        -2,
                        3,
                        -3,
                        half,
                        -half,
                        half + 1,
                        -half - 1,
                        <$int>::MIN,
                        <$int>::MIN + 1,
                        <$int>::MAX,
                        <$int>::MAX - 1,
                    ];
                    for d in edges.iter().copied() {
                        check(d);
                    }
                }

                #[test]
                fn check_powers_of_two() {
                    for p in 0..<$int>::BITS {
                        let po2: $int = 1 << p;
                        check(po2);
                        check(po2.wrapping_neg());
                    }
                }

                #[test]
                fn test_small_divisors() {
                    for d in -256..256 {
                        check(d);
                        check(<$int>::MAX - 256 + d);
                        check(<$int>::MIN + 256 + d);
                    }
                }

                #[test]
                fn test_sparse_divisors() {
                    for i in 0..<$int>::BITS {
                        for j in i..<$int>::BITS {
                            let d: $int = (1 << i) | (1 << j);

                            check(d);
                            check(!d);
                            check(d.wrapping_neg());
                        }
                    }
                }

                #[test]
                fn small_tables_match_search() {
                    for d in 3..=12 {
                        assert_eq!($name::classify(d, true), $name::classify(d, false), "d={}", d);
                        assert_eq!($name::classify(-d, true), $name::classify(-d, false), "d={}", -d);
                    }
                }

                #[test]
                fn classification() {
                    let strategy = |d: $int| $name::new(d).map(|plan| plan.strategy());

                    assert_eq!(strategy(0), Err(DivisorError::DivideByZero));
                    assert_eq!(strategy(1), Ok(SignedStrategy::None));
                    assert_eq!(strategy(-1), Ok(SignedStrategy::PowerOfTwoNegative));
                    assert_eq!(strategy(<$int>::MIN), Ok(SignedStrategy::Branch));
                    assert_eq!(strategy(4), Ok(SignedStrategy::PowerOfTwoPositive));
                    assert_eq!(strategy(-4), Ok(SignedStrategy::PowerOfTwoNegative));
                    assert_eq!(strategy(5), Ok(SignedStrategy::MultiplyShift));
                    assert_eq!(strategy(-5), Ok(SignedStrategy::MultiplyShift));
                    assert_eq!(strategy(-3), Ok(SignedStrategy::MultiplySubtractShift));

                    let by_minus_1 = $name::new(-1).unwrap();
                    assert_eq!(by_minus_1.multiplier(), -1);
                    assert_eq!(by_minus_1.mask(), Some(0));

                    let by_minus_16 = $name::new(-16).unwrap();
                    assert_eq!(by_minus_16.shift(), 4);
                    assert_eq!(by_minus_16.mask(), Some(0xF));
                    assert_eq!($name::new(<$int>::MIN).unwrap().mask(), None);
                }

                #[test]
                fn min_by_minus_one_wraps() {
                    let plan = $name::new(-1).unwrap();
                    assert_eq!(plan.divide(<$int>::MIN), <$int>::MIN);
                    assert_eq!(plan.modulo(<$int>::MIN), 0);
                    assert_eq!(plan.div_rem(<$int>::MIN), (<$int>::MIN, 0));
                    assert_eq!(plan.abs_floor(<$int>::MIN), <$int>::MIN);
                }

                #[test]
                fn operators() {
                    let by_10 = $name::new(10).unwrap();
                    let mut x: $int = -123;

                    assert_eq!(x / by_10, -12);
                    assert_eq!(x / &by_10, -12);
                    assert_eq!(x % by_10, -3);
                    assert_eq!(x % &by_10, -3);

                    x /= by_10;
                    assert_eq!(x, -12);
                    x %= by_10;
                    assert_eq!(x, -2);

                    assert_eq!($name::try_from(10), Ok(by_10));
                }
            }
        };
    }

    signed_checks!(i16_checks, I16Divisor, i16);
    signed_checks!(i32_checks, I32Divisor, i32);
    signed_checks!(i64_checks, I64Divisor, i64);
}
