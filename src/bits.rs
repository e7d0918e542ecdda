//! Bit-twiddling helpers used while classifying divisors.

/// Bit queries over unsigned words.
pub trait BitUtils: Copy {
    /// Index of the lowest set bit, or the bit width when `self == 0`.
    fn trailing_zero_count(self) -> u32;

    /// Exactly one bit set.
    fn is_single_bit(self) -> bool;
}

/// Absolute value of a signed word, as the unsigned word of the same
/// width, without a data-dependent branch.
///
/// `|MIN|` doesn't fit the signed type but fits the unsigned one.
pub trait AbsNoBranch: Copy {
    type Unsigned;

    fn abs_no_branch(self) -> Self::Unsigned;
}

macro_rules! impl_bit_utils {
    ($($int:ty),*) => {
        $(
            impl BitUtils for $int {
                #[inline]
                fn trailing_zero_count(self) -> u32 {
                    // `trailing_zeros` already reports the width for zero.
                    self.trailing_zeros()
                }

                #[inline]
                fn is_single_bit(self) -> bool {
                    self != 0 && (self & self.wrapping_sub(1)) == 0
                }
            }
        )*
    };
}

impl_bit_utils!(u16, u32, u64);

macro_rules! impl_abs_no_branch {
    ($($int:ty => $uint:ty),*) => {
        $(
            impl AbsNoBranch for $int {
                type Unsigned = $uint;

                #[inline]
                fn abs_no_branch(self) -> $uint {
                    let q = self >> (<$int>::BITS - 1);
                    (self.wrapping_add(q) ^ q) as $uint
                }
            }
        )*
    };
}

impl_abs_no_branch!(i16 => u16, i32 => u32, i64 => u64);
