//! High half of double-width products.
//!
//! Every multiply-based kernel needs `(x * y) >> W` computed in full
//! `2W`-bit precision.  Up to 32 bits that's a plain widening
//! multiplication; for 64 bits we either widen to 128 bits or build the
//! product out of four 32x32 partial products.

/// Returns the high `W` bits of the exact `2W`-bit product.
pub trait MulHi: Copy {
    #[must_use]
    fn mulhi(self, other: Self) -> Self;
}

impl MulHi for u16 {
    #[inline]
    fn mulhi(self, other: u16) -> u16 {
        ((u32::from(self) * u32::from(other)) >> 16) as u16
    }
}

impl MulHi for u32 {
    #[inline]
    fn mulhi(self, other: u32) -> u32 {
        ((u64::from(self) * u64::from(other)) >> 32) as u32
    }
}

impl MulHi for u64 {
    #[inline]
    #[cfg(all(target_pointer_width = "64", not(feature = "emulated-mulhi")))]
    fn mulhi(self, other: u64) -> u64 {
        mulhi_u64_widening(self, other)
    }

    #[inline]
    #[cfg(not(all(target_pointer_width = "64", not(feature = "emulated-mulhi"))))]
    fn mulhi(self, other: u64) -> u64 {
        mulhi_u64_emulated(self, other)
    }
}

impl MulHi for i16 {
    #[inline]
    fn mulhi(self, other: i16) -> i16 {
        ((i32::from(self) * i32::from(other)) >> 16) as i16
    }
}

impl MulHi for i32 {
    #[inline]
    fn mulhi(self, other: i32) -> i32 {
        ((i64::from(self) * i64::from(other)) >> 32) as i32
    }
}

impl MulHi for i64 {
    #[inline]
    #[cfg(all(target_pointer_width = "64", not(feature = "emulated-mulhi")))]
    fn mulhi(self, other: i64) -> i64 {
        mulhi_i64_widening(self, other)
    }

    #[inline]
    #[cfg(not(all(target_pointer_width = "64", not(feature = "emulated-mulhi"))))]
    fn mulhi(self, other: i64) -> i64 {
        mulhi_i64_emulated(self, other)
    }
}

/// Computes the high half of `x * y` with a native 128-bit product.
#[inline]
#[must_use]
pub fn mulhi_u64_widening(x: u64, y: u64) -> u64 {
    ((u128::from(x) * u128::from(y)) >> 64) as u64
}

/// Computes the high half of `x * y` from four 32x32 -> 64 partial
/// products, without any 128-bit arithmetic.
#[inline]
#[must_use]
pub fn mulhi_u64_emulated(x: u64, y: u64) -> u64 {
    const LO: u64 = 0xFFFF_FFFF;

    let (x_lo, x_hi) = (x & LO, x >> 32);
    let (y_lo, y_hi) = (y & LO, y >> 32);

    let lo_lo = x_lo * y_lo;
    let hi_lo = x_hi * y_lo;
    let lo_hi = x_lo * y_hi;
    let hi_hi = x_hi * y_hi;

    // (2^32 - 1) + (2^32 - 1) + (2^32 - 1)^2 == 2^64 - 1: the middle
    // column can't overflow.
    let middle = (lo_lo >> 32) + (hi_lo & LO) + lo_hi;

    hi_hi + (hi_lo >> 32) + (middle >> 32)
}

/// Computes the signed high half of `x * y` with a native 128-bit product.
#[inline]
#[must_use]
pub fn mulhi_i64_widening(x: i64, y: i64) -> i64 {
    ((i128::from(x) * i128::from(y)) >> 64) as i64
}

/// Computes the signed high half of `x * y` on top of the unsigned
/// emulation.
///
/// Reading a negative operand as unsigned adds `2^64` to it, which adds
/// the other operand to the high half of the product; subtract those
/// terms back out (selected with sign masks rather than branches).
#[inline]
#[must_use]
pub fn mulhi_i64_emulated(x: i64, y: i64) -> i64 {
    let hi = mulhi_u64_emulated(x as u64, y as u64);
    let x_fix = ((x >> 63) & y) as u64;
    let y_fix = ((y >> 63) & x) as u64;

    hi.wrapping_sub(x_fix).wrapping_sub(y_fix) as i64
}
