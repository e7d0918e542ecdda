//! Magic number search, after Granlund and Montgomery's
//! [Division by invariant integers using multiplication](https://gmplib.org/~tege/divcnst-pldi94.pdf)
//! in the formulation of Hacker's Delight, chapter 10.
//!
//! Both searches walk `p` upwards from `W - 1`, maintaining
//! `2^p / nc` and `2^p / d` (quotient and remainder) by doubling, and stop
//! at the first `p` for which `2^p / d + 1` is close enough to the true
//! reciprocal to be exact for every `W`-bit dividend.

use crate::bits::AbsNoBranch;

/// A magic multiplier and its shift, as found by the search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Magic<T> {
    pub multiplier: T,
    /// Unsigned: the true multiplier is `multiplier + 2^W`; the kernel must
    /// add the dividend back in (and this shift is one less to account for
    /// the averaging step).  Signed: the multiplier's sign disagrees with
    /// the divisor's; the kernel must add or subtract the dividend.
    pub needs_correction: bool,
    pub shift: u8,
}

macro_rules! unsigned_magic {
    ($(#[$attr:meta])* $name:ident, $int:ty) => {
        $(#[$attr])*
        ///
        /// `divisor` must not be 0, a power of two, or have its top bit
        /// set: the classifier handles those without a search.
        #[must_use]
        pub fn $name(divisor: $int) -> Magic<$int> {
            const BITS: u32 = <$int>::BITS;
            const HALF: $int = 1 << (BITS - 1);

            debug_assert!(divisor > 2 && divisor < HALF);
            debug_assert!(divisor & (divisor - 1) != 0);

            // nc = 2^W - 1 - (2^W mod d): the largest dividend that is
            // one less than a multiple of d.
            let nc = <$int>::MAX - divisor.wrapping_neg() % divisor;

            let mut p = BITS - 1;
            let mut q1 = HALF / nc;
            let mut r1 = HALF - q1 * nc;
            let mut q2 = (HALF - 1) / divisor;
            let mut r2 = (HALF - 1) - q2 * divisor;
            let mut needs_correction = false;

            loop {
                p += 1;

                if r1 >= nc - r1 {
                    q1 = q1.wrapping_mul(2).wrapping_add(1);
                    r1 = r1.wrapping_mul(2).wrapping_sub(nc);
                } else {
                    q1 = q1.wrapping_mul(2);
                    r1 = r1.wrapping_mul(2);
                }

                if r2 + 1 >= divisor - r2 {
                    if q2 >= HALF - 1 {
                        needs_correction = true;
                    }
                    q2 = q2.wrapping_mul(2).wrapping_add(1);
                    r2 = r2.wrapping_mul(2).wrapping_add(1).wrapping_sub(divisor);
                } else {
                    if q2 >= HALF {
                        needs_correction = true;
                    }
                    q2 = q2.wrapping_mul(2);
                    r2 = r2.wrapping_mul(2).wrapping_add(1);
                }

                let delta = divisor - 1 - r2;
                if p >= 2 * BITS || !(q1 < delta || (q1 == delta && r1 == 0)) {
                    break;
                }
            }

            Magic {
                multiplier: q2.wrapping_add(1),
                needs_correction,
                shift: (p - BITS - u32::from(needs_correction)) as u8,
            }
        }
    };
}

macro_rules! signed_magic {
    ($(#[$attr:meta])* $name:ident, $int:ty, $uint:ty) => {
        $(#[$attr])*
        ///
        /// `divisor` must not be 0, +/-1, +/- a power of two or `MIN`: the
        /// classifier handles those without a search.
        #[must_use]
        pub fn $name(divisor: $int) -> Magic<$int> {
            const BITS: u32 = <$int>::BITS;
            const HALF: $uint = 1 << (BITS - 1);

            let abs_d = divisor.abs_no_branch();
            debug_assert!(abs_d > 2 && abs_d < HALF);
            debug_assert!(abs_d & (abs_d - 1) != 0);

            // |nc|, where nc is the most extreme dividend of the divisor's
            // sign that is one away from a multiple of d.
            let t = HALF + ((divisor as $uint) >> (BITS - 1));
            let abs_nc = t - 1 - t % abs_d;

            let mut p = BITS - 1;
            let mut q1 = HALF / abs_nc;
            let mut r1 = HALF - q1 * abs_nc;
            let mut q2 = HALF / abs_d;
            let mut r2 = HALF - q2 * abs_d;

            loop {
                p += 1;

                q1 = q1.wrapping_mul(2);
                r1 = r1.wrapping_mul(2);
                if r1 >= abs_nc {
                    q1 = q1.wrapping_add(1);
                    r1 = r1.wrapping_sub(abs_nc);
                }

                q2 = q2.wrapping_mul(2);
                r2 = r2.wrapping_mul(2);
                if r2 >= abs_d {
                    q2 = q2.wrapping_add(1);
                    r2 = r2.wrapping_sub(abs_d);
                }

                let delta = abs_d - r2;
                if !(q1 < delta || (q1 == delta && r1 == 0)) {
                    break;
                }
            }

            let mut multiplier = q2.wrapping_add(1) as $int;
            if divisor < 0 {
                multiplier = multiplier.wrapping_neg();
            }

            Magic {
                multiplier,
                needs_correction: (multiplier < 0) != (divisor < 0),
                shift: (p - BITS) as u8,
            }
        }
    };
}

unsigned_magic!(
    /// Finds the magic number for an unsigned 16-bit divisor.
    magic_u16,
    u16
);
unsigned_magic!(
    /// Finds the magic number for an unsigned 32-bit divisor.
    magic_u32,
    u32
);
unsigned_magic!(
    /// Finds the magic number for an unsigned 64-bit divisor.
    magic_u64,
    u64
);

signed_magic!(
    /// Finds the magic number for a signed 16-bit divisor.
    magic_i16,
    i16,
    u16
);
signed_magic!(
    /// Finds the magic number for a signed 32-bit divisor.
    magic_i32,
    i32,
    u32
);
signed_magic!(
    /// Finds the magic number for a signed 64-bit divisor.
    magic_i64,
    i64,
    u64
);
