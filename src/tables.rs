//! Precomputed plans for the small divisors 3..=12 (and -3..=-12), so the
//! most common divisors skip the magic number search.
//!
//! Entry `i` describes the divisor `i + 3`.  The power-of-two entries (4
//! and 8) are never consulted, since the classifier handles powers of two
//! first, but they keep the tables directly indexable.

use crate::strategy::SignedStrategy;
use crate::strategy::UnsignedStrategy;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct SmallPlan<T, S> {
    pub multiplier: T,
    pub strategy: S,
    pub shift: u8,
}

const fn plan<T, S>(multiplier: T, strategy: S, shift: u8) -> SmallPlan<T, S> {
    SmallPlan {
        multiplier,
        strategy,
        shift,
    }
}

/// Smallest divisor covered by the tables.
pub(crate) const FIRST: u8 = 3;
/// Largest divisor covered by the tables.
pub(crate) const LAST: u8 = 12;

const U_SHIFT: UnsignedStrategy = UnsignedStrategy::Shift;
const U_MUL: UnsignedStrategy = UnsignedStrategy::MultiplyShift;
const U_ADD: UnsignedStrategy = UnsignedStrategy::MultiplyAddShift;

pub(crate) const SMALL_U16: [SmallPlan<u16, UnsignedStrategy>; 10] = [
    plan(0xAAAB, U_MUL, 1),
    plan(1, U_SHIFT, 2),
    plan(0xCCCD, U_MUL, 2),
    plan(0xAAAB, U_MUL, 2),
    plan(0x2493, U_ADD, 2),
    plan(1, U_SHIFT, 3),
    plan(0xE38F, U_MUL, 3),
    plan(0xCCCD, U_MUL, 3),
    plan(0xBA2F, U_MUL, 3),
    plan(0xAAAB, U_MUL, 3),
];

pub(crate) const SMALL_U32: [SmallPlan<u32, UnsignedStrategy>; 10] = [
    plan(0xAAAA_AAAB, U_MUL, 1),
    plan(1, U_SHIFT, 2),
    plan(0xCCCC_CCCD, U_MUL, 2),
    plan(0xAAAA_AAAB, U_MUL, 2),
    plan(0x2492_4925, U_ADD, 2),
    plan(1, U_SHIFT, 3),
    plan(0x38E3_8E39, U_MUL, 1),
    plan(0xCCCC_CCCD, U_MUL, 3),
    plan(0xBA2E_8BA3, U_MUL, 3),
    plan(0xAAAA_AAAB, U_MUL, 3),
];

pub(crate) const SMALL_U64: [SmallPlan<u64, UnsignedStrategy>; 10] = [
    plan(0xAAAA_AAAA_AAAA_AAAB, U_MUL, 1),
    plan(1, U_SHIFT, 2),
    plan(0xCCCC_CCCC_CCCC_CCCD, U_MUL, 2),
    plan(0xAAAA_AAAA_AAAA_AAAB, U_MUL, 2),
    plan(0x2492_4924_9249_2493, U_ADD, 2),
    plan(1, U_SHIFT, 3),
    plan(0xE38E_38E3_8E38_E38F, U_MUL, 3),
    plan(0xCCCC_CCCC_CCCC_CCCD, U_MUL, 3),
    plan(0x2E8B_A2E8_BA2E_8BA3, U_MUL, 1),
    plan(0xAAAA_AAAA_AAAA_AAAB, U_MUL, 3),
];

const S_POS: SignedStrategy = SignedStrategy::PowerOfTwoPositive;
const S_NEG: SignedStrategy = SignedStrategy::PowerOfTwoNegative;
const S_MUL: SignedStrategy = SignedStrategy::MultiplyShift;
const S_ADD: SignedStrategy = SignedStrategy::MultiplyAddShift;
const S_SUB: SignedStrategy = SignedStrategy::MultiplySubtractShift;

pub(crate) const SMALL_I16: [SmallPlan<i16, SignedStrategy>; 10] = [
    plan(0x5556, S_MUL, 0),
    plan(1, S_POS, 2),
    plan(0x6667, S_MUL, 1),
    plan(0x2AAB, S_MUL, 0),
    plan(0x4925, S_MUL, 1),
    plan(1, S_POS, 3),
    plan(0x1C72, S_MUL, 0),
    plan(0x6667, S_MUL, 2),
    plan(0x1746, S_MUL, 0),
    plan(0x2AAB, S_MUL, 1),
];

pub(crate) const SMALL_NEG_I16: [SmallPlan<i16, SignedStrategy>; 10] = [
    plan(0x5555, S_SUB, 1),
    plan(1, S_NEG, 2),
    plan(0x9999u16 as i16, S_MUL, 1),
    plan(0xD555u16 as i16, S_MUL, 0),
    plan(0xB6DBu16 as i16, S_MUL, 1),
    plan(1, S_NEG, 3),
    plan(0x1C71, S_SUB, 3),
    plan(0x9999u16 as i16, S_MUL, 2),
    plan(0x45D1, S_SUB, 3),
    plan(0xD555u16 as i16, S_MUL, 1),
];

pub(crate) const SMALL_I32: [SmallPlan<i32, SignedStrategy>; 10] = [
    plan(0x5555_5556, S_MUL, 0),
    plan(1, S_POS, 2),
    plan(0x6666_6667, S_MUL, 1),
    plan(0x2AAA_AAAB, S_MUL, 0),
    plan(0x9249_2493u32 as i32, S_ADD, 2),
    plan(1, S_POS, 3),
    plan(0x38E3_8E39, S_MUL, 1),
    plan(0x6666_6667, S_MUL, 2),
    plan(0x2E8B_A2E9, S_MUL, 1),
    plan(0x2AAA_AAAB, S_MUL, 1),
];

pub(crate) const SMALL_NEG_I32: [SmallPlan<i32, SignedStrategy>; 10] = [
    plan(0x5555_5555, S_SUB, 1),
    plan(1, S_NEG, 2),
    plan(0x9999_9999u32 as i32, S_MUL, 1),
    plan(0xD555_5555u32 as i32, S_MUL, 0),
    plan(0x6DB6_DB6D, S_SUB, 2),
    plan(1, S_NEG, 3),
    plan(0xC71C_71C7u32 as i32, S_MUL, 1),
    plan(0x9999_9999u32 as i32, S_MUL, 2),
    plan(0xD174_5D17u32 as i32, S_MUL, 1),
    plan(0xD555_5555u32 as i32, S_MUL, 1),
];

pub(crate) const SMALL_I64: [SmallPlan<i64, SignedStrategy>; 10] = [
    plan(0x5555_5555_5555_5556, S_MUL, 0),
    plan(1, S_POS, 2),
    plan(0x6666_6666_6666_6667, S_MUL, 1),
    plan(0x2AAA_AAAA_AAAA_AAAB, S_MUL, 0),
    plan(0x4924_9249_2492_4925, S_MUL, 1),
    plan(1, S_POS, 3),
    plan(0x1C71_C71C_71C7_1C72, S_MUL, 0),
    plan(0x6666_6666_6666_6667, S_MUL, 2),
    plan(0x2E8B_A2E8_BA2E_8BA3, S_MUL, 1),
    plan(0x2AAA_AAAA_AAAA_AAAB, S_MUL, 1),
];

pub(crate) const SMALL_NEG_I64: [SmallPlan<i64, SignedStrategy>; 10] = [
    plan(0x5555_5555_5555_5555, S_SUB, 1),
    plan(1, S_NEG, 2),
    plan(0x9999_9999_9999_9999u64 as i64, S_MUL, 1),
    plan(0xD555_5555_5555_5555u64 as i64, S_MUL, 0),
    plan(0xB6DB_6DB6_DB6D_B6DBu64 as i64, S_MUL, 1),
    plan(1, S_NEG, 3),
    plan(0x1C71_C71C_71C7_1C71, S_SUB, 3),
    plan(0x9999_9999_9999_9999u64 as i64, S_MUL, 2),
    plan(0xD174_5D17_45D1_745Du64 as i64, S_MUL, 1),
    plan(0xD555_5555_5555_5555u64 as i64, S_MUL, 1),
];
