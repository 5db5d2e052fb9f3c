//! ZigZag encoding: signed integers interleaved onto the unsigned range.
//!
//! `0 → 0, -1 → 1, 1 → 2, -2 → 3, …`, so values of small magnitude need few
//! bits regardless of their sign.

use crate::int::ShiftInt;
use crate::shift::ShiftValue;

/// A signed integer with a ZigZag mapping onto its unsigned counterpart.
pub trait ZigZag: ShiftInt {
    type Unsigned: ShiftInt;

    fn zigzag_encode(self) -> Self::Unsigned;

    fn zigzag_decode(encoded: Self::Unsigned) -> Self;
}

/// ZigZag-encodes `num`.
#[inline(always)]
pub fn zigzag_encode<T: ZigZag>(num: T) -> T::Unsigned {
    num.zigzag_encode()
}

/// Inverse of [`zigzag_encode`].
#[inline(always)]
pub fn zigzag_decode<T: ZigZag>(encoded: T::Unsigned) -> T {
    T::zigzag_decode(encoded)
}

macro_rules! impl_zigzag {
    ($($t:ty => $u:ty),* $(,)?) => {
        $(
            impl ZigZag for $t {
                type Unsigned = $u;

                #[inline(always)]
                fn zigzag_encode(self) -> $u {
                    let doubled = ShiftValue::NonNegative(self as $u) << ShiftValue::NonNegative(1u32);
                    // all ones for negative input, all zeros otherwise
                    let sign = ShiftValue::MaybeNegative(self) >> ShiftValue::NonNegative(<$t>::BITS - 1);
                    doubled ^ (sign as $u)
                }

                #[inline(always)]
                fn zigzag_decode(encoded: $u) -> $t {
                    let half = ShiftValue::NonNegative(encoded) >> ShiftValue::NonNegative(1u32);
                    (half as $t) ^ ((encoded & 1) as $t).wrapping_neg()
                }
            }
        )*
    };
}

impl_zigzag!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);
