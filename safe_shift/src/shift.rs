//! Shift operators that are total for any base and any exponent.
//!
//! A [`ShiftValue`] tags a value with the domain the caller asserts it lives
//! in. The tag decides how the value behaves on either side of a shift:
//!
//! | operand  | `NonNegative`                  | `MaybeNegative`                         |
//! |----------|--------------------------------|-----------------------------------------|
//! | base     | plain logical shift            | `<<` negates around the shift, `>>` is arithmetic |
//! | exponent | reduced modulo the base width  | negative values shift the other way     |
//!
//! Tagging is never validated. A negative value tagged `NonNegative` gives a
//! well-defined but meaningless result, never a panic.

use core::ops::{Shl, Shr};

use crate::int::ShiftInt;

/// A shift operand tagged with the sign domain it is known to live in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftValue<T> {
    /// Guaranteed to be zero or positive.
    NonNegative(T),
    /// May be negative.
    MaybeNegative(T),
}

/// Reduces `exponent` modulo the bit width of `T`.
///
/// This mirrors the shift-count masking of common hardware. Masking twice
/// is the same as masking once.
#[inline(always)]
pub fn masked<T: ShiftInt, E: ShiftInt>(exponent: E) -> u32 {
    exponent.low_u32() & (T::BITS - 1)
}

/// `base << exponent`, defined for every base and every exponent.
#[inline(always)]
pub fn shift_left<T: ShiftInt, E: ShiftInt>(base: T, exponent: E) -> T {
    ShiftValue::classify(base) << ShiftValue::classify(exponent)
}

/// `base >> exponent`, defined for every base and every exponent. Negative
/// bases are shifted arithmetically.
#[inline(always)]
pub fn shift_right<T: ShiftInt, E: ShiftInt>(base: T, exponent: E) -> T {
    ShiftValue::classify(base) >> ShiftValue::classify(exponent)
}

impl<T: ShiftInt> ShiftValue<T> {
    /// Tags `value` as `MaybeNegative` for signed types and `NonNegative`
    /// for unsigned ones.
    #[inline(always)]
    pub fn classify(value: T) -> Self {
        if T::SIGNED {
            ShiftValue::MaybeNegative(value)
        } else {
            ShiftValue::NonNegative(value)
        }
    }

    #[inline(always)]
    pub fn value(self) -> T {
        match self {
            ShiftValue::NonNegative(v) | ShiftValue::MaybeNegative(v) => v,
        }
    }

    #[inline(always)]
    pub fn is_positive(self) -> bool {
        self.value().is_positive()
    }

    /// Shifts left by `exponent`. Same as the `<<` operator.
    #[inline(always)]
    pub fn shl<E: ShiftInt>(self, exponent: ShiftValue<E>) -> T {
        match exponent {
            ShiftValue::NonNegative(e) => self.shl_by(masked::<T, E>(e)),
            ShiftValue::MaybeNegative(e) if e.is_positive() => self.shl_by(masked::<T, E>(e)),
            ShiftValue::MaybeNegative(e) => self.shr_by(masked::<T, E>(e.wrapping_neg())),
        }
    }

    /// Shifts right by `exponent`. Same as the `>>` operator.
    #[inline(always)]
    pub fn shr<E: ShiftInt>(self, exponent: ShiftValue<E>) -> T {
        match exponent {
            ShiftValue::NonNegative(e) => self.shr_by(masked::<T, E>(e)),
            ShiftValue::MaybeNegative(e) if e.is_positive() => self.shr_by(masked::<T, E>(e)),
            ShiftValue::MaybeNegative(e) => self.shl_by(masked::<T, E>(e.wrapping_neg())),
        }
    }

    // `amount` is already masked below `T::BITS`.
    #[inline(always)]
    fn shl_by(self, amount: u32) -> T {
        match self {
            ShiftValue::NonNegative(b) => b.shl_wrapping(amount),
            ShiftValue::MaybeNegative(b) if !b.is_negative() => b.shl_wrapping(amount),
            ShiftValue::MaybeNegative(b) => b.wrapping_neg().shl_wrapping(amount).wrapping_neg(),
        }
    }

    #[inline(always)]
    fn shr_by(self, amount: u32) -> T {
        match self {
            ShiftValue::NonNegative(b) => b.shr_logical(amount),
            ShiftValue::MaybeNegative(b) if !b.is_negative() => b.shr_logical(amount),
            // ~(~b >> e) replicates the sign bit without an arithmetic shift
            ShiftValue::MaybeNegative(b) => b.complement().shr_logical(amount).complement(),
        }
    }
}

impl<T: ShiftInt, E: ShiftInt> Shl<ShiftValue<E>> for ShiftValue<T> {
    type Output = T;

    #[inline(always)]
    fn shl(self, exponent: ShiftValue<E>) -> T {
        ShiftValue::shl(self, exponent)
    }
}

impl<T: ShiftInt, E: ShiftInt> Shr<ShiftValue<E>> for ShiftValue<T> {
    type Output = T;

    #[inline(always)]
    fn shr(self, exponent: ShiftValue<E>) -> T {
        ShiftValue::shr(self, exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ShiftValue::{MaybeNegative, NonNegative};

    #[test]
    fn non_negative_shifts_match_native() {
        assert_eq!(NonNegative(1u32) << NonNegative(31u32), 1 << 31);
        assert_eq!(NonNegative(0x8000_0000u32) >> NonNegative(31u32), 1);
        assert_eq!(NonNegative(0xABu8) >> NonNegative(4i32), 0x0A);
    }

    #[test]
    fn exponent_wraps_around_base_width() {
        assert_eq!(NonNegative(1u32) << NonNegative(32u32), 1);
        assert_eq!(NonNegative(1u32) << NonNegative(33u32), 2);
        assert_eq!(NonNegative(0xFFu8) >> NonNegative(9u64), 0x7F);
        assert_eq!(NonNegative(1u64) << NonNegative(64 + 63u32), 1 << 63);
    }

    #[test]
    fn masking_uses_width_of_the_base() {
        assert_eq!(masked::<u8, u64>(9), 1);
        assert_eq!(masked::<u32, u8>(37), 5);
        assert_eq!(masked::<u64, i32>(-1), 63);
        assert_eq!(masked::<u32, u32>(masked::<u32, u32>(100)), masked::<u32, u32>(100));
    }

    #[test]
    fn negative_exponent_flips_direction() {
        assert_eq!(NonNegative(0x10u32) << MaybeNegative(-4i32), 0x01);
        assert_eq!(NonNegative(0x01u32) >> MaybeNegative(-4i32), 0x10);
        assert_eq!(MaybeNegative(-64i32) << MaybeNegative(-3i32), -8);
        assert_eq!(MaybeNegative(-1i32) >> MaybeNegative(-3i64), -8);
    }

    #[test]
    fn zero_exponent_is_identity() {
        assert_eq!(MaybeNegative(-5i16) << MaybeNegative(0i8), -5);
        assert_eq!(MaybeNegative(-5i16) >> MaybeNegative(0i8), -5);
        assert_eq!(NonNegative(7u16) >> MaybeNegative(0i8), 7);
    }

    #[test]
    fn negative_exponent_at_min_wraps() {
        // -(i32::MIN) wraps to i32::MIN, whose low five bits are zero
        assert_eq!(NonNegative(0x1234u32) << MaybeNegative(i32::MIN), 0x1234);
        assert_eq!(MaybeNegative(-3i8) >> MaybeNegative(i8::MIN), -3);
    }

    #[test]
    fn negative_base_right_shift_is_arithmetic() {
        assert_eq!(MaybeNegative(-1i32) >> NonNegative(31u32), -1);
        assert_eq!(MaybeNegative(-7i32) >> NonNegative(1u32), -4);
        assert_eq!(MaybeNegative(i64::MIN) >> NonNegative(63u32), -1);
        assert_eq!(MaybeNegative(-128i8) >> NonNegative(3u32), -16);
    }

    #[test]
    fn negative_base_left_shift_wraps() {
        assert_eq!(MaybeNegative(-3i32) << NonNegative(2u32), -12);
        assert_eq!(MaybeNegative(i32::MIN) << NonNegative(1u32), 0);
        assert_eq!(MaybeNegative(-1i8) << NonNegative(7u32), i8::MIN);
    }

    #[test]
    fn unsigned_base_tagged_maybe_negative_stays_logical() {
        assert_eq!(MaybeNegative(0u32) >> NonNegative(3u32), 0);
        assert_eq!(MaybeNegative(u32::MAX) >> NonNegative(28u32), 0xF);
    }

    #[test]
    fn free_functions_classify_operands() {
        assert_eq!(shift_left(3u8, 2u8), 12);
        assert_eq!(shift_left(3i64, -1i64), 1);
        assert_eq!(shift_right(-256i32, 4usize), -16);
        assert_eq!(shift_right(256u16, -4i32), 4096);
        assert_eq!(shift_right(1u32, 32u32), 1);
    }

    #[test]
    fn classify_picks_domain_from_signedness() {
        assert_eq!(ShiftValue::classify(5u32), NonNegative(5));
        assert_eq!(ShiftValue::classify(5i32), MaybeNegative(5));
        assert_eq!(ShiftValue::classify(-5i32).value(), -5);
        assert!(!ShiftValue::classify(0i8).is_positive());
    }
}
