//! Property-based tests for total shifts and ZigZag encoding.

use proptest::prelude::*;
use safe_shift::{ShiftValue, masked, shift_left, shift_right, zigzag_decode, zigzag_encode};

proptest! {
    // -------------------------------------------------------------
    // 1. In-range shifts of non-negative bases match native shifts.
    // -------------------------------------------------------------
    #[test]
    fn prop_in_range_matches_native_u32(base in any::<u32>(), exp in 0u32..32) {
        prop_assert_eq!(shift_left(base, exp), base << exp);
        prop_assert_eq!(shift_right(base, exp), base >> exp);
    }

    #[test]
    fn prop_in_range_matches_native_i64(base in 0i64..=i64::MAX, exp in 0i32..64) {
        prop_assert_eq!(shift_left(base, exp), base.wrapping_shl(exp as u32));
        prop_assert_eq!(shift_right(base, exp), base >> exp);
    }

    // -------------------------------------------------------------
    // 2. Negative bases shift right arithmetically and left with wraparound.
    // -------------------------------------------------------------
    #[test]
    fn prop_negative_base_is_arithmetic(base in i32::MIN..0, exp in 0u32..32) {
        prop_assert_eq!(shift_right(base, exp), base >> exp);
        prop_assert_eq!(shift_left(base, exp), base.wrapping_shl(exp));
    }

    #[test]
    fn prop_negative_i8_base(base in i8::MIN..0, exp in 0u8..8) {
        prop_assert_eq!(shift_right(base, exp), base >> exp);
        prop_assert_eq!(shift_left(base, exp), base.wrapping_shl(exp as u32));
    }

    // -------------------------------------------------------------
    // 3. Exponents wrap modulo the width of the base.
    // -------------------------------------------------------------
    #[test]
    fn prop_exponent_wraps(base in any::<i32>(), exp in 0i64..=i64::MAX) {
        let reduced = exp % 32;
        prop_assert_eq!(shift_left(base, exp), shift_left(base, reduced));
        prop_assert_eq!(shift_right(base, exp), shift_right(base, reduced));
    }

    #[test]
    fn prop_masking_is_idempotent(exp in any::<u64>()) {
        let once = masked::<u32, u64>(exp);
        prop_assert_eq!(masked::<u32, u32>(once), once);
        prop_assert!(once < 32);
    }

    // -------------------------------------------------------------
    // 4. A negative exponent shifts the other way.
    // -------------------------------------------------------------
    #[test]
    fn prop_negative_exponent_flips(base in any::<i32>(), exp in 1i32..32) {
        prop_assert_eq!(shift_left(base, -exp), shift_right(base, exp));
        prop_assert_eq!(shift_right(base, -exp), shift_left(base, exp));
    }

    #[test]
    fn prop_negative_exponent_unsigned_base(base in any::<u64>(), exp in 1i16..64) {
        prop_assert_eq!(shift_left(base, -exp), base >> exp);
        prop_assert_eq!(shift_right(base, -exp), base << exp);
    }

    // -------------------------------------------------------------
    // 5. Totality: any base, any exponent, no panic.
    // -------------------------------------------------------------
    #[test]
    fn prop_total_for_any_operands(base in any::<i64>(), exp in any::<i128>()) {
        let _ = shift_left(base, exp);
        let _ = shift_right(base, exp);
        let _ = ShiftValue::NonNegative(base) << ShiftValue::NonNegative(exp);
        let _ = ShiftValue::NonNegative(base) >> ShiftValue::MaybeNegative(exp);
    }

    // -------------------------------------------------------------
    // 6. ZigZag is a bijection.
    // -------------------------------------------------------------
    #[test]
    fn prop_zigzag_roundtrip_i32(v in any::<i32>()) {
        prop_assert_eq!(zigzag_decode::<i32>(zigzag_encode(v)), v);
    }

    #[test]
    fn prop_zigzag_inverse_roundtrip_u64(v in any::<u64>()) {
        prop_assert_eq!(zigzag_encode(zigzag_decode::<i64>(v)), v);
    }

    #[test]
    fn prop_zigzag_orders_by_magnitude(v in -1_000_000i32..1_000_000) {
        let expected = if v < 0 { (-(v as i64)) * 2 - 1 } else { (v as i64) * 2 };
        prop_assert_eq!(zigzag_encode(v) as i64, expected);
    }
}
