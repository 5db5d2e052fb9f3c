//! The primitive operations a shift needs from an integer type.

/// An integer that can be used as a base or an exponent of a safe shift.
///
/// Implemented for every primitive integer. The methods never panic and
/// never depend on the target platform.
pub trait ShiftInt: Copy + PartialEq + core::fmt::Debug {
    /// Width of the type in bits. Always a power of two.
    const BITS: u32;

    /// Whether the type can hold negative values.
    const SIGNED: bool;

    fn is_negative(self) -> bool;

    fn is_positive(self) -> bool;

    /// Two's-complement negation with wraparound (`MIN` maps to itself).
    fn wrapping_neg(self) -> Self;

    /// Bitwise NOT.
    fn complement(self) -> Self;

    /// The low 32 bits of the two's-complement bit pattern.
    fn low_u32(self) -> u32;

    /// Left shift by `amount`, which must already be below `BITS`.
    fn shl_wrapping(self, amount: u32) -> Self;

    /// Right shift of the raw bit pattern by `amount`, filling with zeros.
    /// `amount` must already be below `BITS`.
    fn shr_logical(self, amount: u32) -> Self;
}

macro_rules! impl_shift_int_signed {
    ($($t:ty => $u:ty),* $(,)?) => {
        $(
            impl ShiftInt for $t {
                const BITS: u32 = <$t>::BITS;
                const SIGNED: bool = true;

                #[inline(always)]
                fn is_negative(self) -> bool {
                    self < 0
                }

                #[inline(always)]
                fn is_positive(self) -> bool {
                    self > 0
                }

                #[inline(always)]
                fn wrapping_neg(self) -> Self {
                    <$t>::wrapping_neg(self)
                }

                #[inline(always)]
                fn complement(self) -> Self {
                    !self
                }

                #[inline(always)]
                fn low_u32(self) -> u32 {
                    self as u32
                }

                #[inline(always)]
                fn shl_wrapping(self, amount: u32) -> Self {
                    self.wrapping_shl(amount)
                }

                #[inline(always)]
                fn shr_logical(self, amount: u32) -> Self {
                    (self as $u).wrapping_shr(amount) as $t
                }
            }
        )*
    };
}

macro_rules! impl_shift_int_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl ShiftInt for $t {
                const BITS: u32 = <$t>::BITS;
                const SIGNED: bool = false;

                #[inline(always)]
                fn is_negative(self) -> bool {
                    false
                }

                #[inline(always)]
                fn is_positive(self) -> bool {
                    self != 0
                }

                #[inline(always)]
                fn wrapping_neg(self) -> Self {
                    <$t>::wrapping_neg(self)
                }

                #[inline(always)]
                fn complement(self) -> Self {
                    !self
                }

                #[inline(always)]
                fn low_u32(self) -> u32 {
                    self as u32
                }

                #[inline(always)]
                fn shl_wrapping(self, amount: u32) -> Self {
                    self.wrapping_shl(amount)
                }

                #[inline(always)]
                fn shr_logical(self, amount: u32) -> Self {
                    self.wrapping_shr(amount)
                }
            }
        )*
    };
}

impl_shift_int_signed!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);

impl_shift_int_unsigned!(u8, u16, u32, u64, u128, usize);
