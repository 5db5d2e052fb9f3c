//! # safe_shift
//!
//! Total, platform-independent bit shifts for every primitive integer.
//!
//! A shift in Rust panics in debug builds when the exponent is out of range,
//! and a negative exponent has no meaning at all. This crate wraps both the
//! base and the exponent in a [`ShiftValue`], which records whether the value
//! is known to be non-negative, and turns `base << exponent` and
//! `base >> exponent` into total functions:
//!
//! - exponents wrap modulo the bit width of the base, like the shift-count
//!   masking of x86 hardware;
//! - a negative exponent shifts the other way;
//! - a negative base shifts arithmetically (sign-preserving) to the right.
//!
//! ```rust
//! use safe_shift::{ShiftValue, shift_left, shift_right};
//!
//! // Exponents wrap around the width of the base.
//! assert_eq!(shift_left(1u32, 33), 2);
//!
//! // Negative exponents flip the direction.
//! assert_eq!(shift_left(-64i32, -3), -8);
//!
//! // Negative bases shift arithmetically.
//! assert_eq!(shift_right(-7i32, 1), -4);
//!
//! // Operands can also be tagged explicitly.
//! let word = ShiftValue::NonNegative(0xF0u32) >> ShiftValue::NonNegative(4u32);
//! assert_eq!(word, 0x0F);
//! ```
//!
//! The crate also provides [ZigZag](zigzag) encoding, which maps signed
//! integers onto unsigned ones so that small magnitudes stay small.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod int;
pub mod shift;
pub mod zigzag;

pub use int::ShiftInt;
pub use shift::{ShiftValue, masked, shift_left, shift_right};
pub use zigzag::{ZigZag, zigzag_decode, zigzag_encode};
