//! # bitread
//!
//! A `no_std` compatible library for reading bit-packed fields.
//!
//! Fields are packed tightly at the bit level in a byte buffer made of
//! little-endian words, bit 0 being the least significant bit of byte 0.
//! Single fields are read with [`read_bits`]; runs of fields with a
//! [`BitReader`] (forward) or [`ReverseBitReader`] (backward).
//!
//! ```rust
//! use bitread::{BitReader, ReverseBitReader, read_bits, required_bits};
//!
//! let buf: [u8; 8] = [0xFF, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00];
//!
//! // Random access: bits 28..36 straddle the two words
//! assert_eq!(read_bits::<u32>(&buf, 0, 8), 0xFF);
//! assert_eq!(read_bits::<u32>(&buf, 28, 8), 0xF0);
//!
//! // Sequential access
//! let mut reader = BitReader::new(&buf, 28);
//! assert_eq!(reader.read_next_bits(4), 0x0);
//! assert_eq!(reader.read_next_bits(4), 0xF);
//!
//! let mut reader = ReverseBitReader::new(&buf, 36);
//! assert_eq!(reader.read_previous_bits(8), 0xF0);
//!
//! // Field widths
//! assert_eq!(required_bits(255), 8);
//! assert_eq!(required_bits(256), 9);
//! ```
//!
//! ## Buffer bounds
//!
//! Bytes outside the slice read as zero, so no read touches memory it does
//! not own. Producing payload bits outside the slice is still a caller bug
//! and trips a debug assertion; the `try_` methods and
//! [`read_bits_checked`] report it as a [`BitReadError`] instead.
//!
//! ## Hardware extraction
//!
//! On x86-64 CPUs with BMI1, [`LsbExtractor::detect`] picks the `BEXTR`
//! instruction for the final masking step. Results are identical either way.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod bit_ops;
pub mod error;
pub mod extract;
pub mod forward;
pub mod random_access;
pub mod reverse;
pub mod word;

pub use bit_ops::{required_bits, required_bits_signed};
pub use error::BitReadError;
pub use extract::LsbExtractor;
pub use forward::{BitReader, ForwardCursor};
pub use random_access::{read_bits, read_bits_checked, read_bits_with, read_signed_bits};
pub use reverse::{ReverseBitReader, ReverseCursor};
pub use word::{Word, get_lsb, load_word};

pub use safe_shift::{ShiftValue, ZigZag, zigzag_decode, zigzag_encode};
