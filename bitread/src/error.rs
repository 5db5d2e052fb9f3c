#[cfg(feature = "std")]
use thiserror::Error;

/// Rejections from the checked read API.
///
/// The unchecked reads never fail; these only come from
/// [`read_bits_checked`](crate::read_bits_checked) and the `try_` cursor methods.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitReadError {
    #[cfg_attr(
        feature = "std",
        error("Bit width must be in the range 0..={max}, got {requested}")
    )]
    InvalidBitWidth { requested: u32, max: u32 },

    #[cfg_attr(
        feature = "std",
        error("Reading {num_bits} bits at bit offset {bit_offset} overruns a buffer of {len_bits} bits")
    )]
    OutOfBounds {
        bit_offset: usize,
        num_bits: u32,
        len_bits: usize,
    },

    #[cfg_attr(
        feature = "std",
        error("Reading {num_bits} bits backwards from bit offset {bit_offset} passes the start of the buffer")
    )]
    BeforeStart { bit_offset: usize, num_bits: u32 },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitReadError::InvalidBitWidth { requested, max } => {
                write!(f, "Bit width must be in the range 0..={}, got {}", max, requested)
            }
            BitReadError::OutOfBounds {
                bit_offset,
                num_bits,
                len_bits,
            } => write!(
                f,
                "Reading {} bits at bit offset {} overruns a buffer of {} bits",
                num_bits, bit_offset, len_bits
            ),
            BitReadError::BeforeStart {
                bit_offset,
                num_bits,
            } => write!(
                f,
                "Reading {} bits backwards from bit offset {} passes the start of the buffer",
                num_bits, bit_offset
            ),
        }
    }
}

/// Rejects widths a single read cannot return.
pub(crate) fn check_width(num_bits: u32, word_bits: u32) -> Result<(), BitReadError> {
    if num_bits < word_bits {
        Ok(())
    } else {
        tracing::debug!(num_bits, word_bits, "rejected bit width");
        Err(BitReadError::InvalidBitWidth {
            requested: num_bits,
            max: word_bits - 1,
        })
    }
}

/// Rejects forward reads that would produce bits past the end of `len_bytes`.
pub(crate) fn check_forward(
    bit_offset: usize,
    num_bits: u32,
    len_bytes: usize,
) -> Result<(), BitReadError> {
    let len_bits = len_bytes.saturating_mul(8);
    match bit_offset.checked_add(num_bits as usize) {
        Some(end) if end <= len_bits => Ok(()),
        _ => {
            tracing::debug!(bit_offset, num_bits, len_bits, "rejected out-of-bounds read");
            Err(BitReadError::OutOfBounds {
                bit_offset,
                num_bits,
                len_bits,
            })
        }
    }
}

/// Rejects reverse reads that would step before bit 0.
pub(crate) fn check_backward(bit_offset: usize, num_bits: u32) -> Result<(), BitReadError> {
    if num_bits as usize <= bit_offset {
        Ok(())
    } else {
        tracing::debug!(bit_offset, num_bits, "rejected read before buffer start");
        Err(BitReadError::BeforeStart {
            bit_offset,
            num_bits,
        })
    }
}
