//! Stateless reads of a single field at an arbitrary bit offset.

use safe_shift::masked;

use crate::error::{BitReadError, check_forward, check_width};
use crate::extract::LsbExtractor;
use crate::word::{Word, load_word, shl, shr};

/// Reads `num_bits` bits starting `bit_offset` bits into `data`.
///
/// Bits are numbered LSB first within little-endian words, so the first bit
/// of the field ends up as bit 0 of the result. `num_bits` must be below
/// `W::BITS`; larger widths return the combined words unmasked.
///
/// ```
/// use bitread::read_bits;
///
/// let buf = [0xFF, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00];
/// assert_eq!(read_bits::<u32>(&buf, 0, 8), 0xFF);
/// // bits 28..31 come from the first word, bits 32..35 from the second
/// assert_eq!(read_bits::<u32>(&buf, 28, 8), 0xF0);
/// ```
#[inline]
pub fn read_bits<W: Word>(data: &[u8], bit_offset: usize, num_bits: u32) -> W {
    read_bits_with(LsbExtractor::software(), data, bit_offset, num_bits)
}

/// [`read_bits`] with an explicit low-bit extraction strategy.
#[inline]
pub fn read_bits_with<W: Word>(
    extractor: LsbExtractor,
    data: &[u8],
    bit_offset: usize,
    num_bits: u32,
) -> W {
    debug_assert!(
        bit_offset.saturating_add(num_bits as usize) <= data.len().saturating_mul(8),
        "read of {num_bits} bits at {bit_offset} runs past a {}-byte buffer",
        data.len()
    );

    let word_index = (bit_offset >> W::INDEX_SHIFT) as isize;
    let bit_address = masked::<W, usize>(bit_offset);

    let first = shr(load_word::<W>(data, word_index), bit_address);
    let second = if num_bits > W::BITS - bit_address {
        shl(load_word::<W>(data, word_index + 1), W::BITS - bit_address)
    } else {
        W::ZERO
    };

    extractor.get_lsb(first | second, num_bits)
}

/// Reads an `num_bits`-wide ZigZag-encoded field and decodes it.
#[inline]
pub fn read_signed_bits<W: Word>(data: &[u8], bit_offset: usize, num_bits: u32) -> W::Signed {
    safe_shift::zigzag_decode::<W::Signed>(read_bits::<W>(data, bit_offset, num_bits))
}

/// [`read_bits`] that validates the width and the buffer bounds first.
pub fn read_bits_checked<W: Word>(
    data: &[u8],
    bit_offset: usize,
    num_bits: u32,
) -> Result<W, BitReadError> {
    check_width(num_bits, W::BITS)?;
    check_forward(bit_offset, num_bits, data.len())?;
    Ok(read_bits(data, bit_offset, num_bits))
}
