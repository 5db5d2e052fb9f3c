//! Bit-by-bit reference reading and bit-width helpers.

use safe_shift::zigzag_encode;

/// Reads `bit_width` bits at `bit_offset`, one bit at a time, LSB first.
///
/// Slow but obviously correct: the word-based readers are checked against
/// it. Bits outside `slice` read as zero, the same rule
/// [`load_word`](crate::load_word) uses.
pub fn get_bits(slice: &[u8], bit_offset: usize, bit_width: usize) -> u64 {
    let mut value = 0u64;

    for i in 0..bit_width.min(64) {
        value |= (get_bit(slice, bit_offset + i) as u64) << i;
    }

    value
}

/// The single bit at `bit_offset`.
pub fn get_bit(slice: &[u8], bit_offset: usize) -> bool {
    let byte = bit_offset / 8;
    let bit_in_byte = bit_offset % 8;

    slice
        .get(byte)
        .is_some_and(|b| (b >> bit_in_byte) & 1 == 1)
}

/// Number of bits needed to store `number`: `0 → 0`, `255 → 8`, `256 → 9`.
pub const fn required_bits(number: u64) -> u32 {
    u64::BITS - number.leading_zeros()
}

/// Width of a field that stores every value in `min..=max` ZigZag-encoded.
pub fn required_bits_signed(min: i64, max: i64) -> u32 {
    required_bits(zigzag_encode(min).max(zigzag_encode(max)))
}
