//! Sequential reads toward increasing bit offsets.
//!
//! # Examples
//!
//! ```rust
//! use bitread::BitReader;
//!
//! // a 3-bit tag, a 12-bit length, then flags
//! let buf: [u8; 4] = [0b1010_1101, 0b0101_0011, 0x00, 0x00];
//! let mut reader = BitReader::new(&buf, 0);
//!
//! assert_eq!(reader.read_next_bits(3), 0b101);
//! assert_eq!(reader.read_next_bits(12), 0b1010_0111_0101);
//! assert!(!reader.read_next_bit());
//! assert_eq!(reader.bit_offset(), 16);
//! ```

use safe_shift::masked;

use crate::error::{BitReadError, check_forward, check_width};
use crate::extract::LsbExtractor;
use crate::word::{Word, load_word, shl, shr};

/// A forward bit cursor over a borrowed buffer.
///
/// The cursor caches the word it is reading from, shifted so the next bit
/// sits at the LSB, and only touches memory again when the cache runs dry.
#[derive(Clone, Debug)]
pub struct ForwardCursor<'a, W: Word = u32> {
    data: &'a [u8],
    word_index: isize,
    current_word: W,
    bits_left: u32,
    extractor: LsbExtractor,
}

/// A forward cursor over 32-bit words.
pub type BitReader<'a> = ForwardCursor<'a, u32>;

impl<'a, W: Word> ForwardCursor<'a, W> {
    /// Positions a cursor `bit_offset` bits into `data`.
    pub fn new(data: &'a [u8], bit_offset: usize) -> Self {
        Self::with_extractor(data, bit_offset, LsbExtractor::software())
    }

    pub fn with_extractor(data: &'a [u8], bit_offset: usize, extractor: LsbExtractor) -> Self {
        let mut cursor = Self {
            data,
            word_index: 0,
            current_word: W::ZERO,
            bits_left: 0,
            extractor,
        };
        cursor.reset(data, bit_offset);
        cursor
    }

    /// Re-targets the cursor at `bit_offset` bits into `data`.
    #[inline]
    pub fn reset(&mut self, data: &'a [u8], bit_offset: usize) {
        let bit_address = masked::<W, usize>(bit_offset);

        self.data = data;
        self.word_index = (bit_offset >> W::INDEX_SHIFT) as isize;
        self.current_word = shr(load_word::<W>(data, self.word_index), bit_address);
        self.bits_left = W::BITS - bit_address;
    }

    /// Moves to `bit_offset` within the current buffer.
    #[inline]
    pub fn seek(&mut self, bit_offset: usize) {
        self.reset(self.data, bit_offset);
    }

    #[inline]
    pub fn read_next_bit(&mut self) -> bool {
        if self.bits_left == 0 {
            self.advance_word();
        }
        self.debug_check_end(1);

        self.bits_left -= 1;
        let bit = self.current_word.low_bit();
        self.current_word = shr(self.current_word, 1);
        bit
    }

    /// Reads the next `num_bits` bits, the first one landing in bit 0.
    ///
    /// `num_bits` must be below `W::BITS`.
    #[inline]
    pub fn read_next_bits(&mut self, num_bits: u32) -> W {
        self.debug_check_end(num_bits);

        if num_bits > self.bits_left {
            // low part from the cache, high part from the next word
            let low = self.current_word;
            let low_bits = self.bits_left;
            self.advance_word();

            let needed = num_bits - low_bits;
            let next_word = self.current_word;
            let high = self.extractor.get_lsb(next_word, needed);

            self.current_word = shr(next_word, needed);
            self.bits_left = W::BITS - needed;
            low | shl(high, low_bits)
        } else {
            let result = self.extractor.get_lsb(self.current_word, num_bits);
            self.bits_left -= num_bits;
            self.current_word = shr(self.current_word, num_bits);
            result
        }
    }

    /// Reads an `num_bits`-wide ZigZag-encoded field and decodes it.
    #[inline]
    pub fn read_next_signed(&mut self, num_bits: u32) -> W::Signed {
        safe_shift::zigzag_decode::<W::Signed>(self.read_next_bits(num_bits))
    }

    /// [`read_next_bits`](Self::read_next_bits) that validates the width and
    /// the buffer bounds first. A rejected read leaves the cursor untouched.
    pub fn try_read_next_bits(&mut self, num_bits: u32) -> Result<W, BitReadError> {
        check_width(num_bits, W::BITS)?;
        check_forward(self.bit_offset(), num_bits, self.data.len())?;
        Ok(self.read_next_bits(num_bits))
    }

    /// Skips `num_bits` bits.
    #[inline]
    pub fn skip_next_bits(&mut self, num_bits: usize) {
        if num_bits < self.bits_left as usize {
            self.bits_left -= num_bits as u32;
            self.current_word = shr(self.current_word, num_bits as u32);
        } else {
            let target = self.bit_offset().saturating_add(num_bits);
            self.seek(target);
        }
    }

    /// Bits between the start of the buffer and the next bit to be read.
    #[inline]
    pub fn bit_offset(&self) -> usize {
        self.bit_position() as usize
    }

    /// Bits left before the end of the buffer.
    pub fn remaining_bits(&self) -> usize {
        (self.data.len() * 8).saturating_sub(self.bit_offset())
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Index of the cached word, in words from the start of the buffer.
    pub fn word_index(&self) -> isize {
        self.word_index
    }

    /// Unread bits of the cached word, next bit at the LSB.
    pub fn current_word(&self) -> W {
        self.current_word
    }

    pub fn bits_left(&self) -> u32 {
        self.bits_left
    }

    pub fn extractor(&self) -> LsbExtractor {
        self.extractor
    }

    #[inline(always)]
    fn bit_position(&self) -> isize {
        (self.word_index << W::INDEX_SHIFT) + (W::BITS - self.bits_left) as isize
    }

    #[inline(always)]
    fn advance_word(&mut self) {
        self.word_index += 1;
        self.current_word = load_word::<W>(self.data, self.word_index);
        self.bits_left = W::BITS;
    }

    #[inline(always)]
    fn debug_check_end(&self, num_bits: u32) {
        debug_assert!(
            self.bit_position() + num_bits as isize <= (self.data.len() * 8) as isize,
            "forward read of {num_bits} bits at {} runs past a {}-byte buffer",
            self.bit_position(),
            self.data.len()
        );
    }
}

/// Yields one bit per step until the end of the buffer.
impl<W: Word> Iterator for ForwardCursor<'_, W> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.remaining_bits() == 0 {
            None
        } else {
            Some(self.read_next_bit())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining_bits();
        (remaining, Some(remaining))
    }
}

impl<W: Word> ExactSizeIterator for ForwardCursor<'_, W> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random_access::read_bits;

    const SCENARIO: [u8; 8] = [0xFF, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00];

    #[test]
    fn reset_aligns_to_containing_word() {
        let reader = BitReader::new(&SCENARIO, 36);
        assert_eq!(reader.word_index(), 1);
        assert_eq!(reader.bits_left(), 28);
        assert_eq!(reader.current_word(), 0);
        assert_eq!(reader.bit_offset(), 36);

        let reader = BitReader::new(&SCENARIO, 32);
        assert_eq!(reader.word_index(), 1);
        assert_eq!(reader.bits_left(), 32);
        assert_eq!(reader.current_word(), 0x0F);
    }

    #[test]
    fn reads_single_bits_across_words() {
        let mut reader = BitReader::new(&SCENARIO, 6);
        let bits: Vec<bool> = (0..30).map(|_| reader.read_next_bit()).collect();
        assert_eq!(&bits[..2], &[true, true]);
        assert!(bits[2..26].iter().all(|b| !b));
        assert_eq!(&bits[26..], &[true, true, true, true]);
        assert_eq!(reader.bit_offset(), 36);
    }

    #[test]
    fn empty_cache_forces_reload() {
        let mut reader = BitReader::new(&SCENARIO, 24);
        assert_eq!(reader.read_next_bits(8), 0);
        assert_eq!(reader.bits_left(), 0);
        assert!(reader.read_next_bit());
        assert_eq!(reader.word_index(), 1);

        let mut reader = BitReader::new(&SCENARIO, 24);
        reader.read_next_bits(8);
        assert_eq!(reader.read_next_bits(4), 0x0F);
        assert_eq!(reader.bit_offset(), 36);
    }

    #[test]
    fn straddling_read_combines_words() {
        let mut reader = BitReader::new(&SCENARIO, 28);
        assert_eq!(reader.read_next_bits(8), 0xF0);
        assert_eq!(reader.bits_left(), 28);
        assert_eq!(reader.bit_offset(), 36);
    }

    #[test]
    fn zero_width_read_changes_nothing() {
        let mut reader = BitReader::new(&SCENARIO, 5);
        let before = (reader.word_index(), reader.current_word(), reader.bits_left());
        assert_eq!(reader.read_next_bits(0), 0);
        assert_eq!(
            (reader.word_index(), reader.current_word(), reader.bits_left()),
            before
        );

        let mut reader = BitReader::new(&SCENARIO, 24);
        reader.read_next_bits(8);
        assert_eq!(reader.read_next_bits(0), 0);
        assert_eq!(reader.bit_offset(), 32);
    }

    #[test]
    fn sequential_reads_match_random_access() {
        let buf: [u8; 16] = core::array::from_fn(|i| (i as u8).wrapping_mul(73) ^ 0xA5);
        let widths = [3, 7, 1, 31, 0, 12, 5, 30, 9];
        let mut reader = BitReader::new(&buf, 2);
        let mut offset = 2;
        for n in widths {
            assert_eq!(reader.read_next_bits(n), read_bits::<u32>(&buf, offset, n));
            offset += n as usize;
            assert_eq!(reader.bit_offset(), offset);
        }
    }

    #[test]
    fn skip_within_and_across_words() {
        let mut reader = BitReader::new(&SCENARIO, 0);
        reader.skip_next_bits(4);
        assert_eq!(reader.read_next_bits(4), 0x0F);
        reader.skip_next_bits(24);
        assert_eq!(reader.bit_offset(), 32);
        assert_eq!(reader.read_next_bits(4), 0x0F);

        let mut reader = BitReader::new(&SCENARIO, 3);
        reader.skip_next_bits(29);
        assert_eq!(reader.word_index(), 1);
        assert_eq!(reader.read_next_bits(8), 0x0F);

        let mut reader = BitReader::new(&SCENARIO, 30);
        reader.skip_next_bits(0);
        assert_eq!(reader.bit_offset(), 30);
    }

    #[test]
    fn signed_reads_decode_zigzag() {
        // 5 → -3, 6 → 3
        let buf = [0b0110_0101u8, 0, 0, 0];
        let mut reader = BitReader::new(&buf, 0);
        assert_eq!(reader.read_next_signed(4), -3);
        assert_eq!(reader.read_next_signed(4), 3);
    }

    #[test]
    fn u64_words() {
        let mut reader = ForwardCursor::<u64>::new(&SCENARIO, 28);
        assert_eq!(reader.read_next_bits(8), 0xF0);
        assert_eq!(reader.bits_left(), 28);
        assert_eq!(reader.bit_offset(), 36);
    }

    #[test]
    fn checked_reads_stop_at_the_end() {
        let mut reader = BitReader::new(&SCENARIO, 60);
        assert_eq!(
            reader.try_read_next_bits(5),
            Err(BitReadError::OutOfBounds {
                bit_offset: 60,
                num_bits: 5,
                len_bits: 64
            })
        );
        assert_eq!(reader.bit_offset(), 60);
        assert_eq!(reader.try_read_next_bits(4), Ok(0));
        assert!(matches!(
            reader.try_read_next_bits(32),
            Err(BitReadError::InvalidBitWidth { .. })
        ));
    }

    #[test]
    fn iterates_to_the_end() {
        let reader = BitReader::new(&SCENARIO, 32);
        assert_eq!(reader.len(), 32);
        let ones = reader.filter(|&bit| bit).count();
        assert_eq!(ones, 4);

        let mut reader = BitReader::new(&SCENARIO, 64);
        assert_eq!(reader.next(), None);
    }

    #[test]
    fn native_extractor_reads_the_same() {
        let mut native = BitReader::with_extractor(&SCENARIO, 1, LsbExtractor::detect());
        let mut software = BitReader::new(&SCENARIO, 1);
        for n in [7, 20, 9, 25] {
            assert_eq!(native.read_next_bits(n), software.read_next_bits(n));
        }
    }

    #[test]
    fn huge_skip_saturates_at_the_end() {
        let mut reader = BitReader::new(&SCENARIO, 3);
        reader.skip_next_bits(usize::MAX);
        assert_eq!(reader.bit_offset(), usize::MAX);
        assert_eq!(reader.remaining_bits(), 0);
        assert_eq!(reader.next(), None);

        let mut reader = BitReader::new(&SCENARIO, 40);
        reader.skip_next_bits(usize::MAX - 7);
        assert_eq!(reader.remaining_bits(), 0);
    }
}
