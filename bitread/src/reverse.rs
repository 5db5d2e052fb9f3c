//! Sequential reads toward decreasing bit offsets.
//!
//! A reverse cursor at offset `k` produces bit `k - 1` first. Multi-bit
//! reads return the same value a forward read of the same bits would, so a
//! field written forward can be read back from its end.
//!
//! ```rust
//! use bitread::{ReverseBitReader, read_bits};
//!
//! let buf: [u8; 8] = [0xFF, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00];
//! let mut reader = ReverseBitReader::new(&buf, 36);
//!
//! assert_eq!(reader.read_previous_bits(8), read_bits::<u32>(&buf, 28, 8));
//! assert_eq!(reader.bit_offset(), 28);
//! assert!(!reader.read_previous_bit());
//! ```

use safe_shift::masked;

use crate::error::{BitReadError, check_backward, check_width};
use crate::word::{Word, load_word, shl, shr};

/// A reverse bit cursor over a borrowed buffer.
///
/// The cached word is shifted so the next bit to produce sits at the MSB.
#[derive(Clone, Debug)]
pub struct ReverseCursor<'a, W: Word = u32> {
    data: &'a [u8],
    word_index: isize,
    current_word: W,
    bits_left: u32,
}

/// A reverse cursor over 32-bit words.
pub type ReverseBitReader<'a> = ReverseCursor<'a, u32>;

impl<'a, W: Word> ReverseCursor<'a, W> {
    /// Positions a cursor so that the first bit produced is bit `bit_offset - 1`.
    ///
    /// Reads take the top bits of the cached word with a single shift, so
    /// unlike the forward cursor no extraction strategy is involved.
    pub fn new(data: &'a [u8], bit_offset: usize) -> Self {
        let mut cursor = Self {
            data,
            word_index: 0,
            current_word: W::ZERO,
            bits_left: 0,
        };
        cursor.reset(data, bit_offset);
        cursor
    }

    /// Re-targets the cursor at `bit_offset` bits into `data`.
    ///
    /// An offset on a word boundary caches the word below it with every bit
    /// available, so offset 0 caches word -1.
    #[inline]
    pub fn reset(&mut self, data: &'a [u8], bit_offset: usize) {
        // 1..=BITS rather than 0..BITS
        let bit_address = masked::<W, usize>(bit_offset.wrapping_sub(1)) + 1;

        self.data = data;
        self.word_index =
            (bit_offset >> W::INDEX_SHIFT) as isize - (bit_address >> W::INDEX_SHIFT) as isize;
        self.current_word = shl(
            load_word::<W>(data, self.word_index),
            W::BITS - bit_address,
        );
        self.bits_left = bit_address;
    }

    #[inline]
    pub fn seek(&mut self, bit_offset: usize) {
        self.reset(self.data, bit_offset);
    }

    #[inline]
    pub fn read_previous_bit(&mut self) -> bool {
        if self.bits_left == 0 {
            self.retreat_word();
        }
        self.debug_check_start(1);

        self.bits_left -= 1;
        let bit = shr(self.current_word, W::BITS - 1).low_bit();
        self.current_word = shl(self.current_word, 1);
        bit
    }

    /// Reads the `num_bits` bits below the cursor; the bit just below the
    /// cursor becomes bit `num_bits - 1` of the result.
    ///
    /// `num_bits` must be below `W::BITS`.
    #[inline]
    pub fn read_previous_bits(&mut self, num_bits: u32) -> W {
        self.debug_check_start(num_bits);

        if num_bits > self.bits_left {
            let high = top_bits(self.current_word, self.bits_left);
            let needed = num_bits - self.bits_left;
            self.retreat_word();

            let previous_word = self.current_word;
            let low = top_bits(previous_word, needed);

            self.current_word = shl(previous_word, needed);
            self.bits_left = W::BITS - needed;
            shl(high, needed) | low
        } else {
            let result = top_bits(self.current_word, num_bits);
            self.bits_left -= num_bits;
            self.current_word = shl(self.current_word, num_bits);
            result
        }
    }

    /// Reads an `num_bits`-wide ZigZag-encoded field below the cursor.
    #[inline]
    pub fn read_previous_signed(&mut self, num_bits: u32) -> W::Signed {
        safe_shift::zigzag_decode::<W::Signed>(self.read_previous_bits(num_bits))
    }

    /// [`read_previous_bits`](Self::read_previous_bits) that validates the
    /// width and the start of the buffer first. A rejected read leaves the
    /// cursor untouched.
    pub fn try_read_previous_bits(&mut self, num_bits: u32) -> Result<W, BitReadError> {
        check_width(num_bits, W::BITS)?;
        check_backward(self.bit_offset(), num_bits)?;
        Ok(self.read_previous_bits(num_bits))
    }

    /// Steps back over `num_bits` bits.
    #[inline]
    pub fn skip_previous_bits(&mut self, num_bits: usize) {
        if num_bits < self.bits_left as usize {
            self.bits_left -= num_bits as u32;
            self.current_word = shl(self.current_word, num_bits as u32);
        } else {
            debug_assert!(
                num_bits <= self.bit_offset(),
                "reverse skip of {num_bits} bits from {} passes the buffer start",
                self.bit_offset()
            );
            let target = self.bit_offset().saturating_sub(num_bits);
            self.seek(target);
        }
    }

    /// Bits between the start of the buffer and the cursor.
    #[inline]
    pub fn bit_offset(&self) -> usize {
        usize::try_from(self.bit_position()).unwrap_or(0)
    }

    /// Bits left before the start of the buffer.
    pub fn remaining_bits(&self) -> usize {
        self.bit_offset()
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn word_index(&self) -> isize {
        self.word_index
    }

    /// Unread bits of the cached word, next bit at the MSB.
    pub fn current_word(&self) -> W {
        self.current_word
    }

    pub fn bits_left(&self) -> u32 {
        self.bits_left
    }

    #[inline(always)]
    fn bit_position(&self) -> isize {
        (self.word_index << W::INDEX_SHIFT) + self.bits_left as isize
    }

    #[inline(always)]
    fn retreat_word(&mut self) {
        self.word_index -= 1;
        self.current_word = load_word::<W>(self.data, self.word_index);
        self.bits_left = W::BITS;
    }

    #[inline(always)]
    fn debug_check_start(&self, num_bits: u32) {
        debug_assert!(
            self.bit_position() >= num_bits as isize,
            "reverse read of {num_bits} bits at {} passes the buffer start",
            self.bit_position()
        );
    }
}

/// The top `num_bits` bits of `word`, moved down to the LSB.
#[inline(always)]
fn top_bits<W: Word>(word: W, num_bits: u32) -> W {
    // a shift by BITS would wrap to a shift by 0
    if num_bits == 0 {
        W::ZERO
    } else {
        shr(word, W::BITS - num_bits)
    }
}

/// Yields one bit per step, walking back to the start of the buffer.
impl<W: Word> Iterator for ReverseCursor<'_, W> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.remaining_bits() == 0 {
            None
        } else {
            Some(self.read_previous_bit())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining_bits();
        (remaining, Some(remaining))
    }
}

impl<W: Word> ExactSizeIterator for ReverseCursor<'_, W> {}
