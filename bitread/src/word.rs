//! Machine words: little-endian loads and low-bit extraction.
//!
//! Every reader in this crate works one [`Word`] at a time. `u32` is the
//! canonical width; `u64` halves the number of loads for long fields.

use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, Sub};

use bytemuck::Pod;
use safe_shift::{ShiftInt, ShiftValue, ZigZag};

/// An unsigned machine word that bits are read in.
pub trait Word:
    ShiftInt
    + Pod
    + Eq
    + Default
    + Debug
    + BitOr<Output = Self>
    + BitAnd<Output = Self>
    + Sub<Output = Self>
{
    /// Size in bytes.
    const BYTES: usize;

    /// `log2(BITS)`: shifting a bit offset right by this gives a word index.
    const INDEX_SHIFT: u32;

    const ZERO: Self;
    const ONE: Self;

    /// The signed integer whose ZigZag encoding fits in this word.
    type Signed: ZigZag<Unsigned = Self>;

    /// Reinterprets a word read in little-endian byte order.
    fn from_le(self) -> Self;

    fn from_byte(byte: u8) -> Self;

    /// Whether the least significant bit is set.
    fn low_bit(self) -> bool;

    /// The `num_bits` low bits via the BMI1 `BEXTR` instruction.
    ///
    /// # Safety
    ///
    /// The CPU must support BMI1.
    #[cfg(target_arch = "x86_64")]
    unsafe fn bextr_lsb(self, num_bits: u32) -> Self;
}

macro_rules! impl_word {
    ($($t:ty => $signed:ty, $index_shift:expr, $bextr:ident);* $(;)?) => {
        $(
            impl Word for $t {
                const BYTES: usize = core::mem::size_of::<$t>();
                const INDEX_SHIFT: u32 = $index_shift;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                type Signed = $signed;

                #[inline(always)]
                fn from_le(self) -> Self {
                    <$t>::from_le(self)
                }

                #[inline(always)]
                fn from_byte(byte: u8) -> Self {
                    byte as $t
                }

                #[inline(always)]
                fn low_bit(self) -> bool {
                    self & 1 != 0
                }

                #[cfg(target_arch = "x86_64")]
                #[inline(always)]
                unsafe fn bextr_lsb(self, num_bits: u32) -> Self {
                    // SAFETY: forwarded from the caller
                    unsafe { $bextr(self, num_bits) }
                }
            }
        )*
    };
}

impl_word!(
    u32 => i32, 5, bextr_u32;
    u64 => i64, 6, bextr_u64;
);

#[cfg(target_arch = "x86_64")]
#[allow(unused_unsafe)]
#[target_feature(enable = "bmi1")]
unsafe fn bextr_u32(word: u32, num_bits: u32) -> u32 {
    unsafe { core::arch::x86_64::_bextr_u32(word, 0, num_bits) }
}

#[cfg(target_arch = "x86_64")]
#[allow(unused_unsafe)]
#[target_feature(enable = "bmi1")]
unsafe fn bextr_u64(word: u64, num_bits: u32) -> u64 {
    unsafe { core::arch::x86_64::_bextr_u64(word, 0, num_bits) }
}

/// Shifts `word` left by a count the caller knows to be non-negative.
#[inline(always)]
pub(crate) fn shl<W: Word>(word: W, amount: u32) -> W {
    ShiftValue::NonNegative(word) << ShiftValue::NonNegative(amount)
}

/// Shifts `word` right by a count the caller knows to be non-negative.
#[inline(always)]
pub(crate) fn shr<W: Word>(word: W, amount: u32) -> W {
    ShiftValue::NonNegative(word) >> ShiftValue::NonNegative(amount)
}

/// Loads the word at `word_index` from `data`, byte 0 being least significant.
///
/// Bytes that fall outside `data` read as zero, so any index is accepted,
/// including the negative ones a reverse cursor touches at offset 0.
#[inline(always)]
pub fn load_word<W: Word>(data: &[u8], word_index: isize) -> W {
    let Some(start) = word_index.checked_mul(W::BYTES as isize) else {
        return W::ZERO;
    };
    if let Ok(first) = usize::try_from(start) {
        let bytes = first
            .checked_add(W::BYTES)
            .and_then(|end| data.get(first..end));
        if let Some(bytes) = bytes {
            return bytemuck::pod_read_unaligned::<W>(bytes).from_le();
        }
    }
    load_word_partial(data, start)
}

// Straddles an edge of `data`: assemble byte by byte, zero-filling.
#[cold]
fn load_word_partial<W: Word>(data: &[u8], start: isize) -> W {
    let mut word = W::ZERO;
    for i in 0..W::BYTES {
        let Some(pos) = start.checked_add(i as isize) else {
            break;
        };
        let Ok(pos) = usize::try_from(pos) else {
            continue;
        };
        if let Some(&byte) = data.get(pos) {
            word = word | shl(W::from_byte(byte), 8 * i as u32);
        }
    }
    word
}

/// The `num_bits` least significant bits of `word`.
///
/// `0` yields `0`; `num_bits >= W::BITS` yields `word` unchanged.
#[inline(always)]
pub fn get_lsb<W: Word>(word: W, num_bits: u32) -> W {
    if num_bits >= W::BITS {
        word
    } else {
        word & (shl(W::ONE, num_bits) - W::ONE)
    }
}
