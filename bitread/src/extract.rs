//! Strategy for extracting the low bits of a word.
//!
//! The software path masks; on x86-64 CPUs with BMI1 the `BEXTR` instruction
//! does the same in one step. The strategy is picked once, usually with
//! [`LsbExtractor::detect`], and handed to the readers. Both paths return
//! identical results for every width in `0..=W::BITS`.

use crate::word::{Word, get_lsb};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Strategy {
    #[default]
    Software,
    #[cfg(target_arch = "x86_64")]
    Bmi1,
}

/// A low-bit extraction capability.
///
/// Only constructible through [`software`](Self::software),
/// [`native`](Self::native) and [`detect`](Self::detect), so a native
/// extractor always runs on a CPU that supports it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LsbExtractor {
    strategy: Strategy,
}

impl LsbExtractor {
    /// Masking in plain Rust. Always available.
    pub const fn software() -> Self {
        Self {
            strategy: Strategy::Software,
        }
    }

    /// A hardware bit-field-extract instruction, if this CPU has one.
    pub fn native() -> Option<Self> {
        #[cfg(target_arch = "x86_64")]
        {
            if bmi1_available() {
                return Some(Self {
                    strategy: Strategy::Bmi1,
                });
            }
        }
        None
    }

    /// The native extractor when available, software otherwise.
    pub fn detect() -> Self {
        let extractor = Self::native().unwrap_or_else(Self::software);
        tracing::debug!(native = extractor.is_native(), "selected lsb extractor");
        extractor
    }

    pub fn is_native(self) -> bool {
        match self.strategy {
            Strategy::Software => false,
            #[cfg(target_arch = "x86_64")]
            Strategy::Bmi1 => true,
        }
    }

    /// The `num_bits` least significant bits of `word`; see [`get_lsb`].
    #[inline(always)]
    pub fn get_lsb<W: Word>(self, word: W, num_bits: u32) -> W {
        match self.strategy {
            Strategy::Software => get_lsb(word, num_bits),
            // BEXTR reads only the low byte of the length, so clamp first.
            // SAFETY: `Bmi1` is only constructed after `bmi1_available`
            #[cfg(target_arch = "x86_64")]
            Strategy::Bmi1 => unsafe { word.bextr_lsb(num_bits.min(W::BITS)) },
        }
    }
}

#[cfg(all(target_arch = "x86_64", feature = "std"))]
fn bmi1_available() -> bool {
    std::is_x86_feature_detected!("bmi1")
}

#[cfg(all(target_arch = "x86_64", not(feature = "std")))]
fn bmi1_available() -> bool {
    cfg!(target_feature = "bmi1")
}
