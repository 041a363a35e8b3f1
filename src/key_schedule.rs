//! Threefish key schedule.
//!
//! Expands a key and a 128-bit tweak into `Nr/4 + 1` subkey rows. The key
//! is extended with a parity word and the tweak with `T2 = T0 ^ T1`; row
//! `s` takes `Nw` consecutive extended-key words starting at `s`, adds two
//! tweak words to positions `Nw-3` and `Nw-2`, and adds `s` to the last.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::ThreefishError;
use crate::utils::converter::bytes_to_words;
use crate::variant::{Variant, C240, TWEAK_SIZE};

/// Subkey rows derived from one key and tweak.
///
/// Stored flat, `Nw` words per row. Wiped when dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SubkeyTable {
    #[zeroize(skip)]
    variant: Variant,
    words: Vec<u64>,
}

impl SubkeyTable {
    /// Runs the key schedule.
    ///
    /// # Parameters
    /// - `variant`: Block size the table is built for.
    /// - `key`: Key bytes, exactly `variant.block_size()` long.
    /// - `tweak`: Tweak bytes, exactly 16 long.
    ///
    /// # Errors
    /// Returns [`ThreefishError::InvalidKeyLength`] or
    /// [`ThreefishError::InvalidTweakLength`]; no table is built in that case.
    pub fn derive(variant: Variant, key: &[u8], tweak: &[u8]) -> Result<Self, ThreefishError> {
        let nw = variant.num_words();
        if key.len() != variant.block_size() {
            return Err(ThreefishError::InvalidKeyLength {
                expected: variant.block_size(),
                actual: key.len(),
            });
        }
        if tweak.len() != TWEAK_SIZE {
            return Err(ThreefishError::InvalidTweakLength {
                actual: tweak.len(),
            });
        }

        let mut extended = bytes_to_words(key, key.len(), 0)?;
        let parity = extended.iter().fold(C240, |acc, k| acc ^ k);
        extended.push(parity);

        let t = bytes_to_words(tweak, TWEAK_SIZE, 0)?;
        let tweak_words = [t[0], t[1], t[0] ^ t[1]];

        let rows = variant.subkey_count();
        let mut words = Vec::with_capacity(rows * nw);
        for s in 0..rows {
            for i in 0..nw {
                let mut k = extended[(s + i) % (nw + 1)];
                if i == nw - 3 {
                    k = k.wrapping_add(tweak_words[s % 3]);
                } else if i == nw - 2 {
                    k = k.wrapping_add(tweak_words[(s + 1) % 3]);
                } else if i == nw - 1 {
                    k = k.wrapping_add(s as u64);
                }
                words.push(k);
            }
        }
        extended.zeroize();

        Ok(SubkeyTable { variant, words })
    }

    /// Variant this table was derived for.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Number of rows (`Nr/4 + 1`).
    pub fn rows(&self) -> usize {
        self.variant.subkey_count()
    }

    /// Subkey row `s`, `Nw` words long.
    ///
    /// # Panics
    /// Panics if `s >= self.rows()`.
    pub fn row(&self, s: usize) -> &[u64] {
        let nw = self.variant.num_words();
        &self.words[s * nw..(s + 1) * nw]
    }
}

impl std::fmt::Debug for SubkeyTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubkeyTable")
            .field("variant", &self.variant)
            .field("rows", &self.rows())
            .finish_non_exhaustive()
    }
}
