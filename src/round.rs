//! Threefish round function.
//!
//! One round mixes every disjoint word pair `(2j, 2j+1)` with the ARX
//! `mix` function and then relabels the words with the variant's
//! permutation. The inverse round undoes the relabeling first and then
//! applies `demix` to each pair.

use crate::variant::Variant;

/// Largest number of words in any variant.
pub(crate) const MAX_WORDS: usize = 16;

/// Mixes one word pair with rotation `d`.
///
/// `y0 = x0 + x1`, `y1 = rotl(x1, d) ^ y0`, modulo 2^64.
#[inline(always)]
pub fn mix(x0: u64, x1: u64, d: u32) -> (u64, u64) {
    let y0 = x0.wrapping_add(x1);
    let y1 = x1.rotate_left(d) ^ y0;
    (y0, y1)
}

/// Exact inverse of [`mix`].
#[inline(always)]
pub fn demix(y0: u64, y1: u64, d: u32) -> (u64, u64) {
    let x1 = (y1 ^ y0).rotate_right(d);
    let x0 = y0.wrapping_sub(x1);
    (x0, x1)
}

/// Applies round `round` (mix every pair, then permute) to `words` in place.
pub fn forward_round(words: &mut [u64], variant: Variant, round: usize) {
    let nw = variant.num_words();
    debug_assert_eq!(words.len(), nw);

    let rot = variant.rotations(round);
    let mut mixed = [0u64; MAX_WORDS];
    for (j, &d) in rot.iter().enumerate() {
        let (y0, y1) = mix(words[2 * j], words[2 * j + 1], d);
        mixed[2 * j] = y0;
        mixed[2 * j + 1] = y1;
    }

    for (w, &p) in words.iter_mut().zip(variant.permutation()) {
        *w = mixed[p];
    }
}

/// Undoes [`forward_round`] for the same `round`.
pub fn inverse_round(words: &mut [u64], variant: Variant, round: usize) {
    let nw = variant.num_words();
    debug_assert_eq!(words.len(), nw);

    let mut unpermuted = [0u64; MAX_WORDS];
    for (u, &p) in unpermuted.iter_mut().zip(variant.inverse_permutation()) {
        *u = words[p];
    }

    let rot = variant.rotations(round);
    for (j, &d) in rot.iter().enumerate() {
        let (x0, x1) = demix(unpermuted[2 * j], unpermuted[2 * j + 1], d);
        words[2 * j] = x0;
        words[2 * j + 1] = x1;
    }
}

/// Adds a subkey row to `words`, word by word, modulo 2^64.
#[inline]
pub fn inject_subkey(words: &mut [u64], subkey: &[u64]) {
    for (w, k) in words.iter_mut().zip(subkey) {
        *w = w.wrapping_add(*k);
    }
}

/// Subtracts a subkey row from `words`, word by word, modulo 2^64.
#[inline]
pub fn remove_subkey(words: &mut [u64], subkey: &[u64]) {
    for (w, k) in words.iter_mut().zip(subkey) {
        *w = w.wrapping_sub(*k);
    }
}
