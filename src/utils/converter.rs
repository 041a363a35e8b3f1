//! Byte-to-word conversion utilities.
//!
//! Threefish reads and writes its 64-bit words in little-endian byte order:
//! the first byte of each 8-byte group is the least significant.

use crate::error::ThreefishError;

/// Converts `length` bytes of `input` starting at `offset` to 64-bit words.
///
/// Each group of 8 bytes is combined into a single `u64` where the first
/// byte occupies the least significant position.
///
/// # Parameters
/// - `input`: Source byte slice.
/// - `length`: Number of bytes to read; a positive multiple of 8.
/// - `offset`: Position in `input` of the first byte to read.
///
/// # Returns
/// A `Vec<u64>` containing `length / 8` words.
///
/// # Errors
/// Returns [`ThreefishError::InvalidByteArrayLength`] if `length` is zero or
/// not a multiple of 8, and [`ThreefishError::InputTooShort`] if `input` does
/// not hold `length` bytes from `offset`.
pub fn bytes_to_words(
    input: &[u8],
    length: usize,
    offset: usize,
) -> Result<Vec<u64>, ThreefishError> {
    if length == 0 || !length.is_multiple_of(8) {
        return Err(ThreefishError::InvalidByteArrayLength(length));
    }
    let end = offset
        .checked_add(length)
        .filter(|&end| end <= input.len())
        .ok_or(ThreefishError::InputTooShort {
            offset,
            needed: length,
            available: input.len().saturating_sub(offset),
        })?;

    let words = input[offset..end]
        .chunks_exact(8)
        .map(|chunk| {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            u64::from_le_bytes(word)
        })
        .collect();
    Ok(words)
}

/// Writes `input` words into `dest` as little-endian bytes starting at `offset`.
///
/// Nothing is written unless the whole run of `8 * input.len()` bytes fits.
///
/// # Errors
/// Returns [`ThreefishError::OutputTooShort`] if `dest` is too small.
pub fn words_to_bytes(input: &[u64], dest: &mut [u8], offset: usize) -> Result<(), ThreefishError> {
    let needed = input.len() * 8;
    let end = offset
        .checked_add(needed)
        .filter(|&end| end <= dest.len())
        .ok_or(ThreefishError::OutputTooShort {
            offset,
            needed,
            available: dest.len().saturating_sub(offset),
        })?;

    for (chunk, word) in dest[offset..end].chunks_exact_mut(8).zip(input) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_words_basic() {
        let bytes: [u8; 8] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];
        let result = bytes_to_words(&bytes, 8, 0).unwrap();
        assert_eq!(result, vec![0xEFCD_AB89_6745_2301]);
    }

    #[test]
    fn test_words_to_bytes_basic() {
        let words: [u64; 1] = [0x0123_4567_89AB_CDEF];
        let mut out = [0u8; 8];
        words_to_bytes(&words, &mut out, 0).unwrap();
        assert_eq!(out, [0xEF, 0xCD, 0xAB, 0x89, 0x67, 0x45, 0x23, 0x01]);
    }

    #[test]
    fn test_roundtrip() {
        let original: Vec<u8> = (0u8..32).collect();
        let words = bytes_to_words(&original, original.len(), 0).unwrap();
        assert_eq!(words.len(), 4);
        let mut back = vec![0u8; original.len()];
        words_to_bytes(&words, &mut back, 0).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_offset_read_and_write() {
        let mut input = vec![0xAAu8; 3];
        input.extend_from_slice(&[1, 0, 0, 0, 0, 0, 0, 0x80]);
        let words = bytes_to_words(&input, 8, 3).unwrap();
        assert_eq!(words, vec![0x8000_0000_0000_0001]);

        let mut out = [0xFFu8; 12];
        words_to_bytes(&words, &mut out, 4).unwrap();
        assert_eq!(&out[..4], &[0xFF; 4]);
        assert_eq!(&out[4..], &input[3..]);
    }

    #[test]
    fn test_bytes_to_words_invalid_length() {
        let bytes = [0u8; 16];
        assert_eq!(
            bytes_to_words(&bytes, 7, 0),
            Err(ThreefishError::InvalidByteArrayLength(7))
        );
        assert_eq!(
            bytes_to_words(&bytes, 0, 0),
            Err(ThreefishError::InvalidByteArrayLength(0))
        );
    }

    #[test]
    fn test_bytes_to_words_past_end() {
        let bytes = [0u8; 16];
        assert_eq!(
            bytes_to_words(&bytes, 16, 1),
            Err(ThreefishError::InputTooShort {
                offset: 1,
                needed: 16,
                available: 15
            })
        );
        assert!(bytes_to_words(&bytes, 8, usize::MAX).is_err());
    }

    #[test]
    fn test_words_to_bytes_too_short_leaves_dest_untouched() {
        let mut out = [0x55u8; 15];
        let result = words_to_bytes(&[u64::MAX, u64::MAX], &mut out, 0);
        assert_eq!(
            result,
            Err(ThreefishError::OutputTooShort {
                offset: 0,
                needed: 16,
                available: 15
            })
        );
        assert_eq!(out, [0x55u8; 15]);
    }

    #[test]
    fn test_all_ones() {
        let bytes = [0xFFu8; 8];
        let words = bytes_to_words(&bytes, 8, 0).unwrap();
        assert_eq!(words[0], u64::MAX);
        let mut back = [0u8; 8];
        words_to_bytes(&words, &mut back, 0).unwrap();
        assert_eq!(back, bytes);
    }
}
