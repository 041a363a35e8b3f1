//! Error types for the Threefish library.

use thiserror::Error;

/// Broad classification of a [`ThreefishError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad key, tweak or variant supplied while setting the cipher up.
    Configuration,
    /// Operation invoked in the wrong lifecycle state.
    State,
    /// A buffer cannot hold a full block at the given offset, or a byte or
    /// word run has the wrong size.
    Length,
}

/// Errors produced by the Threefish library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThreefishError {
    /// Requested block size is not one of 256, 512 or 1024 bits.
    #[error("Unsupported block size of {0} bits, should be 256, 512 or 1024")]
    UnsupportedBlockSize(usize),
    /// Key length does not match the variant's block size.
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },
    /// Tweak length is not 16 bytes.
    #[error("Invalid tweak length: expected 16 bytes, got {actual}")]
    InvalidTweakLength { actual: usize },
    /// Byte array length is not a positive multiple of 8.
    #[error("Byte array length {0} is not a positive multiple of 8")]
    InvalidByteArrayLength(usize),
    /// `process_block` called before a key was set.
    #[error("Threefish not initialised")]
    NotInitialized,
    /// Not enough input bytes at the given offset.
    #[error("Input buffer too short: need {needed} bytes at offset {offset}, have {available}")]
    InputTooShort {
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// Word block does not have exactly `Nw` words.
    #[error("Invalid block length: expected {expected} words, got {actual}")]
    InvalidBlockLength { expected: usize, actual: usize },
    /// Not enough room in the output buffer at the given offset.
    #[error("Output buffer too short: need {needed} bytes at offset {offset}, have {available}")]
    OutputTooShort {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

impl ThreefishError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ThreefishError::UnsupportedBlockSize(_)
            | ThreefishError::InvalidKeyLength { .. }
            | ThreefishError::InvalidTweakLength { .. } => ErrorKind::Configuration,
            ThreefishError::NotInitialized => ErrorKind::State,
            ThreefishError::InvalidByteArrayLength(_)
            | ThreefishError::InputTooShort { .. }
            | ThreefishError::InvalidBlockLength { .. }
            | ThreefishError::OutputTooShort { .. } => ErrorKind::Length,
        }
    }
}
