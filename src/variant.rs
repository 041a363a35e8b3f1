//! Threefish block-size variants and their constant tables.
//!
//! Each variant fixes the number of 64-bit words per block, the number of
//! rounds, the word permutation applied after every round and the eight
//! rotation sets cycled by `round mod 8`.

use crate::error::ThreefishError;

/// Key-schedule parity constant (Skein 1.3).
pub const C240: u64 = 0x1BD1_1BDA_A9FC_1A22;

/// Tweak size in bytes, identical for every variant.
pub const TWEAK_SIZE: usize = 16;

/// Rounds between two subkey injections.
pub(crate) const ROUNDS_PER_INJECTION: usize = 4;

static P_4: [usize; 4] = [0, 3, 2, 1];
static P_4_INV: [usize; 4] = [0, 3, 2, 1];

static P_8: [usize; 8] = [2, 1, 4, 7, 6, 5, 0, 3];
static P_8_INV: [usize; 8] = [6, 1, 0, 7, 2, 5, 4, 3];

static P_16: [usize; 16] = [0, 9, 2, 13, 6, 11, 4, 15, 10, 7, 12, 3, 14, 5, 8, 1];
static P_16_INV: [usize; 16] = [0, 15, 2, 11, 6, 13, 4, 9, 14, 1, 8, 5, 10, 3, 12, 7];

static R_4: [[u32; 2]; 8] = [
    [14, 16],
    [52, 57],
    [23, 40],
    [5, 37],
    [25, 33],
    [46, 12],
    [58, 22],
    [32, 32],
];

static R_8: [[u32; 4]; 8] = [
    [46, 36, 19, 37],
    [33, 27, 14, 42],
    [17, 49, 36, 39],
    [44, 9, 54, 56],
    [39, 30, 34, 24],
    [13, 50, 10, 17],
    [25, 29, 39, 43],
    [8, 35, 56, 22],
];

static R_16: [[u32; 8]; 8] = [
    [24, 13, 8, 47, 8, 17, 22, 37],
    [38, 19, 10, 55, 49, 18, 23, 52],
    [33, 4, 51, 13, 34, 41, 59, 17],
    [5, 20, 48, 41, 47, 28, 16, 25],
    [41, 9, 37, 31, 12, 47, 44, 30],
    [16, 34, 56, 51, 4, 53, 42, 41],
    [31, 44, 47, 46, 19, 42, 44, 25],
    [9, 48, 35, 52, 23, 31, 37, 20],
];

/// Threefish block size, chosen once when the engine is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// 256-bit block and key, 4 words, 72 rounds.
    V256,
    /// 512-bit block and key, 8 words, 72 rounds.
    V512,
    /// 1024-bit block and key, 16 words, 80 rounds.
    V1024,
}

// The key schedule injects tweak words at `Nw-3` and `Nw-2`, which needs
// at least four words per block.
const _: () = {
    assert!(Variant::V256.num_words() >= 4);
    assert!(Variant::V512.num_words() >= 4);
    assert!(Variant::V1024.num_words() >= 4);
};

impl Variant {
    /// All supported variants, smallest first.
    pub const ALL: [Variant; 3] = [Variant::V256, Variant::V512, Variant::V1024];

    /// Selects the variant for a block size given in bits.
    ///
    /// # Errors
    /// Returns [`ThreefishError::UnsupportedBlockSize`] for anything other
    /// than 256, 512 or 1024.
    ///
    /// # Examples
    ///
    /// ```
    /// use threefish::Variant;
    ///
    /// assert_eq!(Variant::from_bits(512).unwrap(), Variant::V512);
    /// assert!(Variant::from_bits(128).is_err());
    /// ```
    pub fn from_bits(bits: usize) -> Result<Self, ThreefishError> {
        match bits {
            256 => Ok(Variant::V256),
            512 => Ok(Variant::V512),
            1024 => Ok(Variant::V1024),
            _ => Err(ThreefishError::UnsupportedBlockSize(bits)),
        }
    }

    /// Selects the variant for a block size given in bytes (32, 64 or 128).
    ///
    /// # Errors
    /// Returns [`ThreefishError::UnsupportedBlockSize`] with the size in bits.
    pub fn from_block_size(bytes: usize) -> Result<Self, ThreefishError> {
        Self::from_bits(bytes.saturating_mul(8))
    }

    /// Number of 64-bit words in a block (`Nw`).
    pub const fn num_words(self) -> usize {
        match self {
            Variant::V256 => 4,
            Variant::V512 => 8,
            Variant::V1024 => 16,
        }
    }

    /// Number of rounds (`Nr`).
    pub const fn rounds(self) -> usize {
        match self {
            Variant::V256 | Variant::V512 => 72,
            Variant::V1024 => 80,
        }
    }

    /// Block (and key) size in bytes.
    pub const fn block_size(self) -> usize {
        self.num_words() * 8
    }

    /// Block size in bits.
    pub const fn bits(self) -> usize {
        self.block_size() * 8
    }

    /// Number of subkey rows produced by the key schedule (`Nr/4 + 1`).
    pub const fn subkey_count(self) -> usize {
        self.rounds() / ROUNDS_PER_INJECTION + 1
    }

    /// Word permutation applied after mixing, encrypt direction.
    pub fn permutation(self) -> &'static [usize] {
        match self {
            Variant::V256 => &P_4,
            Variant::V512 => &P_8,
            Variant::V1024 => &P_16,
        }
    }

    /// Inverse of [`permutation`](Self::permutation).
    pub fn inverse_permutation(self) -> &'static [usize] {
        match self {
            Variant::V256 => &P_4_INV,
            Variant::V512 => &P_8_INV,
            Variant::V1024 => &P_16_INV,
        }
    }

    /// Rotation constants for `round`, one per word pair.
    pub fn rotations(self, round: usize) -> &'static [u32] {
        let set = round % 8;
        match self {
            Variant::V256 => &R_4[set],
            Variant::V512 => &R_8[set],
            Variant::V1024 => &R_16[set],
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Threefish-{}", self.bits())
    }
}
