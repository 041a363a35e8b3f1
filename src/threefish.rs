//! Threefish: tweakable block cipher engine.
//!
//! Runs `Nr` rounds of mix + permute over a block of `Nw` little-endian
//! 64-bit words, injecting a subkey row before every fourth round and once
//! more after the last. Decryption walks the same rounds backwards.

use tracing::{debug, warn};

use crate::cipher::{BlockCipher, Mode};
use crate::error::ThreefishError;
use crate::key_schedule::SubkeyTable;
use crate::params::CipherParameters;
use crate::round::{forward_round, inject_subkey, inverse_round, remove_subkey};
use crate::utils::converter::{bytes_to_words, words_to_bytes};
use crate::variant::{Variant, ROUNDS_PER_INJECTION};

/// Algorithm name reported through [`BlockCipher::algorithm_name`].
pub const ALGORITHM_NAME: &str = "Threefish";

/// Keyed state: direction plus the subkeys of the last successful configure.
#[derive(Debug, Clone)]
struct CipherState {
    mode: Mode,
    subkeys: SubkeyTable,
}

/// Threefish block cipher for one fixed variant.
///
/// # Lifecycle
///
/// A new engine is uninitialized; [`configure`](Self::configure) keys it
/// and every later call replaces the key. All mutating calls take
/// `&mut self`, so one engine is driven from one place at a time.
#[derive(Debug, Clone)]
pub struct Threefish {
    variant: Variant,
    state: Option<CipherState>,
}

impl Default for Threefish {
    fn default() -> Self {
        Self::new(Variant::V256)
    }
}

impl Threefish {
    /// Creates an unkeyed engine for `variant`.
    ///
    /// # Examples
    ///
    /// ```
    /// use threefish::{Threefish, Variant};
    ///
    /// let tf = Threefish::new(Variant::V512);
    /// assert_eq!(tf.block_size(), 64);
    /// assert!(!tf.is_configured());
    /// ```
    pub fn new(variant: Variant) -> Self {
        Threefish {
            variant,
            state: None,
        }
    }

    /// Creates an unkeyed engine from a block size in bits.
    ///
    /// # Errors
    /// Returns [`ThreefishError::UnsupportedBlockSize`] unless `bits` is
    /// 256, 512 or 1024.
    ///
    /// ```
    /// use threefish::Threefish;
    ///
    /// assert!(Threefish::with_block_bits(1024).is_ok());
    /// assert!(Threefish::with_block_bits(2048).is_err());
    /// ```
    pub fn with_block_bits(bits: usize) -> Result<Self, ThreefishError> {
        Ok(Self::new(Variant::from_bits(bits)?))
    }

    /// Variant fixed at construction.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Block size in bytes (32, 64 or 128).
    pub fn block_size(&self) -> usize {
        self.variant.block_size()
    }

    /// Configured direction, or `None` before the first configure.
    pub fn mode(&self) -> Option<Mode> {
        self.state.as_ref().map(|s| s.mode)
    }

    /// Whether a key has been set.
    pub fn is_configured(&self) -> bool {
        self.state.is_some()
    }

    /// Keys the engine for `mode`.
    ///
    /// On success the subkey table is rebuilt from scratch and any previous
    /// key is discarded. On failure the previous state, keyed or not, is
    /// left exactly as it was.
    ///
    /// # Errors
    /// Returns [`ThreefishError::InvalidKeyLength`] when the key is not
    /// exactly one block long and [`ThreefishError::InvalidTweakLength`]
    /// when the tweak is not 16 bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use threefish::{CipherParameters, Mode, Threefish, Variant};
    ///
    /// let mut tf = Threefish::new(Variant::V256);
    /// tf.configure(Mode::Encrypt, CipherParameters::new(vec![0u8; 32])).unwrap();
    /// assert!(tf.is_configured());
    ///
    /// let bad = CipherParameters::new(vec![0u8; 64]);
    /// assert!(tf.configure(Mode::Decrypt, bad).is_err());
    /// assert_eq!(tf.mode(), Some(Mode::Encrypt));
    /// ```
    pub fn configure(&mut self, mode: Mode, params: CipherParameters) -> Result<(), ThreefishError> {
        let subkeys = match SubkeyTable::derive(self.variant, params.key(), params.tweak()) {
            Ok(subkeys) => subkeys,
            Err(err) => {
                warn!(variant = %self.variant, %mode, error = %err, "rejected threefish key");
                return Err(err);
            }
        };
        debug!(
            variant = %self.variant,
            %mode,
            subkeys = subkeys.rows(),
            default_tweak = !params.has_tweak(),
            "threefish configured"
        );
        self.state = Some(CipherState { mode, subkeys });
        Ok(())
    }

    /// Encrypts or decrypts one block, depending on the configured mode.
    ///
    /// Reads `block_size()` bytes from `input[in_off..]` and writes the same
    /// number to `output[out_off..]`. All checks run before anything is
    /// written.
    ///
    /// # Returns
    /// The number of bytes written (the block size).
    ///
    /// # Errors
    /// - [`ThreefishError::NotInitialized`] before the first configure.
    /// - [`ThreefishError::InputTooShort`] / [`ThreefishError::OutputTooShort`]
    ///   when a buffer cannot hold a full block at its offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use threefish::{CipherParameters, Mode, Threefish, Variant};
    ///
    /// let key = vec![7u8; 64];
    /// let tweak = vec![1u8; 16];
    ///
    /// let mut enc = Threefish::new(Variant::V512);
    /// enc.configure(Mode::Encrypt, CipherParameters::with_tweak(key.clone(), tweak.clone())).unwrap();
    /// let mut dec = Threefish::new(Variant::V512);
    /// dec.configure(Mode::Decrypt, CipherParameters::with_tweak(key, tweak)).unwrap();
    ///
    /// let plain = [42u8; 64];
    /// let mut cipher = [0u8; 64];
    /// let mut back = [0u8; 64];
    /// assert_eq!(enc.process_block(&plain, 0, &mut cipher, 0).unwrap(), 64);
    /// dec.process_block(&cipher, 0, &mut back, 0).unwrap();
    /// assert_eq!(back, plain);
    /// ```
    pub fn process_block(
        &self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize, ThreefishError> {
        let state = self.state.as_ref().ok_or(ThreefishError::NotInitialized)?;
        let block_size = self.block_size();
        check_room(input.len(), in_off, block_size).map_err(|available| {
            ThreefishError::InputTooShort {
                offset: in_off,
                needed: block_size,
                available,
            }
        })?;
        check_room(output.len(), out_off, block_size).map_err(|available| {
            ThreefishError::OutputTooShort {
                offset: out_off,
                needed: block_size,
                available,
            }
        })?;

        let mut block = bytes_to_words(input, block_size, in_off)?;
        match state.mode {
            Mode::Encrypt => encrypt_block(&state.subkeys, &mut block),
            Mode::Decrypt => decrypt_block(&state.subkeys, &mut block),
        }
        words_to_bytes(&block, output, out_off)?;
        Ok(block_size)
    }

    /// Encrypts a block of `Nw` words in place with the configured key,
    /// whatever the configured mode.
    ///
    /// # Errors
    /// [`ThreefishError::NotInitialized`] before the first configure,
    /// [`ThreefishError::InvalidBlockLength`] if `block` is not `Nw` words.
    pub fn encrypt_words(&self, block: &mut [u64]) -> Result<(), ThreefishError> {
        let subkeys = self.keyed_for(block)?;
        encrypt_block(subkeys, block);
        Ok(())
    }

    /// Decrypts a block of `Nw` words in place with the configured key,
    /// whatever the configured mode.
    ///
    /// # Errors
    /// Same as [`encrypt_words`](Self::encrypt_words).
    pub fn decrypt_words(&self, block: &mut [u64]) -> Result<(), ThreefishError> {
        let subkeys = self.keyed_for(block)?;
        decrypt_block(subkeys, block);
        Ok(())
    }

    /// No-op. Threefish keeps no per-message state beyond its key.
    pub fn reset(&mut self) {}

    fn keyed_for(&self, block: &[u64]) -> Result<&SubkeyTable, ThreefishError> {
        let state = self.state.as_ref().ok_or(ThreefishError::NotInitialized)?;
        let nw = self.variant.num_words();
        if block.len() != nw {
            return Err(ThreefishError::InvalidBlockLength {
                expected: nw,
                actual: block.len(),
            });
        }
        Ok(&state.subkeys)
    }
}

/// Returns `Err(available)` unless `len` holds `needed` bytes from `offset`.
fn check_room(len: usize, offset: usize, needed: usize) -> Result<(), usize> {
    match offset.checked_add(needed) {
        Some(end) if end <= len => Ok(()),
        _ => Err(len.saturating_sub(offset)),
    }
}

fn encrypt_block(subkeys: &SubkeyTable, v: &mut [u64]) {
    let variant = subkeys.variant();
    let nr = variant.rounds();
    for round in 0..nr {
        if round % ROUNDS_PER_INJECTION == 0 {
            inject_subkey(v, subkeys.row(round / ROUNDS_PER_INJECTION));
        }
        forward_round(v, variant, round);
    }
    inject_subkey(v, subkeys.row(nr / ROUNDS_PER_INJECTION));
}

fn decrypt_block(subkeys: &SubkeyTable, v: &mut [u64]) {
    let variant = subkeys.variant();
    let nr = variant.rounds();
    for round in (1..=nr).rev() {
        if round % ROUNDS_PER_INJECTION == 0 {
            remove_subkey(v, subkeys.row(round / ROUNDS_PER_INJECTION));
        }
        inverse_round(v, variant, round - 1);
    }
    remove_subkey(v, subkeys.row(0));
}

impl BlockCipher for Threefish {
    fn algorithm_name(&self) -> &'static str {
        ALGORITHM_NAME
    }

    fn block_size(&self) -> usize {
        self.variant.block_size()
    }

    fn init(&mut self, mode: Mode, params: CipherParameters) -> Result<(), ThreefishError> {
        self.configure(mode, params)
    }

    fn process_block(
        &mut self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize, ThreefishError> {
        Threefish::process_block(self, input, in_off, output, out_off)
    }

    fn reset(&mut self) {
        Threefish::reset(self)
    }
}
