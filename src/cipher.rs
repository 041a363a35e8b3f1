//! Generic block cipher surface.
//!
//! [`BlockCipher`] is the interface a cipher framework drives: set a key,
//! then push one block at a time through `process_block`. Modes of
//! operation and padding live on top of it, not inside it.

use crate::error::ThreefishError;
use crate::params::CipherParameters;

/// Direction a configured cipher runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Encrypt => write!(f, "encrypt"),
            Mode::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// A keyed, fixed-size block transform.
pub trait BlockCipher {
    /// Name of the algorithm.
    fn algorithm_name(&self) -> &'static str;

    /// Block size in bytes.
    fn block_size(&self) -> usize;

    /// Keys the cipher for `mode`, replacing any previous key.
    ///
    /// # Errors
    /// Returns a configuration error when the parameters do not fit the
    /// cipher; the previous key stays in effect.
    fn init(&mut self, mode: Mode, params: CipherParameters) -> Result<(), ThreefishError>;

    /// Transforms one block from `input[in_off..]` into `output[out_off..]`.
    ///
    /// # Returns
    /// The number of bytes written, always [`block_size`](Self::block_size).
    ///
    /// # Errors
    /// Fails when the cipher is not keyed or either buffer is too short;
    /// `output` is left untouched in that case.
    fn process_block(
        &mut self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize, ThreefishError>;

    /// Returns the cipher to its post-`init` state.
    fn reset(&mut self);
}
