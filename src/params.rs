//! Key and tweak carrier passed to [`BlockCipher::init`](crate::BlockCipher::init).

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::variant::TWEAK_SIZE;

/// All-zero tweak used when the caller supplies only a key.
const ZERO_TWEAK: [u8; TWEAK_SIZE] = [0u8; TWEAK_SIZE];

/// Key bytes with an optional tweak.
///
/// Lengths are not checked here; the engine validates them against its
/// variant when the parameters are applied.
///
/// # Examples
///
/// ```
/// use threefish::CipherParameters;
///
/// let params = CipherParameters::new(vec![0u8; 32]);
/// assert_eq!(params.tweak(), &[0u8; 16]);
///
/// let params = CipherParameters::with_tweak(vec![0u8; 32], vec![1u8; 16]);
/// assert_eq!(params.tweak(), &[1u8; 16]);
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CipherParameters {
    key: Vec<u8>,
    tweak: Option<Vec<u8>>,
}

impl CipherParameters {
    /// Key only; the tweak defaults to 16 zero bytes.
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        CipherParameters {
            key: key.into(),
            tweak: None,
        }
    }

    /// Key and explicit tweak.
    pub fn with_tweak(key: impl Into<Vec<u8>>, tweak: impl Into<Vec<u8>>) -> Self {
        CipherParameters {
            key: key.into(),
            tweak: Some(tweak.into()),
        }
    }

    /// Key bytes.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Tweak bytes, or the all-zero default when none was supplied.
    pub fn tweak(&self) -> &[u8] {
        self.tweak.as_deref().unwrap_or(&ZERO_TWEAK)
    }

    /// Whether a tweak was supplied explicitly.
    pub fn has_tweak(&self) -> bool {
        self.tweak.is_some()
    }
}

impl std::fmt::Debug for CipherParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherParameters")
            .field("key_len", &self.key.len())
            .field("tweak_len", &self.tweak.as_ref().map(Vec::len))
            .finish()
    }
}
