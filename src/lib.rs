//! Threefish tweakable block cipher engine.
//!
//! Threefish is the ARX block cipher at the core of the Skein hash family.
//! It takes a key as long as its block and a 128-bit tweak, and comes in
//! three block sizes: 256, 512 and 1024 bits.
//!
//! This crate provides the single-block engine only. Modes of operation and
//! padding belong to the caller.
//!
//! # Architecture
//!
//! ```text
//! converter    (bytes <-> little-endian u64 words)
//!     |
//! key_schedule (key + tweak -> Nr/4 + 1 subkey rows)
//!     |
//! round        (mix + permute, and its inverse)
//!     |
//! Threefish    (Nr rounds, subkey injected every 4 rounds)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a 256-bit block:
//!
//! ```
//! use threefish::{BlockCipher, CipherParameters, Mode, Threefish, Variant};
//!
//! let key = [0x11u8; 32];
//! let tweak = [0x22u8; 16];
//!
//! let mut encoder = Threefish::new(Variant::V256);
//! encoder
//!     .init(Mode::Encrypt, CipherParameters::with_tweak(key, tweak))
//!     .unwrap();
//!
//! let mut decoder = Threefish::new(Variant::V256);
//! decoder
//!     .init(Mode::Decrypt, CipherParameters::with_tweak(key, tweak))
//!     .unwrap();
//!
//! let original = [42u8; 32];
//! let mut encrypted = [0u8; 32];
//! let mut decrypted = [0u8; 32];
//!
//! encoder.process_block(&original, 0, &mut encrypted, 0).unwrap();
//! assert_ne!(encrypted, original);
//!
//! decoder.process_block(&encrypted, 0, &mut decrypted, 0).unwrap();
//! assert_eq!(decrypted, original);
//! ```
//!
//! Pick the variant from a bit size:
//!
//! ```
//! use threefish::{BlockCipher, Threefish};
//!
//! let tf = Threefish::with_block_bits(1024).unwrap();
//! assert_eq!(tf.algorithm_name(), "Threefish");
//! assert_eq!(BlockCipher::block_size(&tf), 128);
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod key_schedule;
pub mod round;
pub mod utils;
pub mod variant;

mod cipher;
mod params;
mod threefish;

pub use cipher::{BlockCipher, Mode};
pub use error::{ErrorKind, ThreefishError};
pub use params::CipherParameters;
pub use threefish::{Threefish, ALGORITHM_NAME};
pub use variant::Variant;
