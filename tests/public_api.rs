//! Behaviour of the public engine surface: lifecycle, validation and
//! buffer handling.

use threefish::utils::converter;
use threefish::{
    BlockCipher, CipherParameters, ErrorKind, Mode, Threefish, ThreefishError, Variant,
};

/// Sentinel byte used to detect writes to output buffers.
const SENTINEL: u8 = 0xA5;

fn params(variant: Variant, seed: u8) -> CipherParameters {
    let key: Vec<u8> = (0..variant.block_size())
        .map(|i| seed.wrapping_mul(31).wrapping_add(i as u8))
        .collect();
    let tweak: Vec<u8> = (0..16).map(|i| seed ^ i as u8).collect();
    CipherParameters::with_tweak(key, tweak)
}

fn engine(variant: Variant, mode: Mode, seed: u8) -> Threefish {
    let mut tf = Threefish::new(variant);
    tf.init(mode, params(variant, seed)).unwrap();
    tf
}

// ═══════════════════════════════════════════════════════════════════════
// Configuration
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn configure_rejects_wrong_key_length() {
    for variant in Variant::ALL {
        let n = variant.block_size();
        for bad in [0, 16, n - 1, n + 1, n * 2] {
            let mut tf = Threefish::new(variant);
            let err = tf
                .init(Mode::Encrypt, CipherParameters::new(vec![0u8; bad]))
                .unwrap_err();
            assert_eq!(
                err,
                ThreefishError::InvalidKeyLength {
                    expected: n,
                    actual: bad
                }
            );
            assert_eq!(err.kind(), ErrorKind::Configuration);
            assert!(!tf.is_configured());
        }
    }
}

#[test]
fn configure_rejects_wrong_tweak_length() {
    for bad in [0usize, 8, 15, 17, 32] {
        let mut tf = Threefish::new(Variant::V512);
        let err = tf
            .init(
                Mode::Decrypt,
                CipherParameters::with_tweak(vec![0u8; 64], vec![0u8; bad]),
            )
            .unwrap_err();
        assert_eq!(err, ThreefishError::InvalidTweakLength { actual: bad });
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}

#[test]
fn unsupported_variant_is_a_configuration_error() {
    let err = Threefish::with_block_bits(128).unwrap_err();
    assert_eq!(err, ThreefishError::UnsupportedBlockSize(128));
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

/// A failed configure must leave the previous key and mode in force.
#[test]
fn failed_configure_keeps_previous_state() {
    let mut tf = engine(Variant::V256, Mode::Encrypt, 7);
    let plain = [0x3Cu8; 32];
    let mut before = [0u8; 32];
    tf.process_block(&plain, 0, &mut before, 0).unwrap();

    let bad = CipherParameters::with_tweak(vec![1u8; 32], vec![1u8; 12]);
    assert!(tf.init(Mode::Decrypt, bad).is_err());
    assert_eq!(tf.mode(), Some(Mode::Encrypt));

    let mut after = [0u8; 32];
    tf.process_block(&plain, 0, &mut after, 0).unwrap();
    assert_eq!(before, after);
}

#[test]
fn reconfigure_switches_direction() {
    let plain = [0x10u8; 64];
    let mut tf = engine(Variant::V512, Mode::Encrypt, 3);
    let mut encrypted = [0u8; 64];
    tf.process_block(&plain, 0, &mut encrypted, 0).unwrap();

    tf.init(Mode::Decrypt, params(Variant::V512, 3)).unwrap();
    assert_eq!(tf.mode(), Some(Mode::Decrypt));
    let mut decrypted = [0u8; 64];
    tf.process_block(&encrypted, 0, &mut decrypted, 0).unwrap();
    assert_eq!(decrypted, plain);
}

#[test]
fn reset_keeps_key() {
    let mut tf = engine(Variant::V1024, Mode::Encrypt, 9);
    let plain = [0u8; 128];
    let mut first = [0u8; 128];
    tf.process_block(&plain, 0, &mut first, 0).unwrap();
    tf.reset();
    assert!(tf.is_configured());
    let mut second = [0u8; 128];
    tf.process_block(&plain, 0, &mut second, 0).unwrap();
    assert_eq!(first, second);
}

// ═══════════════════════════════════════════════════════════════════════
// Lifecycle and buffers
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn process_block_before_configure_is_state_error() {
    for variant in Variant::ALL {
        let tf = Threefish::new(variant);
        let input = vec![0u8; variant.block_size()];
        let mut output = vec![SENTINEL; variant.block_size()];
        let err = tf.process_block(&input, 0, &mut output, 0).unwrap_err();
        assert_eq!(err, ThreefishError::NotInitialized);
        assert_eq!(err.kind(), ErrorKind::State);
        assert!(output.iter().all(|&b| b == SENTINEL));
    }
}

#[test]
fn short_output_is_length_error_without_writes() {
    let tf = engine(Variant::V256, Mode::Encrypt, 1);
    let input = [0u8; 32];

    let mut output = [SENTINEL; 40];
    let err = tf.process_block(&input, 0, &mut output, 9).unwrap_err();
    assert_eq!(
        err,
        ThreefishError::OutputTooShort {
            offset: 9,
            needed: 32,
            available: 31
        }
    );
    assert_eq!(err.kind(), ErrorKind::Length);
    assert_eq!(output, [SENTINEL; 40]);

    let mut tiny = [SENTINEL; 4];
    assert!(tf.process_block(&input, 0, &mut tiny, 100).is_err());
    assert_eq!(tiny, [SENTINEL; 4]);
}

#[test]
fn short_input_is_length_error_without_writes() {
    let tf = engine(Variant::V512, Mode::Decrypt, 2);
    let input = [0u8; 70];
    let mut output = [SENTINEL; 64];
    let err = tf.process_block(&input, 7, &mut output, 0).unwrap_err();
    assert_eq!(
        err,
        ThreefishError::InputTooShort {
            offset: 7,
            needed: 64,
            available: 63
        }
    );
    assert_eq!(err.kind(), ErrorKind::Length);
    assert_eq!(output, [SENTINEL; 64]);
}

#[test]
fn offsets_select_the_block_and_leave_the_rest_alone() {
    let tf = engine(Variant::V256, Mode::Encrypt, 5);
    let block = [0x77u8; 32];

    let mut input = vec![0u8; 5];
    input.extend_from_slice(&block);
    input.extend_from_slice(&[0xEEu8; 3]);

    let mut output = vec![SENTINEL; 50];
    assert_eq!(tf.process_block(&input, 5, &mut output, 11), Ok(32));

    let mut expected = [0u8; 32];
    tf.process_block(&block, 0, &mut expected, 0).unwrap();
    assert_eq!(&output[11..43], &expected[..]);
    assert!(output[..11].iter().all(|&b| b == SENTINEL));
    assert!(output[43..].iter().all(|&b| b == SENTINEL));
}

/// Multi-block data is handled by one call per block; identical blocks
/// under one key and tweak give identical output.
#[test]
fn caller_driven_multi_block_processing() {
    let enc = engine(Variant::V256, Mode::Encrypt, 4);
    let dec = engine(Variant::V256, Mode::Decrypt, 4);
    let message: Vec<u8> = (0..96u8).map(|i| i % 32).collect();

    let mut encrypted = vec![0u8; message.len()];
    for off in (0..message.len()).step_by(32) {
        enc.process_block(&message, off, &mut encrypted, off).unwrap();
    }
    assert_eq!(encrypted[0..32], encrypted[32..64]);

    let mut decrypted = vec![0u8; message.len()];
    for off in (0..message.len()).step_by(32) {
        dec.process_block(&encrypted, off, &mut decrypted, off).unwrap();
    }
    assert_eq!(decrypted, message);
}

#[test]
fn tweak_changes_ciphertext() {
    let key = vec![0x42u8; 64];
    let plain = [0u8; 64];
    let mut outputs = Vec::new();
    for t in 0u8..4 {
        let mut tf = Threefish::new(Variant::V512);
        tf.init(
            Mode::Encrypt,
            CipherParameters::with_tweak(key.clone(), vec![t; 16]),
        )
        .unwrap();
        let mut out = [0u8; 64];
        tf.process_block(&plain, 0, &mut out, 0).unwrap();
        outputs.push(out);
    }
    for i in 0..outputs.len() {
        for j in (i + 1)..outputs.len() {
            assert_ne!(outputs[i], outputs[j], "tweaks {} and {} collide", i, j);
        }
    }
}

#[test]
fn engine_reports_its_surface() {
    let tf = Threefish::new(Variant::V1024);
    assert_eq!(tf.algorithm_name(), "Threefish");
    assert_eq!(BlockCipher::block_size(&tf), 128);
    assert_eq!(tf.variant().rounds(), 80);
    assert_eq!(tf.mode(), None);
}

#[test]
fn engine_can_move_to_another_thread() {
    let tf = engine(Variant::V256, Mode::Encrypt, 8);
    let handle = std::thread::spawn(move || {
        let mut out = [0u8; 32];
        tf.process_block(&[1u8; 32], 0, &mut out, 0).unwrap();
        out
    });
    let from_thread = handle.join().unwrap();

    let local = engine(Variant::V256, Mode::Encrypt, 8);
    let mut out = [0u8; 32];
    local.process_block(&[1u8; 32], 0, &mut out, 0).unwrap();
    assert_eq!(from_thread, out);
}

#[test]
fn converter_is_little_endian() {
    let words = converter::bytes_to_words(&[1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0], 16, 0)
        .unwrap();
    assert_eq!(words, vec![1, 256]);
}
