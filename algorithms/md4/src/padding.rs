//! Message Padding
//!
//! Merkle–Damgård framing: extend the message so the compression engine only
//! ever sees whole 64-byte blocks, with the original bit-length committed in
//! the final 8 bytes.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::constants::BLOCK_SIZE;

/// Pad a message out to a positive multiple of [`BLOCK_SIZE`] bytes.
///
/// Appends a single `0x80` byte, then the minimum number of zero bytes so the
/// running length is ≡ 56 (mod 64), then the message bit-length as a 64-bit
/// little-endian integer. Total over all inputs: every byte sequence of every
/// length (including empty) is valid, and the bit-length wraps modulo 2^64 as
/// the algorithm defines.
#[must_use]
pub fn pad(message: &[u8]) -> Vec<u8> {
    let bit_len = (message.len() as u64).wrapping_mul(8);

    let mut padded = Vec::with_capacity((message.len() + 9).div_ceil(BLOCK_SIZE) * BLOCK_SIZE);
    padded.extend_from_slice(message);
    padded.push(0x80);
    while padded.len() % BLOCK_SIZE != 56 {
        padded.push(0x00);
    }
    padded.extend_from_slice(&bit_len.to_le_bytes());

    padded
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::{pad, BLOCK_SIZE};

    #[test]
    fn test_empty_message() {
        let padded = pad(b"");
        assert_eq!(padded.len(), BLOCK_SIZE);
        assert_eq!(padded[0], 0x80);
        assert!(padded[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_length_field_little_endian() {
        let padded = pad(&[0x42; 3]);
        let bit_len = 3 * 8u64;
        assert_eq!(padded[padded.len() - 8..], bit_len.to_le_bytes());
    }

    #[test]
    fn test_modulo_56_boundary() {
        // 55 bytes: 0x80 lands exactly at offset 55, zero fill bytes needed.
        assert_eq!(pad(&[0; 55]).len(), 64);
        // 56 bytes: 0x80 overshoots the length slot, a second block is forced.
        assert_eq!(pad(&[0; 56]).len(), 128);
        assert_eq!(pad(&[0; 63]).len(), 128);
        assert_eq!(pad(&[0; 64]).len(), 128);
        assert_eq!(pad(&[0; 65]).len(), 128);
    }

    #[test]
    fn test_message_prefix_preserved() {
        let message = b"The quick brown fox";
        let padded = pad(message);
        assert_eq!(&padded[..message.len()], message);
        assert_eq!(padded[message.len()], 0x80);
    }
}
