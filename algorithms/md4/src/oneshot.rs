//! Public API Layer

use crate::compress::{compress, load_block};
use crate::constants::{BLOCK_SIZE, INIT_STATE};
use crate::digest::Digest;
use crate::padding::pad;

/// Compute the MD4 digest of a message.
///
/// Pads the message, then folds each 64-byte block through the compression
/// engine starting from a fresh copy of the fixed initial state. Every input
/// is valid; the computation has no failure modes.
///
/// # Example
/// ```rust
/// let digest = md4::hash(b"Hello world");
/// assert_eq!(digest.to_hex(), "2f34e7edc8180b87578159ff58e87c1a");
/// ```
#[must_use]
pub fn hash(message: &[u8]) -> Digest {
    let padded = pad(message);

    // Padding guarantees a positive multiple of BLOCK_SIZE, so the remainder
    // is always empty.
    let (blocks, remainder) = padded.as_chunks::<BLOCK_SIZE>();
    debug_assert!(remainder.is_empty());

    let mut state = INIT_STATE;
    for block in blocks {
        state = compress(state, &load_block(block));
    }

    Digest::from_words(state)
}
