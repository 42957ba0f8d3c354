//! Compression Engine
//!
//! Folds one 64-byte block into the 128-bit chaining state via three 16-step
//! rounds. The four registers form a rotating buffer: each step writes the
//! register at `(4 - n mod 4) mod 4` and reads the other three in order, so
//! the destination walks A, D, C, B as in RFC 1320.

use crate::constants::{
    BLOCK_SIZE, ROUND1_SHIFTS, ROUND2_CONST, ROUND2_SHIFTS, ROUND3_CONST, ROUND3_ORDER,
    ROUND3_SHIFTS,
};

// =============================================================================
// MIXING FUNCTIONS
// =============================================================================

/// Round 1 mixer: bitwise select (`y` where `x` is set, else `z`).
#[inline]
const fn choose(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

/// Round 2 mixer: bitwise majority vote.
#[inline]
const fn majority(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

/// Round 3 mixer: parity.
#[inline]
const fn parity(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

// =============================================================================
// BLOCK LOADING
// =============================================================================

/// Decode a 64-byte block into sixteen little-endian 32-bit message words.
#[must_use]
pub const fn load_block(bytes: &[u8; BLOCK_SIZE]) -> [u32; 16] {
    let mut words = [0u32; 16];
    let mut n = 0;
    while n < 16 {
        let off = n * 4;
        words[n] = u32::from_le_bytes([
            bytes[off],
            bytes[off + 1],
            bytes[off + 2],
            bytes[off + 3],
        ]);
        n += 1;
    }
    words
}

// =============================================================================
// COMPRESSION
// =============================================================================

/// Compress one message block into the chaining state.
///
/// All arithmetic is modulo 2^32; wraparound is the defined behavior, never a
/// fault. The incoming state is fed forward into the result, so the caller
/// threads the return value into the next call.
#[must_use]
pub const fn compress(state: [u32; 4], block: &[u32; 16]) -> [u32; 4] {
    let mut regs = state;

    // Round 1: message words consumed in step order.
    let mut n = 0;
    while n < 16 {
        let i = (4 - n % 4) % 4;
        let t = regs[i]
            .wrapping_add(choose(regs[(i + 1) % 4], regs[(i + 2) % 4], regs[(i + 3) % 4]))
            .wrapping_add(block[n]);
        regs[i] = t.rotate_left(ROUND1_SHIFTS[n % 4]);
        n += 1;
    }

    // Round 2: column-major word order relative to round 1.
    n = 0;
    while n < 16 {
        let i = (4 - n % 4) % 4;
        let t = regs[i]
            .wrapping_add(majority(regs[(i + 1) % 4], regs[(i + 2) % 4], regs[(i + 3) % 4]))
            .wrapping_add(block[(n % 4) * 4 + n / 4])
            .wrapping_add(ROUND2_CONST);
        regs[i] = t.rotate_left(ROUND2_SHIFTS[n % 4]);
        n += 1;
    }

    // Round 3: word order from the fixed permutation table.
    n = 0;
    while n < 16 {
        let i = (4 - n % 4) % 4;
        let t = regs[i]
            .wrapping_add(parity(regs[(i + 1) % 4], regs[(i + 2) % 4], regs[(i + 3) % 4]))
            .wrapping_add(block[ROUND3_ORDER[n]])
            .wrapping_add(ROUND3_CONST);
        regs[i] = t.rotate_left(ROUND3_SHIFTS[n % 4]);
        n += 1;
    }

    // Feed-forward onto the incoming state.
    [
        state[0].wrapping_add(regs[0]),
        state[1].wrapping_add(regs[1]),
        state[2].wrapping_add(regs[2]),
        state[3].wrapping_add(regs[3]),
    ]
}

// =============================================================================
// TESTS
// =============================================================================
