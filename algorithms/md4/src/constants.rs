//! MD4 Constants
//!
//! Every table here is fixed by RFC 1320 — none of it is tunable and none of
//! it is recomputed at runtime.
//!
//! The additive round constants are "nothing up my sleeve" numbers:
//!
//! ```text
//! 0x5A827999 = floor(sqrt(2) * 2^30)
//! 0x6ED9EBA1 = floor(sqrt(3) * 2^30)
//! ```

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Compression block size in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Digest output size in bytes (128-bit digest).
pub const DIGEST_SIZE: usize = 16;

// =============================================================================
// INITIAL STATE
// =============================================================================

/// Fixed initial chaining state (A, B, C, D).
///
/// Each hash computation starts from its own copy — the state is never a
/// shared process-wide value.
pub const INIT_STATE: [u32; 4] = [0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476];

// =============================================================================
// ROUND SCHEDULES
// =============================================================================

/// Additive constant for round 2: floor(sqrt(2) * 2^30).
pub const ROUND2_CONST: u32 = 0x5A82_7999;

/// Additive constant for round 3: floor(sqrt(3) * 2^30).
pub const ROUND3_CONST: u32 = 0x6ED9_EBA1;

/// Left-rotation amounts for round 1, cycled by step index mod 4.
pub const ROUND1_SHIFTS: [u32; 4] = [3, 7, 11, 19];

/// Left-rotation amounts for round 2, cycled by step index mod 4.
pub const ROUND2_SHIFTS: [u32; 4] = [3, 5, 9, 13];

/// Left-rotation amounts for round 3, cycled by step index mod 4.
pub const ROUND3_SHIFTS: [u32; 4] = [3, 9, 11, 15];

/// Message-word consumption order for round 3.
///
/// Rounds 1 and 2 derive their word index arithmetically (identity and
/// column-major respectively); round 3 uses this fixed permutation.
pub const ROUND3_ORDER: [usize; 16] = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];
