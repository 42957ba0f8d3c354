#![cfg_attr(not(feature = "std"), no_std)]

//! # MD4
//!
//! Bit-exact MD4 message digest (RFC 1320).
//!
//! MD4 has been cryptographically broken for decades — this crate exists for
//! legacy compatibility checks and as a compact, readable reference for the
//! Merkle–Damgård construction. Do not use it where collision or preimage
//! resistance matters.

//! # Usage
//! ```rust
//! let digest = md4::hash(b"Hi, my dear friend");
//! assert_eq!(digest.to_hex(), "44179e75a717f84cbdc8343fed7cd33b");
//!
//! // Digests are plain values: equality is word-equality.
//! assert_eq!(digest, md4::hash(b"Hi, my dear friend"));
//! assert_eq!(digest.to_bytes().len(), md4::DIGEST_SIZE);
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod compress;
mod constants;
mod digest;
mod oneshot;
mod padding;

// =============================================================================
// EXPORTS
// =============================================================================

pub use constants::{BLOCK_SIZE, DIGEST_SIZE};
pub use digest::Digest;
pub use oneshot::hash;
pub use padding::pad;
