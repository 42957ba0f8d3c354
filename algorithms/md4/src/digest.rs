//! Digest value type.

use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(feature = "std")]
use std::string::{String, ToString};

use crate::constants::DIGEST_SIZE;

// =============================================================================
// DIGEST
// =============================================================================

/// A 128-bit MD4 digest.
///
/// Wraps the four final state words (A, B, C, D). Equality is value equality
/// over those words — two digests of the same message always compare equal,
/// regardless of where they were computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u32; 4]);

impl Digest {
    /// Freeze a final chaining state into a digest.
    pub const fn from_words(words: [u32; 4]) -> Self {
        Self(words)
    }

    /// Serialize as 16 bytes: each state word little-endian, in A..D order.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; DIGEST_SIZE] {
        let mut out = [0u8; DIGEST_SIZE];
        let mut i = 0;
        while i < 4 {
            let word = self.0[i].to_le_bytes();
            out[i * 4] = word[0];
            out[i * 4 + 1] = word[1];
            out[i * 4 + 2] = word[2];
            out[i * 4 + 3] = word[3];
            i += 1;
        }
        out
    }

    /// Render as 32 lowercase hex characters, no separators.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<Digest> for [u8; DIGEST_SIZE] {
    fn from(digest: Digest) -> Self {
        digest.to_bytes()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::Digest;

    #[test]
    fn test_byte_serialization_is_little_endian() {
        let digest = Digest::from_words([0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476]);
        assert_eq!(
            digest.to_bytes(),
            [
                0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, //
                0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54, 0x32, 0x10,
            ]
        );
        // The From conversion is the same serialization.
        assert_eq!(<[u8; 16]>::from(digest), digest.to_bytes());
    }

    #[test]
    fn test_hex_rendering() {
        let digest = Digest::from_words([0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476]);
        assert_eq!(digest.to_hex(), "0123456789abcdeffedcba9876543210");
        assert_eq!(format!("{digest}"), digest.to_hex());
        assert_eq!(format!("{digest:x}"), digest.to_hex());
    }

    #[test]
    fn test_value_equality() {
        let a = Digest::from_words([1, 2, 3, 4]);
        let b = Digest::from_words([1, 2, 3, 4]);
        let c = Digest::from_words([1, 2, 3, 5]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
