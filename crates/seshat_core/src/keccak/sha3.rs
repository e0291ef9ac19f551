//! SHA3 fixed-output convenience functions.
//!
//! Thin wrappers over the sponge with the preset FIPS 202 parameter
//! sets. For streaming input use [`Hasher`](super::engine::Hasher).

use super::sponge::{digest, EngineParams};

/// Compute SHA3-224 (28-byte output).
#[inline]
pub fn sha3_224(data: &[u8]) -> [u8; 28] {
    digest(data, &EngineParams::SHA3_224)
}

/// Compute SHA3-256 (32-byte output).
///
/// # Example
///
/// ```
/// use seshat_core::keccak::sha3::sha3_256;
///
/// let digest = sha3_256(b"attest me");
/// assert_eq!(digest.len(), 32);
/// ```
#[inline]
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    digest(data, &EngineParams::SHA3_256)
}

/// Compute SHA3-384 (48-byte output).
#[inline]
pub fn sha3_384(data: &[u8]) -> [u8; 48] {
    digest(data, &EngineParams::SHA3_384)
}

/// Compute SHA3-512 (64-byte output).
#[inline]
pub fn sha3_512(data: &[u8]) -> [u8; 64] {
    digest(data, &EngineParams::SHA3_512)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha3_256_empty() {
        let hash = sha3_256(b"");
        // Known test vector for SHA3-256("")
        let expected = [
            0xa7, 0xff, 0xc6, 0xf8, 0xbf, 0x1e, 0xd7, 0x66, 0x51, 0xc1, 0x47, 0x56, 0xa0, 0x61,
            0xd6, 0x62, 0xf5, 0x80, 0xff, 0x4d, 0xe4, 0x3b, 0x49, 0xfa, 0x82, 0xd8, 0x0a, 0x4b,
            0x80, 0xf8, 0x43, 0x4a,
        ];
        assert_eq!(hash, expected);
    }

    #[test]
    fn test_sha3_256_abc() {
        let hash = sha3_256(b"abc");
        // Known test vector for SHA3-256("abc")
        let expected = [
            0x3a, 0x98, 0x5d, 0xa7, 0x4f, 0xe2, 0x25, 0xb2, 0x04, 0x5c, 0x17, 0x2d, 0x6b, 0xd3,
            0x90, 0xbd, 0x85, 0x5f, 0x08, 0x6e, 0x3e, 0x9d, 0x52, 0x5b, 0x46, 0xbf, 0xe2, 0x45,
            0x11, 0x43, 0x15, 0x32,
        ];
        assert_eq!(hash, expected);
    }

    #[test]
    fn test_sha3_224_empty() {
        let hash = sha3_224(b"");
        let expected = [
            0x6b, 0x4e, 0x03, 0x42, 0x36, 0x67, 0xdb, 0xb7, 0x3b, 0x6e, 0x15, 0x45, 0x4f, 0x0e,
            0xb1, 0xab, 0xd4, 0x59, 0x7f, 0x9a, 0x1b, 0x07, 0x8e, 0x3f, 0x5b, 0x5a, 0x6b, 0xc7,
        ];
        assert_eq!(hash, expected);
    }

    #[test]
    fn test_output_sizes() {
        assert_eq!(sha3_224(b"x").len(), 28);
        assert_eq!(sha3_256(b"x").len(), 32);
        assert_eq!(sha3_384(b"x").len(), 48);
        assert_eq!(sha3_512(b"x").len(), 64);
    }
}
