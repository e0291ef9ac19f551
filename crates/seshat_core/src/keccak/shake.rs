//! SHAKE128/256 extendable-output convenience functions.
//!
//! The const-generic variants return a fixed-size array; the `_xof`
//! variants take a caller-chosen output length. Requesting `L` bytes
//! always yields the prefix of the `2L`-byte output for the same input.

use super::sponge::{digest, digest_vec, EngineParams};

/// Compute SHAKE128 with a fixed-size output.
///
/// ```
/// use seshat_core::keccak::shake::shake128;
///
/// let out: [u8; 32] = shake128(b"seed");
/// ```
#[inline]
pub fn shake128<const N: usize>(data: &[u8]) -> [u8; N] {
    digest(data, &EngineParams::SHAKE128)
}

/// Compute SHAKE256 with a fixed-size output.
#[inline]
pub fn shake256<const N: usize>(data: &[u8]) -> [u8; N] {
    digest(data, &EngineParams::SHAKE256)
}

/// Compute SHAKE128 with a caller-chosen output length.
#[inline]
pub fn shake128_xof(data: &[u8], out_len: usize) -> Vec<u8> {
    digest_vec(data, &EngineParams::SHAKE128, out_len)
}

/// Compute SHAKE256 with a caller-chosen output length.
#[inline]
pub fn shake256_xof(data: &[u8], out_len: usize) -> Vec<u8> {
    digest_vec(data, &EngineParams::SHAKE256, out_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shake256_empty() {
        let output: [u8; 32] = shake256(b"");
        // SHAKE256("", 32) expected output
        let expected = [
            0x46, 0xb9, 0xdd, 0x2b, 0x0b, 0xa8, 0x8d, 0x13, 0x23, 0x3b, 0x3f, 0xeb, 0x74, 0x3e,
            0xeb, 0x24, 0x3f, 0xcd, 0x52, 0xea, 0x62, 0xb8, 0x1b, 0x82, 0xb5, 0x0c, 0x27, 0x64,
            0x6e, 0xd5, 0x76, 0x2f,
        ];
        assert_eq!(output, expected);
    }

    #[test]
    fn test_shake128_empty() {
        let output: [u8; 32] = shake128(b"");
        let expected = [
            0x7f, 0x9c, 0x2b, 0xa4, 0xe8, 0x8f, 0x82, 0x7d, 0x61, 0x60, 0x45, 0x50, 0x76, 0x05,
            0x85, 0x3e, 0xd7, 0x3b, 0x80, 0x93, 0xf6, 0xef, 0xbc, 0x88, 0xeb, 0x1a, 0x6e, 0xac,
            0xfa, 0x66, 0xef, 0x26,
        ];
        assert_eq!(output, expected);
    }

    #[test]
    fn test_shake256_deterministic() {
        let out1: [u8; 64] = shake256(b"test input");
        let out2: [u8; 64] = shake256(b"test input");
        assert_eq!(out1, out2);
    }

    #[test]
    fn test_shake_prefix_stability() {
        let short: [u8; 32] = shake256(b"data");
        let long: [u8; 64] = shake256(b"data");
        assert_eq!(short, long[..32]);

        let short = shake128_xof(b"data", 17);
        let long = shake128_xof(b"data", 300);
        assert_eq!(short, long[..17]);
    }

    #[test]
    fn test_xof_matches_const_generic() {
        let fixed: [u8; 32] = shake256(b"same input");
        let vec = shake256_xof(b"same input", 32);
        assert_eq!(fixed.to_vec(), vec);
    }

    #[test]
    fn test_zero_length_output() {
        assert!(shake128_xof(b"anything", 0).is_empty());
    }
}
