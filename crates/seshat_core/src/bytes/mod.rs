//! Byte manipulation utilities for the sponge engine.
//!
//! Little-endian lane (de)serialization happens only here, at the
//! state/byte-array boundary; everything above works on native `u64`
//! lanes.

/// Load a little-endian `u64` from the first 8 bytes of `bytes`.
///
/// # Panics
///
/// Panics if `bytes` is shorter than 8 bytes. Callers in this crate
/// always pass exact 8-byte lane windows.
#[inline]
pub fn load_le64(bytes: &[u8]) -> u64 {
    let mut lane = [0u8; 8];
    lane.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(lane)
}

/// Store `word` into the first 8 bytes of `bytes` in little-endian order.
///
/// # Panics
///
/// Panics if `bytes` is shorter than 8 bytes.
#[inline]
pub fn store_le64(word: u64, bytes: &mut [u8]) {
    bytes[..8].copy_from_slice(&word.to_le_bytes());
}

/// Rotate `word` left by `n` bits, with `n` taken modulo 64.
///
/// Rotation by 0 or by any multiple of 64 is the identity.
#[inline]
pub const fn rotl64(word: u64, n: u32) -> u64 {
    word.rotate_left(n % 64)
}

/// Rotate `word` right by `n` bits, with `n` taken modulo 64.
#[inline]
pub const fn rotr64(word: u64, n: u32) -> u64 {
    word.rotate_right(n % 64)
}

/// XOR `src` into `dst` in place.
///
/// Only the overlapping prefix is touched if the lengths differ.
#[inline]
pub fn xor_bytes(src: &[u8], dst: &mut [u8]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= *s;
    }
}
