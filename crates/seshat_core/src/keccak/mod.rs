//! Keccak-f\[1600\] permutation and the SHA3/SHAKE sponge built on it.
//!
//! The module is layered bottom-up:
//!
//! - [`permute`] — the 24-round Keccak-f\[1600\] permutation over the
//!   200-byte state (this file);
//! - [`sponge`] — rate/capacity block framing: absorption and squeeze
//!   with multi-rate padding and domain separation;
//! - [`engine`] — the streaming [`Hasher`] (init/update/finalize) and
//!   the one-shot [`hash`] function;
//! - [`sha3`] / [`shake`] — fixed-parameter convenience wrappers.
//!
//! Lanes are native `u64`; bytes are (de)serialized little-endian only
//! at the state boundary. The permutation is pure and total: no
//! parameter can make it fail.

pub mod engine;
pub mod sha3;
pub mod shake;
pub mod sponge;

pub use engine::{hash, HashMode, Hasher};
pub use sha3::{sha3_224, sha3_256, sha3_384, sha3_512};
pub use shake::{shake128, shake128_xof, shake256, shake256_xof};

use crate::bytes::{load_le64, rotl64, store_le64};

/// Sponge state size in bytes (1600 bits).
pub const STATE_SIZE: usize = 200;

/// Sponge width in bits.
pub const SPONGE_BITS: usize = 1600;

/// Number of 64-bit lanes in the state (5x5 grid).
pub const LANES: usize = 25;

/// Number of permutation rounds.
pub const ROUNDS: usize = 24;

/// Round constants XORed into lane (0,0) by Iota.
const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Rho rotation offsets, in Pi traversal order.
const ROTATION_OFFSETS: [u32; ROUNDS] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Pi lane relocation table: step `i` moves the running lane into
/// position `PI_POSITIONS[i]`.
const PI_POSITIONS: [usize; ROUNDS] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Apply all 24 rounds of Keccak-f[1600] to a lane array.
pub(crate) fn keccak_f1600(lanes: &mut [u64; LANES]) {
    for round in 0..ROUNDS {
        // Theta: column parities, then D[x] into every lane of column x
        let mut parity = [0u64; 5];
        for (x, p) in parity.iter_mut().enumerate() {
            *p = lanes[x] ^ lanes[x + 5] ^ lanes[x + 10] ^ lanes[x + 15] ^ lanes[x + 20];
        }
        for x in 0..5 {
            let d = parity[(x + 4) % 5] ^ rotl64(parity[(x + 1) % 5], 1);
            for y in (0..LANES).step_by(5) {
                lanes[y + x] ^= d;
            }
        }

        // Rho and Pi fused: carry lane (0,1) through the cycle,
        // rotating as each lane lands in its new position
        let mut carry = lanes[1];
        for (offset, &target) in ROTATION_OFFSETS.iter().zip(PI_POSITIONS.iter()) {
            let displaced = lanes[target];
            lanes[target] = rotl64(carry, *offset);
            carry = displaced;
        }

        // Chi: row-wise nonlinear mix
        for y in (0..LANES).step_by(5) {
            let row = [
                lanes[y],
                lanes[y + 1],
                lanes[y + 2],
                lanes[y + 3],
                lanes[y + 4],
            ];
            for x in 0..5 {
                lanes[y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
            }
        }

        // Iota
        lanes[0] ^= ROUND_CONSTANTS[round];
    }
}

/// Permute a 200-byte sponge state in place with Keccak-f[1600].
///
/// Pure and total: identical input states always produce identical
/// output states. Lane (x, y) occupies bytes `8 * (5 * y + x) ..+ 8`,
/// little-endian.
pub fn permute(state: &mut [u8; STATE_SIZE]) {
    let mut lanes = [0u64; LANES];
    for (i, lane) in lanes.iter_mut().enumerate() {
        *lane = load_le64(&state[i * 8..]);
    }
    keccak_f1600(&mut lanes);
    for (i, lane) in lanes.iter().enumerate() {
        store_le64(*lane, &mut state[i * 8..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permute_changes_zero_state() {
        let mut state = [0u8; STATE_SIZE];
        permute(&mut state);
        assert_ne!(state, [0u8; STATE_SIZE]);
    }

    #[test]
    fn test_permute_deterministic() {
        let mut a = [0x5au8; STATE_SIZE];
        let mut b = [0x5au8; STATE_SIZE];
        permute(&mut a);
        permute(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_state_first_lane() {
        // Keccak-f[1600] reference output for the all-zero state:
        // lane (0,0) becomes 0xF1258F7940E1DDE7.
        let mut state = [0u8; STATE_SIZE];
        permute(&mut state);
        assert_eq!(
            crate::bytes::load_le64(&state[..8]),
            0xF125_8F79_40E1_DDE7
        );
    }

    #[test]
    fn test_rotation_table_covers_nonorigin_lanes() {
        // Pi positions are a permutation of 1..25; lane (0,0) never moves.
        let mut seen = [false; LANES];
        for &p in &PI_POSITIONS {
            assert!(p != 0 && !seen[p]);
            seen[p] = true;
        }
        assert_eq!(seen.iter().filter(|&&s| s).count(), 24);
        assert!(ROTATION_OFFSETS.iter().all(|&r| r > 0 && r < 64));
    }
}
