//! Sponge framing: rate/capacity parameters, absorption, and squeeze.
//!
//! The sponge state and buffer offset live in values owned by the
//! caller (threaded through [`engine::Hasher`](super::engine::Hasher));
//! nothing here is global, so independent computations can never alias
//! each other's buffered block.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{permute, SPONGE_BITS, STATE_SIZE};
use crate::bytes::xor_bytes;
use crate::error::{ParameterError, ParameterResult};

/// Domain-separation suffix for the SHA3 fixed-output functions.
pub const SHA3_SUFFIX: u8 = 0x06;

/// Domain-separation suffix for the SHAKE extendable-output functions.
pub const SHAKE_SUFFIX: u8 = 0x1f;

/// Validated sponge parameters: rate, capacity (bits) and the
/// domain-separation suffix.
///
/// Invariants, enforced by [`EngineParams::new`]:
/// `rate + capacity == 1600`, `rate % 8 == 0`, `rate >= 8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineParams {
    rate: usize,
    capacity: usize,
    suffix: u8,
}

impl EngineParams {
    /// Build a parameter set, rejecting invalid rate/capacity splits.
    pub fn new(rate: usize, capacity: usize, suffix: u8) -> ParameterResult<Self> {
        if rate + capacity != SPONGE_BITS {
            return Err(ParameterError::RateCapacityMismatch { rate, capacity });
        }
        if rate % 8 != 0 || rate < 8 {
            return Err(ParameterError::InvalidRate { rate });
        }
        Ok(Self {
            rate,
            capacity,
            suffix,
        })
    }

    /// Parameters for a SHA3/SHAKE variant: `capacity = 2 * output_bits`,
    /// `rate` filling the rest of the sponge.
    const fn with_capacity(output_bits: usize, suffix: u8) -> Self {
        Self {
            rate: SPONGE_BITS - 2 * output_bits,
            capacity: 2 * output_bits,
            suffix,
        }
    }

    /// SHA3-224: rate 1152, capacity 448.
    pub const SHA3_224: Self = Self::with_capacity(224, SHA3_SUFFIX);
    /// SHA3-256: rate 1088, capacity 512.
    pub const SHA3_256: Self = Self::with_capacity(256, SHA3_SUFFIX);
    /// SHA3-384: rate 832, capacity 768.
    pub const SHA3_384: Self = Self::with_capacity(384, SHA3_SUFFIX);
    /// SHA3-512: rate 576, capacity 1024.
    pub const SHA3_512: Self = Self::with_capacity(512, SHA3_SUFFIX);
    /// SHAKE128: rate 1344, capacity 256.
    pub const SHAKE128: Self = Self::with_capacity(128, SHAKE_SUFFIX);
    /// SHAKE256: rate 1088, capacity 512.
    pub const SHAKE256: Self = Self::with_capacity(256, SHAKE_SUFFIX);

    /// Rate in bits.
    pub fn rate(&self) -> usize {
        self.rate
    }

    /// Capacity in bits.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Domain-separation suffix byte.
    pub fn suffix(&self) -> u8 {
        self.suffix
    }

    /// Rate in bytes; the block size of the sponge.
    pub fn rate_bytes(&self) -> usize {
        self.rate / 8
    }
}

/// The 200-byte (1600-bit) sponge state, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) struct KeccakState {
    bytes: [u8; STATE_SIZE],
}

impl KeccakState {
    /// Fresh all-zero state.
    pub(crate) fn new() -> Self {
        Self {
            bytes: [0u8; STATE_SIZE],
        }
    }

    pub(crate) fn permute(&mut self) {
        permute(&mut self.bytes);
    }

    pub(crate) fn rate_region(&self, len: usize) -> &[u8] {
        &self.bytes[..len]
    }

    pub(crate) fn xor_byte(&mut self, index: usize, value: u8) {
        self.bytes[index] ^= value;
    }

    pub(crate) fn xor_in(&mut self, offset: usize, data: &[u8]) {
        xor_bytes(data, &mut self.bytes[offset..offset + data.len()]);
    }
}

/// Absorb `input` into the rate region of `state`.
///
/// XORs bytes starting at `*offset`, permuting whenever a full
/// rate-sized block fills and resetting the offset. Handles input that
/// spans multiple blocks, input resuming a partially filled block from
/// an earlier call, and empty input (a no-op). On return
/// `0 <= *offset < params.rate_bytes()` holds; the offset is the number
/// of bytes buffered in the current, not-yet-permuted block.
pub(crate) fn absorb(
    state: &mut KeccakState,
    offset: &mut usize,
    mut input: &[u8],
    params: &EngineParams,
) {
    let rate_bytes = params.rate_bytes();
    debug_assert!(*offset < rate_bytes);

    while !input.is_empty() {
        let take = (rate_bytes - *offset).min(input.len());
        state.xor_in(*offset, &input[..take]);
        *offset += take;
        input = &input[take..];

        if *offset == rate_bytes {
            state.permute();
            *offset = 0;
        }
    }
}

/// Pad, permute, and squeeze `out.len()` bytes from the sponge.
///
/// Applies the domain suffix at the buffer offset, then multi-rate
/// padding (`0x80` into the last rate byte). When the suffix's high bit
/// and the pad bit would land in the same byte (offset equals
/// `rate_bytes - 1` with a high-bit suffix) the state is permuted once
/// between the two XORs so the domain bits are not corrupted. One
/// unconditional permutation precedes output; additional output blocks
/// each get their own permutation. Fully deterministic, which is what
/// makes indefinite-length SHAKE output well defined.
pub(crate) fn squeeze(
    state: &mut KeccakState,
    offset: usize,
    out: &mut [u8],
    params: &EngineParams,
) {
    let rate_bytes = params.rate_bytes();
    let suffix = params.suffix();
    debug_assert!(offset < rate_bytes);

    state.xor_byte(offset, suffix);
    if suffix & 0x80 != 0 && offset == rate_bytes - 1 {
        state.permute();
    }
    state.xor_byte(rate_bytes - 1, 0x80);
    state.permute();

    let mut produced = 0;
    while produced < out.len() {
        let take = (out.len() - produced).min(rate_bytes);
        out[produced..produced + take].copy_from_slice(state.rate_region(take));
        produced += take;

        if produced < out.len() {
            state.permute();
        }
    }
}

/// One-shot absorb-then-squeeze with a fixed output size.
///
/// Used by the convenience wrappers, whose parameter sets come from the
/// preset table and so cannot fail validation.
pub(crate) fn digest<const N: usize>(data: &[u8], params: &EngineParams) -> [u8; N] {
    let mut state = KeccakState::new();
    let mut offset = 0;
    absorb(&mut state, &mut offset, data, params);
    let mut out = [0u8; N];
    squeeze(&mut state, offset, &mut out, params);
    out
}

/// One-shot absorb-then-squeeze with a caller-chosen output length.
pub(crate) fn digest_vec(data: &[u8], params: &EngineParams, out_len: usize) -> Vec<u8> {
    let mut state = KeccakState::new();
    let mut offset = 0;
    absorb(&mut state, &mut offset, data, params);
    let mut out = vec![0u8; out_len];
    squeeze(&mut state, offset, &mut out, params);
    out
}
