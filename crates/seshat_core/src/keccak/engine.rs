//! Streaming and one-shot hashing API.
//!
//! A [`Hasher`] owns its sponge state and buffered-block offset, so the
//! init → update* → finalize lifecycle is enforced by the type system:
//! `finalize` consumes the engine, and there is no way to update an
//! engine that was never initialized. The state is zeroized when the
//! engine is dropped, on both success and error paths.

use core::fmt;

use super::sponge::{absorb, squeeze, EngineParams, KeccakState};
use crate::error::{ParameterError, ParameterResult};

/// Hash family selector.
///
/// The reference this engine replaces selected SHAKE with a bare
/// integer flag; the mode here is a required, validated enum so a
/// caller can never pass an ambiguous literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashMode {
    /// Fixed-output SHA3 (224, 256, 384 or 512 bits).
    Sha3,
    /// Extendable-output SHAKE (128 or 256 bit security level).
    Shake,
}

impl fmt::Display for HashMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sha3 => write!(f, "SHA3"),
            Self::Shake => write!(f, "SHAKE"),
        }
    }
}

/// Streaming SHA3/SHAKE engine.
///
/// ```
/// use seshat_core::keccak::{HashMode, Hasher};
///
/// let mut hasher = Hasher::init(512, HashMode::Sha3)?;
/// hasher.update(b"streamed ")?;
/// hasher.update(b"input")?;
/// let digest = hasher.finalize(64)?;
/// assert_eq!(digest.len(), 64);
/// # Ok::<(), seshat_core::error::ParameterError>(())
/// ```
pub struct Hasher {
    params: EngineParams,
    mode: HashMode,
    output_bits: usize,
    state: KeccakState,
    offset: usize,
}

impl Hasher {
    /// Create an engine for the given output size and mode.
    ///
    /// Supported sizes: 224/256/384/512 bits for [`HashMode::Sha3`],
    /// 128/256 bits for [`HashMode::Shake`]. The capacity is twice the
    /// output size and the rate fills the rest of the 1600-bit state.
    /// The state starts all-zero with an empty buffered block.
    pub fn init(output_bits: usize, mode: HashMode) -> ParameterResult<Self> {
        let params = match (mode, output_bits) {
            (HashMode::Sha3, 224) => EngineParams::SHA3_224,
            (HashMode::Sha3, 256) => EngineParams::SHA3_256,
            (HashMode::Sha3, 384) => EngineParams::SHA3_384,
            (HashMode::Sha3, 512) => EngineParams::SHA3_512,
            (HashMode::Shake, 128) => EngineParams::SHAKE128,
            (HashMode::Shake, 256) => EngineParams::SHAKE256,
            _ => {
                return Err(ParameterError::UnsupportedOutputSize {
                    bits: output_bits,
                    mode,
                })
            }
        };

        Ok(Self {
            params,
            mode,
            output_bits,
            state: KeccakState::new(),
            offset: 0,
        })
    }

    /// The mode this engine was initialized with.
    pub fn mode(&self) -> HashMode {
        self.mode
    }

    /// The output bit size this engine was initialized with.
    pub fn output_bits(&self) -> usize {
        self.output_bits
    }

    /// Absorb a chunk of input.
    ///
    /// Callable any number of times with any chunk sizes, including
    /// empty. Splitting a message across calls yields the same digest
    /// as absorbing it in one call.
    pub fn update(&mut self, data: &[u8]) -> ParameterResult<()> {
        absorb(&mut self.state, &mut self.offset, data, &self.params);
        Ok(())
    }

    /// Pad, permute, and produce `out_len` bytes of output.
    ///
    /// Consumes the engine; the sponge state is zeroized on drop. In
    /// SHA3 mode `out_len` must equal the fixed digest size
    /// (`output_bits / 8`) and the mismatch is rejected before any
    /// output is produced. In SHAKE mode `out_len` is caller-chosen,
    /// including zero.
    pub fn finalize(mut self, out_len: usize) -> ParameterResult<Vec<u8>> {
        if self.mode == HashMode::Sha3 && out_len != self.output_bits / 8 {
            return Err(ParameterError::DigestLengthMismatch {
                expected: self.output_bits / 8,
                requested: out_len,
            });
        }

        let mut out = vec![0u8; out_len];
        squeeze(&mut self.state, self.offset, &mut out, &self.params);
        Ok(out)
    }

    /// Like [`finalize`](Self::finalize) but fills a caller-provided
    /// buffer instead of allocating.
    pub fn finalize_into(mut self, out: &mut [u8]) -> ParameterResult<()> {
        if self.mode == HashMode::Sha3 && out.len() != self.output_bits / 8 {
            return Err(ParameterError::DigestLengthMismatch {
                expected: self.output_bits / 8,
                requested: out.len(),
            });
        }

        squeeze(&mut self.state, self.offset, out, &self.params);
        Ok(())
    }
}

impl fmt::Debug for Hasher {
    // state bytes are deliberately not printed
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hasher")
            .field("mode", &self.mode)
            .field("output_bits", &self.output_bits)
            .field("rate_bytes", &self.params.rate_bytes())
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

/// One-shot convenience: init → update → finalize over a transient
/// engine.
///
/// Validates all parameters up front; on error no output is produced
/// and no engine state survives the call (the transient engine is
/// dropped and zeroized).
pub fn hash(
    out_len: usize,
    input: &[u8],
    output_bits: usize,
    mode: HashMode,
) -> ParameterResult<Vec<u8>> {
    let mut hasher = Hasher::init(output_bits, mode)?;
    if mode == HashMode::Sha3 && out_len != output_bits / 8 {
        return Err(ParameterError::DigestLengthMismatch {
            expected: output_bits / 8,
            requested: out_len,
        });
    }
    hasher.update(input)?;
    hasher.finalize(out_len)
}
