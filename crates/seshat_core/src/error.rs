//! Unified error type for the hashing engine.
//!
//! Every fallible operation in this crate fails with [`ParameterError`]:
//! the computation itself is pure and total, so the only thing that can
//! go wrong is a caller asking for an unsupported parameter set. On any
//! error no partial digest is produced and transient engine state is
//! zeroized before the error propagates.

use core::fmt;

use crate::keccak::HashMode;

/// Rejected hashing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    /// `rate + capacity` does not equal the 1600-bit sponge width.
    RateCapacityMismatch {
        /// Rate in bits.
        rate: usize,
        /// Capacity in bits.
        capacity: usize,
    },
    /// Rate is not a positive multiple of 8 bits.
    InvalidRate {
        /// Rate in bits.
        rate: usize,
    },
    /// Output bit size is not in the supported set for the mode
    /// (SHA3: 224/256/384/512, SHAKE: 128/256).
    UnsupportedOutputSize {
        /// Requested output size in bits.
        bits: usize,
        /// Selected mode.
        mode: HashMode,
    },
    /// SHA3-mode output length does not match the fixed digest size.
    DigestLengthMismatch {
        /// Digest size in bytes implied by the output bit size.
        expected: usize,
        /// Output length the caller requested.
        requested: usize,
    },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateCapacityMismatch { rate, capacity } => write!(
                f,
                "rate {} + capacity {} != 1600 bits",
                rate, capacity
            ),
            Self::InvalidRate { rate } => {
                write!(f, "rate {} is not a positive multiple of 8 bits", rate)
            }
            Self::UnsupportedOutputSize { bits, mode } => {
                write!(f, "{} does not support {}-bit output", mode, bits)
            }
            Self::DigestLengthMismatch {
                expected,
                requested,
            } => write!(
                f,
                "SHA3 digest is {} bytes, {} requested",
                expected, requested
            ),
        }
    }
}

impl std::error::Error for ParameterError {}

/// Result type using [`ParameterError`].
pub type ParameterResult<T> = Result<T, ParameterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParameterError::InvalidRate { rate: 7 };
        assert_eq!(format!("{}", err), "rate 7 is not a positive multiple of 8 bits");

        let err = ParameterError::DigestLengthMismatch {
            expected: 28,
            requested: 20,
        };
        assert_eq!(format!("{}", err), "SHA3 digest is 28 bytes, 20 requested");
    }

    #[test]
    fn test_error_is_copy_eq() {
        let a = ParameterError::RateCapacityMismatch {
            rate: 1088,
            capacity: 256,
        };
        let b = a;
        assert_eq!(a, b);
    }
}
