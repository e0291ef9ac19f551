//! # seshat_core
//!
//! Pure cryptographic core for Seshat: a sponge-construction hashing
//! engine implementing the SHA3-224/256/384/512 fixed-output functions
//! and the SHAKE128/256 extendable-output functions (FIPS 202).
//!
//! The crate performs no I/O. All state is held in values owned by the
//! caller: a [`keccak::Hasher`] is created by `init`, fed by `update`,
//! and consumed by `finalize`, so two computations can never alias each
//! other's buffered state. The 1600-bit sponge state is zeroized when
//! the engine is dropped.
//!
//! ## Example
//!
//! ```
//! use seshat_core::keccak::{sha3_256, Hasher, HashMode};
//!
//! // One-shot
//! let digest = sha3_256(b"hello");
//!
//! // Streaming
//! let mut hasher = Hasher::init(256, HashMode::Sha3)?;
//! hasher.update(b"he")?;
//! hasher.update(b"llo")?;
//! assert_eq!(hasher.finalize(32)?, digest.to_vec());
//! # Ok::<(), seshat_core::error::ParameterError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all)]

pub use subtle;
pub use zeroize;

/// Unified parameter error for the hashing engine
pub mod error;

/// Byte manipulation utilities (LE load/store, rotation, XOR)
pub mod bytes;

/// Constant-time comparison - uses the audited `subtle` crate
pub mod ct;

/// Keccak-f\[1600\] permutation, sponge framing, SHA3 and SHAKE
pub mod keccak;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::error::{ParameterError, ParameterResult};

    pub use crate::ct::ct_eq;

    pub use crate::keccak::{
        hash, sha3_224, sha3_256, sha3_384, sha3_512, shake128, shake128_xof, shake256,
        shake256_xof, HashMode, Hasher,
    };
}
