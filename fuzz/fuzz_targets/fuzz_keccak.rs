//! Fuzz target for the SHA3/SHAKE one-shot functions.
//!
//! Tests that arbitrary input sizes are handled correctly without panics.

#![no_main]

use libfuzzer_sys::fuzz_target;
use seshat_core::keccak::{sha3, shake};

fuzz_target!(|data: &[u8]| {
    let digest = sha3::sha3_256(data);
    assert_eq!(digest.len(), 32);

    // SHAKE with various output lengths; longer outputs must extend
    // shorter ones
    let out32: [u8; 32] = shake::shake256(data);
    let out64: [u8; 64] = shake::shake256(data);
    let out128 = shake::shake256_xof(data, 128);

    assert_eq!(out32[..], out64[..32]);
    assert_eq!(out64[..], out128[..64]);
});
