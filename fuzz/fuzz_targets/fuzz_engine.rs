//! Fuzz target for the streaming engine.
//!
//! Splits the input at an arbitrary point and checks that chunked
//! absorption matches the one-shot path for every supported variant.

#![no_main]

use libfuzzer_sys::fuzz_target;
use seshat_core::keccak::{hash, HashMode, Hasher};

fuzz_target!(|input: (Vec<u8>, usize)| {
    let (message, raw_split) = input;
    let split = raw_split % (message.len() + 1);

    for (bits, mode, out_len) in [
        (224, HashMode::Sha3, 28),
        (256, HashMode::Sha3, 32),
        (384, HashMode::Sha3, 48),
        (512, HashMode::Sha3, 64),
        (128, HashMode::Shake, 57),
        (256, HashMode::Shake, 200),
    ] {
        let oneshot = hash(out_len, &message, bits, mode).unwrap();

        let mut hasher = Hasher::init(bits, mode).unwrap();
        hasher.update(&message[..split]).unwrap();
        hasher.update(&message[split..]).unwrap();
        assert_eq!(hasher.finalize(out_len).unwrap(), oneshot);
    }
});
