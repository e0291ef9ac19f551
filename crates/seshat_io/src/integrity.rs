//! Sidecar-tag file integrity tool.
//!
//! Tags a file by hashing its contents concatenated with a shared
//! secret using SHA3-224 and persisting the 28-byte tag in a sidecar
//! file next to the original. Verification recomputes the tag and
//! compares it in constant time.
//!
//! ## Sidecar format
//!
//! ```text
//! [1 byte]   version = 0x01
//! [28 bytes] SHA3-224(file_bytes || shared_secret)
//! ```
//!
//! The tag is a keyed checksum, not an HMAC: appending the secret to
//! the message is the scheme the tool has always used, kept here for
//! sidecar compatibility. Treat it as tamper evidence against casual
//! modification, not as a cryptographic MAC.

use std::path::{Path, PathBuf};

use thiserror::Error;
use zeroize::Zeroizing;

use seshat_core::ct::ct_eq;
use seshat_core::keccak::sha3_224;

use crate::{read_file, write_file_atomic, IoError};

/// Sidecar tag size in bytes (SHA3-224 output).
pub const TAG_SIZE: usize = 28;

/// Current sidecar format version.
pub const SIDECAR_VERSION: u8 = 0x01;

/// Extension appended to the original file name for the sidecar.
pub const SIDECAR_EXTENSION: &str = "seshat";

/// Errors from tagging and verification.
#[derive(Error, Debug)]
pub enum IntegrityError {
    /// Underlying filesystem failure.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Sidecar file is missing for the given path.
    #[error("no sidecar tag found for {0}")]
    MissingSidecar(PathBuf),

    /// Sidecar contents are not a valid tag record.
    #[error("malformed sidecar: expected {expected} bytes, got {actual}")]
    MalformedSidecar {
        /// Expected record length.
        expected: usize,
        /// Observed record length.
        actual: usize,
    },

    /// Sidecar was written by an unknown format version.
    #[error("unsupported sidecar version: {0}")]
    UnsupportedVersion(u8),
}

/// Sidecar path for a file: `<name>.<ext>.seshat` next to the original.
pub fn tag_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(SIDECAR_EXTENSION);
    PathBuf::from(name)
}

/// Compute the 28-byte integrity tag for `data` under `secret`.
pub fn compute_tag(data: &[u8], secret: &[u8]) -> [u8; TAG_SIZE] {
    let mut keyed = Zeroizing::new(Vec::with_capacity(data.len() + secret.len()));
    keyed.extend_from_slice(data);
    keyed.extend_from_slice(secret);
    sha3_224(&keyed)
}

/// Tag a file: hash its contents with the shared secret and persist the
/// sidecar atomically. Returns the tag that was written.
pub fn write_tag(path: impl AsRef<Path>, secret: &[u8]) -> Result<[u8; TAG_SIZE], IntegrityError> {
    let path = path.as_ref();
    let data = read_file(path)?;
    let tag = compute_tag(&data, secret);

    let mut record = [0u8; 1 + TAG_SIZE];
    record[0] = SIDECAR_VERSION;
    record[1..].copy_from_slice(&tag);
    write_file_atomic(tag_path(path), &record)?;

    Ok(tag)
}

/// Load the stored tag from a file's sidecar.
pub fn read_tag(path: impl AsRef<Path>) -> Result<[u8; TAG_SIZE], IntegrityError> {
    let path = path.as_ref();
    let sidecar = tag_path(path);
    let record = match read_file(&sidecar) {
        Ok(r) => r,
        Err(IoError::NotFound(_)) => {
            return Err(IntegrityError::MissingSidecar(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };

    if record.len() != 1 + TAG_SIZE {
        return Err(IntegrityError::MalformedSidecar {
            expected: 1 + TAG_SIZE,
            actual: record.len(),
        });
    }
    if record[0] != SIDECAR_VERSION {
        return Err(IntegrityError::UnsupportedVersion(record[0]));
    }

    let mut tag = [0u8; TAG_SIZE];
    tag.copy_from_slice(&record[1..]);
    Ok(tag)
}

/// Verify a file against its sidecar tag.
///
/// Recomputes the tag over the current file contents and compares it to
/// the stored tag in constant time. `Ok(true)` means the file matches;
/// `Ok(false)` means it was modified (or tagged under another secret).
pub fn verify_tag(path: impl AsRef<Path>, secret: &[u8]) -> Result<bool, IntegrityError> {
    let path = path.as_ref();
    let stored = read_tag(path)?;
    let data = read_file(path)?;
    let computed = compute_tag(&data, secret);
    Ok(ct_eq(&computed, &stored))
}

/// Constant-time credential equality check.
pub fn secret_matches(presented: &[u8], expected: &[u8]) -> bool {
    ct_eq(presented, expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SECRET: &[u8] = b"unit-test shared secret";

    #[test]
    fn test_tag_then_verify() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("telemetry.bin");
        fs::write(&path, b"flight log contents").unwrap();

        let tag = write_tag(&path, SECRET).unwrap();
        assert_eq!(tag, read_tag(&path).unwrap());
        assert!(verify_tag(&path, SECRET).unwrap());
    }

    #[test]
    fn test_verify_detects_modification() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("telemetry.bin");
        fs::write(&path, b"flight log contents").unwrap();
        write_tag(&path, SECRET).unwrap();

        fs::write(&path, b"flight log Contents").unwrap();
        assert!(!verify_tag(&path, SECRET).unwrap());
    }

    #[test]
    fn test_verify_wrong_secret_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("telemetry.bin");
        fs::write(&path, b"contents").unwrap();
        write_tag(&path, SECRET).unwrap();

        assert!(!verify_tag(&path, b"a different secret").unwrap());
    }

    #[test]
    fn test_missing_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("untagged.bin");
        fs::write(&path, b"contents").unwrap();

        let err = verify_tag(&path, SECRET).unwrap_err();
        assert!(matches!(err, IntegrityError::MissingSidecar(_)));
    }

    #[test]
    fn test_malformed_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, b"contents").unwrap();
        fs::write(tag_path(&path), b"short").unwrap();

        let err = read_tag(&path).unwrap_err();
        assert!(matches!(err, IntegrityError::MalformedSidecar { .. }));
    }

    #[test]
    fn test_unsupported_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, b"contents").unwrap();

        let mut record = [0u8; 1 + TAG_SIZE];
        record[0] = 0x7f;
        fs::write(tag_path(&path), record).unwrap();

        let err = read_tag(&path).unwrap_err();
        assert!(matches!(err, IntegrityError::UnsupportedVersion(0x7f)));
    }

    #[test]
    fn test_tag_matches_direct_hash() {
        // The tag is SHA3-224 over file bytes followed by the secret.
        let mut keyed = b"payload".to_vec();
        keyed.extend_from_slice(SECRET);
        assert_eq!(compute_tag(b"payload", SECRET), sha3_224(&keyed));
    }

    #[test]
    fn test_secret_matches() {
        assert!(secret_matches(b"open sesame", b"open sesame"));
        assert!(!secret_matches(b"open sesame", b"open sesamE"));
        assert!(!secret_matches(b"open", b"open sesame"));
    }

    #[test]
    fn test_tag_path_appends_extension() {
        assert_eq!(
            tag_path("/fs/microsd/dataman"),
            PathBuf::from("/fs/microsd/dataman.seshat")
        );
    }
}
