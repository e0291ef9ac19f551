//! I/O layer for Seshat.
//!
//! This crate provides the side-effect operations around the pure
//! hashing core:
//! - bounded, TOCTOU-safe file reads;
//! - atomic file writes (temp file + rename);
//! - the sidecar-tag integrity tool ([`integrity`]).
//!
//! All cryptographic logic is in `seshat_core`; this crate only
//! provides the filesystem bridge.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all)]

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use seshat_core;

pub mod integrity;

pub use integrity::{compute_tag, read_tag, secret_matches, verify_tag, write_tag, TAG_SIZE};

/// I/O errors.
#[derive(Error, Debug)]
pub enum IoError {
    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] io::Error),

    /// File not found.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// File too large.
    #[error("file too large: {size} bytes exceeds limit of {limit} bytes")]
    FileTooLarge {
        /// Observed size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: u64,
    },
}

/// Result type for I/O operations.
pub type Result<T> = std::result::Result<T, IoError>;

/// Maximum file size for read operations (256 MiB).
///
/// Digesting reads whole files into memory; the cap keeps a hostile or
/// accidental multi-gigabyte path from exhausting it.
pub const MAX_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Read a file completely into a byte vector with the default size limit.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    read_file_with_limit(path, MAX_FILE_SIZE)
}

/// Read a file with a custom size limit.
///
/// Opens the file first and checks the size on the open handle's
/// metadata, so the file that gets size-checked is the file that gets
/// read even if the path is swapped concurrently.
pub fn read_file_with_limit(path: impl AsRef<Path>, max_size: u64) -> Result<Vec<u8>> {
    let path = path.as_ref();

    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(IoError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(IoError::Fs(e)),
    };

    let size = file.metadata()?.len();
    if size > max_size {
        return Err(IoError::FileTooLarge {
            size,
            limit: max_size,
        });
    }

    let mut contents = Vec::with_capacity(size as usize);
    file.read_to_end(&mut contents)?;
    Ok(contents)
}

/// Write data to a file atomically (temp file in the same directory,
/// fsync, rename).
pub fn write_file_atomic(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let parent = path.parent().unwrap_or(Path::new("."));
    let temp_path = parent.join(format!(".{}.tmp", temp_token()));

    {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        file.write_all(data)?;
        file.sync_all()?;
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        // best effort: don't leave the temp file behind
        let _ = fs::remove_file(&temp_path);
        return Err(IoError::Fs(e));
    }
    Ok(())
}

/// Random hex token for temp file names.
fn temp_token() -> String {
    let mut bytes = [0u8; 8];
    if getrandom::getrandom(&mut bytes).is_err() {
        // Fall back to the process id; uniqueness within the directory
        // is all the rename dance needs.
        return format!("{:x}", std::process::id());
    }
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
