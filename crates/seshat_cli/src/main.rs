//! Seshat CLI
//!
//! Digest files with SHA3/SHAKE and maintain sidecar integrity tags.
//!
//! # Environment Variables
//!
//! - `SESHAT_SECRET` - shared secret for `tag`/`verify` (non-interactive)
//! - `SESHAT_SECRET_FILE` - path to a file whose first line is the secret
//!
//! The secret is resolved in that priority order and never accepted on
//! the command line, where it would leak into shell history and process
//! listings.
//!
//! # Examples
//!
//! ```bash
//! # Digest a file
//! seshat digest --algorithm sha3-256 firmware.bin
//! seshat digest --algorithm shake128 --length 64 firmware.bin
//!
//! # Tag and later verify against the sidecar
//! export SESHAT_SECRET="deployment secret"
//! seshat tag /fs/microsd/dataman
//! seshat verify /fs/microsd/dataman
//! ```

use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use zeroize::Zeroizing;

use seshat_core::keccak::{hash, HashMode};
use seshat_io::integrity::{verify_tag, write_tag};

/// Environment variable for the shared secret (non-interactive)
const ENV_SESHAT_SECRET: &str = "SESHAT_SECRET";
/// Environment variable for a secret file path
const ENV_SESHAT_SECRET_FILE: &str = "SESHAT_SECRET_FILE";

/// Seshat - SHA3/SHAKE digests and sidecar file-integrity tags.
#[derive(Parser)]
#[command(name = "seshat")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a SHA3 or SHAKE digest of a file
    Digest {
        /// File to digest.
        file: PathBuf,

        /// Hash algorithm.
        #[arg(long, value_enum, default_value = "sha3-256")]
        algorithm: Algorithm,

        /// Output length in bytes (SHAKE only; SHA3 lengths are fixed).
        #[arg(long)]
        length: Option<usize>,
    },

    /// Write a sidecar integrity tag for a file
    Tag {
        /// File to tag.
        file: PathBuf,
    },

    /// Verify a file against its sidecar integrity tag
    Verify {
        /// File to verify.
        file: PathBuf,
    },
}

/// Supported hash algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// SHA3-224 (28-byte digest)
    #[value(name = "sha3-224")]
    Sha3_224,
    /// SHA3-256 (32-byte digest)
    #[value(name = "sha3-256")]
    Sha3_256,
    /// SHA3-384 (48-byte digest)
    #[value(name = "sha3-384")]
    Sha3_384,
    /// SHA3-512 (64-byte digest)
    #[value(name = "sha3-512")]
    Sha3_512,
    /// SHAKE128 (variable-length output)
    #[value(name = "shake128")]
    Shake128,
    /// SHAKE256 (variable-length output)
    #[value(name = "shake256")]
    Shake256,
}

impl Algorithm {
    fn mode(self) -> HashMode {
        match self {
            Self::Sha3_224 | Self::Sha3_256 | Self::Sha3_384 | Self::Sha3_512 => HashMode::Sha3,
            Self::Shake128 | Self::Shake256 => HashMode::Shake,
        }
    }

    fn output_bits(self) -> usize {
        match self {
            Self::Sha3_224 => 224,
            Self::Sha3_256 => 256,
            Self::Sha3_384 => 384,
            Self::Sha3_512 => 512,
            Self::Shake128 => 128,
            Self::Shake256 => 256,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Sha3_224 => "SHA3-224",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_384 => "SHA3-384",
            Self::Sha3_512 => "SHA3-512",
            Self::Shake128 => "SHAKE128",
            Self::Shake256 => "SHAKE256",
        }
    }
}

#[derive(Serialize)]
struct DigestOutput {
    algorithm: &'static str,
    file: String,
    length: usize,
    digest: String,
}

#[derive(Serialize)]
struct TagOutput {
    file: String,
    sidecar: String,
    tag: String,
}

#[derive(Serialize)]
struct VerifyOutput {
    file: String,
    valid: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Digest {
            ref file,
            algorithm,
            length,
        } => cmd_digest(file, algorithm, length, cli.json),
        Commands::Tag { ref file } => cmd_tag(file, cli.json),
        Commands::Verify { ref file } => cmd_verify(file, cli.json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_digest(
    file: &PathBuf,
    algorithm: Algorithm,
    length: Option<usize>,
    json: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mode = algorithm.mode();
    let bits = algorithm.output_bits();

    let out_len = match (mode, length) {
        (HashMode::Sha3, None) => bits / 8,
        (HashMode::Sha3, Some(_)) => {
            return Err(format!("{} has a fixed digest length", algorithm.label()).into());
        }
        (HashMode::Shake, len) => len.unwrap_or(32),
    };

    let data = seshat_io::read_file(file)?;
    let digest = hash(out_len, &data, bits, mode)?;
    let digest_hex = to_hex(&digest);

    if json {
        let out = DigestOutput {
            algorithm: algorithm.label(),
            file: file.display().to_string(),
            length: digest.len(),
            digest: digest_hex,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}  {}", digest_hex, file.display());
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_tag(file: &PathBuf, json: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let secret = resolve_secret()?;
    let tag = write_tag(file, &secret)?;

    if json {
        let out = TagOutput {
            file: file.display().to_string(),
            sidecar: seshat_io::integrity::tag_path(file).display().to_string(),
            tag: to_hex(&tag),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("tagged {} ({})", file.display(), to_hex(&tag));
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_verify(file: &PathBuf, json: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let secret = resolve_secret()?;
    let valid = verify_tag(file, &secret)?;

    if json {
        let out = VerifyOutput {
            file: file.display().to_string(),
            valid,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if valid {
        println!("OK  {}", file.display());
    } else {
        println!("FAILED  {}", file.display());
    }

    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Resolve the shared secret: `SESHAT_SECRET`, then the first line of
/// `SESHAT_SECRET_FILE`.
fn resolve_secret() -> Result<Zeroizing<Vec<u8>>, Box<dyn std::error::Error>> {
    if let Ok(secret) = std::env::var(ENV_SESHAT_SECRET) {
        if !secret.is_empty() {
            return Ok(Zeroizing::new(secret.into_bytes()));
        }
    }

    if let Ok(path) = std::env::var(ENV_SESHAT_SECRET_FILE) {
        if !path.is_empty() {
            let file = std::fs::File::open(&path)?;
            let mut line = String::new();
            BufReader::new(file).read_line(&mut line)?;
            let trimmed = line.trim_end_matches(['\r', '\n']);
            if trimmed.is_empty() {
                return Err(format!("secret file {} has an empty first line", path).into());
            }
            return Ok(Zeroizing::new(trimmed.as_bytes().to_vec()));
        }
    }

    Err(format!(
        "no shared secret: set {} or {}",
        ENV_SESHAT_SECRET, ENV_SESHAT_SECRET_FILE
    )
    .into())
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[0x00, 0xff, 0x3a]), "00ff3a");
        assert_eq!(to_hex(&[]), "");
    }

    #[test]
    fn test_algorithm_table() {
        assert_eq!(Algorithm::Sha3_224.output_bits(), 224);
        assert_eq!(Algorithm::Sha3_224.mode(), HashMode::Sha3);
        assert_eq!(Algorithm::Shake128.mode(), HashMode::Shake);
        assert_eq!(Algorithm::Shake256.label(), "SHAKE256");
    }
}
