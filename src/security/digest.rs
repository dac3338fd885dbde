//! Hash selection by algorithm name.
//!
//! Scanners commonly look for hashes picked through a string lookup rather than a dedicated
//! constructor, so the fixture routes SHA-1 through here.
//!
//! # Examples
//!
//! ```
//! use weak_crypto::security::digest::HashAlgorithm;
//!
//! let sha1: HashAlgorithm = "sha1".parse().unwrap();
//! assert_eq!(sha1.hexdigest(b"abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
//! ```

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::security::md5::{md5_digest, MD5_OUTPUT_SIZE};
use crate::security::sha1::{sha1_digest, SHA1_OUTPUT_SIZE};

/// Hash algorithms reachable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
}

impl HashAlgorithm {
    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
        }
    }

    /// Digest size in bytes.
    pub fn output_size(&self) -> usize {
        match self {
            HashAlgorithm::Md5 => MD5_OUTPUT_SIZE,
            HashAlgorithm::Sha1 => SHA1_OUTPUT_SIZE,
        }
    }

    /// One-shot digest of `data` with this algorithm.
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Md5 => md5_digest(data).to_vec(),
            HashAlgorithm::Sha1 => sha1_digest(data).to_vec(),
        }
    }

    /// Lowercase hex of [`HashAlgorithm::digest`].
    pub fn hexdigest(&self, data: &[u8]) -> String {
        hex::encode(self.digest(data))
    }
}

impl Display for HashAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    /// Accepts `md5`, `sha1`, `sha-1` and `sha_1`, ignoring ASCII case.
    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha1" | "sha-1" | "sha_1" => Ok(HashAlgorithm::Sha1),
            _ => Err(Error::UnknownAlgorithm(name.to_string())),
        }
    }
}

/// Looks `name` up and returns the hex digest of `data`.
pub fn hexdigest_by_name(name: &str, data: &[u8]) -> Result<String> {
    let algorithm: HashAlgorithm = name.parse()?;
    log::trace!("hashing {} bytes with {}", data.len(), algorithm);
    Ok(algorithm.hexdigest(data))
}
