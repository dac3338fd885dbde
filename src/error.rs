use thiserror::Error;

/// Errors raised while constructing or driving the legacy primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A key outside the cipher's accepted lengths.
    #[error("invalid {algorithm} key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        algorithm: &'static str,
        expected: &'static str,
        actual: usize,
    },

    /// A hash name that does not map to a known algorithm.
    #[error("unsupported hash type {0}")]
    UnknownAlgorithm(String),

    /// Block-mode input that is not a whole number of blocks.
    #[error("{algorithm} input of {len} bytes is not a multiple of the {block_size}-byte block size")]
    InvalidDataLength {
        algorithm: &'static str,
        len: usize,
        block_size: usize,
    },

    /// PKCS#5 padding missing or malformed after decryption.
    #[error("invalid padding")]
    InvalidPadding,
}

impl Error {
    /// Shorthand for [`Error::InvalidKeyLength`].
    pub fn invalid_key_length(algorithm: &'static str, expected: &'static str, actual: usize) -> Self {
        Error::InvalidKeyLength {
            algorithm,
            expected,
            actual,
        }
    }
}

/// Result type for fallible fixture and cipher operations.
pub type Result<T> = std::result::Result<T, Error>;
