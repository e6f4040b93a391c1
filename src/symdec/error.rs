use rand::rand_core;
use thiserror::Error;

/// Result type for every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type. A call either returns its complete output or one of these; no partial
/// plaintext or ciphertext is ever returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// An argument had odd length or a character outside `[0-9a-fA-F]`.
    #[error("invalid hex in {field}: {source}")]
    InvalidHex {
        field: &'static str,
        source: hex::FromHexError,
    },

    /// A decoded key, IV, or message did not have the size the algorithm requires.
    #[error("invalid {field} length: {len} bytes (expected {expected})")]
    InvalidLength {
        field: &'static str,
        len: usize,
        expected: &'static str,
    },

    /// The underlying block cipher refused the operation.
    #[error("cipher failure: {context}")]
    CipherFailure { context: &'static str },

    /// PKCS#7 padding was requested to be stripped but the trailing bytes are not valid padding.
    #[error("invalid padding on {len} bytes ({context})")]
    InvalidPadding { len: usize, context: &'static str },

    /// OS RNG failed while generating a key or IV.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}
