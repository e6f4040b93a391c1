//! Defines the [`Key`] struct, which holds a valid AES key of 128, 192, or 256 bits.

use crate::symdec::error::{Error, Result};
use crate::symdec::util::random_bytes;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

/// A valid AES key. Built from a 16, 24, or 32 byte slice, or generated from the OS RNG.
/// A `Key` is required to build an [AesCipher](crate::AesCipher).
///
/// ## Examples
/// ```
/// # fn main() -> symdec::Result<()> {
/// use symdec::Key;
///
/// let bytes = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
/// let key = Key::try_from_slice(&bytes)?;
/// assert_eq!(key.as_bytes(), &bytes[..]);
///
/// // anything other than 16, 24, or 32 bytes is rejected
/// assert!(Key::try_from_slice(&bytes[..15]).is_err());
///
/// let random = Key::rand_key_128()?;
/// assert_eq!(random.as_bytes().len(), 16);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Generate a random 128-bit key. Returns Error if OsRng fails.
    pub fn rand_key_128() -> Result<Self> {
        Ok(Self {
            bytes: KeyBytes::K128(random_bytes()?),
        })
    }

    /// Generate a random 192-bit key. Returns Error if OsRng fails.
    pub fn rand_key_192() -> Result<Self> {
        Ok(Self {
            bytes: KeyBytes::K192(random_bytes()?),
        })
    }

    /// Generate a random 256-bit key. Returns Error if OsRng fails.
    pub fn rand_key_256() -> Result<Self> {
        Ok(Self {
            bytes: KeyBytes::K256(random_bytes()?),
        })
    }

    /// Attempts to build a key from a slice of bytes. Returns an InvalidLength error
    /// for anything other than 16, 24, or 32 bytes. Keys are never truncated or padded.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes = if let Ok(k) = <[u8; 16]>::try_from(bytes) {
            KeyBytes::K128(k)
        } else if let Ok(k) = <[u8; 24]>::try_from(bytes) {
            KeyBytes::K192(k)
        } else if let Ok(k) = <[u8; 32]>::try_from(bytes) {
            KeyBytes::K256(k)
        } else {
            return Err(Error::InvalidLength {
                field: "key",
                len: bytes.len(),
                expected: "16, 24, or 32 bytes",
            });
        };
        Ok(Self { bytes })
    }

    /// Returns a reference to the internal key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }

    pub(crate) fn key_bytes(&self) -> &KeyBytes {
        &self.bytes
    }
}
