//! AES block cipher: key handling and the block transform, backed by the RustCrypto `aes` crate.

mod cipher;
mod key;

pub use self::cipher::AesCipher;
pub use self::key::Key;

/// AES block size in bytes, for every key size.
pub const AES_BLOCK_SIZE: usize = 16;
