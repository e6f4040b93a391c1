//! Padding-free block cipher modes of operation, generic over [`BlockCipher`].

mod cbc;
mod ecb;
mod util;

pub use cbc::{cbc_decrypt, cbc_encrypt};
pub use ecb::{ecb_decrypt, ecb_encrypt};
pub use util::PARALLEL_THRESHOLD;

/// A keyed block cipher that transforms one block in place.
///
/// Implementations must be stateless between calls so a single instance can be
/// shared across the rayon pool.
pub trait BlockCipher: Sync {
    /// Block size in bytes.
    const BLOCK_SIZE: usize;

    /// Encrypts `block` in place. `block.len()` is always `BLOCK_SIZE`.
    fn encrypt_block(&self, block: &mut [u8]);

    /// Decrypts `block` in place. `block.len()` is always `BLOCK_SIZE`.
    fn decrypt_block(&self, block: &mut [u8]);
}
