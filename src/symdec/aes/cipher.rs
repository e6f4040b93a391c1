use ::cipher::generic_array::GenericArray;
use ::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};

use crate::symdec::aes::AES_BLOCK_SIZE;
use crate::symdec::aes::key::{Key, KeyBytes};
use crate::symdec::error::Result;
use crate::symdec::modes::{BlockCipher, cbc_decrypt, cbc_encrypt, ecb_decrypt, ecb_encrypt};

enum Variant {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

/// AES keyed from a [Key], for [CBC](AesCipher::decrypt_cbc) and [ECB](AesCipher::decrypt_ecb).
/// None of the modes add or strip padding.
pub struct AesCipher {
    variant: Variant,
}

impl AesCipher {
    /// Runs the key schedule for the key's size and stores the keyed primitive.
    pub fn new(key: &Key) -> Self {
        let variant = match key.key_bytes() {
            KeyBytes::K128(k) => Variant::Aes128(Aes128::new(k.into())),
            KeyBytes::K192(k) => Variant::Aes192(Aes192::new(k.into())),
            KeyBytes::K256(k) => Variant::Aes256(Aes256::new(k.into())),
        };
        Self { variant }
    }

    /// Short algorithm name for log lines.
    pub fn name(&self) -> &'static str {
        match self.variant {
            Variant::Aes128(_) => "AES-128",
            Variant::Aes192(_) => "AES-192",
            Variant::Aes256(_) => "AES-256",
        }
    }

    /// **Cipher block chaining** encryption with a caller-supplied IV.
    pub fn encrypt_cbc(&self, plaintext: &[u8], iv: &[u8; AES_BLOCK_SIZE]) -> Result<Vec<u8>> {
        cbc_encrypt(self, plaintext, iv)
    }

    /// **Cipher block chaining** decryption. Output has the same length as the ciphertext.
    pub fn decrypt_cbc(&self, ciphertext: &[u8], iv: &[u8; AES_BLOCK_SIZE]) -> Result<Vec<u8>> {
        cbc_decrypt(self, ciphertext, iv)
    }

    /// **Electronic codebook** encryption. **Vulnerable to pattern emergence in the ciphertext.**
    pub fn encrypt_ecb(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        ecb_encrypt(self, plaintext)
    }

    /// **Electronic codebook** decryption.
    pub fn decrypt_ecb(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        ecb_decrypt(self, ciphertext)
    }
}

impl BlockCipher for AesCipher {
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn encrypt_block(&self, block: &mut [u8]) {
        let block = GenericArray::from_mut_slice(block);
        match &self.variant {
            Variant::Aes128(c) => c.encrypt_block(block),
            Variant::Aes192(c) => c.encrypt_block(block),
            Variant::Aes256(c) => c.encrypt_block(block),
        }
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        let block = GenericArray::from_mut_slice(block);
        match &self.variant {
            Variant::Aes128(c) => c.decrypt_block(block),
            Variant::Aes192(c) => c.decrypt_block(block),
            Variant::Aes256(c) => c.decrypt_block(block),
        }
    }
}
