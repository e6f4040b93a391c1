//! DES and Triple-DES, backed by the RustCrypto `des` crate.

use cipher::generic_array::GenericArray;
use cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use des::{Des, TdesEde2, TdesEde3};

use crate::symdec::error::{Error, Result};
use crate::symdec::modes::{BlockCipher, ecb_decrypt, ecb_encrypt};

/// DES block size in bytes.
pub const DES_BLOCK_SIZE: usize = 8;

enum Variant {
    Single(Des),
    Ede2(TdesEde2),
    Ede3(TdesEde3),
}

/// DES family cipher selected by key length: 8 bytes for single DES, 16 bytes for two-key
/// 3DES (EDE2), 24 bytes for three-key 3DES (EDE3).
pub struct DesCipher {
    variant: Variant,
}

impl DesCipher {
    /// Single DES. The key must be exactly 8 bytes; parity bits are ignored.
    pub fn single(key: &[u8]) -> Result<Self> {
        if key.len() != 8 {
            return Err(Error::InvalidLength {
                field: "key",
                len: key.len(),
                expected: "8 bytes",
            });
        }
        Self::new(key)
    }

    /// Any DES family key: 8, 16, or 24 bytes.
    pub fn new(key: &[u8]) -> Result<Self> {
        let rejected = |_: cipher::InvalidLength| Error::CipherFailure {
            context: "DES key schedule rejected the key",
        };
        let variant = match key.len() {
            8 => Variant::Single(Des::new_from_slice(key).map_err(rejected)?),
            16 => Variant::Ede2(TdesEde2::new_from_slice(key).map_err(rejected)?),
            24 => Variant::Ede3(TdesEde3::new_from_slice(key).map_err(rejected)?),
            len => {
                return Err(Error::InvalidLength {
                    field: "key",
                    len,
                    expected: "8, 16, or 24 bytes",
                });
            }
        };
        Ok(Self { variant })
    }

    /// Short algorithm name for log lines.
    pub fn name(&self) -> &'static str {
        match self.variant {
            Variant::Single(_) => "DES",
            Variant::Ede2(_) => "3DES-EDE2",
            Variant::Ede3(_) => "3DES-EDE3",
        }
    }

    /// **Electronic codebook** encryption. No padding is added.
    pub fn encrypt_ecb(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        ecb_encrypt(self, plaintext)
    }

    /// **Electronic codebook** decryption. Padding is left in place.
    pub fn decrypt_ecb(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        ecb_decrypt(self, ciphertext)
    }
}

impl BlockCipher for DesCipher {
    const BLOCK_SIZE: usize = DES_BLOCK_SIZE;

    fn encrypt_block(&self, block: &mut [u8]) {
        let block = GenericArray::from_mut_slice(block);
        match &self.variant {
            Variant::Single(c) => c.encrypt_block(block),
            Variant::Ede2(c) => c.encrypt_block(block),
            Variant::Ede3(c) => c.encrypt_block(block),
        }
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        let block = GenericArray::from_mut_slice(block);
        match &self.variant {
            Variant::Single(c) => c.decrypt_block(block),
            Variant::Ede2(c) => c.decrypt_block(block),
            Variant::Ede3(c) => c.decrypt_block(block),
        }
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn single_des_known_answer() -> Result<()> {
        let cipher = DesCipher::single(&hex!("133457799bbcdff1"))?;
        let ciphertext = cipher.encrypt_ecb(&hex!("0123456789abcdef"))?;
        assert_eq!(ciphertext, hex!("85e813540f0ab405"));
        assert_eq!(cipher.decrypt_ecb(&ciphertext)?, hex!("0123456789abcdef"));
        Ok(())
    }

    #[test]
    fn single_des_decrypts_hello() -> Result<()> {
        let cipher = DesCipher::single(b"sdfsdfss")?;
        let plaintext = cipher.decrypt_ecb(&hex!("d39c2f8e91d3da40"))?;
        assert_eq!(plaintext, b"hello\x03\x03\x03");
        Ok(())
    }

    #[test]
    fn triple_des_known_answers() -> Result<()> {
        let ede3 = DesCipher::new(&hex!(
            "0123456789abcdef23456789abcdef01456789abcdef0123"
        ))?;
        assert_eq!(ede3.name(), "3DES-EDE3");
        assert_eq!(
            ede3.encrypt_ecb(&hex!("5468652071756663"))?,
            hex!("a826fd8ce53b855f")
        );

        let ede2 = DesCipher::new(&hex!("0123456789abcdeffedcba9876543210"))?;
        assert_eq!(ede2.name(), "3DES-EDE2");
        assert_eq!(
            ede2.decrypt_ecb(&hex!("1a4d672dca6cb335"))?,
            hex!("0123456789abcdef")
        );
        Ok(())
    }

    #[test]
    fn triple_des_with_repeated_key_is_single_des() -> Result<()> {
        let key = hex!("7364667364667373");
        let mut repeated = Vec::new();
        for _ in 0..3 {
            repeated.extend_from_slice(&key);
        }
        let block = hex!("d39c2f8e91d3da40");
        assert_eq!(
            DesCipher::new(&repeated)?.decrypt_ecb(&block)?,
            DesCipher::single(&key)?.decrypt_ecb(&block)?
        );
        Ok(())
    }

    #[test]
    fn rejects_bad_key_sizes() {
        assert!(matches!(
            DesCipher::single(&[0u8; 16]),
            Err(Error::InvalidLength { field: "key", len: 16, .. })
        ));
        assert!(matches!(
            DesCipher::new(&[0u8; 7]),
            Err(Error::InvalidLength { field: "key", len: 7, .. })
        ));
    }
}
