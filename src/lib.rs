//! Hex-string AES-128-CBC and DES/3DES-ECB decryption (and the matching encryption).
//!
//! The top-level functions take and return hex strings and never add or strip padding:
//! decrypting a PKCS#7 padded message returns the padding bytes too. Use [`unpad_pkcs7`]
//! on the decoded bytes when that is wanted.
//!
//! ```
//! # fn main() -> symdec::Result<()> {
//! let hex = symdec::decrypt_des_ecb("d39c2f8e91d3da40", "7364667364667373")?;
//! let mut bytes = symdec::decode_hex("plaintext", &hex)?;
//! symdec::unpad_pkcs7(&mut bytes, symdec::DES_BLOCK_SIZE)?;
//! assert_eq!(bytes, b"hello");
//! # Ok(())
//! # }
//! ```

mod symdec;

pub use symdec::{
    AES_BLOCK_SIZE, AesCipher, BlockCipher, DES_BLOCK_SIZE, DesCipher, Error, Key,
    PARALLEL_THRESHOLD, Result, SmokeReport, cbc_decrypt, cbc_encrypt, decode_hex, decrypt_aes_cbc,
    decrypt_des_ecb, decrypt_tdes_ecb, ecb_decrypt, ecb_encrypt, encode_hex, encrypt_aes_cbc,
    encrypt_des_ecb, encrypt_tdes_ecb, pad_pkcs7, random_bytes, smoke_test, unpad_pkcs7,
};
