//! Hex-in, hex-out encryption and decryption.
//!
//! Every function decodes all of its arguments first, then checks sizes, then runs the
//! cipher. Output is lowercase hex of exactly the input length: padding is neither added
//! on encryption nor stripped on decryption. The functions hold no state and may be
//! called from any number of threads at once.

use crate::symdec::aes::{AES_BLOCK_SIZE, AesCipher, Key};
use crate::symdec::des::DesCipher;
use crate::symdec::error::{Error, Result};
use crate::symdec::hex::{decode_hex, encode_hex};

/// AES-128-CBC decryption.
///
/// `key_hex` and `iv_hex` must each decode to 16 bytes, `ciphertext_hex` to a positive
/// multiple of 16 bytes.
///
/// ```
/// # fn main() -> symdec::Result<()> {
/// let plaintext = symdec::decrypt_aes_cbc(
///     "679647F478987F56FFF83C7C934567A6625F4335D0A2D981B5C7E86C6124A628",
///     "2b7e151628aed2a6abf7158809cf4f3c",
///     "6bc1bee22e409f96e93d7e117393172a",
/// )?;
/// assert!(plaintext.starts_with(&hex::encode("Hello World !!!!!!")));
/// # Ok(())
/// # }
/// ```
pub fn decrypt_aes_cbc(ciphertext_hex: &str, key_hex: &str, iv_hex: &str) -> Result<String> {
    let (ciphertext, cipher, iv) = aes_128_args("ciphertext", ciphertext_hex, key_hex, iv_hex)?;
    log::debug!("AES-128-CBC decrypt: {} bytes", ciphertext.len());
    Ok(encode_hex(&cipher.decrypt_cbc(&ciphertext, &iv)?))
}

/// AES-128-CBC encryption, the inverse of [`decrypt_aes_cbc`]. `plaintext_hex` must
/// decode to a positive multiple of 16 bytes.
pub fn encrypt_aes_cbc(plaintext_hex: &str, key_hex: &str, iv_hex: &str) -> Result<String> {
    let (plaintext, cipher, iv) = aes_128_args("plaintext", plaintext_hex, key_hex, iv_hex)?;
    log::debug!("AES-128-CBC encrypt: {} bytes", plaintext.len());
    Ok(encode_hex(&cipher.encrypt_cbc(&plaintext, &iv)?))
}

/// Single DES ECB decryption.
///
/// `key_hex` must decode to 8 bytes, `ciphertext_hex` to a positive multiple of 8 bytes.
///
/// ```
/// # fn main() -> symdec::Result<()> {
/// let plaintext = symdec::decrypt_des_ecb("d39c2f8e91d3da40", "7364667364667373")?;
/// assert_eq!(plaintext, "68656c6c6f030303"); // "hello" + PKCS#7
/// # Ok(())
/// # }
/// ```
pub fn decrypt_des_ecb(ciphertext_hex: &str, key_hex: &str) -> Result<String> {
    let ciphertext = decode_hex("ciphertext", ciphertext_hex)?;
    let key = decode_hex("key", key_hex)?;
    let cipher = DesCipher::single(&key)?;
    log::debug!("DES-ECB decrypt: {} bytes", ciphertext.len());
    Ok(encode_hex(&cipher.decrypt_ecb(&ciphertext)?))
}

/// Single DES ECB encryption, the inverse of [`decrypt_des_ecb`].
pub fn encrypt_des_ecb(plaintext_hex: &str, key_hex: &str) -> Result<String> {
    let plaintext = decode_hex("plaintext", plaintext_hex)?;
    let key = decode_hex("key", key_hex)?;
    let cipher = DesCipher::single(&key)?;
    log::debug!("DES-ECB encrypt: {} bytes", plaintext.len());
    Ok(encode_hex(&cipher.encrypt_ecb(&plaintext)?))
}

/// Triple-DES ECB decryption with a 16-byte (EDE2) or 24-byte (EDE3) key.
pub fn decrypt_tdes_ecb(ciphertext_hex: &str, key_hex: &str) -> Result<String> {
    let ciphertext = decode_hex("ciphertext", ciphertext_hex)?;
    let cipher = tdes_cipher(key_hex)?;
    log::debug!("{}-ECB decrypt: {} bytes", cipher.name(), ciphertext.len());
    Ok(encode_hex(&cipher.decrypt_ecb(&ciphertext)?))
}

/// Triple-DES ECB encryption, the inverse of [`decrypt_tdes_ecb`].
pub fn encrypt_tdes_ecb(plaintext_hex: &str, key_hex: &str) -> Result<String> {
    let plaintext = decode_hex("plaintext", plaintext_hex)?;
    let cipher = tdes_cipher(key_hex)?;
    log::debug!("{}-ECB encrypt: {} bytes", cipher.name(), plaintext.len());
    Ok(encode_hex(&cipher.encrypt_ecb(&plaintext)?))
}

fn aes_128_args(
    field: &'static str,
    message_hex: &str,
    key_hex: &str,
    iv_hex: &str,
) -> Result<(Vec<u8>, AesCipher, [u8; AES_BLOCK_SIZE])> {
    let message = decode_hex(field, message_hex)?;
    let key = decode_hex("key", key_hex)?;
    let iv = decode_hex("iv", iv_hex)?;

    // the hex API is AES-128 only; AesCipher itself takes 192/256-bit keys too
    if key.len() != 16 {
        return Err(Error::InvalidLength {
            field: "key",
            len: key.len(),
            expected: "16 bytes",
        });
    }
    let iv: [u8; AES_BLOCK_SIZE] = iv.as_slice().try_into().map_err(|_| Error::InvalidLength {
        field: "iv",
        len: iv.len(),
        expected: "16 bytes",
    })?;

    Ok((message, AesCipher::new(&Key::try_from_slice(&key)?), iv))
}

fn tdes_cipher(key_hex: &str) -> Result<DesCipher> {
    let key = decode_hex("key", key_hex)?;
    if key.len() != 16 && key.len() != 24 {
        return Err(Error::InvalidLength {
            field: "key",
            len: key.len(),
            expected: "16 or 24 bytes",
        });
    }
    DesCipher::new(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const AES_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
    const AES_IV: &str = "000102030405060708090a0b0c0d0e0f";

    #[test]
    fn hex_errors_win_over_length_errors() {
        // bad key length and bad ciphertext hex: the hex problem is reported
        assert!(matches!(
            decrypt_aes_cbc("zz", "00", AES_IV),
            Err(Error::InvalidHex { field: "ciphertext", .. })
        ));
        assert!(matches!(
            decrypt_des_ecb("0000000000000000", "abc"),
            Err(Error::InvalidHex { field: "key", .. })
        ));
    }

    #[test]
    fn aes_rejects_192_and_256_bit_keys() {
        let key_192 = "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b";
        assert!(matches!(
            decrypt_aes_cbc(&"00".repeat(16), key_192, AES_IV),
            Err(Error::InvalidLength { field: "key", len: 24, .. })
        ));
    }

    #[test]
    fn aes_rejects_short_iv() {
        assert!(matches!(
            encrypt_aes_cbc(&"00".repeat(16), AES_KEY, "0001020304"),
            Err(Error::InvalidLength { field: "iv", len: 5, .. })
        ));
    }

    #[test]
    fn empty_message_is_rejected() {
        assert!(matches!(
            decrypt_aes_cbc("", AES_KEY, AES_IV),
            Err(Error::InvalidLength { field: "ciphertext", len: 0, .. })
        ));
        assert!(matches!(
            encrypt_des_ecb("", "7364667364667373"),
            Err(Error::InvalidLength { field: "plaintext", len: 0, .. })
        ));
    }

    #[test]
    fn tdes_rejects_single_des_key() {
        assert!(matches!(
            decrypt_tdes_ecb("d39c2f8e91d3da40", "7364667364667373"),
            Err(Error::InvalidLength { field: "key", len: 8, .. })
        ));
    }

    #[test]
    fn tdes_round_trip() -> Result<()> {
        let key = "0123456789abcdef23456789abcdef01456789abcdef0123";
        let ciphertext = encrypt_tdes_ecb("5468652071756663", key)?;
        assert_eq!(ciphertext, "a826fd8ce53b855f");
        assert_eq!(decrypt_tdes_ecb(&ciphertext, key)?, "5468652071756663");
        Ok(())
    }
}
