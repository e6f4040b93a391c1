mod aes;
mod des;
mod error;
mod hex;
mod modes;
mod ops;
mod smoke;
mod util;

pub use self::aes::{AES_BLOCK_SIZE, AesCipher, Key};
pub use self::des::{DES_BLOCK_SIZE, DesCipher};
pub use self::error::{Error, Result};
pub use self::hex::{decode_hex, encode_hex};
pub use self::modes::{BlockCipher, PARALLEL_THRESHOLD, cbc_decrypt, cbc_encrypt, ecb_decrypt, ecb_encrypt};
pub use self::ops::{
    decrypt_aes_cbc, decrypt_des_ecb, decrypt_tdes_ecb, encrypt_aes_cbc, encrypt_des_ecb,
    encrypt_tdes_ecb,
};
pub use self::smoke::{SmokeReport, smoke_test};
pub use self::util::{pad_pkcs7, random_bytes, unpad_pkcs7};
