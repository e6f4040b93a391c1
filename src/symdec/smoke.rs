//! Library smoke test: AES-EAX encrypt-and-tag of a short message plus a PBKDF2 key
//! derivation, both with fresh random inputs. Reports output sizes only.

use std::fmt;

use aes::Aes128;
use eax::Eax;
use eax::aead::{AeadInPlace, KeyInit};
use sha2::Sha256;

use crate::symdec::aes::Key;
use crate::symdec::error::{Error, Result};
use crate::symdec::util::random_bytes;

const MESSAGE: &[u8] = b"Hello, World!";
const PASSWORD: &[u8] = b"my_password";
const PBKDF2_ROUNDS: u32 = 1000;
const DERIVED_KEY_LEN: usize = 32;

/// Sizes produced by [`smoke_test`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SmokeReport {
    pub aes_key_length: usize,
    pub ciphertext_length: usize,
    pub tag_length: usize,
    pub derived_key_length: usize,
}

impl fmt::Display for SmokeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "aes_key_length={}, ciphertext_length={}, tag_length={}, derived_key_length={}",
            self.aes_key_length, self.ciphertext_length, self.tag_length, self.derived_key_length
        )
    }
}

/// Encrypts and authenticates `"Hello, World!"` with AES-128-EAX under a random key and
/// nonce, checks the tag verifies and the message comes back, then derives a 32-byte key
/// from a fixed password and random salt with PBKDF2-HMAC-SHA256.
pub fn smoke_test() -> Result<SmokeReport> {
    let key = Key::rand_key_128()?;
    let nonce: [u8; 16] = random_bytes()?;

    let eax = Eax::<Aes128>::new_from_slice(key.as_bytes()).map_err(|_| Error::CipherFailure {
        context: "EAX rejected the key",
    })?;

    let mut buffer = MESSAGE.to_vec();
    let tag = eax
        .encrypt_in_place_detached((&nonce).into(), b"", &mut buffer)
        .map_err(|_| Error::CipherFailure {
            context: "EAX encryption failed",
        })?;
    let ciphertext_length = buffer.len();

    eax.decrypt_in_place_detached((&nonce).into(), b"", &mut buffer, &tag)
        .map_err(|_| Error::CipherFailure {
            context: "EAX tag did not verify",
        })?;
    if buffer != MESSAGE {
        return Err(Error::CipherFailure {
            context: "EAX round trip changed the message",
        });
    }

    let salt: [u8; 16] = random_bytes()?;
    let mut derived = [0u8; DERIVED_KEY_LEN];
    pbkdf2::pbkdf2_hmac::<Sha256>(PASSWORD, &salt, PBKDF2_ROUNDS, &mut derived);

    let report = SmokeReport {
        aes_key_length: key.as_bytes().len(),
        ciphertext_length,
        tag_length: tag.len(),
        derived_key_length: derived.len(),
    };
    log::debug!("smoke test: {report}");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_expected_sizes() -> Result<()> {
        let report = smoke_test()?;
        assert_eq!(
            report,
            SmokeReport {
                aes_key_length: 16,
                ciphertext_length: 13,
                tag_length: 16,
                derived_key_length: 32,
            }
        );
        assert_eq!(
            report.to_string(),
            "aes_key_length=16, ciphertext_length=13, tag_length=16, derived_key_length=32"
        );
        Ok(())
    }

    #[test]
    fn pbkdf2_depends_on_salt() {
        let mut a = [0u8; DERIVED_KEY_LEN];
        let mut b = [0u8; DERIVED_KEY_LEN];
        pbkdf2::pbkdf2_hmac::<Sha256>(PASSWORD, b"salt-one", PBKDF2_ROUNDS, &mut a);
        pbkdf2::pbkdf2_hmac::<Sha256>(PASSWORD, b"salt-two", PBKDF2_ROUNDS, &mut b);
        assert_ne!(a, b);
    }
}
