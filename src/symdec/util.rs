use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::symdec::error::{Error, Result};

/// Fills an `N`-byte array from the OS RNG. Used for keys and IVs.
pub fn random_bytes<const N: usize>() -> Result<[u8; N]> {
    let mut out = [0u8; N];
    OsRng.try_fill_bytes(&mut out)?;
    Ok(out)
}

/// PKCS#7 pads `data` to a multiple of `block_size`. A full block of padding is
/// appended when the input is already aligned. The padding length must fit in one
/// byte, so `block_size` outside `1..=255` is an InvalidLength error.
pub fn pad_pkcs7(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    let pad_len = check_block_size(block_size)? - data.len() % block_size;

    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    out.resize(data.len() + pad_len, pad_len as u8);
    Ok(out)
}

fn check_block_size(block_size: usize) -> Result<usize> {
    if !(1..=255).contains(&block_size) {
        return Err(Error::InvalidLength {
            field: "block size",
            len: block_size,
            expected: "1 to 255 bytes",
        });
    }
    Ok(block_size)
}

/// Removes and validates PKCS#7 padding in place. Nothing is truncated on error.
pub fn unpad_pkcs7(data: &mut Vec<u8>, block_size: usize) -> Result<()> {
    check_block_size(block_size)?;
    let Some(&last) = data.last() else {
        return Err(Error::InvalidPadding {
            len: 0,
            context: "attempted to unpad empty input",
        });
    };

    let pad = last as usize;
    if pad == 0 || pad > block_size || pad > data.len() {
        return Err(Error::InvalidPadding {
            len: data.len(),
            context: "padding length byte out of range",
        });
    }

    let start = data.len() - pad;
    if !data[start..].iter().all(|&b| b == last) {
        return Err(Error::InvalidPadding {
            len: data.len(),
            context: "padding bytes are not all equal to the length byte",
        });
    }

    data.truncate(start);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_fills_to_block_boundary() -> Result<()> {
        assert_eq!(pad_pkcs7(b"hello", 8)?, b"hello\x03\x03\x03");
        assert_eq!(pad_pkcs7(&[0u8; 8], 8)?.len(), 16);
        assert_eq!(pad_pkcs7(&[], 16)?, vec![16u8; 16]);
        assert_eq!(pad_pkcs7(b"abc", 255)?.len(), 255);
        Ok(())
    }

    #[test]
    fn pad_rejects_block_sizes_outside_one_byte() {
        for block_size in [0, 256, 1024] {
            assert!(
                matches!(
                    pad_pkcs7(b"abc", block_size),
                    Err(Error::InvalidLength { field: "block size", len, .. }) if len == block_size
                ),
                "block size {block_size} should be rejected"
            );
        }
    }

    #[test]
    fn unpad_rejects_zero_block_size() {
        let mut data = vec![1u8];
        assert!(matches!(
            unpad_pkcs7(&mut data, 0),
            Err(Error::InvalidLength { field: "block size", len: 0, .. })
        ));
        assert_eq!(data, [1]);
    }

    #[test]
    fn unpad_strips_valid_padding() -> Result<()> {
        let mut data = b"Hello World !!!!!!".to_vec();
        data.extend_from_slice(&[0x0e; 14]);
        unpad_pkcs7(&mut data, 16)?;
        assert_eq!(data, b"Hello World !!!!!!");
        Ok(())
    }

    #[test]
    fn unpad_rejects_malformed_padding() {
        for bad in [
            &b""[..],
            &b"abc\x00"[..],
            &b"abcdefg\x09"[..],
            &b"abcde\x01\x03\x03"[..],
        ] {
            let mut data = bad.to_vec();
            assert!(
                matches!(unpad_pkcs7(&mut data, 8), Err(Error::InvalidPadding { .. })),
                "{bad:?} should be rejected"
            );
            assert_eq!(data, bad, "input must be left untouched on error");
        }
    }

    #[test]
    fn random_bytes_are_not_constant() -> Result<()> {
        let a: [u8; 16] = random_bytes()?;
        let b: [u8; 16] = random_bytes()?;
        assert_ne!(a, b);
        Ok(())
    }
}
