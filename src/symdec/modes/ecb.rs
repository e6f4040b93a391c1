use rayon::prelude::*;

use crate::symdec::error::Result;
use crate::symdec::modes::BlockCipher;
use crate::symdec::modes::util::{PARALLEL_THRESHOLD, check_aligned};

/// Electronic codebook encryption. Every block is encrypted independently; no padding is added,
/// so `plaintext` must already be a positive multiple of the block size.
pub fn ecb_encrypt<C: BlockCipher>(cipher: &C, plaintext: &[u8]) -> Result<Vec<u8>> {
    check_aligned("plaintext", plaintext.len(), C::BLOCK_SIZE)?;
    Ok(ecb_core(plaintext, C::BLOCK_SIZE, |block| cipher.encrypt_block(block)))
}

/// Electronic codebook decryption. Padding is left in place.
pub fn ecb_decrypt<C: BlockCipher>(cipher: &C, ciphertext: &[u8]) -> Result<Vec<u8>> {
    check_aligned("ciphertext", ciphertext.len(), C::BLOCK_SIZE)?;
    Ok(ecb_core(ciphertext, C::BLOCK_SIZE, |block| cipher.decrypt_block(block)))
}

fn ecb_core<F>(input: &[u8], block_size: usize, transform: F) -> Vec<u8>
where
    F: Fn(&mut [u8]) + Sync + Send,
{
    let mut output = input.to_vec();

    if output.len() > PARALLEL_THRESHOLD {
        log::trace!("ECB: {} blocks on the rayon pool", output.len() / block_size);
        output.par_chunks_exact_mut(block_size).for_each(transform);
    } else {
        log::trace!("ECB: {} blocks serially", output.len() / block_size);
        output.chunks_exact_mut(block_size).for_each(transform);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symdec::error::Error;
    use crate::symdec::modes::util::test_util::{RotXor, counting_bytes};

    #[test]
    fn blocks_are_independent() -> Result<()> {
        let cipher = RotXor([1, 2, 3, 4]);
        let encrypted = ecb_encrypt(&cipher, &[9, 9, 9, 9, 9, 9, 9, 9])?;
        assert_eq!(encrypted[..4], encrypted[4..], "identical blocks encrypt identically");
        assert_eq!(encrypted[..4], [8, 11, 10, 13]);
        Ok(())
    }

    #[test]
    fn serial_and_parallel_paths_agree() -> Result<()> {
        let cipher = RotXor([0xde, 0xad, 0xbe, 0xef]);
        let small = counting_bytes(PARALLEL_THRESHOLD);
        let large = counting_bytes(PARALLEL_THRESHOLD * 3);

        let enc_large = ecb_encrypt(&cipher, &large)?;
        assert_eq!(enc_large[..small.len()], ecb_encrypt(&cipher, &small)?[..]);
        assert_eq!(ecb_decrypt(&cipher, &enc_large)?, large);
        Ok(())
    }

    #[test]
    fn rejects_unaligned_or_empty_input() {
        let cipher = RotXor([0; 4]);
        assert!(matches!(
            ecb_decrypt(&cipher, &[0; 6]),
            Err(Error::InvalidLength { field: "ciphertext", len: 6, .. })
        ));
        assert!(matches!(
            ecb_encrypt(&cipher, &[]),
            Err(Error::InvalidLength { field: "plaintext", len: 0, .. })
        ));
    }
}
