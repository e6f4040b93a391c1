use rayon::prelude::*;

use crate::symdec::error::{Error, Result};
use crate::symdec::modes::BlockCipher;
use crate::symdec::modes::util::{PARALLEL_THRESHOLD, check_aligned, xor_in_place};

/// Cipher block chaining encryption. Each plaintext block is xor'd with the previous ciphertext
/// block (the IV for the first) before encryption. Inherently serial. No padding is added.
pub fn cbc_encrypt<C: BlockCipher>(cipher: &C, plaintext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    check_iv::<C>(iv)?;
    check_aligned("plaintext", plaintext.len(), C::BLOCK_SIZE)?;

    let mut output = plaintext.to_vec();
    let mut chain = iv;
    for block in output.chunks_exact_mut(C::BLOCK_SIZE) {
        xor_in_place(block, chain);
        cipher.encrypt_block(block);
        chain = block;
    }

    Ok(output)
}

/// Cipher block chaining decryption. Padding is left in place.
///
/// `P[i] = D(C[i]) ^ C[i - 1]` only reads ciphertext, so blocks decrypt independently
/// and large inputs are spread over the rayon pool.
pub fn cbc_decrypt<C: BlockCipher>(cipher: &C, ciphertext: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    check_iv::<C>(iv)?;
    check_aligned("ciphertext", ciphertext.len(), C::BLOCK_SIZE)?;

    let bs = C::BLOCK_SIZE;
    let mut output = ciphertext.to_vec();
    let decrypt = |(i, block): (usize, &mut [u8])| {
        cipher.decrypt_block(block);
        let prev = if i == 0 { iv } else { &ciphertext[(i - 1) * bs..i * bs] };
        xor_in_place(block, prev);
    };

    if output.len() > PARALLEL_THRESHOLD {
        log::trace!("CBC: {} blocks on the rayon pool", output.len() / bs);
        output.par_chunks_exact_mut(bs).enumerate().for_each(decrypt);
    } else {
        log::trace!("CBC: {} blocks serially", output.len() / bs);
        output.chunks_exact_mut(bs).enumerate().for_each(decrypt);
    }

    Ok(output)
}

fn check_iv<C: BlockCipher>(iv: &[u8]) -> Result<()> {
    if iv.len() != C::BLOCK_SIZE {
        return Err(Error::InvalidLength {
            field: "iv",
            len: iv.len(),
            expected: "one cipher block",
        });
    }
    Ok(())
}
