use crate::symdec::error::{Error, Result};

pub const PARALLEL_THRESHOLD: usize = 4 * 1024; // process blocks in parallel if input size gt 4 KiB

#[inline(always)]
pub(crate) fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}

/// Rejects messages that are empty or not a whole number of blocks.
pub(crate) fn check_aligned(field: &'static str, len: usize, block_size: usize) -> Result<()> {
    if len == 0 || len % block_size != 0 {
        return Err(Error::InvalidLength {
            field,
            len,
            expected: match block_size {
                8 => "a positive multiple of 8 bytes",
                16 => "a positive multiple of 16 bytes",
                _ => "a positive multiple of the block size",
            },
        });
    }
    Ok(())
}
