//! Byte-block helpers shared by the stripe layouts and disk buffers.

#[cfg(test)]
mod block_tests;

use crate::error::{RaidError, Result};

/// Largest block size a layout accepts, in bytes.
pub const MAX_BLOCK_SIZE: usize = 1 << 12;

#[inline]
/// `xor_in_place` XORs `rhs` into `dst` byte by byte.
///
/// # Panics
/// Panics if the two blocks differ in length.
pub fn xor_in_place(dst: &mut [u8], rhs: &[u8]) {
    assert_eq!(
        dst.len(),
        rhs.len(),
        "XOR operands must have equal length."
    );
    for (a, b) in dst.iter_mut().zip(rhs) {
        *a ^= *b;
    }
}

/// `xor_blocks` overwrites `out` with the XOR of every block in `blocks`.
///
/// An empty iterator leaves `out` zeroed.
pub fn xor_blocks<'a, I>(out: &mut [u8], blocks: I)
where
    I: IntoIterator<Item = &'a [u8]>,
{
    out.fill(0);
    for block in blocks {
        xor_in_place(out, block);
    }
}

/// `zeroed` reserves a zero-filled buffer of `len` bytes without aborting on OOM.
///
/// # Errors
/// Returns [`RaidError::AllocationFailure`] when the reservation is refused.
pub fn zeroed(len: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| RaidError::AllocationFailure { bytes: len })?;
    buf.resize(len, 0);
    Ok(buf)
}
