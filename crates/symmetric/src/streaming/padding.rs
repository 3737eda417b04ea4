//! Block padding codec
//!
//! Every pad byte carries the pad length `p`, with `1 <= p <= block_size`.
//! A stream that already ends on a block boundary gets a whole extra block
//! of padding, so the last block of a padded stream always carries some.
//!
//! Removal inspects every byte of the final block whatever its contents,
//! and any malformed padding is reported as the same opaque
//! [`Error::BadDecrypt`].

use blockflow_internal::constant_time::{ct_eq_u8, ct_in_range_u8, ct_lt_u8};
use blockflow_params::utils::symmetric::MAX_PADDED_BLOCK_SIZE;
use subtle::Choice;

use crate::error::{validate, Error, Result};

/// Number of pad bytes added after `data_len` bytes of plaintext
pub fn pad_len(data_len: usize, block_size: usize) -> usize {
    block_size - data_len % block_size
}

/// Pad the first `data_len` bytes of `block` out to the whole block
///
/// Returns the number of pad bytes written.
pub fn pad(block: &mut [u8], data_len: usize) -> Result<usize> {
    let block_size = block.len();
    validate::parameter(
        (1..=MAX_PADDED_BLOCK_SIZE).contains(&block_size),
        "blocksize",
        "must be between 1 and 255 to pad",
    )?;
    validate::parameter(
        data_len < block_size,
        "data_len",
        "must be shorter than one block",
    )?;

    let p = pad_len(data_len, block_size);
    block[data_len..].fill(p as u8);
    Ok(p)
}

/// Check the padding of a decrypted final block
///
/// Returns the number of plaintext bytes that precede the padding. The
/// running time depends only on the block size.
pub fn unpad(block: &[u8]) -> Result<usize> {
    let block_size = block.len();
    validate::parameter(
        (1..=MAX_PADDED_BLOCK_SIZE).contains(&block_size),
        "blocksize",
        "must be between 1 and 255 to unpad",
    )?;

    let p = block[block_size - 1];
    let mut good: Choice = ct_in_range_u8(p, 1, block_size as u8);

    // Walk back from the end: the first p bytes must all equal p
    for (i, &b) in block.iter().rev().enumerate() {
        let in_pad = ct_lt_u8(i as u8, p);
        good &= !in_pad | ct_eq_u8(b, p);
    }

    if bool::from(good) {
        Ok(block_size - p as usize)
    } else {
        Err(Error::BadDecrypt)
    }
}
