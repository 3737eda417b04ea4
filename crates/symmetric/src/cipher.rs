//! One-shot encryption and decryption
//!
//! Thin wrappers that run a whole buffer through a padded stream. Use a
//! [`CipherContext`](crate::CipherContext) directly for chunked input or to
//! turn padding off.

use crate::error::Result;
use crate::provider::Algorithm;

/// Encrypt `plaintext` with padding in a single stream
pub fn encrypt(algorithm: Algorithm, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let mut ctx = algorithm.new_context()?;
    ctx.encrypt_init(Some(key), None)?;

    let mut ciphertext = Vec::with_capacity(plaintext.len() + algorithm.block_size());
    ctx.update(plaintext, &mut ciphertext)?;
    ctx.finalize(&mut ciphertext)?;
    Ok(ciphertext)
}

/// Decrypt a padded `ciphertext` in a single stream
pub fn decrypt(algorithm: Algorithm, key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let mut ctx = algorithm.new_context()?;
    ctx.decrypt_init(Some(key), None)?;

    let mut plaintext = Vec::with_capacity(ciphertext.len());
    ctx.update(ciphertext, &mut plaintext)?;
    ctx.finalize(&mut plaintext)?;
    Ok(plaintext)
}
