//! Block cipher primitives
//!
//! A block cipher here is a keyed permutation on exactly one block. Anything
//! that spans several blocks goes through a mode in [`modes`].

use blockflow_common::SecretVec;
use rand::{CryptoRng, RngCore};

use crate::error::Result;

pub mod aes;
pub mod modes;

// Re-exports
pub use aes::{Aes128, Aes192, Aes256};
pub use modes::Ecb;

/// Compile-time sizes and name of a block algorithm
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Human-readable algorithm name
    fn name() -> &'static str;
}

/// A single-block encrypt/decrypt primitive with its own key schedule
pub trait BlockCipher: CipherAlgorithm + Sized {
    /// Run the key schedule
    ///
    /// Fails if `key` is not exactly [`CipherAlgorithm::KEY_SIZE`] bytes.
    fn new(key: &[u8]) -> Result<Self>;

    /// Encrypt exactly one block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypt exactly one block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Block size in bytes
    fn block_size() -> usize {
        Self::BLOCK_SIZE
    }

    /// Key size in bytes
    fn key_size() -> usize {
        Self::KEY_SIZE
    }

    /// Generate a fresh random key of the right size
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> SecretVec {
        let mut key = SecretVec::zeroed(Self::KEY_SIZE);
        rng.fill_bytes(key.as_mut_slice());
        key
    }
}
