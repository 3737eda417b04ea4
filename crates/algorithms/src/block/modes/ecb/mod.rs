//! Electronic Codebook (ECB) mode
//!
//! Every block is transformed independently with the same key. The input to
//! one call may hold any number of whole blocks; a trailing partial block is
//! rejected rather than padded, since padding is a stream-level concern.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::BlockCipher;
use crate::error::{validate, Result};

/// ECB mode over a keyed block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ecb<B: BlockCipher + Zeroize> {
    cipher: B,
}

impl<B: BlockCipher + Zeroize> Ecb<B> {
    /// Wrap an already keyed cipher
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }

    /// Run the key schedule for `key` and wrap the result
    pub fn with_key(key: &[u8]) -> Result<Self> {
        Ok(Self::new(B::new(key)?))
    }

    /// Encrypt a span of whole blocks in place
    pub fn encrypt_blocks(&self, data: &mut [u8]) -> Result<()> {
        validate::multiple_of("ECB plaintext", data.len(), B::block_size())?;
        for block in data.chunks_exact_mut(B::block_size()) {
            self.cipher.encrypt_block(block)?;
        }
        Ok(())
    }

    /// Decrypt a span of whole blocks in place
    pub fn decrypt_blocks(&self, data: &mut [u8]) -> Result<()> {
        validate::multiple_of("ECB ciphertext", data.len(), B::block_size())?;
        for block in data.chunks_exact_mut(B::block_size()) {
            self.cipher.decrypt_block(block)?;
        }
        Ok(())
    }

    /// The underlying block cipher
    pub fn cipher(&self) -> &B {
        &self.cipher
    }
}
