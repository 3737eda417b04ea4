//! AES-ECB transforms for cipher contexts
//!
//! [`EcbTransform`] adapts any [`BlockCipher`] from `blockflow-algorithms`
//! to the [`BlockTransform`] seam a [`CipherContext`](crate::CipherContext)
//! drives. The key schedule is owned by the transform and wiped when the
//! transform is wiped or dropped.

use core::fmt;

use blockflow_algorithms::block::{Aes128, Aes192, Aes256, BlockCipher, Ecb};
use blockflow_api::{BlockTransform, CipherMode, Direction};
use blockflow_params::utils::names::{AES_128_ECB, AES_192_ECB, AES_256_ECB};
use zeroize::Zeroize;

use crate::error::{Error, Result, SymmetricResultExt};

/// ECB transform over a block cipher, keyed lazily by `key_setup`
pub struct EcbTransform<B: BlockCipher + Zeroize> {
    name: &'static str,
    mode: Option<Ecb<B>>,
}

/// AES-128 in ECB mode
pub type Aes128Ecb = EcbTransform<Aes128>;
/// AES-192 in ECB mode
pub type Aes192Ecb = EcbTransform<Aes192>;
/// AES-256 in ECB mode
pub type Aes256Ecb = EcbTransform<Aes256>;

impl<B: BlockCipher + Zeroize> EcbTransform<B> {
    /// An unkeyed transform reporting `name`
    pub fn with_name(name: &'static str) -> Self {
        Self { name, mode: None }
    }
}

impl Aes128Ecb {
    /// Unkeyed AES-128-ECB
    pub fn new() -> Self {
        Self::with_name(AES_128_ECB)
    }
}

impl Aes192Ecb {
    /// Unkeyed AES-192-ECB
    pub fn new() -> Self {
        Self::with_name(AES_192_ECB)
    }
}

impl Aes256Ecb {
    /// Unkeyed AES-256-ECB
    pub fn new() -> Self {
        Self::with_name(AES_256_ECB)
    }
}

impl Default for Aes128Ecb {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Aes192Ecb {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Aes256Ecb {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: BlockCipher + Zeroize + Clone> Clone for EcbTransform<B> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            mode: self.mode.clone(),
        }
    }
}

impl<B: BlockCipher + Zeroize> fmt::Debug for EcbTransform<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcbTransform")
            .field("name", &self.name)
            .field("keyed", &self.mode.is_some())
            .finish()
    }
}

impl<B> BlockTransform for EcbTransform<B>
where
    B: BlockCipher + Zeroize + Clone + Send + Sync + 'static,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn block_size(&self) -> usize {
        B::block_size()
    }

    fn key_len(&self) -> usize {
        B::key_size()
    }

    fn mode(&self) -> CipherMode {
        CipherMode::Ecb
    }

    fn key_setup(&mut self, key: &[u8]) -> Result<()> {
        // Drop (and zeroize) any previous schedule before running the new one
        self.mode = None;
        self.mode = Some(Ecb::with_key(key).map_key_err(self.name)?);
        Ok(())
    }

    fn is_keyed(&self) -> bool {
        self.mode.is_some()
    }

    fn process(&mut self, direction: Direction, blocks: &mut [u8]) -> Result<()> {
        let mode = self.mode.as_ref().ok_or_else(|| Error::InvalidKey {
            context: self.name,
            message: "no key has been set".to_string(),
        })?;
        match direction {
            Direction::Encrypt => mode.encrypt_blocks(blocks),
            Direction::Decrypt => mode.decrypt_blocks(blocks),
        }
        .map_primitive_err()
    }

    fn clone_box(&self) -> Box<dyn BlockTransform> {
        Box::new(self.clone())
    }

    fn wipe(&mut self) {
        self.mode = None;
    }
}
