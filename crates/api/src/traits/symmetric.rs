//! The seam between a cipher context and a concrete block primitive

use crate::error::Result;
use crate::types::{CipherMode, Direction};

/// A keyed, whole-block cipher transform plugged into a cipher context
///
/// Implementations own their key schedule exclusively. The context never
/// hands a partial block to [`process`](BlockTransform::process): `blocks`
/// is always a non-empty multiple of [`block_size`](BlockTransform::block_size).
pub trait BlockTransform: Send + Sync {
    /// Algorithm name, e.g. `AES-256-ECB`
    fn name(&self) -> &'static str;

    /// Block size in bytes
    fn block_size(&self) -> usize;

    /// Key length in bytes expected by [`key_setup`](BlockTransform::key_setup)
    fn key_len(&self) -> usize;

    /// Mode of operation
    fn mode(&self) -> CipherMode;

    /// Run the key schedule for `key`, replacing any previous key
    ///
    /// On failure the transform is left without a key.
    fn key_setup(&mut self, key: &[u8]) -> Result<()>;

    /// Whether a key schedule is currently bound
    fn is_keyed(&self) -> bool;

    /// Transform one or more whole blocks in place
    fn process(&mut self, direction: Direction, blocks: &mut [u8]) -> Result<()>;

    /// Independent copy with its own key schedule storage
    fn clone_box(&self) -> Box<dyn BlockTransform>;

    /// Scrub and release the key schedule
    fn wipe(&mut self);
}

impl Clone for Box<dyn BlockTransform> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
