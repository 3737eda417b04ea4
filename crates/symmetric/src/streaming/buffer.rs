//! Fixed-capacity pending-byte buffer

use blockflow_common::SecretVec;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Bytes carried between calls, never more than one block
///
/// Storage is allocated once at the block size and zeroized whenever the
/// buffer is cleared or dropped. The length is tracked separately from the
/// storage so clearing never reallocates.
#[derive(Clone)]
pub struct BlockBuffer {
    data: SecretVec,
    len: usize,
}

impl BlockBuffer {
    /// An empty buffer holding at most `capacity` bytes
    pub fn new(capacity: usize) -> Self {
        Self {
            data: SecretVec::zeroed(capacity),
            len: 0,
        }
    }

    /// Maximum number of bytes held
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of bytes held
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no bytes are held
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether a whole block is held
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Free space left before the buffer holds a whole block
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// The held bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.data.as_slice()[..self.len]
    }

    /// Append as much of `input` as fits; returns the number of bytes taken
    pub fn fill(&mut self, input: &[u8]) -> usize {
        let take = input.len().min(self.remaining());
        self.data.as_mut_slice()[self.len..self.len + take].copy_from_slice(&input[..take]);
        self.len += take;
        take
    }

    /// The whole block of storage, held bytes first
    ///
    /// Used to pad or transform the final block in place; pair with
    /// [`mark_full`](Self::mark_full) once every byte has been written.
    pub fn block_mut(&mut self) -> &mut [u8] {
        self.data.as_mut_slice()
    }

    /// Record that every byte of storage is now part of the block
    pub fn mark_full(&mut self) {
        self.len = self.capacity();
    }

    /// Zeroize the storage and forget the held bytes
    pub fn clear(&mut self) {
        self.data.as_mut_slice().zeroize();
        self.len = 0;
    }
}

// Zeroizing keeps the storage so the buffer can hold a block again
impl Zeroize for BlockBuffer {
    fn zeroize(&mut self) {
        self.clear();
    }
}

impl Drop for BlockBuffer {
    fn drop(&mut self) {
        self.clear();
    }
}

impl ZeroizeOnDrop for BlockBuffer {}

impl core::fmt::Debug for BlockBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "BlockBuffer({}/{}, [REDACTED])", self.len, self.capacity())
    }
}
