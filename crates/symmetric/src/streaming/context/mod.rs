//! Cipher context: one encrypt-or-decrypt stream at a time
//!
//! A context owns a keyed [`BlockTransform`], the pending bytes of the
//! current stream, an optional IV and the padding flag. Streams follow
//!
//! ```text
//! Uninitialized --init--> Active --finalize--> Finished
//!                           |                     |
//!                           +--error--> Failed    +--init--> Active
//! ```
//!
//! Only a new `encrypt_init`/`decrypt_init` leaves `Finished` or `Failed`.
//! Secrets (key schedule, IV, pending bytes) are zeroized on drop.

use log::{debug, trace, warn};

use blockflow_api::{BlockTransform, CipherMode, Direction};
use blockflow_common::SecretVec;
use blockflow_params::utils::symmetric::MAX_PADDED_BLOCK_SIZE;
use zeroize::Zeroize;

use super::accumulator::{plan, Plan};
use super::buffer::BlockBuffer;
use super::padding;
use crate::error::{validate, validate_framing, validate_stream_state, Error, Result};

/// Where a context is in its stream lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// Created, no stream started yet
    Uninitialized,
    /// Accepting `update` and `finalize`
    Active,
    /// The last stream was finalized successfully
    Finished,
    /// The last stream hit a fatal error and must be re-initialized
    Failed,
}

/// Streaming cipher context over a whole-block transform
pub struct CipherContext {
    transform: Box<dyn BlockTransform>,
    buffer: BlockBuffer,
    iv: Option<SecretVec>,
    direction: Option<Direction>,
    padding: bool,
    state: StreamState,
    // Set once the current stream has seen an update
    updated: bool,
}

impl CipherContext {
    /// Wrap a transform in a fresh context with padding enabled
    ///
    /// The transform's block size must be between 1 and 255 bytes.
    pub fn new(transform: Box<dyn BlockTransform>) -> Result<Self> {
        let block_size = transform.block_size();
        validate::parameter(
            (1..=MAX_PADDED_BLOCK_SIZE).contains(&block_size),
            "blocksize",
            "must be between 1 and 255",
        )?;
        debug!(
            "new {} context (block size {}, key length {})",
            transform.name(),
            block_size,
            transform.key_len()
        );
        Ok(Self {
            buffer: BlockBuffer::new(block_size),
            transform,
            iv: None,
            direction: None,
            padding: true,
            state: StreamState::Uninitialized,
            updated: false,
        })
    }

    /// Start an encryption stream
    ///
    /// With `key == None` the key bound by an earlier init is reused.
    pub fn encrypt_init(&mut self, key: Option<&[u8]>, iv: Option<&[u8]>) -> Result<()> {
        self.init(Direction::Encrypt, key, iv)
    }

    /// Start a decryption stream
    ///
    /// With `key == None` the key bound by an earlier init is reused.
    pub fn decrypt_init(&mut self, key: Option<&[u8]>, iv: Option<&[u8]>) -> Result<()> {
        self.init(Direction::Decrypt, key, iv)
    }

    fn init(&mut self, direction: Direction, key: Option<&[u8]>, iv: Option<&[u8]>) -> Result<()> {
        if let Some(iv) = iv {
            validate::length("iv", iv.len(), self.block_size())?;
        }

        if let Some(key) = key {
            if let Err(e) = self.transform.key_setup(key) {
                return Err(self.fail("init", e));
            }
        } else if !self.transform.is_keyed() {
            let err = Error::InvalidKey {
                context: self.transform.name(),
                message: "no key supplied and none bound".to_string(),
            };
            return Err(self.fail("init", err));
        }

        if let Some(iv) = iv {
            self.iv = Some(SecretVec::from_slice(iv));
        }
        self.buffer.clear();
        self.direction = Some(direction);
        self.updated = false;
        self.state = StreamState::Active;

        debug!(
            "{} {} stream started (new key: {}, iv: {}, padding: {})",
            self.transform.name(),
            direction,
            key.is_some(),
            iv.is_some(),
            self.padding
        );
        Ok(())
    }

    /// Feed `input` and append any completed output to `output`
    ///
    /// Returns the number of bytes appended. Only whole blocks are ever
    /// emitted; on decrypt with padding the last whole block is kept back
    /// for [`finalize`](Self::finalize).
    pub fn update(&mut self, input: &[u8], output: &mut Vec<u8>) -> Result<usize> {
        let start = output.len();
        let needed = self.plan_update(input.len()).output_len(self.block_size());
        output.resize(start + needed, 0);

        match self.update_into(input, &mut output[start..]) {
            Ok(written) => {
                output.truncate(start + written);
                Ok(written)
            }
            Err(e) => {
                output.truncate(start);
                Err(e)
            }
        }
    }

    /// Feed `input` and write completed output into `output`
    ///
    /// `output` must have room for every whole block this call releases;
    /// `input.len() + block_size` always suffices. An undersized `output`
    /// is rejected before any state changes.
    pub fn update_into(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        validate_stream_state(
            self.state == StreamState::Active,
            "update",
            "stream is not active",
        )?;

        let plan = self.plan_update(input.len());
        let needed = plan.output_len(self.block_size());
        validate::min_length("update output", output.len(), needed)?;

        match self.apply_update(&plan, input, output) {
            Ok(written) => {
                self.updated = true;
                trace!(
                    "{} update: {} in, {} out, {} pending",
                    self.transform.name(),
                    input.len(),
                    written,
                    self.buffer.len()
                );
                Ok(written)
            }
            Err(e) => Err(self.fail("update", e)),
        }
    }

    fn plan_update(&self, input_len: usize) -> Plan {
        let hold_last = self.direction == Some(Direction::Decrypt) && self.padding;
        plan(self.buffer.len(), input_len, self.block_size(), hold_last)
    }

    fn apply_update(&mut self, plan: &Plan, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let direction = self.active_direction()?;
        let block_size = self.block_size();
        let mut written = 0;

        let (head, rest) = input.split_at(plan.fill);
        self.buffer.fill(head);

        if plan.flush_pending {
            let block = self.buffer.block_mut();
            self.transform.process(direction, block)?;
            output[..block_size].copy_from_slice(block);
            self.buffer.clear();
            written += block_size;
        }

        let (bulk, tail) = rest.split_at(plan.bulk);
        if !bulk.is_empty() {
            let out = &mut output[written..written + bulk.len()];
            out.copy_from_slice(bulk);
            self.transform.process(direction, out)?;
            written += bulk.len();
        }

        let kept = self.buffer.fill(tail);
        validate_framing(kept == tail.len(), "update", "input left unconsumed")?;

        Ok(written)
    }

    /// Close the stream, appending the last output to `output`
    ///
    /// On encrypt with padding this emits one padded block; on decrypt with
    /// padding it emits the held block minus its padding.
    pub fn finalize(&mut self, output: &mut Vec<u8>) -> Result<usize> {
        let start = output.len();
        output.resize(start + self.block_size(), 0);

        match self.finalize_into(&mut output[start..]) {
            Ok(written) => {
                output.truncate(start + written);
                Ok(written)
            }
            Err(e) => {
                output.truncate(start);
                Err(e)
            }
        }
    }

    /// Close the stream, writing the last output into `output`
    ///
    /// `output` must hold one block unless the stream can end with no
    /// output (padding disabled and nothing pending).
    pub fn finalize_into(&mut self, output: &mut [u8]) -> Result<usize> {
        validate_stream_state(
            self.state == StreamState::Active,
            "final",
            "stream is not active",
        )?;

        let direction = self.active_direction()?;
        let needed = if self.buffer.is_empty() && !self.padding {
            0
        } else {
            self.block_size()
        };
        validate::min_length("final output", output.len(), needed)?;

        let result = match direction {
            Direction::Encrypt => self.finish_encrypt(output),
            Direction::Decrypt => self.finish_decrypt(output),
        };

        match result {
            Ok(written) => {
                self.buffer.clear();
                self.state = StreamState::Finished;
                debug!(
                    "{} {} stream finished ({} final bytes)",
                    self.transform.name(),
                    direction,
                    written
                );
                Ok(written)
            }
            Err(e) => Err(self.fail("final", e)),
        }
    }

    fn finish_encrypt(&mut self, output: &mut [u8]) -> Result<usize> {
        let block_size = self.block_size();
        if self.padding {
            let data_len = self.buffer.len();
            padding::pad(self.buffer.block_mut(), data_len)?;
            self.buffer.mark_full();
        } else if self.buffer.is_empty() {
            return Ok(0);
        } else {
            validate_framing(
                self.buffer.is_full(),
                "final",
                "data not a multiple of the block size",
            )?;
        }

        let block = self.buffer.block_mut();
        self.transform.process(Direction::Encrypt, block)?;
        output[..block_size].copy_from_slice(block);
        Ok(block_size)
    }

    fn finish_decrypt(&mut self, output: &mut [u8]) -> Result<usize> {
        if !self.padding && self.buffer.is_empty() {
            return Ok(0);
        }
        validate_framing(self.buffer.is_full(), "final", "wrong final block length")?;

        let block = self.buffer.block_mut();
        self.transform.process(Direction::Decrypt, block)?;
        let plain_len = if self.padding {
            padding::unpad(block)?
        } else {
            block.len()
        };
        output[..plain_len].copy_from_slice(&block[..plain_len]);
        Ok(plain_len)
    }

    fn active_direction(&self) -> Result<Direction> {
        self.direction.ok_or(Error::InvalidState {
            operation: "stream",
            details: "no direction set",
        })
    }

    fn fail(&mut self, operation: &'static str, err: Error) -> Error {
        match err {
            Error::BadDecrypt => warn!(
                "{} stream failed during {}: padding check failed",
                self.transform.name(),
                operation
            ),
            ref e => warn!(
                "{} stream failed during {}: {}",
                self.transform.name(),
                operation,
                e
            ),
        }
        self.buffer.clear();
        self.state = StreamState::Failed;
        err
    }

    /// Whether padding is applied on encrypt and checked on decrypt
    pub fn padding(&self) -> bool {
        self.padding
    }

    /// Enable or disable padding
    ///
    /// Allowed before a stream starts, between streams, and in an active
    /// stream until its first `update`. Changing it later is rejected since
    /// earlier updates already decided whether to hold back a block.
    pub fn set_padding(&mut self, padding: bool) -> Result<()> {
        if padding == self.padding {
            return Ok(());
        }
        validate_stream_state(
            !(self.state == StreamState::Active && self.updated),
            "set padding",
            "stream already has data",
        )?;
        self.padding = padding;
        Ok(())
    }

    /// Independent copy of this context, stream position included
    pub fn dup(&self) -> Self {
        self.clone()
    }

    /// Scrub every secret and release the context
    pub fn destroy(mut self) {
        self.wipe();
    }

    fn wipe(&mut self) {
        self.transform.wipe();
        self.buffer.clear();
        if let Some(iv) = self.iv.as_mut() {
            iv.zeroize();
        }
        self.iv = None;
    }

    /// Algorithm name of the bound transform
    pub fn algorithm_name(&self) -> &'static str {
        self.transform.name()
    }

    /// Block size in bytes
    pub fn block_size(&self) -> usize {
        self.buffer.capacity()
    }

    /// Key length in bytes
    pub fn key_len(&self) -> usize {
        self.transform.key_len()
    }

    /// Direction of the current or last stream
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// IV supplied at the most recent init that carried one
    pub fn iv(&self) -> Option<&[u8]> {
        self.iv.as_ref().map(|iv| iv.as_slice())
    }

    /// Bytes waiting for a whole block
    pub fn pending_len(&self) -> usize {
        self.buffer.len()
    }

    /// Lifecycle state
    pub fn state(&self) -> StreamState {
        self.state
    }

    /// Mode of operation of the bound transform
    pub fn mode(&self) -> CipherMode {
        self.transform.mode()
    }
}

impl Clone for CipherContext {
    fn clone(&self) -> Self {
        Self {
            transform: self.transform.clone_box(),
            buffer: self.buffer.clone(),
            iv: self.iv.clone(),
            direction: self.direction,
            padding: self.padding,
            state: self.state,
            updated: self.updated,
        }
    }
}

impl Drop for CipherContext {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl core::fmt::Debug for CipherContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CipherContext")
            .field("algorithm", &self.transform.name())
            .field("direction", &self.direction)
            .field("padding", &self.padding)
            .field("state", &self.state)
            .field("pending", &self.buffer.len())
            .finish()
    }
}
