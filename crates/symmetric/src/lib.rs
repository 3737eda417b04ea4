//! Streaming block cipher contexts for the blockflow library
//!
//! This crate provides the buffering and padding discipline that sits
//! between a caller feeding arbitrarily sized chunks and a whole-block
//! cipher primitive. Concrete primitives are plugged in through the
//! [`BlockTransform`](blockflow_api::BlockTransform) seam; the AES-ECB
//! variants are provided in [`aes`] and selected by name through
//! [`provider`].
//!
//! ```
//! use blockflow_symmetric::{fetch, Result};
//!
//! fn example() -> Result<()> {
//!     let key = [0u8; 32];
//!     let mut ctx = fetch("AES-256-ECB")?;
//!     ctx.encrypt_init(Some(&key), None)?;
//!
//!     let mut ciphertext = Vec::new();
//!     ctx.update(b"first chunk, ", &mut ciphertext)?;
//!     ctx.update(b"second chunk", &mut ciphertext)?;
//!     ctx.finalize(&mut ciphertext)?;
//!     assert_eq!(ciphertext.len(), 32);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![forbid(unsafe_code)]

pub mod aes;
pub mod cipher;
pub mod error;
pub mod provider;
pub mod streaming;

// Re-export main types for convenience
pub use aes::{Aes128Ecb, Aes192Ecb, Aes256Ecb, EcbTransform};
pub use cipher::{decrypt, encrypt};
pub use provider::{fetch, Algorithm};
pub use streaming::{BlockBuffer, CipherContext, StreamState};

// Re-export the API error system instead of custom error types
pub use blockflow_api::error::{Error, Result};

// Re-export the validation helpers used by custom transforms
pub use blockflow_api::error::validate;
