//! # blockflow
//!
//! A streaming block-cipher engine: callers feed plaintext or ciphertext in
//! chunks of any size, and the engine hands only whole blocks to the
//! underlying primitive, holding back the final block on decrypt so its
//! padding can be checked and stripped when the stream is finalized.
//!
//! ## Usage
//!
//! ```
//! use blockflow::prelude::*;
//!
//! fn run() -> Result<()> {
//!     let key = [0x2bu8; 16];
//!
//!     let mut enc = fetch("AES-128-ECB")?;
//!     enc.encrypt_init(Some(&key), None)?;
//!     let mut ciphertext = Vec::new();
//!     enc.update(b"HELLO", &mut ciphertext)?;
//!     enc.finalize(&mut ciphertext)?;
//!     assert_eq!(ciphertext.len(), 16);
//!
//!     let mut dec = fetch("AES-128-ECB")?;
//!     dec.decrypt_init(Some(&key), None)?;
//!     let mut plaintext = Vec::new();
//!     dec.update(&ciphertext, &mut plaintext)?;
//!     dec.finalize(&mut plaintext)?;
//!     assert_eq!(plaintext, b"HELLO");
//!     Ok(())
//! }
//! # run().unwrap();
//! ```
//!
//! ## Features
//!
//! - `symmetric` (default): the streaming engine and the AES-ECB provider
//! - `algorithms`: the raw block primitives only
//! - `serde`: serialization of configuration types
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`blockflow-api`]: Error type, `BlockTransform` trait, parameter surface
//! - [`blockflow-algorithms`]: AES and ECB bulk processing
//! - [`blockflow-symmetric`]: Cipher contexts, padding, buffering

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use blockflow_api as api;
pub use blockflow_common as common;
pub use blockflow_internal as internal;
pub use blockflow_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use blockflow_algorithms as algorithms;

#[cfg(feature = "symmetric")]
pub use blockflow_symmetric as symmetric;

/// Common imports for blockflow users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits and configuration types
    pub use crate::api::{BlockTransform, CipherMode, Direction, Param, ParamValue};

    // Re-export security types
    pub use crate::common::{SecretBuffer, SecretVec};

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{fetch, Algorithm, CipherContext};
}
