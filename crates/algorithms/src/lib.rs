//! Block cipher primitives with constant-time implementation
//!
//! This crate provides the single-block transforms that blockflow cipher
//! contexts plug in, together with ECB bulk processing over whole blocks.
//!
//! # Security Features
//!
//! - Table-free AES S-box, so no key- or data-dependent memory lookups
//! - Key schedules held in zeroizing storage and wiped on drop
//! - Length validation on every block operation

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher implementations
pub mod block;
pub use block::{Aes128, Aes192, Aes256, BlockCipher, CipherAlgorithm, Ecb};
