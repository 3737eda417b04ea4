//! Public API traits and types for the blockflow library
//!
//! This crate provides the public API surface shared by the blockflow crates:
//! the unified error type, the `BlockTransform` seam that concrete primitives
//! plug into, and the configuration types exchanged with cipher contexts.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

// Re-export all traits from the traits module
pub use traits::BlockTransform;

// Re-export trait modules for direct access
pub use traits::symmetric;
