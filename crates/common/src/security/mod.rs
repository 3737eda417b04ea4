//! Security primitives and memory safety utilities
//!
//! This module provides the types used throughout blockflow to make sure
//! key material and buffered stream bytes never outlive their owner.

pub mod secret;

// Re-export core security types
pub use secret::{SecretBuffer, SecretVec};
