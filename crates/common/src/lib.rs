//! Common implementations and shared functionality for the blockflow library
//!
//! This crate provides the zeroizing containers that hold key schedules,
//! IVs and pending stream bytes.

#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, SecretVec};
