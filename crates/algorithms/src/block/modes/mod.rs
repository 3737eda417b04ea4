//! Block cipher modes of operation
//!
//! Only modes that process each whole block independently live here; the
//! stream framing (buffering, padding) belongs to the cipher context.

pub mod ecb;

// Re-exports
pub use ecb::Ecb;
