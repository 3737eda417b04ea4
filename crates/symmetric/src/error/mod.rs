//! Error handling for streaming cipher operations
//!
//! This module uses the API error system directly and adds conversions for
//! errors raised by the block primitives.

// Re-export the primary API error system
pub use blockflow_api::error::{validate, Error, Result};

use blockflow_algorithms::error::Error as PrimitiveError;

/// Convert a primitive error to an API error
pub fn from_primitive_error(err: PrimitiveError) -> Error {
    Error::from(err)
}

/// Convert a primitive error raised during key setup
///
/// Whatever the primitive reports, the caller sees a key error.
pub fn from_key_setup_error(context: &'static str, err: PrimitiveError) -> Error {
    Error::InvalidKey {
        context,
        message: err.to_string(),
    }
}

/// Extension trait to make conversions more ergonomic
pub trait SymmetricResultExt<T> {
    /// Convert a Result with PrimitiveError to a Result with API Error
    fn map_primitive_err(self) -> Result<T>;

    /// Convert a key-setup failure into [`Error::InvalidKey`]
    fn map_key_err(self, context: &'static str) -> Result<T>;
}

impl<T> SymmetricResultExt<T> for core::result::Result<T, PrimitiveError> {
    fn map_primitive_err(self) -> Result<T> {
        self.map_err(from_primitive_error)
    }

    fn map_key_err(self, context: &'static str) -> Result<T> {
        self.map_err(|e| from_key_setup_error(context, e))
    }
}

/// Validate stream state
pub fn validate_stream_state(
    condition: bool,
    operation: &'static str,
    details: &'static str,
) -> Result<()> {
    validate::state(condition, operation, details)
}

/// Validate stream framing with consistent context
pub fn validate_framing(
    condition: bool,
    operation: &'static str,
    details: &'static str,
) -> Result<()> {
    validate::framing(condition, operation, details)
}
