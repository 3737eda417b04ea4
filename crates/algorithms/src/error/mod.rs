//! Errors raised by the block primitives
//!
//! A primitive only ever fails on sizes: a key of the wrong length, or a
//! span that is not a whole number of blocks. Engine-level failures live in
//! [`blockflow_api::Error`], which this converts into.

use blockflow_api::Error as CoreError;
use thiserror::Error as ThisError;

/// The error type for block primitives
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A key, block or span had the wrong size
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// What was being sized, e.g. `AES-128 key`
        context: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Length supplied
        actual: usize,
    },
}

/// Result type for block primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
        }
    }
}

pub mod validate;
