//! Error type definitions for cipher stream operations

use thiserror::Error as ThisError;

/// Primary error type for cipher stream operations
///
/// Every failure is returned to the immediate caller; none of these are
/// downgraded into partial output.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A parameter had the wrong type or value; nothing was changed
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The primitive rejected the key, or no key has been bound yet
    #[error("invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Stream framing is broken: input left unconsumed, or the stream
    /// ended on a length the direction and padding rules do not allow
    #[error("framing error in {operation}: {details}")]
    Framing {
        operation: &'static str,
        details: &'static str,
    },

    /// Padding check failed while decrypting
    ///
    /// Deliberately carries no detail about which byte or which length.
    #[error("bad decrypt")]
    BadDecrypt,

    /// The operation is not valid in the current stream state
    #[error("invalid state for {operation}: {details}")]
    InvalidState {
        operation: &'static str,
        details: &'static str,
    },
}

/// Result type for cipher stream operations
pub type Result<T> = core::result::Result<T, Error>;
