//! Configuration types exchanged with cipher contexts
//!
//! `Direction` and `CipherMode` describe a stream; `Param`/`ParamValue` form
//! the generic named-parameter surface a host framework uses to read and
//! write context options without knowing the concrete context type.

use core::fmt;
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which way a stream transforms data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Plaintext in, ciphertext out
    Encrypt,
    /// Ciphertext in, plaintext out
    Decrypt,
}

impl Direction {
    /// True for [`Direction::Encrypt`]
    pub fn is_encrypt(self) -> bool {
        matches!(self, Direction::Encrypt)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => f.write_str("encrypt"),
            Direction::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// Mode of operation of a plugged-in transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CipherMode {
    /// Each block is transformed independently
    Ecb,
}

impl CipherMode {
    /// Upper-case mode name as used in algorithm names
    pub fn as_str(self) -> &'static str {
        match self {
            CipherMode::Ecb => "ECB",
        }
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed value carried by a [`Param`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParamValue {
    /// Boolean flag
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    UInt(u64),
    /// UTF-8 string
    Utf8(String),
    /// Raw bytes
    Octets(Vec<u8>),
}

impl ParamValue {
    /// Interpret the value as a flag
    ///
    /// Integers are accepted with C semantics (non-zero is true); strings and
    /// byte strings are not flags.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            ParamValue::Int(i) => Some(*i != 0),
            ParamValue::UInt(u) => Some(*u != 0),
            ParamValue::Utf8(_) | ParamValue::Octets(_) => None,
        }
    }

    /// Borrow the value as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Utf8(s) => Some(s),
            _ => None,
        }
    }
}

/// One named entry of a parameter exchange
///
/// On a get, the caller passes entries with `value == None` and the context
/// fills in the ones it recognizes. On a set, the caller passes entries with
/// values and the context applies the ones it recognizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name
    pub name: Cow<'static, str>,
    /// Parameter value, `None` until set or filled
    pub value: Option<ParamValue>,
}

impl Param {
    /// An entry asking for the value of `name`
    pub fn request(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// An entry carrying `value` under `name`
    pub fn new(name: impl Into<Cow<'static, str>>, value: ParamValue) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
        }
    }

    /// Shorthand for a boolean entry
    pub fn bool(name: impl Into<Cow<'static, str>>, value: bool) -> Self {
        Self::new(name, ParamValue::Bool(value))
    }

    /// Shorthand for a signed integer entry
    pub fn int(name: impl Into<Cow<'static, str>>, value: i64) -> Self {
        Self::new(name, ParamValue::Int(value))
    }

    /// Shorthand for an unsigned integer entry
    pub fn uint(name: impl Into<Cow<'static, str>>, value: u64) -> Self {
        Self::new(name, ParamValue::UInt(value))
    }

    /// Shorthand for a string entry
    pub fn utf8(name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self::new(name, ParamValue::Utf8(value.into()))
    }

    /// Whether the entry has been filled
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

/// Find the entry named `name` in a parameter list
pub fn locate<'a>(params: &'a [Param], name: &str) -> Option<&'a Param> {
    params.iter().find(|p| p.name == name)
}

/// Find the entry named `name` in a parameter list, mutably
pub fn locate_mut<'a>(params: &'a mut [Param], name: &str) -> Option<&'a mut Param> {
    params.iter_mut().find(|p| p.name == name)
}
