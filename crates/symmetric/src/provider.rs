//! Algorithm selection by name
//!
//! The provider is the factory side of a cipher context: it maps an
//! algorithm name to a block size, key length, mode and a fresh transform.

use core::fmt;
use core::str::FromStr;

use blockflow_algorithms::block::{Aes128, Aes192, Aes256, BlockCipher};
use blockflow_api::{BlockTransform, CipherMode};
use blockflow_common::SecretVec;
use blockflow_params::utils::names::{AES_128_ECB, AES_192_ECB, AES_256_ECB};
use blockflow_params::utils::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE,
};
use rand::{CryptoRng, RngCore};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::aes::{Aes128Ecb, Aes192Ecb, Aes256Ecb};
use crate::error::{Error, Result};
use crate::streaming::CipherContext;

/// The block cipher algorithms a context can be built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    /// AES with a 128-bit key, ECB mode
    Aes128Ecb,
    /// AES with a 192-bit key, ECB mode
    Aes192Ecb,
    /// AES with a 256-bit key, ECB mode
    Aes256Ecb,
}

impl Algorithm {
    /// Every supported algorithm
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Aes128Ecb,
        Algorithm::Aes192Ecb,
        Algorithm::Aes256Ecb,
    ];

    /// Canonical name, e.g. `AES-128-ECB`
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Aes128Ecb => AES_128_ECB,
            Algorithm::Aes192Ecb => AES_192_ECB,
            Algorithm::Aes256Ecb => AES_256_ECB,
        }
    }

    /// Key length in bytes
    pub fn key_len(self) -> usize {
        match self {
            Algorithm::Aes128Ecb => AES128_KEY_SIZE,
            Algorithm::Aes192Ecb => AES192_KEY_SIZE,
            Algorithm::Aes256Ecb => AES256_KEY_SIZE,
        }
    }

    /// Block size in bytes
    pub fn block_size(self) -> usize {
        AES_BLOCK_SIZE
    }

    /// Mode of operation
    pub fn mode(self) -> CipherMode {
        CipherMode::Ecb
    }

    /// A fresh, unkeyed transform
    pub fn transform(self) -> Box<dyn BlockTransform> {
        match self {
            Algorithm::Aes128Ecb => Box::new(Aes128Ecb::new()),
            Algorithm::Aes192Ecb => Box::new(Aes192Ecb::new()),
            Algorithm::Aes256Ecb => Box::new(Aes256Ecb::new()),
        }
    }

    /// A new context for this algorithm, padding enabled
    pub fn new_context(self) -> Result<CipherContext> {
        CipherContext::new(self.transform())
    }

    /// Generate a random key of the right length
    pub fn generate_key<R: RngCore + CryptoRng>(self, rng: &mut R) -> SecretVec {
        match self {
            Algorithm::Aes128Ecb => Aes128::generate_key(rng),
            Algorithm::Aes192Ecb => Aes192::generate_key(rng),
            Algorithm::Aes256Ecb => Aes256::generate_key(rng),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Names match case-insensitively
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.name().eq_ignore_ascii_case(s))
            .ok_or(Error::InvalidParameter {
                name: "algorithm",
                reason: "unknown algorithm name",
            })
    }
}

/// Build a context for the algorithm called `name`
pub fn fetch(name: &str) -> Result<CipherContext> {
    name.parse::<Algorithm>()?.new_context()
}
