//! Size checks shared by the primitives

use super::{Error, Result};

/// Require `actual == expected`
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::Length {
            context,
            expected,
            actual,
        })
    }
}

/// Require a whole number of `block_size` blocks
///
/// On failure the expected length reported is the next block boundary up.
#[inline(always)]
pub fn multiple_of(context: &'static str, actual: usize, block_size: usize) -> Result<()> {
    match actual.checked_rem(block_size) {
        Some(0) => Ok(()),
        Some(_) => Err(Error::Length {
            context,
            expected: actual - actual % block_size + block_size,
            actual,
        }),
        None => Err(Error::Length {
            context,
            expected: 0,
            actual,
        }),
    }
}
