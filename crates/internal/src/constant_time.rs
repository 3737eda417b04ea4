//! Constant-time byte predicates
//!
//! Each returns a [`Choice`] so callers can combine results without
//! branching on secret bytes.

use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};

/// `a == b` for single bytes, as a `Choice`
#[inline]
pub fn ct_eq_u8(a: u8, b: u8) -> Choice {
    a.ct_eq(&b)
}

/// `a < b` for single bytes, as a `Choice`
#[inline]
pub fn ct_lt_u8(a: u8, b: u8) -> Choice {
    a.ct_lt(&b)
}

/// `lo <= x <= hi` for single bytes, as a `Choice`
#[inline]
pub fn ct_in_range_u8(x: u8, lo: u8, hi: u8) -> Choice {
    !x.ct_lt(&lo) & !x.ct_gt(&hi)
}
