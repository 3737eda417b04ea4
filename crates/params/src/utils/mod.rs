//! Constant values for blockflow cipher operations

pub mod names;
pub mod symmetric;
