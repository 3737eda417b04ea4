//! Internal utilities for the blockflow library
//!
//! Not part of the public API; shared by the primitive and engine crates.

#![no_std]
#![forbid(unsafe_code)]

pub mod constant_time;
