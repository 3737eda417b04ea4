//! Constant values for blockflow cipher contexts
//!
//! This crate provides the sizes and parameter names shared by the primitive,
//! engine and facade crates.

#![no_std]

pub mod utils;
