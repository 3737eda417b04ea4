//! Trait definitions for the blockflow API

pub mod symmetric;

pub use symmetric::BlockTransform;
