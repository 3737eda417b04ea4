//! Streaming encryption and decryption over whole-block transforms
//!
//! A [`CipherContext`] accepts input in chunks of any size. Bytes that do
//! not yet form a whole block wait in a [`BlockBuffer`]; the
//! [`accumulator`] decides per call how much is flushed, transformed in
//! bulk, or retained, and the [`padding`] codec closes the stream.

pub mod accumulator;
pub mod buffer;
pub mod context;
pub mod padding;
mod params;

pub use accumulator::{plan, Plan};
pub use buffer::BlockBuffer;
pub use context::{CipherContext, StreamState};
