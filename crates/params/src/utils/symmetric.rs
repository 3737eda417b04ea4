//! Constants for symmetric block algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of AES rounds for a 128-bit key
pub const AES128_ROUNDS: usize = 10;

/// Number of AES rounds for a 192-bit key
pub const AES192_ROUNDS: usize = 12;

/// Number of AES rounds for a 256-bit key
pub const AES256_ROUNDS: usize = 14;

/// Largest expanded AES key schedule in bytes (15 round keys of 16 bytes)
pub const AES_MAX_SCHEDULE_SIZE: usize = 240;

/// Largest block size a padded stream can use: every pad byte stores the
/// pad length, so it has to fit in a `u8`.
pub const MAX_PADDED_BLOCK_SIZE: usize = 255;
