//! Names accepted by the cipher context parameter surface

/// Whether block padding is applied on encrypt and checked on decrypt (read/write)
pub const PARAM_PADDING: &str = "padding";

/// Key length in bytes of the bound algorithm (read-only)
pub const PARAM_KEYLEN: &str = "keylen";

/// Block size in bytes of the bound algorithm (read-only)
pub const PARAM_BLOCK_SIZE: &str = "blocksize";

/// Mode of operation of the bound algorithm (read-only)
pub const PARAM_MODE: &str = "mode";

/// Algorithm names understood by the provider
pub const AES_128_ECB: &str = "AES-128-ECB";
/// Algorithm names understood by the provider
pub const AES_192_ECB: &str = "AES-192-ECB";
/// Algorithm names understood by the provider
pub const AES_256_ECB: &str = "AES-256-ECB";
