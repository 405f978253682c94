//! Size constants shared by providers and the harness

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-128 key size in bytes
pub const AES_KEYSIZE_128: usize = 16;

/// AES-192 key size in bytes
pub const AES_KEYSIZE_192: usize = 24;

/// AES-256 key size in bytes
pub const AES_KEYSIZE_256: usize = 32;

/// GCM nonce size in bytes
pub const GCM_AES_IV_SIZE: usize = 12;

/// SHA-1 digest size in bytes
pub const SHA1_DIGEST_SIZE: usize = 20;

/// SHA-224 digest size in bytes
pub const SHA224_DIGEST_SIZE: usize = 28;

/// SHA-256 digest size in bytes
pub const SHA256_DIGEST_SIZE: usize = 32;

/// SHA-384 digest size in bytes
pub const SHA384_DIGEST_SIZE: usize = 48;

/// SHA-512 digest size in bytes
pub const SHA512_DIGEST_SIZE: usize = 64;

/// Largest digest any registered hash may produce
pub const HASH_MAX_DIGEST_SIZE: usize = 64;

/// Largest IV any self-test vector may carry
pub const MAX_IV_SIZE: usize = 16;
