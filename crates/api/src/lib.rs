//! Public API traits and types for the fips140 provider interface
//!
//! This crate describes the surface a cryptographic provider registry presents
//! to the self-test harness: name-based allocation of transforms, the
//! per-family transform traits, algorithm metadata, and the provider error type.
//! Nothing in here performs cryptography itself.

#![forbid(unsafe_code)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

pub use traits::{
    Aead,
    AesBlockCipher,
    Algorithm,
    CryptoLibrary,
    Registry,
    Rng,
    Shash,
    Skcipher,
};
