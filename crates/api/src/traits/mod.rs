//! Transform traits presented by a provider registry
//!
//! Each family the harness exercises has one trait. Allocation goes through
//! [`Registry`], which hands out boxed trait objects keyed by algorithm or
//! driver name. [`CryptoLibrary`] covers the direct-call library interface
//! that bypasses the registry.

pub mod aead;
pub mod hash;
pub mod library;
pub mod registry;
pub mod rng;
pub mod skcipher;

pub use aead::Aead;
pub use hash::Shash;
pub use library::{AesBlockCipher, CryptoLibrary};
pub use registry::Registry;
pub use rng::Rng;
pub use skcipher::Skcipher;

use crate::types::AlgorithmInfo;

/// Common surface of every allocated transform
pub trait Algorithm {
    /// Metadata of the implementation backing this transform
    fn info(&self) -> &AlgorithmInfo;
}
