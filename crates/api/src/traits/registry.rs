//! Name-keyed transform allocation

use super::{Aead, Rng, Shash, Skcipher};
use crate::Result;

/// A provider registry
///
/// Names are either driver names, resolved exactly, or algorithm names,
/// resolved to the highest-priority implementation. An unknown name yields
/// [`Error::NotFound`](crate::Error::NotFound); any other error is a hard
/// failure of the registry.
pub trait Registry {
    /// Allocate a length-preserving cipher
    fn alloc_skcipher(&self, name: &str) -> Result<Box<dyn Skcipher>>;

    /// Allocate an AEAD
    fn alloc_aead(&self, name: &str) -> Result<Box<dyn Aead>>;

    /// Allocate a hash or MAC
    fn alloc_shash(&self, name: &str) -> Result<Box<dyn Shash>>;

    /// Allocate a DRBG
    fn alloc_rng(&self, name: &str) -> Result<Box<dyn Rng>>;
}
