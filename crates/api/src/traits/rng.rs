//! Deterministic random bit generators

use super::Algorithm;
use crate::Result;

/// A DRBG with test hooks for injecting entropy
pub trait Rng: Algorithm {
    /// Whether every generate request reseeds first
    fn prediction_resistant(&self) -> bool;

    /// Reinstantiate from caller-supplied entropy and personalization string
    ///
    /// `entropy` is the entropy input with the nonce appended.
    fn reset_test(&mut self, entropy: &[u8], pers: &[u8]) -> Result<()>;

    /// Generate `out.len()` bytes with additional input
    fn get_bytes_addtl(&mut self, out: &mut [u8], addtl: &[u8]) -> Result<()>;

    /// Generate `out.len()` bytes, using `entropy` for any reseed this request performs
    fn get_bytes_addtl_test(&mut self, out: &mut [u8], addtl: &[u8], entropy: &[u8]) -> Result<()>;
}
