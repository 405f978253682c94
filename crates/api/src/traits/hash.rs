//! Synchronous hashes and MACs

use super::Algorithm;
use crate::Result;

/// A one-shot hash or keyed MAC
pub trait Shash: Algorithm {
    /// Size of the produced digest in bytes
    fn digest_size(&self) -> usize;

    /// Block size of the compression function in bytes
    fn block_size(&self) -> usize;

    /// Install a key; unkeyed hashes reject this
    fn set_key(&mut self, key: &[u8]) -> Result<()>;

    /// Digest `data` into `out`, which must hold at least
    /// [`digest_size`](Shash::digest_size) bytes
    fn digest(&self, data: &[u8], out: &mut [u8]) -> Result<()>;
}
