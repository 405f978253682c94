//! Hash drivers (`sha1-generic`, `sha224-generic`, ...)
//!
//! A thin [`Shash`] adapter over any RustCrypto [`Digest`]. Hashes are
//! unkeyed, so [`Shash::set_key`] is refused.

use core::marker::PhantomData;

use fips140_api::{Algorithm, AlgorithmInfo, Error, Result, Shash};
use sha2::Digest;

/// Unkeyed hash driver backed by a RustCrypto digest
pub struct HashDriver<D> {
    info: AlgorithmInfo,
    block_size: usize,
    _digest: PhantomData<fn() -> D>,
}

impl<D: Digest> HashDriver<D> {
    /// Create a driver; `block_size` is the compression function's block size
    pub fn new(info: AlgorithmInfo, block_size: usize) -> Self {
        Self {
            info,
            block_size,
            _digest: PhantomData,
        }
    }
}

impl<D> Algorithm for HashDriver<D> {
    fn info(&self) -> &AlgorithmInfo {
        &self.info
    }
}

impl<D: Digest> Shash for HashDriver<D> {
    fn digest_size(&self) -> usize {
        <D as Digest>::output_size()
    }

    fn block_size(&self) -> usize {
        self.block_size
    }

    fn set_key(&mut self, _key: &[u8]) -> Result<()> {
        Err(Error::param("shash setkey", "unkeyed hash takes no key"))
    }

    fn digest(&self, data: &[u8], out: &mut [u8]) -> Result<()> {
        let size = self.digest_size();
        if out.len() < size {
            return Err(Error::InvalidLength {
                context: "hash output",
                expected: size,
                actual: out.len(),
            });
        }
        out[..size].copy_from_slice(&D::digest(data));
        Ok(())
    }
}
