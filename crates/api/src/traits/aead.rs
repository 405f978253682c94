//! Authenticated encryption with associated data

use super::Algorithm;
use crate::types::AeadRequest;
use crate::Result;

/// An AEAD transform operating in place over a scatter list
pub trait Aead: Algorithm {
    /// IV size this implementation expects
    fn iv_size(&self) -> usize;

    /// Largest tag this implementation can produce
    fn max_tag_size(&self) -> usize;

    /// Install a key
    fn set_key(&mut self, key: &[u8]) -> Result<()>;

    /// Select the tag size used by subsequent requests
    fn set_tag_size(&mut self, tag_size: usize) -> Result<()>;

    /// Encrypt `req.crypt_len` bytes and append the tag
    fn encrypt(&self, req: &mut AeadRequest<'_, '_>) -> Result<()>;

    /// Verify the trailing tag and decrypt in place
    fn decrypt(&self, req: &mut AeadRequest<'_, '_>) -> Result<()>;
}
