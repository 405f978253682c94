//! Length-preserving symmetric ciphers

use super::Algorithm;
use crate::Result;

/// A length-preserving cipher operating in place (ECB, CBC, CTS, CTR, XTS)
pub trait Skcipher: Algorithm {
    /// IV size this implementation expects, zero when it takes none
    fn iv_size(&self) -> usize;

    /// Block size of the underlying cipher, 1 for stream modes
    fn block_size(&self) -> usize;

    /// Install a key
    fn set_key(&mut self, key: &[u8]) -> Result<()>;

    /// Encrypt `data` in place
    ///
    /// `iv` must be [`iv_size`](Skcipher::iv_size) bytes. Implementations may
    /// leave the chaining value in it on return.
    fn encrypt(&self, data: &mut [u8], iv: &mut [u8]) -> Result<()>;

    /// Decrypt `data` in place
    fn decrypt(&self, data: &mut [u8], iv: &mut [u8]) -> Result<()>;
}
