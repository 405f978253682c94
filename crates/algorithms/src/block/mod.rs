//! Block ciphers and modes of operation
//!
//! [`BlockCipher`] is the single-block primitive that mode templates are
//! instantiated over. It is object safe so a template can wrap whatever
//! implementation the registry resolves at run time.

pub mod aes;
pub mod modes;

pub use self::aes::AesGeneric;

use crate::error::Result;
use fips140_api::Algorithm;

/// A keyed block cipher that transforms one block in place
pub trait BlockCipher: Algorithm {
    /// Block size in bytes
    fn block_size(&self) -> usize;

    /// Install a key
    fn set_key(&mut self, key: &[u8]) -> Result<()>;

    /// Encrypt exactly one block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypt exactly one block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;
}
