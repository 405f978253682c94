//! Block cipher modes of operation
//!
//! Each mode is a template: it owns a boxed [`BlockCipher`] resolved by the
//! registry and presents it as a length-preserving
//! [`Skcipher`](fips140_api::Skcipher). All modes here are defined for
//! 128-bit blocks only.

pub mod cbc;
pub mod ctr;
pub mod cts;
pub mod ecb;
pub mod xts;

// Re-exports
pub use cbc::Cbc;
pub use ctr::Ctr;
pub use cts::Cts;
pub use ecb::Ecb;
pub use xts::Xts;

use super::BlockCipher;
use crate::error::{validate, Result};

/// Block size every mode here is defined for
pub const BLOCK_SIZE: usize = 16;

/// Reject ciphers whose block size the modes cannot handle
pub(crate) fn check_block_size(cipher: &dyn BlockCipher) -> Result<()> {
    validate::length("mode block size", cipher.block_size(), BLOCK_SIZE)
}

/// Copy an IV into a fixed block after checking its length
pub(crate) fn load_iv(context: &'static str, iv: &[u8]) -> Result<[u8; BLOCK_SIZE]> {
    validate::length(context, iv.len(), BLOCK_SIZE)?;
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(iv);
    Ok(block)
}
