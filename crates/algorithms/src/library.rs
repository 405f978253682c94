//! Direct-call primitives
//!
//! Some users of AES and SHA-256 call the library routines rather than
//! allocating a transform. [`SoftwareLibrary`] backs that path with the same
//! AES key schedule as `aes-generic` and the `sha2` crate.

use fips140_api::constants::AES_BLOCK_SIZE;
use fips140_api::{AesBlockCipher, CryptoLibrary};
use sha2::{Digest, Sha256};

use crate::block::aes::AesKeySchedule;

/// The software implementation of [`CryptoLibrary`]
#[derive(Debug, Default, Clone, Copy)]
pub struct SoftwareLibrary;

impl SoftwareLibrary {
    /// Create the library handle
    pub fn new() -> Self {
        Self
    }
}

struct ExpandedKey(AesKeySchedule);

impl AesBlockCipher for ExpandedKey {
    fn encrypt_block(&self, block: &mut [u8; AES_BLOCK_SIZE]) {
        self.0.encrypt(block);
    }

    fn decrypt_block(&self, block: &mut [u8; AES_BLOCK_SIZE]) {
        self.0.decrypt(block);
    }
}

impl CryptoLibrary for SoftwareLibrary {
    fn aes_expand_key(&self, key: &[u8]) -> fips140_api::Result<Box<dyn AesBlockCipher>> {
        Ok(Box::new(ExpandedKey(AesKeySchedule::new(key)?)))
    }

    fn sha256(&self, data: &[u8]) -> [u8; 32] {
        Sha256::digest(data).into()
    }
}
