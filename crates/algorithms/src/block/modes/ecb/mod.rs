//! Electronic Codebook (ECB) mode
//!
//! Each block is enciphered independently. The data length must be a whole
//! number of blocks and no IV is used.

use fips140_api::{Algorithm, AlgorithmInfo, Skcipher};

use super::{check_block_size, BLOCK_SIZE};
use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// ECB mode over any 128-bit block cipher
pub struct Ecb {
    info: AlgorithmInfo,
    cipher: Box<dyn BlockCipher>,
}

impl Ecb {
    /// Wrap `cipher` in ECB mode
    pub fn new(info: AlgorithmInfo, cipher: Box<dyn BlockCipher>) -> Result<Self> {
        check_block_size(cipher.as_ref())?;
        Ok(Self { info, cipher })
    }

    /// Encrypt whole blocks in place
    pub fn encrypt_in_place(&self, data: &mut [u8]) -> Result<()> {
        validate::block_multiple("ECB data", data.len(), BLOCK_SIZE)?;
        for block in data.chunks_exact_mut(BLOCK_SIZE) {
            self.cipher.encrypt_block(block)?;
        }
        Ok(())
    }

    /// Decrypt whole blocks in place
    pub fn decrypt_in_place(&self, data: &mut [u8]) -> Result<()> {
        validate::block_multiple("ECB data", data.len(), BLOCK_SIZE)?;
        for block in data.chunks_exact_mut(BLOCK_SIZE) {
            self.cipher.decrypt_block(block)?;
        }
        Ok(())
    }
}

impl Algorithm for Ecb {
    fn info(&self) -> &AlgorithmInfo {
        &self.info
    }
}

impl Skcipher for Ecb {
    fn iv_size(&self) -> usize {
        0
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn set_key(&mut self, key: &[u8]) -> fips140_api::Result<()> {
        Ok(self.cipher.set_key(key)?)
    }

    fn encrypt(&self, data: &mut [u8], _iv: &mut [u8]) -> fips140_api::Result<()> {
        Ok(self.encrypt_in_place(data)?)
    }

    fn decrypt(&self, data: &mut [u8], _iv: &mut [u8]) -> fips140_api::Result<()> {
        Ok(self.decrypt_in_place(data)?)
    }
}
