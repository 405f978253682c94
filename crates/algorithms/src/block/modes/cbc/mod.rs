//! Cipher Block Chaining (CBC) mode implementation
//!
//! CBC mode is a block cipher mode of operation that provides confidentiality
//! by XORing each plaintext block with the previous ciphertext block before
//! encryption. The first block is XORed with an initialization vector (IV).
//!
//! This implementation follows NIST SP 800-38A. On return the IV buffer holds
//! the last ciphertext block so consecutive calls chain.

use fips140_api::{Algorithm, AlgorithmInfo, Skcipher};
use fips140_internal::xor_in_place;

use super::{check_block_size, load_iv, BLOCK_SIZE};
use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// CBC-encrypt whole blocks, advancing `chain`
pub(crate) fn encrypt_blocks(
    cipher: &dyn BlockCipher,
    data: &mut [u8],
    chain: &mut [u8; BLOCK_SIZE],
) -> Result<()> {
    for block in data.chunks_exact_mut(BLOCK_SIZE) {
        xor_in_place(block, chain);
        cipher.encrypt_block(block)?;
        chain.copy_from_slice(block);
    }
    Ok(())
}

/// CBC-decrypt whole blocks, advancing `chain`
pub(crate) fn decrypt_blocks(
    cipher: &dyn BlockCipher,
    data: &mut [u8],
    chain: &mut [u8; BLOCK_SIZE],
) -> Result<()> {
    let mut saved = [0u8; BLOCK_SIZE];
    for block in data.chunks_exact_mut(BLOCK_SIZE) {
        saved.copy_from_slice(block);
        cipher.decrypt_block(block)?;
        xor_in_place(block, chain);
        chain.copy_from_slice(&saved);
    }
    Ok(())
}

/// CBC mode over any 128-bit block cipher
pub struct Cbc {
    info: AlgorithmInfo,
    cipher: Box<dyn BlockCipher>,
}

impl Cbc {
    /// Wrap `cipher` in CBC mode
    pub fn new(info: AlgorithmInfo, cipher: Box<dyn BlockCipher>) -> Result<Self> {
        check_block_size(cipher.as_ref())?;
        Ok(Self { info, cipher })
    }

    /// Encrypts whole blocks in place
    ///
    /// The data must be a multiple of the block size; padding is the
    /// caller's concern.
    pub fn encrypt_in_place(&self, data: &mut [u8], iv: &mut [u8]) -> Result<()> {
        let mut chain = load_iv("CBC initialization vector", iv)?;
        validate::block_multiple("CBC plaintext", data.len(), BLOCK_SIZE)?;

        encrypt_blocks(self.cipher.as_ref(), data, &mut chain)?;
        iv.copy_from_slice(&chain);
        Ok(())
    }

    /// Decrypts whole blocks in place
    pub fn decrypt_in_place(&self, data: &mut [u8], iv: &mut [u8]) -> Result<()> {
        let mut chain = load_iv("CBC initialization vector", iv)?;
        validate::block_multiple("CBC ciphertext", data.len(), BLOCK_SIZE)?;

        decrypt_blocks(self.cipher.as_ref(), data, &mut chain)?;
        iv.copy_from_slice(&chain);
        Ok(())
    }
}

impl Algorithm for Cbc {
    fn info(&self) -> &AlgorithmInfo {
        &self.info
    }
}

impl Skcipher for Cbc {
    fn iv_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn set_key(&mut self, key: &[u8]) -> fips140_api::Result<()> {
        Ok(self.cipher.set_key(key)?)
    }

    fn encrypt(&self, data: &mut [u8], iv: &mut [u8]) -> fips140_api::Result<()> {
        Ok(self.encrypt_in_place(data, iv)?)
    }

    fn decrypt(&self, data: &mut [u8], iv: &mut [u8]) -> fips140_api::Result<()> {
        Ok(self.decrypt_in_place(data, iv)?)
    }
}
