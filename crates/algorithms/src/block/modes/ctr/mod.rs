//! Counter (CTR) mode
//!
//! Counter mode turns a block cipher into a stream cipher by encrypting
//! successive values of a counter and XORing the result with the data.
//! The whole 16-byte IV is the initial counter block and is incremented as a
//! 128-bit big-endian integer, as in NIST SP 800-38A. The IV buffer is left
//! holding the next unused counter block.

use fips140_api::{Algorithm, AlgorithmInfo, Skcipher};
use fips140_internal::xor_in_place;
use zeroize::Zeroizing;

use super::{check_block_size, load_iv, BLOCK_SIZE};
use crate::block::BlockCipher;
use crate::error::Result;

/// CTR mode over any 128-bit block cipher
pub struct Ctr {
    info: AlgorithmInfo,
    cipher: Box<dyn BlockCipher>,
}

impl Ctr {
    /// Wrap `cipher` in CTR mode
    pub fn new(info: AlgorithmInfo, cipher: Box<dyn BlockCipher>) -> Result<Self> {
        check_block_size(cipher.as_ref())?;
        Ok(Self { info, cipher })
    }

    /// XOR the keystream into `data`; encryption and decryption are the same
    pub fn apply_keystream(&self, data: &mut [u8], iv: &mut [u8]) -> Result<()> {
        let mut counter = u128::from_be_bytes(load_iv("CTR counter block", iv)?);
        let mut keystream = Zeroizing::new([0u8; BLOCK_SIZE]);

        for chunk in data.chunks_mut(BLOCK_SIZE) {
            *keystream = counter.to_be_bytes();
            self.cipher.encrypt_block(&mut keystream[..])?;
            xor_in_place(chunk, &keystream[..]);
            counter = counter.wrapping_add(1);
        }

        iv.copy_from_slice(&counter.to_be_bytes());
        Ok(())
    }
}

impl Algorithm for Ctr {
    fn info(&self) -> &AlgorithmInfo {
        &self.info
    }
}

impl Skcipher for Ctr {
    fn iv_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn block_size(&self) -> usize {
        1
    }

    fn set_key(&mut self, key: &[u8]) -> fips140_api::Result<()> {
        Ok(self.cipher.set_key(key)?)
    }

    fn encrypt(&self, data: &mut [u8], iv: &mut [u8]) -> fips140_api::Result<()> {
        Ok(self.apply_keystream(data, iv)?)
    }

    fn decrypt(&self, data: &mut [u8], iv: &mut [u8]) -> fips140_api::Result<()> {
        Ok(self.apply_keystream(data, iv)?)
    }
}
