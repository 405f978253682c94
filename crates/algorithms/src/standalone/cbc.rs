//! `cbc-aes-rustcrypto`: AES-CBC from the `cbc` crate

use aes::{Aes128, Aes192, Aes256};
use cipher::generic_array::GenericArray;
use cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use fips140_api::constants::{AES_BLOCK_SIZE, AES_KEYSIZE_128, AES_KEYSIZE_192};
use fips140_api::{Algorithm, AlgorithmInfo, SecretKey, Skcipher};

use super::{aes_key, installed_key};
use crate::error::{validate, Error, Result};

const ALGORITHM: &str = "cbc-aes-rustcrypto";

macro_rules! cbc_blocks {
    ($mode:ident, $method:ident, $key:expr, $iv:expr, $data:expr) => {{
        let invalid = |_| Error::KeyLength { algorithm: ALGORITHM, actual: $key.len() };
        match $key.len() {
            AES_KEYSIZE_128 => {
                let mut m = cbc::$mode::<Aes128>::new_from_slices($key, $iv).map_err(invalid)?;
                for block in $data.chunks_exact_mut(AES_BLOCK_SIZE) {
                    m.$method(GenericArray::from_mut_slice(block));
                }
            }
            AES_KEYSIZE_192 => {
                let mut m = cbc::$mode::<Aes192>::new_from_slices($key, $iv).map_err(invalid)?;
                for block in $data.chunks_exact_mut(AES_BLOCK_SIZE) {
                    m.$method(GenericArray::from_mut_slice(block));
                }
            }
            _ => {
                let mut m = cbc::$mode::<Aes256>::new_from_slices($key, $iv).map_err(invalid)?;
                for block in $data.chunks_exact_mut(AES_BLOCK_SIZE) {
                    m.$method(GenericArray::from_mut_slice(block));
                }
            }
        }
    }};
}

/// AES-CBC driver registered as `cbc-aes-rustcrypto`
pub struct CbcAesRustCrypto {
    info: AlgorithmInfo,
    key: Option<SecretKey>,
}

impl CbcAesRustCrypto {
    /// Create an unkeyed instance
    pub fn new(info: AlgorithmInfo) -> Self {
        Self { info, key: None }
    }

    fn check(data: &[u8], iv: &[u8]) -> Result<()> {
        validate::length("CBC initialization vector", iv.len(), AES_BLOCK_SIZE)?;
        validate::block_multiple("CBC data", data.len(), AES_BLOCK_SIZE)
    }

    /// Encrypt whole blocks in place, leaving the last ciphertext block in `iv`
    pub fn encrypt_in_place(&self, data: &mut [u8], iv: &mut [u8]) -> Result<()> {
        Self::check(data, iv)?;
        let key = installed_key(ALGORITHM, &self.key)?;
        if data.is_empty() {
            return Ok(());
        }

        cbc_blocks!(Encryptor, encrypt_block_mut, key, iv, data);
        iv.copy_from_slice(&data[data.len() - AES_BLOCK_SIZE..]);
        Ok(())
    }

    /// Decrypt whole blocks in place, leaving the last ciphertext block in `iv`
    pub fn decrypt_in_place(&self, data: &mut [u8], iv: &mut [u8]) -> Result<()> {
        Self::check(data, iv)?;
        let key = installed_key(ALGORITHM, &self.key)?;
        if data.is_empty() {
            return Ok(());
        }

        let mut next_iv = [0u8; AES_BLOCK_SIZE];
        next_iv.copy_from_slice(&data[data.len() - AES_BLOCK_SIZE..]);
        cbc_blocks!(Decryptor, decrypt_block_mut, key, iv, data);
        iv.copy_from_slice(&next_iv);
        Ok(())
    }
}

impl Algorithm for CbcAesRustCrypto {
    fn info(&self) -> &AlgorithmInfo {
        &self.info
    }
}

impl Skcipher for CbcAesRustCrypto {
    fn iv_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn set_key(&mut self, key: &[u8]) -> fips140_api::Result<()> {
        self.key = Some(aes_key(ALGORITHM, key)?);
        Ok(())
    }

    fn encrypt(&self, data: &mut [u8], iv: &mut [u8]) -> fips140_api::Result<()> {
        Ok(self.encrypt_in_place(data, iv)?)
    }

    fn decrypt(&self, data: &mut [u8], iv: &mut [u8]) -> fips140_api::Result<()> {
        Ok(self.decrypt_in_place(data, iv)?)
    }
}
