//! `ctr-aes-rustcrypto`: AES-CTR from the `ctr` crate

use aes::{Aes128, Aes192, Aes256};
use cipher::{KeyIvInit, StreamCipher};
use ctr::Ctr128BE;
use fips140_api::constants::{AES_BLOCK_SIZE, AES_KEYSIZE_128, AES_KEYSIZE_192};
use fips140_api::{Algorithm, AlgorithmInfo, SecretKey, Skcipher};

use super::{aes_key, installed_key};
use crate::error::{validate, Error, Result};

const ALGORITHM: &str = "ctr-aes-rustcrypto";

macro_rules! ctr_apply {
    ($cipher:ty, $key:expr, $iv:expr, $data:expr) => {{
        let mut stream = Ctr128BE::<$cipher>::new_from_slices($key, $iv)
            .map_err(|_| Error::KeyLength { algorithm: ALGORITHM, actual: $key.len() })?;
        stream.try_apply_keystream($data).map_err(|_| Error::Processing {
            operation: ALGORITHM,
            details: "keystream exhausted",
        })?;
    }};
}

/// AES-CTR driver registered as `ctr-aes-rustcrypto`
pub struct CtrAesRustCrypto {
    info: AlgorithmInfo,
    key: Option<SecretKey>,
}

impl CtrAesRustCrypto {
    /// Create an unkeyed instance
    pub fn new(info: AlgorithmInfo) -> Self {
        Self { info, key: None }
    }

    /// XOR the keystream into `data`, leaving the next counter block in `iv`
    pub fn apply_keystream(&self, data: &mut [u8], iv: &mut [u8]) -> Result<()> {
        validate::length("CTR counter block", iv.len(), AES_BLOCK_SIZE)?;
        let key = installed_key(ALGORITHM, &self.key)?;

        match key.len() {
            AES_KEYSIZE_128 => ctr_apply!(Aes128, key, iv, data),
            AES_KEYSIZE_192 => ctr_apply!(Aes192, key, iv, data),
            _ => ctr_apply!(Aes256, key, iv, data),
        }

        let mut counter = [0u8; AES_BLOCK_SIZE];
        counter.copy_from_slice(iv);
        let blocks = data.len().div_ceil(AES_BLOCK_SIZE) as u128;
        iv.copy_from_slice(&u128::from_be_bytes(counter).wrapping_add(blocks).to_be_bytes());
        Ok(())
    }
}

impl Algorithm for CtrAesRustCrypto {
    fn info(&self) -> &AlgorithmInfo {
        &self.info
    }
}

impl Skcipher for CtrAesRustCrypto {
    fn iv_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn block_size(&self) -> usize {
        1
    }

    fn set_key(&mut self, key: &[u8]) -> fips140_api::Result<()> {
        self.key = Some(aes_key(ALGORITHM, key)?);
        Ok(())
    }

    fn encrypt(&self, data: &mut [u8], iv: &mut [u8]) -> fips140_api::Result<()> {
        Ok(self.apply_keystream(data, iv)?)
    }

    fn decrypt(&self, data: &mut [u8], iv: &mut [u8]) -> fips140_api::Result<()> {
        Ok(self.apply_keystream(data, iv)?)
    }
}
