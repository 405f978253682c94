//! AES block cipher driver (`aes-generic`)
//!
//! Key schedules come from the RustCrypto `aes` crate, which picks a
//! constant-time software or hardware backend at run time. Round keys are
//! zeroized when the schedule is dropped.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};
use fips140_api::constants::{AES_BLOCK_SIZE, AES_KEYSIZE_128, AES_KEYSIZE_192, AES_KEYSIZE_256};
use fips140_api::{Algorithm, AlgorithmInfo};

use super::BlockCipher;
use crate::error::{validate, Error, Result};

/// An expanded AES key of any supported size
#[derive(Clone)]
pub(crate) enum AesKeySchedule {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl AesKeySchedule {
    /// Expand a 16, 24 or 32 byte key
    pub(crate) fn new(key: &[u8]) -> Result<Self> {
        validate::key_length(
            "aes",
            key.len(),
            &[AES_KEYSIZE_128, AES_KEYSIZE_192, AES_KEYSIZE_256],
        )?;

        let invalid = |_| Error::KeyLength { algorithm: "aes", actual: key.len() };
        Ok(match key.len() {
            AES_KEYSIZE_128 => Self::Aes128(Aes128::new_from_slice(key).map_err(invalid)?),
            AES_KEYSIZE_192 => Self::Aes192(Aes192::new_from_slice(key).map_err(invalid)?),
            _ => Self::Aes256(Aes256::new_from_slice(key).map_err(invalid)?),
        })
    }

    pub(crate) fn encrypt(&self, block: &mut [u8; AES_BLOCK_SIZE]) {
        let block = GenericArray::from_mut_slice(block);
        match self {
            Self::Aes128(c) => c.encrypt_block(block),
            Self::Aes192(c) => c.encrypt_block(block),
            Self::Aes256(c) => c.encrypt_block(block),
        }
    }

    pub(crate) fn decrypt(&self, block: &mut [u8; AES_BLOCK_SIZE]) {
        let block = GenericArray::from_mut_slice(block);
        match self {
            Self::Aes128(c) => c.decrypt_block(block),
            Self::Aes192(c) => c.decrypt_block(block),
            Self::Aes256(c) => c.decrypt_block(block),
        }
    }
}

/// Portable AES implementation registered as `aes-generic`
pub struct AesGeneric {
    info: AlgorithmInfo,
    schedule: Option<AesKeySchedule>,
}

impl AesGeneric {
    /// Create an unkeyed instance
    pub fn new(info: AlgorithmInfo) -> Self {
        Self { info, schedule: None }
    }

    /// Create an instance with the default driver metadata and a key installed
    pub fn with_key(key: &[u8]) -> Result<Self> {
        let mut cipher = Self::new(AlgorithmInfo::new("aes", "aes-generic", 100));
        cipher.set_key(key)?;
        Ok(cipher)
    }

    fn schedule(&self) -> Result<&AesKeySchedule> {
        self.schedule.as_ref().ok_or(Error::KeyNotSet { algorithm: "aes" })
    }
}

fn as_block(block: &mut [u8]) -> Result<&mut [u8; AES_BLOCK_SIZE]> {
    let actual = block.len();
    block.try_into().map_err(|_| Error::Length {
        context: "AES block",
        expected: AES_BLOCK_SIZE,
        actual,
    })
}

impl Algorithm for AesGeneric {
    fn info(&self) -> &AlgorithmInfo {
        &self.info
    }
}

impl BlockCipher for AesGeneric {
    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn set_key(&mut self, key: &[u8]) -> Result<()> {
        self.schedule = Some(AesKeySchedule::new(key)?);
        Ok(())
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let schedule = self.schedule()?;
        schedule.encrypt(as_block(block)?);
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let schedule = self.schedule()?;
        schedule.decrypt(as_block(block)?);
        Ok(())
    }
}
