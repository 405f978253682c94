//! XEX-based tweaked codebook mode with ciphertext stealing (XTS)
//!
//! IEEE 1619 / NIST SP 800-38E. The key is two equal-length AES keys, the
//! first for data and the second for the tweak. The IV is the 16-byte tweak
//! (data unit number, little endian). Messages need at least one full block;
//! a trailing partial block is handled by ciphertext stealing.
//!
//! Keys whose two halves are identical are rejected, as FIPS 140 requires.

use fips140_api::constants::{AES_KEYSIZE_128, AES_KEYSIZE_192, AES_KEYSIZE_256};
use fips140_api::{Algorithm, AlgorithmInfo, Skcipher};
use fips140_internal::{ct_eq, xor_in_place};

use super::{check_block_size, load_iv, BLOCK_SIZE};
use crate::block::BlockCipher;
use crate::error::{validate, Error, Result};

/// Multiply the tweak by the primitive element of GF(2^128)
fn mul_alpha(tweak: &mut [u8; BLOCK_SIZE]) {
    let carry = tweak[BLOCK_SIZE - 1] >> 7;
    for i in (1..BLOCK_SIZE).rev() {
        tweak[i] = (tweak[i] << 1) | (tweak[i - 1] >> 7);
    }
    tweak[0] = (tweak[0] << 1) ^ (0x87 & carry.wrapping_neg());
}

/// XTS mode over a pair of 128-bit block ciphers
pub struct Xts {
    info: AlgorithmInfo,
    data_cipher: Box<dyn BlockCipher>,
    tweak_cipher: Box<dyn BlockCipher>,
}

impl Xts {
    /// Build XTS from two instances of the same block cipher
    pub fn new(
        info: AlgorithmInfo,
        data_cipher: Box<dyn BlockCipher>,
        tweak_cipher: Box<dyn BlockCipher>,
    ) -> Result<Self> {
        check_block_size(data_cipher.as_ref())?;
        check_block_size(tweak_cipher.as_ref())?;
        Ok(Self { info, data_cipher, tweak_cipher })
    }

    /// Split and install a double-length key
    pub fn set_key(&mut self, key: &[u8]) -> Result<()> {
        validate::key_length(
            "xts",
            key.len(),
            &[2 * AES_KEYSIZE_128, 2 * AES_KEYSIZE_192, 2 * AES_KEYSIZE_256],
        )?;
        let (data_key, tweak_key) = key.split_at(key.len() / 2);
        if ct_eq(data_key, tweak_key) {
            return Err(Error::param("xts key", "data and tweak keys must differ"));
        }

        self.data_cipher.set_key(data_key)?;
        self.tweak_cipher.set_key(tweak_key)
    }

    fn initial_tweak(&self, iv: &[u8]) -> Result<[u8; BLOCK_SIZE]> {
        let mut tweak = load_iv("XTS tweak", iv)?;
        self.tweak_cipher.encrypt_block(&mut tweak)?;
        Ok(tweak)
    }

    fn encrypt_one(&self, block: &mut [u8], tweak: &[u8; BLOCK_SIZE]) -> Result<()> {
        xor_in_place(block, tweak);
        self.data_cipher.encrypt_block(block)?;
        xor_in_place(block, tweak);
        Ok(())
    }

    fn decrypt_one(&self, block: &mut [u8], tweak: &[u8; BLOCK_SIZE]) -> Result<()> {
        xor_in_place(block, tweak);
        self.data_cipher.decrypt_block(block)?;
        xor_in_place(block, tweak);
        Ok(())
    }

    /// Encrypt in place
    pub fn encrypt_in_place(&self, data: &mut [u8], iv: &[u8]) -> Result<()> {
        validate::min_length("XTS data", data.len(), BLOCK_SIZE)?;
        let mut tweak = self.initial_tweak(iv)?;

        let tail = data.len() % BLOCK_SIZE;
        let body = if tail == 0 { data.len() } else { data.len() - tail - BLOCK_SIZE };

        for block in data[..body].chunks_exact_mut(BLOCK_SIZE) {
            self.encrypt_one(block, &tweak)?;
            mul_alpha(&mut tweak);
        }

        if tail > 0 {
            let mut stolen = [0u8; BLOCK_SIZE];
            stolen.copy_from_slice(&data[body..body + BLOCK_SIZE]);
            self.encrypt_one(&mut stolen, &tweak)?;
            mul_alpha(&mut tweak);

            let mut last = stolen;
            last[..tail].copy_from_slice(&data[body + BLOCK_SIZE..]);
            self.encrypt_one(&mut last, &tweak)?;

            data[body..body + BLOCK_SIZE].copy_from_slice(&last);
            data[body + BLOCK_SIZE..].copy_from_slice(&stolen[..tail]);
        }
        Ok(())
    }

    /// Decrypt in place
    pub fn decrypt_in_place(&self, data: &mut [u8], iv: &[u8]) -> Result<()> {
        validate::min_length("XTS data", data.len(), BLOCK_SIZE)?;
        let mut tweak = self.initial_tweak(iv)?;

        let tail = data.len() % BLOCK_SIZE;
        let body = if tail == 0 { data.len() } else { data.len() - tail - BLOCK_SIZE };

        for block in data[..body].chunks_exact_mut(BLOCK_SIZE) {
            self.decrypt_one(block, &tweak)?;
            mul_alpha(&mut tweak);
        }

        if tail > 0 {
            // the stolen block was produced under the following tweak
            let mut next_tweak = tweak;
            mul_alpha(&mut next_tweak);

            let mut stolen = [0u8; BLOCK_SIZE];
            stolen.copy_from_slice(&data[body..body + BLOCK_SIZE]);
            self.decrypt_one(&mut stolen, &next_tweak)?;

            let mut last = stolen;
            last[..tail].copy_from_slice(&data[body + BLOCK_SIZE..]);
            self.decrypt_one(&mut last, &tweak)?;

            data[body..body + BLOCK_SIZE].copy_from_slice(&last);
            data[body + BLOCK_SIZE..].copy_from_slice(&stolen[..tail]);
        }
        Ok(())
    }
}

impl Algorithm for Xts {
    fn info(&self) -> &AlgorithmInfo {
        &self.info
    }
}

impl Skcipher for Xts {
    fn iv_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn set_key(&mut self, key: &[u8]) -> fips140_api::Result<()> {
        Ok(Xts::set_key(self, key)?)
    }

    fn encrypt(&self, data: &mut [u8], iv: &mut [u8]) -> fips140_api::Result<()> {
        Ok(self.encrypt_in_place(data, iv)?)
    }

    fn decrypt(&self, data: &mut [u8], iv: &mut [u8]) -> fips140_api::Result<()> {
        Ok(self.decrypt_in_place(data, iv)?)
    }
}
