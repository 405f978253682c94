//! CBC with ciphertext stealing (`cts(cbc(...))`)
//!
//! Implements the CS3 variant from the SP 800-38A addendum, as used by
//! Kerberos (RFC 3962): the last two ciphertext blocks are always swapped and
//! the final block may be partial. Messages of exactly one block are plain
//! CBC. Messages shorter than one block are rejected.

use fips140_api::{Algorithm, AlgorithmInfo, Skcipher};
use fips140_internal::xor_in_place;

use super::cbc::{decrypt_blocks, encrypt_blocks};
use super::{check_block_size, load_iv, BLOCK_SIZE};
use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// Split a message into (bytes before the final two blocks, length of the final block)
fn split_tail(len: usize) -> (usize, usize) {
    let tail = (len - 1) % BLOCK_SIZE + 1;
    (len - BLOCK_SIZE - tail, tail)
}

/// CBC-CS3 over any 128-bit block cipher
pub struct Cts {
    info: AlgorithmInfo,
    cipher: Box<dyn BlockCipher>,
}

impl Cts {
    /// Wrap `cipher` in CBC mode with ciphertext stealing
    pub fn new(info: AlgorithmInfo, cipher: Box<dyn BlockCipher>) -> Result<Self> {
        check_block_size(cipher.as_ref())?;
        Ok(Self { info, cipher })
    }

    /// Encrypt any message of at least one block in place
    pub fn encrypt_in_place(&self, data: &mut [u8], iv: &mut [u8]) -> Result<()> {
        let mut chain = load_iv("CTS initialization vector", iv)?;
        validate::min_length("CTS data", data.len(), BLOCK_SIZE)?;
        let cipher = self.cipher.as_ref();

        if data.len() == BLOCK_SIZE {
            encrypt_blocks(cipher, data, &mut chain)?;
            iv.copy_from_slice(&chain);
            return Ok(());
        }

        let (head, tail) = split_tail(data.len());
        encrypt_blocks(cipher, &mut data[..head], &mut chain)?;

        // penultimate block, full CBC output
        let mut stolen = [0u8; BLOCK_SIZE];
        stolen.copy_from_slice(&data[head..head + BLOCK_SIZE]);
        xor_in_place(&mut stolen, &chain);
        cipher.encrypt_block(&mut stolen)?;

        // final block, zero padded, chained on the penultimate output
        let mut last = [0u8; BLOCK_SIZE];
        last[..tail].copy_from_slice(&data[head + BLOCK_SIZE..]);
        xor_in_place(&mut last, &stolen);
        cipher.encrypt_block(&mut last)?;

        data[head..head + BLOCK_SIZE].copy_from_slice(&last);
        data[head + BLOCK_SIZE..].copy_from_slice(&stolen[..tail]);
        iv.copy_from_slice(&last);
        Ok(())
    }

    /// Decrypt any message of at least one block in place
    pub fn decrypt_in_place(&self, data: &mut [u8], iv: &mut [u8]) -> Result<()> {
        let mut chain = load_iv("CTS initialization vector", iv)?;
        validate::min_length("CTS data", data.len(), BLOCK_SIZE)?;
        let cipher = self.cipher.as_ref();

        if data.len() == BLOCK_SIZE {
            decrypt_blocks(cipher, data, &mut chain)?;
            iv.copy_from_slice(&chain);
            return Ok(());
        }

        let (head, tail) = split_tail(data.len());
        decrypt_blocks(cipher, &mut data[..head], &mut chain)?;

        let mut swapped = [0u8; BLOCK_SIZE];
        swapped.copy_from_slice(&data[head..head + BLOCK_SIZE]);
        let next_iv = swapped;
        cipher.decrypt_block(&mut swapped)?;

        // rebuild the penultimate CBC output from the stolen bytes
        let mut stolen = [0u8; BLOCK_SIZE];
        stolen[..tail].copy_from_slice(&data[head + BLOCK_SIZE..]);
        stolen[tail..].copy_from_slice(&swapped[tail..]);

        let mut last = swapped;
        xor_in_place(&mut last, &stolen);

        let mut penultimate = stolen;
        cipher.decrypt_block(&mut penultimate)?;
        xor_in_place(&mut penultimate, &chain);

        data[head..head + BLOCK_SIZE].copy_from_slice(&penultimate);
        data[head + BLOCK_SIZE..].copy_from_slice(&last[..tail]);
        iv.copy_from_slice(&next_iv);
        Ok(())
    }
}

impl Algorithm for Cts {
    fn info(&self) -> &AlgorithmInfo {
        &self.info
    }
}

impl Skcipher for Cts {
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
