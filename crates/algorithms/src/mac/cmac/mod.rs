//! CMAC per NIST SP 800-38B / RFC 4493

use fips140_api::{Algorithm, AlgorithmInfo, Shash};
use fips140_internal::xor_in_place;
use zeroize::Zeroizing;

use crate::block::modes::{check_block_size, BLOCK_SIZE};
use crate::block::BlockCipher;
use crate::error::{validate, Error, Result};

/// Doubling in GF(2^128) with the big-endian bit order CMAC uses
fn dbl(block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    let carry = block[0] >> 7;
    for i in 0..BLOCK_SIZE - 1 {
        out[i] = (block[i] << 1) | (block[i + 1] >> 7);
    }
    out[BLOCK_SIZE - 1] = (block[BLOCK_SIZE - 1] << 1) ^ (0x87 & carry.wrapping_neg());
    out
}

struct Subkeys {
    k1: Zeroizing<[u8; BLOCK_SIZE]>,
    k2: Zeroizing<[u8; BLOCK_SIZE]>,
}

/// CMAC over any 128-bit block cipher
pub struct Cmac {
    info: AlgorithmInfo,
    cipher: Box<dyn BlockCipher>,
    subkeys: Option<Subkeys>,
}

impl Cmac {
    /// Wrap `cipher` in CMAC
    pub fn new(info: AlgorithmInfo, cipher: Box<dyn BlockCipher>) -> Result<Self> {
        check_block_size(cipher.as_ref())?;
        Ok(Self { info, cipher, subkeys: None })
    }

    /// Key the cipher and derive the two subkeys
    pub fn set_key(&mut self, key: &[u8]) -> Result<()> {
        self.cipher.set_key(key)?;

        let mut l = Zeroizing::new([0u8; BLOCK_SIZE]);
        self.cipher.encrypt_block(&mut l[..])?;
        let k1 = Zeroizing::new(dbl(&l));
        let k2 = Zeroizing::new(dbl(&k1));
        self.subkeys = Some(Subkeys { k1, k2 });
        Ok(())
    }

    /// Compute the full-length tag of `data`
    pub fn mac(&self, data: &[u8]) -> Result<[u8; BLOCK_SIZE]> {
        let subkeys = self.subkeys.as_ref().ok_or(Error::KeyNotSet { algorithm: "cmac" })?;

        let blocks = if data.is_empty() { 1 } else { (data.len() + BLOCK_SIZE - 1) / BLOCK_SIZE };
        let complete = !data.is_empty() && data.len() % BLOCK_SIZE == 0;
        let (head, last) = data.split_at((blocks - 1) * BLOCK_SIZE);

        let mut state = [0u8; BLOCK_SIZE];
        for block in head.chunks_exact(BLOCK_SIZE) {
            xor_in_place(&mut state, block);
            self.cipher.encrypt_block(&mut state)?;
        }

        let mut final_block = [0u8; BLOCK_SIZE];
        final_block[..last.len()].copy_from_slice(last);
        if complete {
            xor_in_place(&mut final_block, &subkeys.k1[..]);
        } else {
            final_block[last.len()] = 0x80;
            xor_in_place(&mut final_block, &subkeys.k2[..]);
        }
        xor_in_place(&mut state, &final_block);
        self.cipher.encrypt_block(&mut state)?;
        Ok(state)
    }
}

impl Algorithm for Cmac {
    fn info(&self) -> &AlgorithmInfo {
        &self.info
    }
}

impl Shash for Cmac {
    fn digest_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn set_key(&mut self, key: &[u8]) -> fips140_api::Result<()> {
        Ok(Cmac::set_key(self, key)?)
    }

    fn digest(&self, data: &[u8], out: &mut [u8]) -> fips140_api::Result<()> {
        validate::min_length("CMAC output", out.len(), BLOCK_SIZE)?;
        let tag = self.mac(data)?;
        out[..BLOCK_SIZE].copy_from_slice(&tag);
        Ok(())
    }
}
