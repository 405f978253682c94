//! `gcm-aes-rustcrypto`: AES-GCM from the `aes-gcm` crate

use aes::Aes192;
use aes_gcm::aead::consts::U12;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm, Tag};
use fips140_api::constants::{AES_KEYSIZE_128, AES_KEYSIZE_192, GCM_AES_IV_SIZE};
use fips140_api::{Aead, AeadRequest, Algorithm, AlgorithmInfo};
use zeroize::Zeroizing;

use super::aes_key;
use crate::error::{validate, Error, Result};

const ALGORITHM: &str = "gcm-aes-rustcrypto";

/// Only full-length tags are supported
pub const GCM_TAG_SIZE: usize = 16;

type Aes192Gcm = AesGcm<Aes192, U12>;

enum GcmKey {
    Aes128(Box<Aes128Gcm>),
    Aes192(Box<Aes192Gcm>),
    Aes256(Box<Aes256Gcm>),
}

impl GcmKey {
    fn new(key: &[u8]) -> Result<Self> {
        let invalid = |_| Error::KeyLength { algorithm: ALGORITHM, actual: key.len() };
        Ok(match key.len() {
            AES_KEYSIZE_128 => GcmKey::Aes128(Box::new(Aes128Gcm::new_from_slice(key).map_err(invalid)?)),
            AES_KEYSIZE_192 => GcmKey::Aes192(Box::new(Aes192Gcm::new_from_slice(key).map_err(invalid)?)),
            _ => GcmKey::Aes256(Box::new(Aes256Gcm::new_from_slice(key).map_err(invalid)?)),
        })
    }

    fn seal(&self, nonce: &[u8], aad: &[u8], buf: &mut [u8]) -> Result<Tag> {
        let nonce = GenericArray::from_slice(nonce);
        let sealed = match self {
            GcmKey::Aes128(c) => c.encrypt_in_place_detached(nonce, aad, buf),
            GcmKey::Aes192(c) => c.encrypt_in_place_detached(nonce, aad, buf),
            GcmKey::Aes256(c) => c.encrypt_in_place_detached(nonce, aad, buf),
        };
        sealed.map_err(|_| Error::Processing { operation: ALGORITHM, details: "encryption failed" })
    }

    fn open(&self, nonce: &[u8], aad: &[u8], buf: &mut [u8], tag: &[u8]) -> Result<()> {
        let nonce = GenericArray::from_slice(nonce);
        let tag = Tag::from_slice(tag);
        let opened = match self {
            GcmKey::Aes128(c) => c.decrypt_in_place_detached(nonce, aad, buf, tag),
            GcmKey::Aes192(c) => c.decrypt_in_place_detached(nonce, aad, buf, tag),
            GcmKey::Aes256(c) => c.decrypt_in_place_detached(nonce, aad, buf, tag),
        };
        opened.map_err(|_| Error::Authentication { algorithm: ALGORITHM })
    }
}

/// AES-GCM driver registered as `gcm-aes-rustcrypto`
///
/// Requests follow the in-place scatter list layout: `assoc_len` bytes of
/// associated data followed by the message. Encryption appends the tag after
/// `crypt_len` bytes of plaintext; decryption expects `crypt_len` to cover
/// both ciphertext and tag.
pub struct GcmAesRustCrypto {
    info: AlgorithmInfo,
    key: Option<GcmKey>,
    tag_size: usize,
}

impl GcmAesRustCrypto {
    /// Create an unkeyed instance
    pub fn new(info: AlgorithmInfo) -> Self {
        Self { info, key: None, tag_size: GCM_TAG_SIZE }
    }

    fn key(&self) -> Result<&GcmKey> {
        self.key.as_ref().ok_or(Error::KeyNotSet { algorithm: ALGORITHM })
    }

    // `tail` is what follows the associated data: message and, on encryption, the tag
    fn check_request(req: &AeadRequest<'_, '_>, tail: usize) -> Result<()> {
        let needed = req.assoc_len.saturating_add(tail);
        validate::max_length("GCM request", needed, req.sg.len())
    }

    fn read_assoc(req: &AeadRequest<'_, '_>) -> fips140_api::Result<Zeroizing<Vec<u8>>> {
        let mut assoc = Zeroizing::new(vec![0u8; req.assoc_len]);
        req.sg.copy_out(0, &mut assoc)?;
        Ok(assoc)
    }
}

impl Algorithm for GcmAesRustCrypto {
    fn info(&self) -> &AlgorithmInfo {
        &self.info
    }
}

impl Aead for GcmAesRustCrypto {
    fn iv_size(&self) -> usize {
        GCM_AES_IV_SIZE
    }

    fn max_tag_size(&self) -> usize {
        GCM_TAG_SIZE
    }

    fn set_key(&mut self, key: &[u8]) -> fips140_api::Result<()> {
        let key = aes_key(ALGORITHM, key)?;
        self.key = Some(GcmKey::new(key.as_ref())?);
        Ok(())
    }

    fn set_tag_size(&mut self, tag_size: usize) -> fips140_api::Result<()> {
        if tag_size != GCM_TAG_SIZE {
            return Err(Error::TagSize { algorithm: ALGORITHM, actual: tag_size }.into());
        }
        self.tag_size = tag_size;
        Ok(())
    }

    fn encrypt(&self, req: &mut AeadRequest<'_, '_>) -> fips140_api::Result<()> {
        validate::length("GCM nonce", req.iv.len(), GCM_AES_IV_SIZE)?;
        let key = self.key()?;
        Self::check_request(req, req.crypt_len.saturating_add(self.tag_size))?;
        let assoc = Self::read_assoc(req)?;

        let mut msg = Zeroizing::new(vec![0u8; req.crypt_len]);
        req.sg.copy_out(req.assoc_len, &mut msg)?;
        let tag = key.seal(req.iv, &assoc, &mut msg)?;

        req.sg.copy_in(req.assoc_len, &msg)?;
        req.sg.copy_in(req.assoc_len + req.crypt_len, &tag[..self.tag_size])?;
        Ok(())
    }

    fn decrypt(&self, req: &mut AeadRequest<'_, '_>) -> fips140_api::Result<()> {
        validate::length("GCM nonce", req.iv.len(), GCM_AES_IV_SIZE)?;
        validate::min_length("GCM ciphertext", req.crypt_len, self.tag_size)?;
        let key = self.key()?;
        Self::check_request(req, req.crypt_len)?;
        let assoc = Self::read_assoc(req)?;

        let msg_len = req.crypt_len - self.tag_size;
        let mut msg = Zeroizing::new(vec![0u8; msg_len]);
        let mut tag = [0u8; GCM_TAG_SIZE];
        req.sg.copy_out(req.assoc_len, &mut msg)?;
        req.sg.copy_out(req.assoc_len + msg_len, &mut tag)?;

        key.open(req.iv, &assoc, &mut msg, &tag)?;
        req.sg.copy_in(req.assoc_len, &msg)?;
        Ok(())
    }
}
