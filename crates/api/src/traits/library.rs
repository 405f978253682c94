//! Direct-call library primitives

use crate::Result;

/// An expanded AES key
pub trait AesBlockCipher {
    /// Encrypt one block in place
    fn encrypt_block(&self, block: &mut [u8; 16]);

    /// Decrypt one block in place
    fn decrypt_block(&self, block: &mut [u8; 16]);
}

/// Primitives callable without going through a [`Registry`](super::Registry)
pub trait CryptoLibrary {
    /// Expand an AES key of 16, 24 or 32 bytes
    fn aes_expand_key(&self, key: &[u8]) -> Result<Box<dyn AesBlockCipher>>;

    /// One-shot SHA-256
    fn sha256(&self, data: &[u8]) -> [u8; 32];
}
