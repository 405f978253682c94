//! Test vector shapes
//!
//! One flat record per family of algorithms. Lengths are those of the
//! slices; derived quantities such as the AEAD tag size are computed, never
//! stored.

pub mod corpus;

/// Vector for an AEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AeadTestVec {
    /// Key
    pub key: &'static [u8],
    /// Nonce
    pub iv: &'static [u8],
    /// Associated data, possibly empty
    pub assoc: &'static [u8],
    /// Plaintext
    pub ptext: &'static [u8],
    /// Ciphertext followed by the authentication tag
    pub ctext: &'static [u8],
}

impl AeadTestVec {
    /// Tag length implied by the vector
    pub fn tag_size(&self) -> usize {
        self.ctext.len().saturating_sub(self.ptext.len())
    }
}

/// Vector for a length-preserving cipher
///
/// `iv` is empty for modes that take none. Plaintext and ciphertext have the
/// same length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkcipherTestVec {
    /// Key
    pub key: &'static [u8],
    /// IV, tweak or initial counter block
    pub iv: &'static [u8],
    /// Plaintext
    pub ptext: &'static [u8],
    /// Ciphertext
    pub ctext: &'static [u8],
}

/// Vector for a hash or MAC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashTestVec {
    /// Key for MACs, `None` for plain hashes
    pub key: Option<&'static [u8]>,
    /// Message
    pub message: &'static [u8],
    /// Expected digest
    pub digest: &'static [u8],
}

/// Vector for a DRBG
///
/// The prediction-resistance entropy inputs are empty for variants without
/// prediction resistance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrbgTestVec {
    /// Entropy input followed by nonce
    pub entropy: &'static [u8],
    /// Personalization string
    pub pers: &'static [u8],
    /// Entropy for the first generate call
    pub entpr_a: &'static [u8],
    /// Entropy for the second generate call
    pub entpr_b: &'static [u8],
    /// Additional input for the first generate call
    pub add_a: &'static [u8],
    /// Additional input for the second generate call
    pub add_b: &'static [u8],
    /// Expected output of the second generate call
    pub output: &'static [u8],
}
