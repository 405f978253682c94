//! Core types shared between providers and the harness
//!
//! [`AlgorithmInfo`] is the metadata every allocated transform exposes,
//! [`SecretKey`] holds key material inside providers, and [`ScatterList`]
//! with [`AeadRequest`] describe an in-place AEAD operation over
//! discontiguous buffers.

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};
use crate::{Error, Result};
use fips140_internal::constant_time::ct_eq;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Metadata of one algorithm implementation
///
/// `name` is the algorithm name shared by every implementation (`cbc(aes)`),
/// `driver_name` identifies this particular implementation
/// (`cbc-aes-rustcrypto`, `cbc(aes-generic)`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlgorithmInfo {
    name: String,
    driver_name: String,
    priority: u32,
    is_async: bool,
}

impl AlgorithmInfo {
    /// Describe a synchronous implementation
    pub fn new(name: impl Into<String>, driver_name: impl Into<String>, priority: u32) -> Self {
        Self {
            name: name.into(),
            driver_name: driver_name.into(),
            priority,
            is_async: false,
        }
    }

    /// Set the asynchronous flag
    pub fn with_async(mut self, is_async: bool) -> Self {
        self.is_async = is_async;
        self
    }

    /// Algorithm name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Driver name
    pub fn driver_name(&self) -> &str {
        &self.driver_name
    }

    /// Selection priority among implementations of the same algorithm
    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// Whether the implementation completes requests asynchronously
    pub fn is_async(&self) -> bool {
        self.is_async
    }
}

impl fmt::Display for AlgorithmInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.driver_name)
    }
}

/// Key material that is securely zeroed when dropped
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    data: Vec<u8>,
}

impl SecretKey {
    /// Create a new key by copying a byte slice
    pub fn new(bytes: &[u8]) -> Self {
        Self { data: bytes.to_vec() }
    }

    /// Get the length of the key
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the key is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl AsRef<[u8]> for SecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.data, &other.data)
    }
}

impl Eq for SecretKey {}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey([REDACTED; {}])", self.data.len())
    }
}

/// An ordered list of mutable buffers addressed as one contiguous byte range
#[derive(Default)]
pub struct ScatterList<'a> {
    entries: Vec<&'a mut [u8]>,
}

impl<'a> ScatterList<'a> {
    /// Create an empty list
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append a buffer to the end of the list
    pub fn push(&mut self, entry: &'a mut [u8]) {
        self.entries.push(entry);
    }

    /// Number of buffers in the list
    pub fn num_entries(&self) -> usize {
        self.entries.len()
    }

    /// Total number of bytes across all buffers
    pub fn len(&self) -> usize {
        self.entries.iter().map(|e| e.len()).sum()
    }

    /// True when the list covers no bytes
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_range(&self, offset: usize, len: usize) -> Result<()> {
        let total = self.len();
        match offset.checked_add(len) {
            Some(end) if end <= total => Ok(()),
            _ => Err(Error::InvalidLength {
                context: "scatterlist range",
                expected: total,
                actual: offset.saturating_add(len),
            }),
        }
    }

    /// Copy `out.len()` bytes starting at `offset` out of the list
    pub fn copy_out(&self, offset: usize, out: &mut [u8]) -> Result<()> {
        self.check_range(offset, out.len())?;

        let mut skip = offset;
        let mut done = 0;
        for entry in &self.entries {
            if done == out.len() {
                break;
            }
            if skip >= entry.len() {
                skip -= entry.len();
                continue;
            }
            let take = (entry.len() - skip).min(out.len() - done);
            out[done..done + take].copy_from_slice(&entry[skip..skip + take]);
            done += take;
            skip = 0;
        }
        Ok(())
    }

    /// Copy `data` into the list starting at `offset`
    pub fn copy_in(&mut self, offset: usize, data: &[u8]) -> Result<()> {
        self.check_range(offset, data.len())?;

        let mut skip = offset;
        let mut done = 0;
        for entry in self.entries.iter_mut() {
            if done == data.len() {
                break;
            }
            if skip >= entry.len() {
                skip -= entry.len();
                continue;
            }
            let take = (entry.len() - skip).min(data.len() - done);
            entry[skip..skip + take].copy_from_slice(&data[done..done + take]);
            done += take;
            skip = 0;
        }
        Ok(())
    }
}

/// One in-place AEAD request
///
/// The first `assoc_len` bytes of `sg` are associated data. For encryption the
/// next `crypt_len` bytes are plaintext, replaced by ciphertext followed by the
/// tag. For decryption `crypt_len` covers ciphertext plus tag, and the
/// plaintext is written back over the ciphertext.
pub struct AeadRequest<'r, 'a> {
    /// Source and destination buffers
    pub sg: &'r mut ScatterList<'a>,
    /// Bytes of associated data at the start of `sg`
    pub assoc_len: usize,
    /// Bytes to process after the associated data
    pub crypt_len: usize,
    /// Initialization vector
    pub iv: &'r [u8],
}
