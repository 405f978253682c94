//! Test descriptors

use fips140_api::constants::{AES_BLOCK_SIZE, HASH_MAX_DIGEST_SIZE, MAX_IV_SIZE, SHA256_DIGEST_SIZE};

use crate::error::{Result, SelftestError};
use crate::vectors::{AeadTestVec, DrbgTestVec, HashTestVec, SkcipherTestVec};

/// How to run a test, together with the vector it runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestCase {
    /// One block through the direct-call AES library
    AesLibrary(SkcipherTestVec),
    /// A length-preserving cipher from the registry
    Skcipher(SkcipherTestVec),
    /// An AEAD from the registry
    Aead(AeadTestVec),
    /// A hash or MAC from the registry
    Hash(HashTestVec),
    /// The direct-call SHA-256 library
    Sha256Library(HashTestVec),
    /// A DRBG from the registry
    Drbg(DrbgTestVec),
}

impl TestCase {
    /// Short name of the executor family
    pub fn kind(&self) -> &'static str {
        match self {
            TestCase::AesLibrary(_) => "aes-library",
            TestCase::Skcipher(_) => "skcipher",
            TestCase::Aead(_) => "aead",
            TestCase::Hash(_) => "hash",
            TestCase::Sha256Library(_) => "sha256-library",
            TestCase::Drbg(_) => "drbg",
        }
    }

    /// Whether the implementation under test is reached through the registry
    pub fn uses_registry(&self) -> bool {
        !matches!(self, TestCase::AesLibrary(_) | TestCase::Sha256Library(_))
    }
}

/// One entry of the self-test table
///
/// The test runs once per name in `impls`, or once with `alg` when `impls`
/// is empty. Implementation names are driver names, template instances, or
/// for library tests the algorithm name with `-lib` appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FipsTest {
    /// Algorithm name in crypto API syntax
    pub alg: &'static str,
    /// Implementations to test
    pub impls: &'static [&'static str],
    /// Executor and vector
    pub case: TestCase,
}

impl FipsTest {
    /// Names the test runs against, in order
    pub fn implementations(&self) -> impl Iterator<Item = &'static str> + '_ {
        let fallback = self.impls.is_empty().then_some(self.alg);
        self.impls.iter().copied().chain(fallback)
    }

    /// Check the vector against the shape its executor requires
    pub fn validate(&self) -> Result<()> {
        match &self.case {
            TestCase::AesLibrary(vec) => {
                self.require(vec.ptext.len() == AES_BLOCK_SIZE, "AES library message must be one block")?;
                self.require(vec.ctext.len() == vec.ptext.len(), "plaintext and ciphertext lengths differ")
            }
            TestCase::Skcipher(vec) => {
                self.require(vec.iv.len() <= MAX_IV_SIZE, "IV too long")?;
                self.require(!vec.ptext.is_empty(), "empty message")?;
                self.require(vec.ctext.len() == vec.ptext.len(), "plaintext and ciphertext lengths differ")
            }
            TestCase::Aead(vec) => {
                self.require(vec.iv.len() <= MAX_IV_SIZE, "IV too long")?;
                self.require(vec.ctext.len() > vec.ptext.len(), "ciphertext has no room for a tag")
            }
            TestCase::Hash(vec) => {
                self.require(vec.digest.len() <= HASH_MAX_DIGEST_SIZE, "digest too long")
            }
            TestCase::Sha256Library(vec) => {
                self.require(vec.digest.len() == SHA256_DIGEST_SIZE, "SHA-256 digest must be 32 bytes")
            }
            TestCase::Drbg(vec) => {
                self.require(vec.add_a.len() == vec.add_b.len(), "additional inputs differ in length")?;
                self.require(vec.entpr_a.len() == vec.entpr_b.len(), "PR entropy inputs differ in length")?;
                self.require(!vec.output.is_empty(), "empty expected output")
            }
        }
    }

    fn require(&self, condition: bool, reason: &'static str) -> Result<()> {
        if condition {
            return Ok(());
        }
        tracing::error!(algorithm = self.alg, "malformed test vector: {reason}");
        Err(SelftestError::MalformedVector { algorithm: self.alg, reason })
    }
}
