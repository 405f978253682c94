//! Per-family known-answer executors
//!
//! Each executor runs one vector against one implementation: allocate (for
//! registry-based families), validate, check native sizes, set the key, run
//! the forward operation and compare, then the inverse and compare. All
//! buffers belong to the call and are released, zeroized where they held
//! key-dependent data, on every path.

mod aead;
mod aes_lib;
mod drbg;
mod hash;
mod sha256_lib;
mod skcipher;

pub use self::aead::test_aead;
pub use self::aes_lib::test_aes_library;
pub use self::drbg::test_drbg;
pub use self::hash::test_hash;
pub use self::sha256_lib::test_sha256_library;
pub use self::skcipher::test_skcipher;

use zeroize::Zeroizing;

use crate::context::SelftestContext;
use crate::descriptor::{FipsTest, TestCase};
use crate::error::{Result, SelftestError};

/// Result of one trial that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The implementation produced the expected answers
    Passed,
    /// The implementation is not available here
    Skipped,
}

/// Runs one descriptor against one implementation
pub trait Executor {
    /// Execute `test` against `implementation`
    fn execute(
        &self,
        test: &FipsTest,
        implementation: &str,
        ctx: &SelftestContext<'_>,
    ) -> Result<Outcome>;
}

/// The production executor: dispatches on the descriptor's [`TestCase`]
#[derive(Debug, Default, Clone, Copy)]
pub struct KnownAnswerExecutor;

impl Executor for KnownAnswerExecutor {
    fn execute(
        &self,
        test: &FipsTest,
        implementation: &str,
        ctx: &SelftestContext<'_>,
    ) -> Result<Outcome> {
        test.validate()?;
        tracing::debug!(algorithm = test.alg, kind = test.case.kind(), "testing {implementation}");

        match &test.case {
            TestCase::AesLibrary(vec) => test_aes_library(vec, implementation, ctx),
            TestCase::Skcipher(vec) => test_skcipher(vec, implementation, ctx),
            TestCase::Aead(vec) => test_aead(vec, implementation, ctx),
            TestCase::Hash(vec) => test_hash(vec, implementation, ctx),
            TestCase::Sha256Library(vec) => test_sha256_library(vec, implementation, ctx),
            TestCase::Drbg(vec) => test_drbg(vec, implementation, ctx),
        }
    }
}

/// A zero-padded copy of `init`, `len` bytes long
pub(crate) fn scratch(implementation: &str, init: &[u8], len: usize) -> Result<Zeroizing<Vec<u8>>> {
    let mut buf = Vec::new();
    if buf.try_reserve_exact(len.max(init.len())).is_err() {
        tracing::error!("out of memory testing {implementation}");
        return Err(SelftestError::OutOfMemory {
            implementation: implementation.to_owned(),
        });
    }
    buf.extend_from_slice(init);
    buf.resize(len.max(init.len()), 0);
    Ok(Zeroizing::new(buf))
}
