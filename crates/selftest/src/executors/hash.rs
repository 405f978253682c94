use fips140_api::constants::HASH_MAX_DIGEST_SIZE;

use super::Outcome;
use crate::compare::check_result;
use crate::context::SelftestContext;
use crate::error::{Operation, Result, SelftestError};
use crate::resolve::{resolve, validate_alg};
use crate::vectors::HashTestVec;

/// Known-answer test of a hash or MAC from the registry
///
/// The key is only set when the vector carries one.
pub fn test_hash(vec: &HashTestVec, implementation: &str, ctx: &SelftestContext<'_>) -> Result<Outcome> {
    let Some(mut tfm) = resolve(implementation, ctx.registry.alloc_shash(implementation))? else {
        return Ok(Outcome::Skipped);
    };
    validate_alg(tfm.as_ref())?;

    if tfm.digest_size() != vec.digest.len() {
        tracing::error!("{implementation} has wrong digest size");
        return Err(SelftestError::ConfigMismatch {
            implementation: implementation.to_owned(),
            parameter: "digest",
            expected: vec.digest.len(),
            actual: tfm.digest_size(),
        });
    }

    if let Some(key) = vec.key {
        tfm.set_key(key).map_err(|source| {
            tracing::error!("failed to set {implementation} key: {source}");
            SelftestError::KeySetup {
                implementation: implementation.to_owned(),
                source,
            }
        })?;
    }

    let mut digest = [0u8; HASH_MAX_DIGEST_SIZE];
    let digest = &mut digest[..vec.digest.len()];
    tfm.digest(vec.message, digest).map_err(|source| {
        tracing::error!("{implementation} digest computation failed: {source}");
        SelftestError::Operation {
            implementation: implementation.to_owned(),
            operation: Operation::Digest,
            source,
        }
    })?;

    check_result(digest, vec.digest, implementation, Operation::Digest, ctx.config)?;
    Ok(Outcome::Passed)
}
