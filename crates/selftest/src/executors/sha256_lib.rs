use super::Outcome;
use crate::compare::check_result;
use crate::context::SelftestContext;
use crate::error::{Operation, Result};
use crate::vectors::HashTestVec;

/// Hash the message with the direct-call SHA-256 library
pub fn test_sha256_library(
    vec: &HashTestVec,
    implementation: &str,
    ctx: &SelftestContext<'_>,
) -> Result<Outcome> {
    let mut digest = ctx.library.sha256(vec.message);
    check_result(&mut digest, vec.digest, implementation, Operation::Digest, ctx.config)?;
    Ok(Outcome::Passed)
}
