use fips140_api::constants::MAX_IV_SIZE;
use zeroize::Zeroizing;

use super::{scratch, Outcome};
use crate::compare::check_result;
use crate::context::SelftestContext;
use crate::error::{Operation, Result, SelftestError};
use crate::resolve::{resolve, validate_alg};
use crate::vectors::SkcipherTestVec;

/// Known-answer test of a length-preserving cipher from the registry
///
/// The message is encrypted in place and compared with the ciphertext, then
/// decrypted in place and compared with the plaintext. The IV is copied
/// afresh before each direction since implementations update it.
pub fn test_skcipher(
    vec: &SkcipherTestVec,
    implementation: &str,
    ctx: &SelftestContext<'_>,
) -> Result<Outcome> {
    let Some(mut tfm) = resolve(implementation, ctx.registry.alloc_skcipher(implementation))? else {
        return Ok(Outcome::Skipped);
    };
    validate_alg(tfm.as_ref())?;

    if tfm.iv_size() != vec.iv.len() {
        tracing::error!("{implementation} has wrong IV size");
        return Err(SelftestError::ConfigMismatch {
            implementation: implementation.to_owned(),
            parameter: "IV",
            expected: vec.iv.len(),
            actual: tfm.iv_size(),
        });
    }

    let mut message = scratch(implementation, vec.ptext, vec.ptext.len())?;

    tfm.set_key(vec.key).map_err(|source| {
        tracing::error!("failed to set {implementation} key: {source}");
        SelftestError::KeySetup {
            implementation: implementation.to_owned(),
            source,
        }
    })?;

    let mut iv_buf = Zeroizing::new([0u8; MAX_IV_SIZE]);
    let iv = &mut iv_buf[..vec.iv.len()];

    for (operation, expected) in [
        (Operation::Encryption, vec.ctext),
        (Operation::Decryption, vec.ptext),
    ] {
        iv.copy_from_slice(vec.iv);
        let done = match operation {
            Operation::Encryption => tfm.encrypt(&mut message, iv),
            _ => tfm.decrypt(&mut message, iv),
        };
        done.map_err(|source| {
            tracing::error!("{implementation} {operation} failed: {source}");
            SelftestError::Operation {
                implementation: implementation.to_owned(),
                operation,
                source,
            }
        })?;
        check_result(&mut message, expected, implementation, operation, ctx.config)?;
    }
    Ok(Outcome::Passed)
}
