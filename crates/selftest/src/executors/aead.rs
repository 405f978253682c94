use fips140_api::{AeadRequest, ScatterList};

use super::{scratch, Outcome};
use crate::compare::check_result;
use crate::context::SelftestContext;
use crate::error::{Operation, Result, SelftestError};
use crate::resolve::{resolve, validate_alg};
use crate::vectors::AeadTestVec;

/// Known-answer test of an AEAD from the registry
///
/// The request runs in place over a scatter list of the associated data
/// (when there is any) and a message buffer sized for ciphertext plus tag.
/// Encryption covers the plaintext length and is compared including the
/// tag; decryption covers the full ciphertext length.
pub fn test_aead(vec: &AeadTestVec, implementation: &str, ctx: &SelftestContext<'_>) -> Result<Outcome> {
    let Some(mut tfm) = resolve(implementation, ctx.registry.alloc_aead(implementation))? else {
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

    let mut assoc = scratch(implementation, vec.assoc, vec.assoc.len())?;
    let mut message = scratch(implementation, vec.ptext, vec.ctext.len())?;

    tfm.set_key(vec.key).map_err(|source| {
        tracing::error!("failed to set {implementation} key: {source}");
        SelftestError::KeySetup {
            implementation: implementation.to_owned(),
            source,
        }
    })?;
    tfm.set_tag_size(vec.tag_size()).map_err(|source| {
        tracing::error!("failed to set {implementation} authentication tag size: {source}");
        SelftestError::TagSize {
            implementation: implementation.to_owned(),
            source,
        }
    })?;

    for (operation, crypt_len, expected) in [
        (Operation::Encryption, vec.ptext.len(), vec.ctext),
        (Operation::Decryption, vec.ctext.len(), vec.ptext),
    ] {
        let done = {
            let mut sg = ScatterList::new();
            if !assoc.is_empty() {
                sg.push(&mut assoc[..]);
            }
            sg.push(&mut message[..]);

            let mut req = AeadRequest {
                sg: &mut sg,
                assoc_len: vec.assoc.len(),
                crypt_len,
                iv: vec.iv,
            };
            match operation {
                Operation::Encryption => tfm.encrypt(&mut req),
                _ => tfm.decrypt(&mut req),
            }
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
