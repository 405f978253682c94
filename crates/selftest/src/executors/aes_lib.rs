use fips140_api::constants::AES_BLOCK_SIZE;
use zeroize::Zeroizing;

use super::Outcome;
use crate::compare::check_result;
use crate::context::SelftestContext;
use crate::error::{Operation, Result, SelftestError};
use crate::vectors::SkcipherTestVec;

/// Encrypt and decrypt one block through the direct-call AES library
pub fn test_aes_library(
    vec: &SkcipherTestVec,
    implementation: &str,
    ctx: &SelftestContext<'_>,
) -> Result<Outcome> {
    let ptext: &[u8; AES_BLOCK_SIZE] = vec.ptext.try_into().map_err(|_| SelftestError::MalformedVector {
        algorithm: "aes",
        reason: "AES library message must be one block",
    })?;

    let aes = ctx.library.aes_expand_key(vec.key).map_err(|source| {
        tracing::error!("aes_expandkey() failed: {source}");
        SelftestError::KeySetup {
            implementation: implementation.to_owned(),
            source,
        }
    })?;

    let mut block = Zeroizing::new(*ptext);
    aes.encrypt_block(&mut block);
    check_result(&mut block[..], vec.ctext, implementation, Operation::Encryption, ctx.config)?;

    aes.decrypt_block(&mut block);
    check_result(&mut block[..], vec.ptext, implementation, Operation::Decryption, ctx.config)?;
    Ok(Outcome::Passed)
}
