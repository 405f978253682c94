//! Standalone mode drivers
//!
//! Unlike the templates in [`block::modes`](crate::block::modes), these do
//! not reuse `aes-generic`: each is a complete implementation of its mode
//! from the RustCrypto crates, registered under its own driver name. Such
//! drivers have to be self-tested individually.

pub mod cbc;
pub mod ctr;
pub mod gcm;

pub use self::cbc::CbcAesRustCrypto;
pub use self::ctr::CtrAesRustCrypto;
pub use self::gcm::GcmAesRustCrypto;

use fips140_api::constants::{AES_KEYSIZE_128, AES_KEYSIZE_192, AES_KEYSIZE_256};
use fips140_api::SecretKey;

use crate::error::{validate, Error, Result};

/// Copy a key after checking it is a valid AES key size
pub(crate) fn aes_key(algorithm: &'static str, key: &[u8]) -> Result<SecretKey> {
    validate::key_length(
        algorithm,
        key.len(),
        &[AES_KEYSIZE_128, AES_KEYSIZE_192, AES_KEYSIZE_256],
    )?;
    Ok(SecretKey::new(key))
}

pub(crate) fn installed_key<'k>(
    algorithm: &'static str,
    key: &'k Option<SecretKey>,
) -> Result<&'k [u8]> {
    key.as_ref()
        .map(|k| k.as_ref())
        .ok_or(Error::KeyNotSet { algorithm })
}
