//! The built-in driver table

use fips140_api::{Aead, AlgorithmInfo, Rng, Shash, Skcipher};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

use crate::block::{AesGeneric, BlockCipher};
use crate::drbg::{DrbgHash, HmacDrbg};
use crate::hash::HashDriver;
use crate::standalone::{CbcAesRustCrypto, CtrAesRustCrypto, GcmAesRustCrypto};

/// Transform family a driver belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    Cipher,
    Skcipher,
    Aead,
    Shash,
    Rng,
}

pub(crate) enum Constructor {
    Cipher(fn(AlgorithmInfo) -> Box<dyn BlockCipher>),
    Skcipher(fn(AlgorithmInfo) -> Box<dyn Skcipher>),
    Aead(fn(AlgorithmInfo) -> Box<dyn Aead>),
    Shash(fn(AlgorithmInfo) -> Box<dyn Shash>),
    Rng(fn(AlgorithmInfo) -> Box<dyn Rng>),
}

impl Constructor {
    pub(crate) fn kind(&self) -> Kind {
        match self {
            Constructor::Cipher(_) => Kind::Cipher,
            Constructor::Skcipher(_) => Kind::Skcipher,
            Constructor::Aead(_) => Kind::Aead,
            Constructor::Shash(_) => Kind::Shash,
            Constructor::Rng(_) => Kind::Rng,
        }
    }
}

/// One registered implementation
pub(crate) struct DriverEntry {
    pub(crate) name: &'static str,
    pub(crate) driver: &'static str,
    pub(crate) priority: u32,
    pub(crate) constructor: Constructor,
}

pub(crate) const GENERIC_PRIORITY: u32 = 100;
pub(crate) const STANDALONE_PRIORITY: u32 = 200;

fn aes_generic(info: AlgorithmInfo) -> Box<dyn BlockCipher> {
    Box::new(AesGeneric::new(info))
}

fn sha1_generic(info: AlgorithmInfo) -> Box<dyn Shash> {
    Box::new(HashDriver::<Sha1>::new(info, 64))
}

fn sha224_generic(info: AlgorithmInfo) -> Box<dyn Shash> {
    Box::new(HashDriver::<Sha224>::new(info, 64))
}

fn sha256_generic(info: AlgorithmInfo) -> Box<dyn Shash> {
    Box::new(HashDriver::<Sha256>::new(info, 64))
}

fn sha384_generic(info: AlgorithmInfo) -> Box<dyn Shash> {
    Box::new(HashDriver::<Sha384>::new(info, 128))
}

fn sha512_generic(info: AlgorithmInfo) -> Box<dyn Shash> {
    Box::new(HashDriver::<Sha512>::new(info, 128))
}

fn cbc_aes_rustcrypto(info: AlgorithmInfo) -> Box<dyn Skcipher> {
    Box::new(CbcAesRustCrypto::new(info))
}

fn ctr_aes_rustcrypto(info: AlgorithmInfo) -> Box<dyn Skcipher> {
    Box::new(CtrAesRustCrypto::new(info))
}

fn gcm_aes_rustcrypto(info: AlgorithmInfo) -> Box<dyn Aead> {
    Box::new(GcmAesRustCrypto::new(info))
}

fn drbg_pr_hmac_sha256(info: AlgorithmInfo) -> Box<dyn Rng> {
    Box::new(HmacDrbg::new(info, DrbgHash::Sha256, true))
}

fn drbg_pr_hmac_sha512(info: AlgorithmInfo) -> Box<dyn Rng> {
    Box::new(HmacDrbg::new(info, DrbgHash::Sha512, true))
}

fn drbg_nopr_hmac_sha256(info: AlgorithmInfo) -> Box<dyn Rng> {
    Box::new(HmacDrbg::new(info, DrbgHash::Sha256, false))
}

fn drbg_nopr_hmac_sha512(info: AlgorithmInfo) -> Box<dyn Rng> {
    Box::new(HmacDrbg::new(info, DrbgHash::Sha512, false))
}

macro_rules! entry {
    ($name:expr, $driver:expr, $priority:expr, $kind:ident($ctor:path)) => {
        DriverEntry {
            name: $name,
            driver: $driver,
            priority: $priority,
            constructor: Constructor::$kind($ctor),
        }
    };
}

/// Every driver the software registry knows about
pub(crate) static DRIVERS: &[DriverEntry] = &[
    entry!("aes", "aes-generic", GENERIC_PRIORITY, Cipher(aes_generic)),
    entry!("sha1", "sha1-generic", GENERIC_PRIORITY, Shash(sha1_generic)),
    entry!("sha224", "sha224-generic", GENERIC_PRIORITY, Shash(sha224_generic)),
    entry!("sha256", "sha256-generic", GENERIC_PRIORITY, Shash(sha256_generic)),
    entry!("sha384", "sha384-generic", GENERIC_PRIORITY, Shash(sha384_generic)),
    entry!("sha512", "sha512-generic", GENERIC_PRIORITY, Shash(sha512_generic)),
    entry!("cbc(aes)", "cbc-aes-rustcrypto", STANDALONE_PRIORITY, Skcipher(cbc_aes_rustcrypto)),
    entry!("ctr(aes)", "ctr-aes-rustcrypto", STANDALONE_PRIORITY, Skcipher(ctr_aes_rustcrypto)),
    entry!("gcm(aes)", "gcm-aes-rustcrypto", STANDALONE_PRIORITY, Aead(gcm_aes_rustcrypto)),
    entry!("stdrng", "drbg_pr_hmac_sha256", 100, Rng(drbg_pr_hmac_sha256)),
    entry!("stdrng", "drbg_pr_hmac_sha512", 101, Rng(drbg_pr_hmac_sha512)),
    entry!("stdrng", "drbg_nopr_hmac_sha256", 200, Rng(drbg_nopr_hmac_sha256)),
    entry!("stdrng", "drbg_nopr_hmac_sha512", 201, Rng(drbg_nopr_hmac_sha512)),
];
