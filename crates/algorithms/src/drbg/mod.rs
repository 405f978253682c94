//! HMAC_DRBG (NIST SP 800-90A Rev. 1, section 10.1.2)
//!
//! The generator follows the Linux kernel's arrangement of the algorithm.
//! Prediction-resistant instances reseed before every request and then drop
//! the additional input; non-PR instances fold the additional input into the
//! state before generating. Both finish a request with an update over the
//! additional input.
//!
//! Entropy normally comes from the operating system through
//! [`rand::rngs::OsRng`]. The `*_test` entry points of [`Rng`] let a caller
//! supply it instead, which is how known-answer tests drive the generator.

use fips140_api::{Algorithm, AlgorithmInfo, Rng};
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Sha256, Sha512};
use zeroize::Zeroizing;

use crate::error::{validate, Error, Result};

/// Largest single generate request in bytes
pub const DRBG_MAX_REQUEST_BYTES: usize = 1 << 16;

/// Requests allowed between reseeds of a non-PR instance
pub const DRBG_MAX_REQUESTS: u64 = 1 << 20;

// Both supported hashes give 256-bit security strength
const SECURITY_STRENGTH: usize = 32;

/// Hash underlying an HMAC_DRBG instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrbgHash {
    /// HMAC-SHA-256
    Sha256,
    /// HMAC-SHA-512
    Sha512,
}

impl DrbgHash {
    /// Length of V and K in bytes
    pub fn output_len(self) -> usize {
        match self {
            DrbgHash::Sha256 => 32,
            DrbgHash::Sha512 => 64,
        }
    }

    fn mac(self, key: &[u8], parts: &[&[u8]]) -> Result<Zeroizing<Vec<u8>>> {
        let bad_key = |_| Error::Processing {
            operation: "hmac_drbg",
            details: "HMAC rejected key",
        };
        let out = match self {
            DrbgHash::Sha256 => {
                let mut mac = <Hmac<Sha256> as Mac>::new_from_slice(key).map_err(bad_key)?;
                parts.iter().for_each(|p| mac.update(p));
                mac.finalize().into_bytes().to_vec()
            }
            DrbgHash::Sha512 => {
                let mut mac = <Hmac<Sha512> as Mac>::new_from_slice(key).map_err(bad_key)?;
                parts.iter().for_each(|p| mac.update(p));
                mac.finalize().into_bytes().to_vec()
            }
        };
        Ok(Zeroizing::new(out))
    }
}

/// An HMAC_DRBG instance
pub struct HmacDrbg {
    info: AlgorithmInfo,
    hash: DrbgHash,
    pr: bool,
    k: Zeroizing<Vec<u8>>,
    v: Zeroizing<Vec<u8>>,
    seeded: bool,
    reseed_ctr: u64,
}

impl HmacDrbg {
    /// Create an unseeded generator
    ///
    /// The first request instantiates it from operating system entropy.
    pub fn new(info: AlgorithmInfo, hash: DrbgHash, prediction_resistant: bool) -> Self {
        let n = hash.output_len();
        Self {
            info,
            hash,
            pr: prediction_resistant,
            k: Zeroizing::new(vec![0u8; n]),
            v: Zeroizing::new(vec![1u8; n]),
            seeded: false,
            reseed_ctr: 0,
        }
    }

    /// Whether the generator has been instantiated
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    // 10.1.2.2
    fn update(&mut self, data: &[&[u8]]) -> Result<()> {
        let has_data = data.iter().any(|d| !d.is_empty());

        for prefix in [0x00u8, 0x01] {
            let mut parts: Vec<&[u8]> = Vec::with_capacity(data.len() + 2);
            parts.push(&self.v[..]);
            parts.push(core::slice::from_ref(&prefix));
            parts.extend_from_slice(data);

            let k = self.hash.mac(&self.k, &parts)?;
            self.k = k;
            self.v = self.hash.mac(&self.k, &[&self.v[..]])?;

            if !has_data {
                break;
            }
        }
        Ok(())
    }

    // 10.1.2.3
    fn instantiate(&mut self, entropy: &[u8], pers: &[u8]) -> Result<()> {
        let n = self.hash.output_len();
        self.k = Zeroizing::new(vec![0u8; n]);
        self.v = Zeroizing::new(vec![1u8; n]);
        self.update(&[entropy, pers])?;
        self.seeded = true;
        self.reseed_ctr = 1;
        tracing::trace!(drbg = %self.info.driver_name(), "instantiated");
        Ok(())
    }

    // 10.1.2.4
    fn reseed(&mut self, entropy: &[u8], addtl: &[u8]) -> Result<()> {
        self.update(&[entropy, addtl])?;
        self.reseed_ctr = 1;
        tracing::trace!(drbg = %self.info.driver_name(), "reseeded");
        Ok(())
    }

    fn os_entropy(len: usize) -> Result<Zeroizing<Vec<u8>>> {
        let mut buf = Zeroizing::new(vec![0u8; len]);
        OsRng.try_fill_bytes(&mut buf).map_err(|_| Error::Processing {
            operation: "hmac_drbg",
            details: "entropy source failed",
        })?;
        Ok(buf)
    }

    /// Generate `out.len()` bytes
    ///
    /// `test_entropy`, when given, replaces operating system entropy for any
    /// seeding this request performs. An unseeded instance is instantiated
    /// from it and skips the prediction-resistance reseed, so the entropy is
    /// consumed once.
    pub fn generate(&mut self, out: &mut [u8], addtl: &[u8], test_entropy: Option<&[u8]>) -> Result<()> {
        validate::parameter(!out.is_empty(), "output", "no output buffer provided")?;
        validate::max_length("HMAC_DRBG request", out.len(), DRBG_MAX_REQUEST_BYTES)?;

        // an instance seeded by this request does not reseed again
        let fresh = !self.seeded;
        if fresh {
            let entropy = match test_entropy {
                Some(e) => Zeroizing::new(e.to_vec()),
                None => Self::os_entropy(SECURITY_STRENGTH * 3 / 2)?,
            };
            self.instantiate(&entropy, &[])?;
        }

        let mut addtl = addtl;
        if !fresh && (self.pr || self.reseed_ctr > DRBG_MAX_REQUESTS) {
            let entropy = match test_entropy {
                Some(e) => Zeroizing::new(e.to_vec()),
                None => Self::os_entropy(SECURITY_STRENGTH)?,
            };
            self.reseed(&entropy, addtl)?;
            addtl = &[];
        }

        if !addtl.is_empty() {
            self.update(&[addtl])?;
        }

        for chunk in out.chunks_mut(self.hash.output_len()) {
            self.v = self.hash.mac(&self.k, &[&self.v[..]])?;
            chunk.copy_from_slice(&self.v[..chunk.len()]);
        }

        self.update(&[addtl])?;
        self.reseed_ctr += 1;
        Ok(())
    }
}

impl Algorithm for HmacDrbg {
    fn info(&self) -> &AlgorithmInfo {
        &self.info
    }
}

impl Rng for HmacDrbg {
    fn prediction_resistant(&self) -> bool {
        self.pr
    }

    fn reset_test(&mut self, entropy: &[u8], pers: &[u8]) -> fips140_api::Result<()> {
        validate::parameter(!entropy.is_empty(), "entropy", "empty entropy input")?;
        Ok(self.instantiate(entropy, pers)?)
    }

    fn get_bytes_addtl(&mut self, out: &mut [u8], addtl: &[u8]) -> fips140_api::Result<()> {
        Ok(self.generate(out, addtl, None)?)
    }

    fn get_bytes_addtl_test(
        &mut self,
        out: &mut [u8],
        addtl: &[u8],
        entropy: &[u8],
    ) -> fips140_api::Result<()> {
        Ok(self.generate(out, addtl, Some(entropy))?)
    }
}
