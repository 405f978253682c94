//! HMAC (Hash-based Message Authentication Code) template
//!
//! RFC 2104 / FIPS 198-1 over any unkeyed [`Shash`] the registry resolves.
//! Keys longer than the hash block size are hashed first; shorter keys are
//! zero padded. The padded key is held only as the inner and outer pads.

use fips140_api::{Algorithm, AlgorithmInfo, Error, Result, Shash};
use fips140_internal::xor_in_place;
use zeroize::Zeroizing;

const IPAD_BYTE: u8 = 0x36;
const OPAD_BYTE: u8 = 0x5c;

struct Pads {
    ipad: Zeroizing<Vec<u8>>,
    opad: Zeroizing<Vec<u8>>,
}

/// HMAC over a boxed hash transform
pub struct Hmac {
    info: AlgorithmInfo,
    hash: Box<dyn Shash>,
    pads: Option<Pads>,
}

impl Hmac {
    /// Wrap `hash` in HMAC
    pub fn new(info: AlgorithmInfo, hash: Box<dyn Shash>) -> Self {
        Self { info, hash, pads: None }
    }

    fn hash_parts(&self, parts: &[&[u8]]) -> Result<Zeroizing<Vec<u8>>> {
        let mut input = Zeroizing::new(Vec::with_capacity(parts.iter().map(|p| p.len()).sum()));
        for part in parts {
            input.extend_from_slice(part);
        }
        let mut out = Zeroizing::new(vec![0u8; self.hash.digest_size()]);
        self.hash.digest(&input, &mut out)?;
        Ok(out)
    }
}

impl Algorithm for Hmac {
    fn info(&self) -> &AlgorithmInfo {
        &self.info
    }
}

impl Shash for Hmac {
    fn digest_size(&self) -> usize {
        self.hash.digest_size()
    }

    fn block_size(&self) -> usize {
        self.hash.block_size()
    }

    fn set_key(&mut self, key: &[u8]) -> Result<()> {
        let block_size = self.hash.block_size();

        let mut k_prime = Zeroizing::new(vec![0u8; block_size]);
        if key.len() > block_size {
            let hashed = self.hash_parts(&[key])?;
            k_prime[..hashed.len()].copy_from_slice(&hashed);
        } else {
            k_prime[..key.len()].copy_from_slice(key);
        }

        let mut ipad = Zeroizing::new(vec![IPAD_BYTE; block_size]);
        let mut opad = Zeroizing::new(vec![OPAD_BYTE; block_size]);
        xor_in_place(&mut ipad, &k_prime);
        xor_in_place(&mut opad, &k_prime);

        self.pads = Some(Pads { ipad, opad });
        Ok(())
    }

    fn digest(&self, data: &[u8], out: &mut [u8]) -> Result<()> {
        let pads = self.pads.as_ref().ok_or(Error::KeyRequired { context: "hmac" })?;
        let digest_size = self.hash.digest_size();
        if out.len() < digest_size {
            return Err(Error::InvalidLength {
                context: "HMAC output",
                expected: digest_size,
                actual: out.len(),
            });
        }

        let inner = self.hash_parts(&[&pads.ipad[..], data])?;
        let outer = self.hash_parts(&[&pads.opad[..], &inner[..]])?;
        out[..digest_size].copy_from_slice(&outer);
        Ok(())
    }
}
