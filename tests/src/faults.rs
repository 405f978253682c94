//! Registry and library wrappers that misbehave on request
//!
//! [`FaultyRegistry`] forwards to a [`SoftwareRegistry`] and applies at most
//! one [`Fault`] per implementation name, which is enough to drive every
//! failure path of the self-tests on a system where all implementations work.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use fips140_algorithms::{SoftwareLibrary, SoftwareRegistry};
use fips140_api::{
    Aead, AeadRequest, AesBlockCipher, Algorithm, AlgorithmInfo, CryptoLibrary, Error, Registry,
    Result, Rng, Shash, Skcipher,
};

/// Misbehavior applied to one implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Allocation fails with something other than "not found"
    Unallocatable,
    /// Allocation reports "not found"
    Missing,
    /// The transform claims to be asynchronous
    Async,
    /// The transform reports this IV size
    IvSize(usize),
    /// The transform reports this digest size
    DigestSize(usize),
    /// Every key is rejected
    RejectKey,
    /// The first output byte of every operation is flipped
    CorruptOutput,
}

/// A software registry with per-implementation faults
#[derive(Debug, Default)]
pub struct FaultyRegistry {
    inner: SoftwareRegistry,
    faults: HashMap<String, Fault>,
    requests: RefCell<Vec<String>>,
    calls: Rc<RefCell<HashMap<String, usize>>>,
}

impl FaultyRegistry {
    /// Wrap the default software registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `inner`
    pub fn wrapping(inner: SoftwareRegistry) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    /// Apply `fault` whenever `implementation` is allocated
    pub fn with_fault(mut self, implementation: impl Into<String>, fault: Fault) -> Self {
        self.faults.insert(implementation.into(), fault);
        self
    }

    /// Every name allocation was requested for, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// How many keying and processing calls reached a faulted `implementation`
    ///
    /// Size queries are not counted.
    pub fn calls(&self, implementation: &str) -> usize {
        self.calls.borrow().get(implementation).copied().unwrap_or(0)
    }

    fn alloc<T: ?Sized + Algorithm>(
        &self,
        name: &str,
        alloc: impl FnOnce(&SoftwareRegistry) -> Result<Box<T>>,
        wrap: impl FnOnce(Faulted<T>) -> Box<T>,
    ) -> Result<Box<T>> {
        self.requests.borrow_mut().push(name.to_owned());
        match self.faults.get(name).copied() {
            None => alloc(&self.inner),
            Some(Fault::Missing) => Err(Error::not_found(name)),
            Some(Fault::Unallocatable) => Err(Error::Processing {
                context: "alloc",
                message: format!("{name}: out of resources"),
            }),
            Some(fault) => {
                let inner = alloc(&self.inner)?;
                let calls = CallLog { name: name.to_owned(), calls: Rc::clone(&self.calls) };
                Ok(wrap(Faulted::new(inner, fault, calls)))
            }
        }
    }
}

impl Registry for FaultyRegistry {
    fn alloc_skcipher(&self, name: &str) -> Result<Box<dyn Skcipher>> {
        self.alloc(name, |r| r.alloc_skcipher(name), |f| Box::new(f))
    }

    fn alloc_aead(&self, name: &str) -> Result<Box<dyn Aead>> {
        self.alloc(name, |r| r.alloc_aead(name), |f| Box::new(f))
    }

    fn alloc_shash(&self, name: &str) -> Result<Box<dyn Shash>> {
        self.alloc(name, |r| r.alloc_shash(name), |f| Box::new(f))
    }

    fn alloc_rng(&self, name: &str) -> Result<Box<dyn Rng>> {
        self.alloc(name, |r| r.alloc_rng(name), |f| Box::new(f))
    }
}

struct CallLog {
    name: String,
    calls: Rc<RefCell<HashMap<String, usize>>>,
}

impl CallLog {
    fn record(&self) {
        *self.calls.borrow_mut().entry(self.name.clone()).or_default() += 1;
    }
}

/// A transform with a fault applied
pub struct Faulted<T: ?Sized> {
    info: AlgorithmInfo,
    fault: Fault,
    log: CallLog,
    inner: Box<T>,
}

impl<T: ?Sized + Algorithm> Faulted<T> {
    fn new(inner: Box<T>, fault: Fault, log: CallLog) -> Self {
        let info = inner.info().clone().with_async(fault == Fault::Async);
        Self { info, fault, log, inner }
    }
}

impl<T: ?Sized> Faulted<T> {
    fn reject_key(&self) -> Result<()> {
        self.log.record();
        match self.fault {
            Fault::RejectKey => Err(Error::param("setkey", "rejected")),
            _ => Ok(()),
        }
    }

    fn corrupt(&self, out: &mut [u8]) {
        if let (Fault::CorruptOutput, Some(first)) = (self.fault, out.first_mut()) {
            *first ^= 0xff;
        }
    }
}

impl<T: ?Sized> Algorithm for Faulted<T> {
    fn info(&self) -> &AlgorithmInfo {
        &self.info
    }
}

impl Skcipher for Faulted<dyn Skcipher> {
    fn iv_size(&self) -> usize {
        match self.fault {
            Fault::IvSize(size) => size,
            _ => self.inner.iv_size(),
        }
    }

    fn block_size(&self) -> usize {
        self.inner.block_size()
    }

    fn set_key(&mut self, key: &[u8]) -> Result<()> {
        self.reject_key()?;
        self.inner.set_key(key)
    }

    fn encrypt(&self, data: &mut [u8], iv: &mut [u8]) -> Result<()> {
        self.log.record();
        self.inner.encrypt(data, iv)?;
        self.corrupt(data);
        Ok(())
    }

    fn decrypt(&self, data: &mut [u8], iv: &mut [u8]) -> Result<()> {
        self.log.record();
        self.inner.decrypt(data, iv)?;
        self.corrupt(data);
        Ok(())
    }
}

impl Aead for Faulted<dyn Aead> {
    fn iv_size(&self) -> usize {
        match self.fault {
            Fault::IvSize(size) => size,
            _ => self.inner.iv_size(),
        }
    }

    fn max_tag_size(&self) -> usize {
        self.inner.max_tag_size()
    }

    fn set_key(&mut self, key: &[u8]) -> Result<()> {
        self.reject_key()?;
        self.inner.set_key(key)
    }

    fn set_tag_size(&mut self, tag_size: usize) -> Result<()> {
        self.log.record();
        self.inner.set_tag_size(tag_size)
    }

    fn encrypt(&self, req: &mut AeadRequest<'_, '_>) -> Result<()> {
        self.log.record();
        self.inner.encrypt(req)?;
        if self.fault == Fault::CorruptOutput {
            let mut first = [0u8; 1];
            req.sg.copy_out(req.assoc_len, &mut first)?;
            first[0] ^= 0xff;
            req.sg.copy_in(req.assoc_len, &first)?;
        }
        Ok(())
    }

    fn decrypt(&self, req: &mut AeadRequest<'_, '_>) -> Result<()> {
        self.log.record();
        self.inner.decrypt(req)
    }
}

impl Shash for Faulted<dyn Shash> {
    fn digest_size(&self) -> usize {
        match self.fault {
            Fault::DigestSize(size) => size,
            _ => self.inner.digest_size(),
        }
    }

    fn block_size(&self) -> usize {
        self.inner.block_size()
    }

    fn set_key(&mut self, key: &[u8]) -> Result<()> {
        self.reject_key()?;
        self.inner.set_key(key)
    }

    fn digest(&self, data: &[u8], out: &mut [u8]) -> Result<()> {
        self.log.record();
        self.inner.digest(data, out)?;
        self.corrupt(out);
        Ok(())
    }
}

impl Rng for Faulted<dyn Rng> {
    fn prediction_resistant(&self) -> bool {
        self.inner.prediction_resistant()
    }

    fn reset_test(&mut self, entropy: &[u8], pers: &[u8]) -> Result<()> {
        self.log.record();
        self.inner.reset_test(entropy, pers)
    }

    fn get_bytes_addtl(&mut self, out: &mut [u8], addtl: &[u8]) -> Result<()> {
        self.log.record();
        self.inner.get_bytes_addtl(out, addtl)?;
        self.corrupt(out);
        Ok(())
    }

    fn get_bytes_addtl_test(&mut self, out: &mut [u8], addtl: &[u8], entropy: &[u8]) -> Result<()> {
        self.log.record();
        self.inner.get_bytes_addtl_test(out, addtl, entropy)?;
        self.corrupt(out);
        Ok(())
    }
}

/// Misbehavior of the direct-call library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryFault {
    /// Key expansion fails
    RejectKey,
    /// SHA-256 output has its first byte flipped
    CorruptDigest,
}

/// The software library with an optional fault
#[derive(Debug, Default, Clone, Copy)]
pub struct FaultyLibrary {
    inner: SoftwareLibrary,
    fault: Option<LibraryFault>,
}

impl FaultyLibrary {
    /// A library with `fault` applied
    pub fn new(fault: LibraryFault) -> Self {
        Self {
            inner: SoftwareLibrary::new(),
            fault: Some(fault),
        }
    }
}

impl CryptoLibrary for FaultyLibrary {
    fn aes_expand_key(&self, key: &[u8]) -> Result<Box<dyn AesBlockCipher>> {
        if self.fault == Some(LibraryFault::RejectKey) {
            return Err(Error::InvalidKeyLength {
                context: "aes",
                actual: key.len(),
            });
        }
        self.inner.aes_expand_key(key)
    }

    fn sha256(&self, data: &[u8]) -> [u8; 32] {
        let mut digest = self.inner.sha256(data);
        if self.fault == Some(LibraryFault::CorruptDigest) {
            digest[0] ^= 0xff;
        }
        digest
    }
}
