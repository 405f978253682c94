//! Name-keyed software registry
//!
//! Lookup works in three steps:
//!
//! 1. an exact driver name, e.g. `cbc-aes-rustcrypto`;
//! 2. an algorithm name, resolved to the highest-priority driver that
//!    implements it, e.g. `cbc(aes)`;
//! 3. a template instance, e.g. `ecb(aes-generic)` or `hmac(sha256)`, built
//!    on top of whatever the inner name resolves to.
//!
//! A name that fails all three, or that resolves to a transform of another
//! family, is reported as [`Error::NotFound`](fips140_api::Error::NotFound).
//! Drivers can be withheld with [`SoftwareRegistryBuilder::without_driver`],
//! which is how a platform lacking an accelerated implementation looks to a
//! caller.

mod drivers;
pub mod name;

use std::collections::{HashMap, HashSet};
use std::fmt;

use fips140_api::{Aead, Algorithm, AlgorithmInfo, Error, Registry, Result, Rng, Shash, Skcipher};
use once_cell::sync::Lazy;

use self::drivers::{Constructor, DriverEntry, Kind, DRIVERS};
use self::name::{instance_name, split_template};
use crate::block::modes::{Cbc, Ctr, Cts, Ecb, Xts};
use crate::block::BlockCipher;
use crate::mac::{Cmac, Hmac};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Template {
    Ecb,
    Cbc,
    Cts,
    Ctr,
    Xts,
    Cmac,
    Hmac,
}

impl Template {
    fn as_str(self) -> &'static str {
        match self {
            Template::Ecb => "ecb",
            Template::Cbc => "cbc",
            Template::Cts => "cts",
            Template::Ctr => "ctr",
            Template::Xts => "xts",
            Template::Cmac => "cmac",
            Template::Hmac => "hmac",
        }
    }

    fn kind(self) -> Kind {
        match self {
            Template::Cmac | Template::Hmac => Kind::Shash,
            _ => Kind::Skcipher,
        }
    }
}

static TEMPLATES: Lazy<HashMap<&'static str, Template>> = Lazy::new(|| {
    [
        Template::Ecb,
        Template::Cbc,
        Template::Cts,
        Template::Ctr,
        Template::Xts,
        Template::Cmac,
        Template::Hmac,
    ]
    .into_iter()
    .map(|t| (t.as_str(), t))
    .collect()
});

/// Registry of the pure-Rust drivers in this crate
pub struct SoftwareRegistry {
    drivers: Vec<&'static DriverEntry>,
    async_drivers: HashSet<String>,
}

impl SoftwareRegistry {
    /// Registry with every built-in driver
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a customized registry
    pub fn builder() -> SoftwareRegistryBuilder {
        SoftwareRegistryBuilder::default()
    }

    /// Driver names currently registered, in registration order
    pub fn driver_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.drivers.iter().map(|e| e.driver)
    }

    fn info(&self, name: String, driver: String, priority: u32) -> AlgorithmInfo {
        let is_async = self.async_drivers.contains(&driver);
        AlgorithmInfo::new(name, driver, priority).with_async(is_async)
    }

    fn entry_info(&self, entry: &DriverEntry) -> AlgorithmInfo {
        self.info(entry.name.to_string(), entry.driver.to_string(), entry.priority)
    }

    fn find(&self, name: &str, kind: Kind) -> Option<&'static DriverEntry> {
        if let Some(entry) = self.drivers.iter().find(|e| e.driver == name) {
            return (entry.constructor.kind() == kind).then_some(*entry);
        }
        self.drivers
            .iter()
            .filter(|e| e.name == name && e.constructor.kind() == kind)
            .max_by_key(|e| e.priority)
            .copied()
    }

    fn template<'n>(&self, name: &'n str, kind: Kind) -> Option<(Template, &'n str)> {
        let (tmpl, inner) = split_template(name)?;
        let template = *TEMPLATES.get(tmpl)?;
        (template.kind() == kind).then_some((template, inner))
    }

    fn cipher(&self, name: &str) -> Result<Box<dyn BlockCipher>> {
        match self.find(name, Kind::Cipher).map(|e| (e, &e.constructor)) {
            Some((entry, Constructor::Cipher(new))) => Ok(new(self.entry_info(entry))),
            _ => Err(Error::not_found(name)),
        }
    }

    fn instance_info(&self, tmpl: Template, inner: &AlgorithmInfo) -> AlgorithmInfo {
        self.info(
            instance_name(tmpl.as_str(), inner.name()),
            instance_name(tmpl.as_str(), inner.driver_name()),
            inner.priority(),
        )
    }

    fn skcipher_instance(&self, tmpl: Template, inner: &str) -> Result<Box<dyn Skcipher>> {
        if tmpl == Template::Cts {
            let cipher = match split_template(inner) {
                Some(("cbc", block)) => self.cipher(block)?,
                _ => return Err(Error::not_found(inner)),
            };
            let cbc = self.instance_info(Template::Cbc, cipher.info());
            let info = self.instance_info(Template::Cts, &cbc);
            return Ok(Box::new(Cts::new(info, cipher)?));
        }

        let cipher = self.cipher(inner)?;
        let info = self.instance_info(tmpl, cipher.info());
        let tfm: Box<dyn Skcipher> = match tmpl {
            Template::Ecb => Box::new(Ecb::new(info, cipher)?),
            Template::Cbc => Box::new(Cbc::new(info, cipher)?),
            Template::Ctr => Box::new(Ctr::new(info, cipher)?),
            Template::Xts => Box::new(Xts::new(info, cipher, self.cipher(inner)?)?),
            _ => return Err(Error::not_found(inner)),
        };
        Ok(tfm)
    }

    fn shash_instance(&self, tmpl: Template, inner: &str) -> Result<Box<dyn Shash>> {
        match tmpl {
            Template::Cmac => {
                let cipher = self.cipher(inner)?;
                let info = self.instance_info(tmpl, cipher.info());
                Ok(Box::new(Cmac::new(info, cipher)?))
            }
            Template::Hmac => {
                let hash = self.alloc_shash(inner)?;
                let info = self.instance_info(tmpl, hash.info());
                Ok(Box::new(Hmac::new(info, hash)))
            }
            _ => Err(Error::not_found(inner)),
        }
    }

    fn traced<T: ?Sized + Algorithm>(
        name: &str,
        result: Result<Box<T>>,
    ) -> Result<Box<T>> {
        match &result {
            Ok(tfm) => tracing::debug!(name, driver = tfm.info().driver_name(), "allocated"),
            Err(err) => tracing::debug!(name, %err, "allocation failed"),
        }
        result
    }
}

impl Default for SoftwareRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SoftwareRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoftwareRegistry")
            .field("drivers", &self.driver_names().collect::<Vec<_>>())
            .field("async_drivers", &self.async_drivers)
            .finish()
    }
}

impl Registry for SoftwareRegistry {
    fn alloc_skcipher(&self, name: &str) -> Result<Box<dyn Skcipher>> {
        let result = match self.find(name, Kind::Skcipher).map(|e| (e, &e.constructor)) {
            Some((entry, Constructor::Skcipher(new))) => Ok(new(self.entry_info(entry))),
            _ => match self.template(name, Kind::Skcipher) {
                Some((tmpl, inner)) => self.skcipher_instance(tmpl, inner),
                None => Err(Error::not_found(name)),
            },
        };
        Self::traced(name, result)
    }

    fn alloc_aead(&self, name: &str) -> Result<Box<dyn Aead>> {
        let result = match self.find(name, Kind::Aead).map(|e| (e, &e.constructor)) {
            Some((entry, Constructor::Aead(new))) => Ok(new(self.entry_info(entry))),
            _ => Err(Error::not_found(name)),
        };
        Self::traced(name, result)
    }

    fn alloc_shash(&self, name: &str) -> Result<Box<dyn Shash>> {
        let result = match self.find(name, Kind::Shash).map(|e| (e, &e.constructor)) {
            Some((entry, Constructor::Shash(new))) => Ok(new(self.entry_info(entry))),
            _ => match self.template(name, Kind::Shash) {
                Some((tmpl, inner)) => self.shash_instance(tmpl, inner),
                None => Err(Error::not_found(name)),
            },
        };
        Self::traced(name, result)
    }

    fn alloc_rng(&self, name: &str) -> Result<Box<dyn Rng>> {
        let result = match self.find(name, Kind::Rng).map(|e| (e, &e.constructor)) {
            Some((entry, Constructor::Rng(new))) => Ok(new(self.entry_info(entry))),
            _ => Err(Error::not_found(name)),
        };
        Self::traced(name, result)
    }
}

/// Builder for [`SoftwareRegistry`]
#[derive(Debug, Default, Clone)]
pub struct SoftwareRegistryBuilder {
    without: HashSet<String>,
    async_drivers: HashSet<String>,
}

impl SoftwareRegistryBuilder {
    /// Leave a driver out of the registry
    pub fn without_driver(mut self, driver: impl Into<String>) -> Self {
        self.without.insert(driver.into());
        self
    }

    /// Report a driver, or a template instance driver name, as asynchronous
    pub fn mark_async(mut self, driver: impl Into<String>) -> Self {
        self.async_drivers.insert(driver.into());
        self
    }

    /// Finish the registry
    pub fn build(self) -> SoftwareRegistry {
        let drivers = DRIVERS
            .iter()
            .filter(|e| !self.without.contains(e.driver))
            .collect();
        SoftwareRegistry { drivers, async_drivers: self.async_drivers }
    }
}
