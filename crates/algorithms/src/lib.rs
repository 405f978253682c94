//! Software cryptographic providers for the fips140 harness
//!
//! This crate implements the provider interface from `fips140-api` in pure
//! Rust. Block cipher modes, CMAC, HMAC and HMAC_DRBG are implemented here as
//! templates over any registered block cipher or hash; standalone drivers wrap
//! the RustCrypto `cbc`, `ctr` and `aes-gcm` crates.
//!
//! # Registry
//!
//! [`SoftwareRegistry`] resolves names the way a kernel crypto registry does:
//! exact driver name first, then algorithm name by priority, then template
//! instantiation such as `cbc(aes-generic)` or `hmac(sha256)`.
//!
//! ```
//! use fips140_algorithms::SoftwareRegistry;
//! use fips140_api::Registry;
//!
//! let registry = SoftwareRegistry::new();
//! let hash = registry.alloc_shash("sha256").unwrap();
//! assert_eq!(hash.info().driver_name(), "sha256-generic");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher and modes of operation
pub mod block;
pub use block::{AesGeneric, BlockCipher};
pub use block::modes::{Cbc, Cts, Ctr, Ecb, Xts};

// Hash drivers
pub mod hash;
pub use hash::HashDriver;

// MAC templates
pub mod mac;
pub use mac::{Cmac, Hmac};

// Standalone drivers backed by RustCrypto mode crates
pub mod standalone;

// Deterministic random bit generators
pub mod drbg;
pub use drbg::{DrbgHash, HmacDrbg};

// Direct-call library interface
pub mod library;
pub use library::SoftwareLibrary;

// Name-keyed registry
pub mod registry;
pub use registry::{SoftwareRegistry, SoftwareRegistryBuilder};
