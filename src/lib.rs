//! # fips140
//!
//! Known-answer self-tests for the cryptographic implementations a FIPS 140
//! module ships, meant to run once at load time before any of them is used.
//!
//! ## Usage
//!
//! ```
//! if !fips140::run_selftests() {
//!     // refuse to initialize
//! }
//! ```
//!
//! ## Features
//!
//! - `software` (default): pure-Rust providers and a name-keyed registry to
//!   test against
//! - `error-injection`: corrupt the results of one configured implementation
//!   so the failure path can be exercised
//! - `serde`: serialization of configuration and metadata types
//! - `full`: all of the above
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`fips140-api`]: provider registry and transform traits
//! - [`fips140-internal`]: constant-time helpers
//! - [`fips140-selftest`]: the test table, executors and runner
//! - [`fips140-algorithms`]: software providers

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use fips140_api as api;
pub use fips140_internal as internal;
pub use fips140_selftest as selftest;

// Feature-gated re-exports
#[cfg(feature = "software")]
pub use fips140_algorithms as algorithms;

pub use fips140_selftest::{run_selftests_with, SelftestConfig, SelftestContext, SelftestFailure, SelftestReport};

/// Run every self-test against the software providers
///
/// The configuration comes from the environment, see
/// [`SelftestConfig::from_env`]. Returns `true` when no implementation
/// failed.
#[cfg(feature = "software")]
pub fn run_selftests() -> bool {
    let registry = algorithms::SoftwareRegistry::new();
    let library = algorithms::SoftwareLibrary::new();
    let config = SelftestConfig::from_env();
    tracing::debug!(?config, "self-test configuration");

    let ctx = SelftestContext::new(&registry, &library, &config);
    fips140_selftest::run_selftests(&ctx)
}

/// Common imports for fips140 users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export provider traits
    pub use crate::api::{
        Aead,
        AesBlockCipher,
        Algorithm,
        CryptoLibrary,
        Registry,
        Rng,
        Shash,
        Skcipher,
    };

    // Re-export harness types
    pub use crate::selftest::{
        Executor,
        FipsTest,
        KnownAnswerExecutor,
        Outcome,
        RunState,
        Runner,
        SelftestConfig,
        SelftestContext,
        SelftestError,
        SelftestFailure,
        SelftestReport,
    };

    #[cfg(feature = "software")]
    pub use crate::algorithms::{SoftwareLibrary, SoftwareRegistry};
}
