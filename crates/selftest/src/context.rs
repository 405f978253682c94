//! What a self-test run executes against

use std::fmt;

use fips140_api::{CryptoLibrary, Registry};

use crate::config::SelftestConfig;

/// Collaborators borrowed for one run
#[derive(Clone, Copy)]
pub struct SelftestContext<'a> {
    /// Where registry-based tests allocate their transforms
    pub registry: &'a dyn Registry,
    /// Direct-call primitives for the library tests
    pub library: &'a dyn CryptoLibrary,
    /// Run configuration
    pub config: &'a SelftestConfig,
}

impl<'a> SelftestContext<'a> {
    /// Bundle the collaborators
    pub fn new(
        registry: &'a dyn Registry,
        library: &'a dyn CryptoLibrary,
        config: &'a SelftestConfig,
    ) -> Self {
        Self { registry, library, config }
    }
}

impl fmt::Debug for SelftestContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelftestContext")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
