//! Run configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Environment variable read by [`SelftestConfig::from_env`]
pub const BROKEN_ALG_ENV: &str = "FIPS140_BROKEN_ALG";

/// Configuration for one self-test run
///
/// With the `error-injection` feature the configuration can name one
/// implementation whose results are corrupted before comparison, so that the
/// failure path can be exercised on a working system. Without the feature
/// there is nothing to configure and results are never touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelftestConfig {
    #[cfg(feature = "error-injection")]
    #[cfg_attr(feature = "serde", serde(default))]
    broken_impl: Option<String>,
}

impl SelftestConfig {
    /// Configuration with nothing broken
    pub fn new() -> Self {
        Self::default()
    }

    /// Corrupt every result produced by `implementation`
    #[cfg(feature = "error-injection")]
    pub fn with_broken_impl(mut self, implementation: impl Into<String>) -> Self {
        self.broken_impl = Some(implementation.into());
        self
    }

    /// The implementation whose results are corrupted, if any
    #[cfg(feature = "error-injection")]
    pub fn broken_impl(&self) -> Option<&str> {
        self.broken_impl.as_deref()
    }

    /// Whether results from `implementation` are to be corrupted
    pub fn is_broken(&self, implementation: &str) -> bool {
        #[cfg(feature = "error-injection")]
        {
            self.broken_impl.as_deref() == Some(implementation)
        }
        #[cfg(not(feature = "error-injection"))]
        {
            let _ = implementation;
            false
        }
    }

    /// Read the configuration from the environment
    ///
    /// `FIPS140_BROKEN_ALG` names the implementation to break. It is ignored,
    /// with a warning, when error injection is compiled out.
    pub fn from_env() -> Self {
        let broken = std::env::var(BROKEN_ALG_ENV).ok().filter(|v| !v.is_empty());

        #[cfg(feature = "error-injection")]
        {
            if let Some(name) = &broken {
                tracing::warn!(implementation = %name, "error injection enabled");
            }
            Self { broken_impl: broken }
        }
        #[cfg(not(feature = "error-injection"))]
        {
            if broken.is_some() {
                tracing::warn!("{BROKEN_ALG_ENV} is set but error injection is not compiled in");
            }
            Self::default()
        }
    }
}
