//! Known-answer self-tests for FIPS 140 cryptographic implementations
//!
//! The self-tests run a fixed table of descriptors, in order, against every
//! implementation a provider registry can hand out for each algorithm. An
//! implementation that is not available is skipped; any other problem stops
//! the run and is reported as a [`SelftestFailure`] naming the algorithm, the
//! implementation and what went wrong.
//!
//! ```
//! use fips140_algorithms::{SoftwareLibrary, SoftwareRegistry};
//! use fips140_selftest::{run_selftests_with, SelftestConfig, SelftestContext};
//!
//! let registry = SoftwareRegistry::new();
//! let library = SoftwareLibrary::new();
//! let config = SelftestConfig::new();
//! let ctx = SelftestContext::new(&registry, &library, &config);
//!
//! let report = run_selftests_with(&ctx).unwrap();
//! assert!(report.passed > 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod compare;
pub mod config;
pub mod context;
pub mod descriptor;
pub mod error;
pub mod executors;
pub mod resolve;
pub mod runner;
pub mod table;
pub mod vectors;

pub use config::SelftestConfig;
pub use context::SelftestContext;
pub use descriptor::{FipsTest, TestCase};
pub use error::{Operation, Result, SelftestError};
pub use executors::{Executor, KnownAnswerExecutor, Outcome};
pub use runner::{run_selftests, run_selftests_with, RunState, Runner, SelftestFailure, SelftestReport};
pub use table::FIPS140_SELFTESTS;
