//! Integration test support for the fips140 self-tests
//!
//! Fault-injecting wrappers around the software providers, extra known-answer
//! vectors loaded from JSON, and log capture for asserting on what a run
//! reports.

pub mod faults;
pub mod kat;
pub mod logs;

use fips140_api::{CryptoLibrary, Registry};
use fips140_selftest::{
    Executor, Runner, SelftestConfig, SelftestContext, SelftestFailure, SelftestReport,
    FIPS140_SELFTESTS, KnownAnswerExecutor,
};

/// Run the built-in table against `registry` and `library`
pub fn run_table(
    registry: &dyn Registry,
    library: &dyn CryptoLibrary,
    config: &SelftestConfig,
) -> Result<SelftestReport, SelftestFailure> {
    run_with(FIPS140_SELFTESTS, &KnownAnswerExecutor, registry, library, config)
}

/// Run `tests` through `executor`
pub fn run_with(
    tests: &[fips140_selftest::FipsTest],
    executor: &dyn Executor,
    registry: &dyn Registry,
    library: &dyn CryptoLibrary,
    config: &SelftestConfig,
) -> Result<SelftestReport, SelftestFailure> {
    let ctx = SelftestContext::new(registry, library, config);
    Runner::new(tests, executor).run(&ctx)
}
