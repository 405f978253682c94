//! Table orchestration

use std::fmt;

use crate::context::SelftestContext;
use crate::descriptor::FipsTest;
use crate::error::SelftestError;
use crate::executors::{Executor, KnownAnswerExecutor, Outcome};
use crate::table::FIPS140_SELFTESTS;

/// Where a run stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Descriptors are being executed
    Running,
    /// Every trial passed or was skipped
    HaltedOk,
    /// A trial failed and the rest of the table was not run
    HaltedFailed,
}

impl RunState {
    /// Whether the run has finished, successfully or not
    pub fn is_halted(self) -> bool {
        self != RunState::Running
    }
}

/// Counts from a run that halted OK
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelftestReport {
    /// Trials whose answers matched
    pub passed: usize,
    /// Trials whose implementation was unavailable
    pub skipped: usize,
}

impl SelftestReport {
    /// Total trials executed
    pub fn trials(&self) -> usize {
        self.passed + self.skipped
    }
}

/// The first failure of a run
#[derive(Debug)]
pub struct SelftestFailure {
    /// Algorithm of the failing descriptor
    pub algorithm: &'static str,
    /// Implementation, when the descriptor lists them explicitly
    pub implementation: Option<String>,
    /// What went wrong
    pub error: SelftestError,
}

impl fmt::Display for SelftestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "self-tests failed for algorithm {}", self.algorithm)?;
        if let Some(implementation) = &self.implementation {
            write!(f, ", implementation {implementation}")?;
        }
        write!(f, ": {}", self.error)
    }
}

impl std::error::Error for SelftestFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Runs a table of descriptors through an executor, stopping at the first
/// failure
///
/// Each call to [`Runner::run`] is a fresh run over the whole table; the
/// state afterwards is one of the halted states.
pub struct Runner<'t> {
    tests: &'t [FipsTest],
    executor: &'t dyn Executor,
    state: RunState,
}

impl<'t> Runner<'t> {
    /// A runner over `tests`
    pub fn new(tests: &'t [FipsTest], executor: &'t dyn Executor) -> Self {
        Self {
            tests,
            executor,
            state: RunState::Running,
        }
    }

    /// Current state
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Execute every descriptor in table order
    pub fn run(&mut self, ctx: &SelftestContext<'_>) -> Result<SelftestReport, SelftestFailure> {
        self.state = RunState::Running;
        tracing::info!("running self-tests");

        let mut report = SelftestReport::default();
        for test in self.tests {
            for implementation in test.implementations() {
                match self.executor.execute(test, implementation, ctx) {
                    Ok(Outcome::Passed) => report.passed += 1,
                    Ok(Outcome::Skipped) => report.skipped += 1,
                    Err(error) => {
                        let failure = SelftestFailure {
                            algorithm: test.alg,
                            implementation: (!test.impls.is_empty()).then(|| implementation.to_owned()),
                            error,
                        };
                        tracing::error!(target: "fips140::emerg", "{failure}");
                        self.state = RunState::HaltedFailed;
                        return Err(failure);
                    }
                }
            }
        }

        tracing::info!(passed = report.passed, skipped = report.skipped, "all self-tests passed");
        self.state = RunState::HaltedOk;
        Ok(report)
    }
}

impl fmt::Debug for Runner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runner")
            .field("tests", &self.tests.len())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Run the built-in table with the known-answer executor
pub fn run_selftests_with(ctx: &SelftestContext<'_>) -> Result<SelftestReport, SelftestFailure> {
    Runner::new(FIPS140_SELFTESTS, &KnownAnswerExecutor).run(ctx)
}

/// Run the built-in table and report only whether it passed
pub fn run_selftests(ctx: &SelftestContext<'_>) -> bool {
    run_selftests_with(ctx).is_ok()
}
