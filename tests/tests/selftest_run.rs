//! Full runs of the built-in table against the software providers

use fips140_algorithms::{SoftwareLibrary, SoftwareRegistry};
use fips140_selftest::{
    run_selftests, run_selftests_with, RunState, Runner, SelftestConfig, SelftestContext,
    SelftestReport, FIPS140_SELFTESTS, KnownAnswerExecutor,
};
use fips140_tests::faults::FaultyRegistry;
use fips140_tests::logs::capture;
use fips140_tests::run_table;

#[test]
fn built_in_table_passes() {
    let registry = SoftwareRegistry::new();
    let library = SoftwareLibrary::new();
    let config = SelftestConfig::new();
    let ctx = SelftestContext::new(&registry, &library, &config);

    // CPU-specific drivers and the standalone cts/xts drivers are skipped
    let report = run_selftests_with(&ctx).unwrap();
    assert_eq!(report, SelftestReport { passed: 12, skipped: 26 });
    assert!(run_selftests(&ctx));
}

#[test]
fn facade_entry_point_passes() {
    assert!(fips140::run_selftests());
}

#[test]
fn runner_reaches_halted_ok() {
    let registry = SoftwareRegistry::new();
    let library = SoftwareLibrary::new();
    let config = SelftestConfig::new();
    let ctx = SelftestContext::new(&registry, &library, &config);

    let mut runner = Runner::new(FIPS140_SELFTESTS, &KnownAnswerExecutor);
    assert_eq!(runner.state(), RunState::Running);
    runner.run(&ctx).unwrap();
    assert_eq!(runner.state(), RunState::HaltedOk);
    assert!(runner.state().is_halted());
}

#[test]
fn every_listed_implementation_is_requested_in_table_order() {
    let registry = FaultyRegistry::new();
    let library = SoftwareLibrary::new();
    run_table(&registry, &library, &SelftestConfig::new()).unwrap();

    let expected: Vec<String> = FIPS140_SELFTESTS
        .iter()
        .filter(|t| t.case.uses_registry())
        .flat_map(|t| t.implementations())
        .map(str::to_owned)
        .collect();
    assert_eq!(registry.requests(), expected);
}

#[test]
fn withheld_standalone_drivers_are_skipped() {
    let inner = SoftwareRegistry::builder()
        .without_driver("cbc-aes-rustcrypto")
        .without_driver("ctr-aes-rustcrypto")
        .without_driver("gcm-aes-rustcrypto")
        .build();
    let library = SoftwareLibrary::new();
    let report = run_table(&inner, &library, &SelftestConfig::new()).unwrap();
    assert_eq!(report, SelftestReport { passed: 9, skipped: 29 });
}

#[test]
fn run_logs_start_and_success() {
    let registry = SoftwareRegistry::new();
    let library = SoftwareLibrary::new();
    let (result, logs) = capture(|| run_table(&registry, &library, &SelftestConfig::new()));

    assert!(result.is_ok());
    assert_eq!(logs.lines_with("running self-tests").len(), 1);
    assert_eq!(logs.lines_with("all self-tests passed").len(), 1);
    assert!(!logs
        .lines_with("cbc-aes-ce is unavailable (no CPU support?), skipping testing it")
        .is_empty());
    assert!(logs.lines_with("fips140::emerg").is_empty());
}
