//! Extra known-answer vectors from JSON, run through the same executors

use fips140_algorithms::{SoftwareLibrary, SoftwareRegistry};
use fips140_selftest::{KnownAnswerExecutor, SelftestConfig, SelftestError};
use fips140_tests::faults::{Fault, FaultyRegistry};
use fips140_tests::kat::{load_kat_file, KatError};
use fips140_tests::run_with;

#[test]
fn json_vectors_pass_on_software_providers() {
    let table = load_kat_file("kat.json").expect("Failed to load kat.json");
    assert!(table.len() >= 12);
    for test in &table {
        test.validate().unwrap_or_else(|e| panic!("{}: {e}", test.alg));
    }

    let report = run_with(
        &table,
        &KnownAnswerExecutor,
        &SoftwareRegistry::new(),
        &SoftwareLibrary::new(),
        &SelftestConfig::new(),
    )
    .unwrap();
    assert_eq!(report.skipped, 0);
    assert_eq!(report.passed, table.iter().map(|t| t.implementations().count()).sum::<usize>());
}

#[test]
fn json_vectors_catch_a_faulty_template() {
    let table = load_kat_file("kat.json").unwrap();
    let registry = FaultyRegistry::new().with_fault("ctr(aes-generic)", Fault::CorruptOutput);

    let failure = run_with(
        &table,
        &KnownAnswerExecutor,
        &registry,
        &SoftwareLibrary::new(),
        &SelftestConfig::new(),
    )
    .unwrap_err();
    assert_eq!(failure.algorithm, "ctr(aes)");
    assert!(matches!(failure.error, SelftestError::BadMessage { .. }));
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(matches!(load_kat_file("absent.json"), Err(KatError::Io { .. })));
}
