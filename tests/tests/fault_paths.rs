//! Every way an implementation can fail its self-test, driven through the
//! full table with one fault injected at a time

use fips140_algorithms::SoftwareLibrary;
use fips140_api::CryptoLibrary;
use fips140_selftest::{Operation, SelftestConfig, SelftestError, SelftestFailure};
use fips140_tests::faults::{Fault, FaultyLibrary, FaultyRegistry, LibraryFault};
use fips140_tests::logs::capture;
use fips140_tests::run_table;

fn run_faulty(registry: &FaultyRegistry) -> SelftestFailure {
    run_with_library(registry, &SoftwareLibrary::new())
}

fn run_with_library(registry: &FaultyRegistry, library: &dyn CryptoLibrary) -> SelftestFailure {
    run_table(registry, library, &SelftestConfig::new()).unwrap_err()
}

#[test]
fn corrupted_cipher_output_is_a_bad_message() {
    let registry = FaultyRegistry::new().with_fault("cbc-aes-rustcrypto", Fault::CorruptOutput);
    let failure = run_faulty(&registry);

    assert_eq!(failure.algorithm, "cbc(aes)");
    assert_eq!(failure.implementation.as_deref(), Some("cbc-aes-rustcrypto"));
    assert!(matches!(
        failure.error,
        SelftestError::BadMessage { operation: Operation::Encryption, .. }
    ));
    // set_key, then the encryption that was caught
    assert_eq!(registry.calls("cbc-aes-rustcrypto"), 2);
}

#[test]
fn failure_stops_the_run() {
    let registry = FaultyRegistry::new().with_fault("cbc-aes-rustcrypto", Fault::CorruptOutput);
    run_faulty(&registry);

    let requests = registry.requests();
    assert_eq!(requests.last().map(String::as_str), Some("cbc-aes-rustcrypto"));
    assert!(!requests.iter().any(|r| r == "cbc-aes-neon"));
    assert!(!requests.iter().any(|r| r.starts_with("ctr")));
}

#[test]
fn allocation_error_is_fatal() {
    let registry = FaultyRegistry::new().with_fault("gcm-aes-rustcrypto", Fault::Unallocatable);
    let failure = run_faulty(&registry);

    assert_eq!(failure.algorithm, "gcm(aes)");
    assert!(matches!(failure.error, SelftestError::Allocation { .. }));
    assert!(failure.error.to_string().contains("failed to allocate gcm-aes-rustcrypto tfm"));
}

#[test]
fn missing_implementation_is_not_a_failure() {
    let registry = FaultyRegistry::new()
        .with_fault("sha1-generic", Fault::Missing)
        .with_fault("ecb(aes-generic)", Fault::Missing);
    let report = run_table(&registry, &SoftwareLibrary::new(), &SelftestConfig::new()).unwrap();
    assert_eq!(report.passed, 10);
}

#[test]
fn async_implementation_is_rejected() {
    let registry = FaultyRegistry::new().with_fault("sha1-generic", Fault::Async);
    let failure = run_faulty(&registry);

    match failure.error {
        SelftestError::AsyncImplementation { name, driver } => {
            assert_eq!(name, "sha1");
            assert_eq!(driver, "sha1-generic");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn wrong_iv_size_is_a_config_mismatch() {
    let registry = FaultyRegistry::new().with_fault("ctr-aes-rustcrypto", Fault::IvSize(8));
    let failure = run_faulty(&registry);

    assert!(matches!(
        failure.error,
        SelftestError::ConfigMismatch { parameter: "IV", expected: 16, actual: 8, .. }
    ));
    // neither keyed nor run
    assert_eq!(registry.calls("ctr-aes-rustcrypto"), 0);
}

#[test]
fn wrong_aead_iv_size_is_a_config_mismatch() {
    let registry = FaultyRegistry::new().with_fault("gcm-aes-rustcrypto", Fault::IvSize(16));
    let failure = run_faulty(&registry);

    assert!(matches!(
        failure.error,
        SelftestError::ConfigMismatch { parameter: "IV", expected: 12, actual: 16, .. }
    ));
    assert_eq!(registry.calls("gcm-aes-rustcrypto"), 0);
}

#[test]
fn wrong_digest_size_is_a_config_mismatch() {
    let registry = FaultyRegistry::new().with_fault("sha512-generic", Fault::DigestSize(48));
    let failure = run_faulty(&registry);

    assert_eq!(failure.algorithm, "sha512");
    assert!(matches!(
        failure.error,
        SelftestError::ConfigMismatch { parameter: "digest", expected: 64, actual: 48, .. }
    ));
    assert_eq!(registry.calls("sha512-generic"), 0);
}

#[test]
fn rejected_key_is_a_key_setup_failure() {
    let registry = FaultyRegistry::new().with_fault("cmac(aes-generic)", Fault::RejectKey);
    let failure = run_faulty(&registry);

    assert_eq!(failure.algorithm, "cmac(aes)");
    assert!(matches!(failure.error, SelftestError::KeySetup { .. }));
}

#[test]
fn corrupted_aead_output() {
    let registry = FaultyRegistry::new().with_fault("gcm-aes-rustcrypto", Fault::CorruptOutput);
    let failure = run_faulty(&registry);

    assert!(matches!(
        failure.error,
        SelftestError::BadMessage { operation: Operation::Encryption, .. }
    ));
}

#[test]
fn hmac_failure_names_only_the_algorithm() {
    let registry = FaultyRegistry::new().with_fault("hmac(sha256)", Fault::CorruptOutput);
    let failure = run_faulty(&registry);

    assert_eq!(failure.algorithm, "hmac(sha256)");
    assert_eq!(failure.implementation, None);
    assert!(matches!(
        failure.error,
        SelftestError::BadMessage { operation: Operation::Digest, .. }
    ));
}

#[test]
fn corrupted_drbg_output() {
    let registry = FaultyRegistry::new().with_fault("drbg_pr_hmac_sha256", Fault::CorruptOutput);
    let failure = run_faulty(&registry);

    assert_eq!(failure.algorithm, "drbg_pr_hmac_sha256");
    assert!(matches!(
        failure.error,
        SelftestError::BadMessage { operation: Operation::GetBytes, .. }
    ));
}

#[test]
fn library_key_expansion_failure() {
    let failure = run_with_library(&FaultyRegistry::new(), &FaultyLibrary::new(LibraryFault::RejectKey));

    assert_eq!(failure.algorithm, "aes");
    assert_eq!(failure.implementation.as_deref(), Some("aes-lib"));
    assert!(matches!(failure.error, SelftestError::KeySetup { .. }));
}

#[test]
fn library_digest_corruption() {
    let registry = FaultyRegistry::new();
    let failure = run_with_library(&registry, &FaultyLibrary::new(LibraryFault::CorruptDigest));

    assert_eq!(failure.algorithm, "sha256");
    assert_eq!(failure.implementation.as_deref(), Some("sha256-lib"));
    assert!(matches!(
        failure.error,
        SelftestError::BadMessage { operation: Operation::Digest, .. }
    ));
    // every registry implementation listed before the library test ran
    assert!(registry.requests().iter().any(|r| r == "sha256-ce"));
    assert!(!registry.requests().iter().any(|r| r == "sha512-generic"));
}

#[test]
fn failure_is_logged_at_emergency_level() {
    let registry = FaultyRegistry::new().with_fault("cbc-aes-rustcrypto", Fault::CorruptOutput);
    let (failure, logs) = capture(|| run_faulty(&registry));

    let emerg = logs.lines_with("fips140::emerg");
    assert_eq!(emerg.len(), 1);
    assert!(emerg[0].contains("self-tests failed for algorithm cbc(aes), implementation cbc-aes-rustcrypto"));
    assert!(emerg[0].contains(&failure.error.to_string()));
    assert!(!logs.lines_with("wrong result from cbc-aes-rustcrypto encryption").is_empty());
    assert!(logs.lines_with("all self-tests passed").is_empty());
}
