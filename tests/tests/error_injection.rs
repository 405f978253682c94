//! Results corrupted through the configuration rather than a faulty provider

use fips140_algorithms::{SoftwareLibrary, SoftwareRegistry};
use fips140_selftest::{
    Executor, KnownAnswerExecutor, Operation, Outcome, SelftestConfig, SelftestContext, SelftestError,
    FIPS140_SELFTESTS,
};
use fips140_tests::run_table;

fn run(config: &SelftestConfig) -> Result<fips140_selftest::SelftestReport, fips140_selftest::SelftestFailure> {
    run_table(&SoftwareRegistry::new(), &SoftwareLibrary::new(), config)
}

#[test]
fn broken_template_instance_fails_its_descriptor() {
    let config = SelftestConfig::new().with_broken_impl("ecb(aes-generic)");
    let failure = run(&config).unwrap_err();

    assert_eq!(failure.algorithm, "ecb(aes)");
    assert_eq!(failure.implementation.as_deref(), Some("ecb(aes-generic)"));
    assert!(matches!(
        failure.error,
        SelftestError::BadMessage { operation: Operation::Encryption, .. }
    ));
}

#[test]
fn broken_library_implementation() {
    let config = SelftestConfig::new().with_broken_impl("aes-lib");
    let failure = run(&config).unwrap_err();

    assert_eq!(failure.algorithm, "aes");
    assert!(failure.error.is_bad_message());
    assert_eq!(failure.error.implementation(), Some("aes-lib"));
}

#[test]
fn broken_drbg() {
    let config = SelftestConfig::new().with_broken_impl("drbg_pr_hmac_sha256");
    let failure = run(&config).unwrap_err();

    assert!(matches!(
        failure.error,
        SelftestError::BadMessage { operation: Operation::GetBytes, .. }
    ));
}

#[test]
fn breaking_an_absent_implementation_changes_nothing() {
    let config = SelftestConfig::new().with_broken_impl("cbc-aes-ce");
    assert!(run(&config).is_ok());
}

#[test]
fn configuration_deserializes() {
    let config: SelftestConfig = serde_json::from_str(r#"{ "broken_impl": "sha1-generic" }"#).unwrap();
    assert_eq!(config.broken_impl(), Some("sha1-generic"));

    let failure = run(&config).unwrap_err();
    assert_eq!(failure.algorithm, "sha1");

    let config: SelftestConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, SelftestConfig::new());
}

#[test]
fn every_present_implementation_fails_when_broken() {
    let registry = SoftwareRegistry::new();
    let library = SoftwareLibrary::new();
    let mut broken = 0;

    for test in FIPS140_SELFTESTS {
        for imp in test.implementations() {
            let config = SelftestConfig::new().with_broken_impl(imp);
            let ctx = SelftestContext::new(&registry, &library, &config);

            match KnownAnswerExecutor.execute(test, imp, &ctx) {
                Err(err) => {
                    assert!(err.is_bad_message(), "{}/{imp}: {err}", test.alg);
                    assert_eq!(err.implementation(), Some(imp));
                    broken += 1;
                }
                Ok(outcome) => assert_eq!(outcome, Outcome::Skipped, "{}/{imp} passed while broken", test.alg),
            }
        }
    }

    // one per trial that passes on the unmodified registry
    assert_eq!(broken, 12);
}
