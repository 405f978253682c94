//! Configuration taken from the environment
//!
//! Kept in its own test binary since it sets a process-wide variable.

use fips140_selftest::config::BROKEN_ALG_ENV;
use fips140_selftest::SelftestConfig;

#[test]
fn broken_implementation_from_environment() {
    std::env::set_var(BROKEN_ALG_ENV, "hmac(sha256)");
    let config = SelftestConfig::from_env();
    assert_eq!(config.broken_impl(), Some("hmac(sha256)"));
    assert!(!fips140::run_selftests());

    std::env::set_var(BROKEN_ALG_ENV, "");
    assert_eq!(SelftestConfig::from_env(), SelftestConfig::new());
    assert!(fips140::run_selftests());

    std::env::remove_var(BROKEN_ALG_ENV);
}
