//! Built-in vectors whose listed implementations are all CPU-specific, run
//! against the software templates instead

use fips140_algorithms::{SoftwareLibrary, SoftwareRegistry};
use fips140_selftest::{FipsTest, KnownAnswerExecutor, SelftestConfig, FIPS140_SELFTESTS};
use fips140_tests::run_with;

fn retarget(alg: &str, impls: &'static [&'static str]) -> FipsTest {
    let test = FIPS140_SELFTESTS
        .iter()
        .find(|t| t.alg == alg)
        .unwrap_or_else(|| panic!("no descriptor for {alg}"));
    FipsTest { impls, ..*test }
}

#[test]
fn cts_and_xts_vectors_pass_on_templates() {
    let table = [
        retarget("cts(cbc(aes))", &["cts(cbc(aes-generic))", "cts(cbc(aes))"]),
        retarget("xts(aes)", &["xts(aes-generic)"]),
        retarget("cmac(aes)", &["cmac(aes)"]),
        retarget("ecb(aes)", &["ecb(aes)"]),
    ];
    let report = run_with(
        &table,
        &KnownAnswerExecutor,
        &SoftwareRegistry::new(),
        &SoftwareLibrary::new(),
        &SelftestConfig::new(),
    )
    .unwrap();
    assert_eq!(report.passed, 5);
    assert_eq!(report.skipped, 0);
}
