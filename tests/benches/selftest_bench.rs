use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fips140_algorithms::{SoftwareLibrary, SoftwareRegistry};
use fips140_selftest::{
    Executor, KnownAnswerExecutor, SelftestConfig, SelftestContext, FIPS140_SELFTESTS,
};

fn bench_full_run(c: &mut Criterion) {
    let registry = SoftwareRegistry::new();
    let library = SoftwareLibrary::new();
    let config = SelftestConfig::new();
    let ctx = SelftestContext::new(&registry, &library, &config);

    c.bench_function("run_selftests", |b| {
        b.iter(|| assert!(fips140_selftest::run_selftests(&ctx)));
    });
}

fn bench_descriptors(c: &mut Criterion) {
    let registry = SoftwareRegistry::new();
    let library = SoftwareLibrary::new();
    let config = SelftestConfig::new();
    let ctx = SelftestContext::new(&registry, &library, &config);

    let mut group = c.benchmark_group("descriptor");
    for test in FIPS140_SELFTESTS {
        // first listed implementation; CPU-specific ones only measure the skip
        let Some(implementation) = test.implementations().next() else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new(test.alg, implementation), test, |b, test| {
            b.iter(|| KnownAnswerExecutor.execute(test, implementation, &ctx).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_full_run, bench_descriptors);
criterion_main!(benches);
