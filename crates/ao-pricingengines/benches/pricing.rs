use ao_instruments::{ExerciseType, OptionType, PricingEngine, VanillaOption};
use ao_pricingengines::{
    compute_all_greeks, AnalyticEuropeanEngine, BinomialEngine, BinomialParams,
    FdCrankNicolsonEngine, FdExplicitEngine, FdGridSize, FdImplicitEngine, LsmParams,
    MonteCarloLsmEngine,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn atm_put() -> VanillaOption {
    VanillaOption::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put, ExerciseType::American)
        .expect("benchmark option should be valid")
}

fn bench_analytic(c: &mut Criterion) {
    let option = atm_put().with_exercise(ExerciseType::European);
    c.bench_function("analytic_european_put", |b| {
        b.iter(|| {
            AnalyticEuropeanEngine
                .price(black_box(&option), &())
                .expect("pricing should succeed")
        })
    });
}

fn bench_binomial_steps(c: &mut Criterion) {
    let option = atm_put();
    let mut group = c.benchmark_group("binomial_american_put");
    for steps in [100usize, 500, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            let params = BinomialParams::new(steps);
            b.iter(|| {
                BinomialEngine
                    .price(black_box(&option), &params)
                    .expect("pricing should succeed")
            })
        });
    }
    group.finish();
}

fn bench_finite_differences(c: &mut Criterion) {
    let option = atm_put();
    let mut group = c.benchmark_group("fd_american_put");
    group.bench_function("explicit_50x50", |b| {
        b.iter(|| {
            FdExplicitEngine
                .price(black_box(&option), &FdGridSize::new(50, 50))
                .expect("pricing should succeed")
        })
    });
    group.bench_function("implicit_100x100", |b| {
        b.iter(|| {
            FdImplicitEngine
                .price(black_box(&option), &FdGridSize::default())
                .expect("pricing should succeed")
        })
    });
    group.bench_function("crank_nicolson_100x100", |b| {
        b.iter(|| {
            FdCrankNicolsonEngine
                .price(black_box(&option), &FdGridSize::default())
                .expect("pricing should succeed")
        })
    });
    group.finish();
}

fn bench_lsm(c: &mut Criterion) {
    let option = atm_put();
    let mut group = c.benchmark_group("lsm_american_put");
    group.sample_size(10);
    for paths in [1_000usize, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(paths), &paths, |b, &paths| {
            let params = LsmParams {
                paths,
                ..LsmParams::default()
            };
            b.iter(|| {
                MonteCarloLsmEngine
                    .price(black_box(&option), &params)
                    .expect("pricing should succeed")
            })
        });
    }
    group.finish();
}

fn bench_greeks(c: &mut Criterion) {
    let option = atm_put();
    c.bench_function("binomial_greeks_200", |b| {
        b.iter(|| {
            compute_all_greeks(&BinomialEngine, black_box(&option), &BinomialParams::new(200))
                .expect("greeks should succeed")
        })
    });
}

criterion_group!(
    benches,
    bench_analytic,
    bench_binomial_steps,
    bench_finite_differences,
    bench_lsm,
    bench_greeks
);
criterion_main!(benches);
