//! Cross-method agreement on the reference contract
//! `S = K = 100, T = 1, r = 5%, σ = 20%`.

use ameropt::prelude::*;
use approx::assert_abs_diff_eq;

const REFERENCE_PUT: Real = 6.09;

fn reference(option_type: OptionType, exercise: ExerciseType) -> VanillaOption {
    VanillaOption::new(100.0, 100.0, 1.0, 0.05, 0.2, option_type, exercise).unwrap()
}

fn converged_prices(option: &VanillaOption) -> [(&'static str, Real); 3] {
    let lsm = LsmParams {
        paths: 50_000,
        ..LsmParams::default()
    };
    let grid = FdGridSize::new(200, 200);
    [
        ("binomial", BinomialEngine.price(option, &BinomialParams::new(500)).unwrap()),
        ("crank-nicolson", FdCrankNicolsonEngine.price(option, &grid).unwrap()),
        ("mc-lsm", MonteCarloLsmEngine.price(option, &lsm).unwrap()),
    ]
}

#[test]
fn american_put_methods_agree() {
    let put = reference(OptionType::Put, ExerciseType::American);
    let prices = converged_prices(&put);
    for (engine, price) in prices {
        assert!(
            (price - REFERENCE_PUT).abs() < 0.02 * REFERENCE_PUT,
            "{engine}: {price:.4}"
        );
    }
    for (a, pa) in prices {
        for (b, pb) in prices {
            assert!((pa - pb).abs() < 0.02 * REFERENCE_PUT, "{a} {pa:.4} vs {b} {pb:.4}");
        }
    }
}

#[test]
fn every_default_resolution_is_close() {
    let put = reference(OptionType::Put, ExerciseType::American);
    let prices = [
        BinomialEngine.price(&put, &BinomialEngine.default_resolution()).unwrap(),
        FdExplicitEngine.price(&put, &FdExplicitEngine.default_resolution()).unwrap(),
        FdImplicitEngine.price(&put, &FdImplicitEngine.default_resolution()).unwrap(),
        FdCrankNicolsonEngine.price(&put, &FdCrankNicolsonEngine.default_resolution()).unwrap(),
        MonteCarloLsmEngine.price(&put, &MonteCarloLsmEngine.default_resolution()).unwrap(),
    ];
    for price in prices {
        assert!((price - REFERENCE_PUT).abs() < 0.35, "{price:.4}");
    }
}

#[test]
fn analytic_put_call_parity() {
    let call = reference(OptionType::Call, ExerciseType::European);
    let put = reference(OptionType::Put, ExerciseType::European);
    let c = call.npv(&AnalyticEuropeanEngine, &()).unwrap();
    let p = put.npv(&AnalyticEuropeanEngine, &()).unwrap();
    assert_abs_diff_eq!(c - p, 100.0 - 100.0 * (-0.05_f64).exp(), epsilon = 1e-10);
}

#[test]
fn american_call_matches_european_call() {
    let am = reference(OptionType::Call, ExerciseType::American);
    let eu = reference(OptionType::Call, ExerciseType::European);
    let bs = eu.npv(&AnalyticEuropeanEngine, &()).unwrap();

    let res = BinomialParams::new(500);
    let binomial = BinomialEngine.price(&am, &res).unwrap();
    assert_abs_diff_eq!(binomial, BinomialEngine.price(&eu, &res).unwrap(), epsilon = 1e-9);
    assert_abs_diff_eq!(binomial, bs, epsilon = 0.02);

    let grid = FdGridSize::new(200, 200);
    let cn_am = FdCrankNicolsonEngine.price(&am, &grid).unwrap();
    let cn_eu = FdCrankNicolsonEngine.price(&eu, &grid).unwrap();
    assert_abs_diff_eq!(cn_am, cn_eu, epsilon = 0.02);
    assert_abs_diff_eq!(cn_am, bs, epsilon = 0.05);

    // American calls are accepted by the reference pricer.
    assert_abs_diff_eq!(am.npv(&AnalyticEuropeanEngine, &()).unwrap(), bs);
}

#[test]
fn deep_in_the_money_american_put_beats_european() {
    let put = reference(OptionType::Put, ExerciseType::American).with_spot(70.0).unwrap();
    let european = put
        .with_exercise(ExerciseType::European)
        .npv(&AnalyticEuropeanEngine, &())
        .unwrap();
    let lsm = LsmParams {
        paths: 5_000,
        ..LsmParams::default()
    };
    let prices = [
        ("binomial", BinomialEngine.price(&put, &BinomialParams::new(300)).unwrap()),
        ("explicit", FdExplicitEngine.price(&put, &FdExplicitEngine.default_resolution()).unwrap()),
        ("implicit", FdImplicitEngine.price(&put, &FdGridSize::default()).unwrap()),
        ("crank-nicolson", FdCrankNicolsonEngine.price(&put, &FdGridSize::default()).unwrap()),
        ("mc-lsm", MonteCarloLsmEngine.price(&put, &lsm).unwrap()),
    ];
    for (engine, price) in prices {
        assert!(price >= european, "{engine}: {price:.4} < {european:.4}");
        assert!(price >= 30.0 - 1e-9, "{engine}: {price:.4}");
    }
}

#[test]
fn greeks_agree_between_lattice_and_pde() {
    let put = reference(OptionType::Put, ExerciseType::American);
    let lattice = compute_all_greeks(&BinomialEngine, &put, &BinomialParams::new(500)).unwrap();
    let bumps = GreekBumps {
        spot: 1.0,
        ..GreekBumps::default()
    };
    let pde =
        compute_all_greeks_with(&FdCrankNicolsonEngine, &put, &FdGridSize::new(200, 200), &bumps)
            .unwrap();
    assert_abs_diff_eq!(lattice.delta, pde.delta, epsilon = 0.02);
    assert!(lattice.delta < 0.0 && pde.delta < 0.0);
    assert!(lattice.vega > 0.0 && pde.vega > 0.0);
}
