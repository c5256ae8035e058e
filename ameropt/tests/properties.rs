//! Randomised no-arbitrage checks across every engine.

use ameropt::prelude::*;
use proptest::prelude::*;

fn market() -> impl Strategy<Value = (Real, Real, Real, Real, Real)> {
    (
        50.0..150.0_f64,
        50.0..150.0_f64,
        0.1..2.0_f64,
        0.0..0.1_f64,
        0.1..0.5_f64,
    )
}

fn option_type() -> impl Strategy<Value = OptionType> {
    prop_oneof![Just(OptionType::Call), Just(OptionType::Put)]
}

fn american(
    (s, k, t, r, v): (Real, Real, Real, Real, Real),
    option_type: OptionType,
) -> VanillaOption {
    VanillaOption::new(s, k, t, r, v, option_type, ExerciseType::American).unwrap()
}

fn small_lsm() -> LsmParams {
    LsmParams {
        paths: 500,
        steps: 10,
        ..LsmParams::default()
    }
}

/// `(engine, price)` for every engine at a resolution cheap enough for proptest.
fn all_prices(option: &VanillaOption) -> Vec<(&'static str, Real)> {
    vec![
        ("binomial", BinomialEngine.price(option, &BinomialParams::new(50)).unwrap()),
        ("explicit", FdExplicitEngine.price(option, &FdGridSize::new(30, 30)).unwrap()),
        ("implicit", FdImplicitEngine.price(option, &FdGridSize::new(40, 40)).unwrap()),
        ("crank-nicolson", FdCrankNicolsonEngine.price(option, &FdGridSize::new(40, 40)).unwrap()),
        ("mc-lsm", MonteCarloLsmEngine.price(option, &small_lsm()).unwrap()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn american_prices_are_finite_and_above_intrinsic(m in market(), ot in option_type()) {
        let option = american(m, ot);
        let intrinsic = option.intrinsic_value();
        for (engine, price) in all_prices(&option) {
            prop_assert!(price.is_finite(), "{engine}: {price}");
            prop_assert!(price >= 0.0, "{engine}: {price}");
            prop_assert!(price >= intrinsic - 1e-9, "{engine}: {price} < {intrinsic}");
        }
    }

    #[test]
    fn european_prices_are_finite_and_non_negative(
        m in market(),
        ot in option_type(),
        low_vol in 0.01..0.1_f64,
    ) {
        let european = american(m, ot).with_exercise(ExerciseType::European);
        for (engine, price) in all_prices(&european) {
            prop_assert!(price.is_finite(), "{engine}: {price}");
            prop_assert!(price >= 0.0, "{engine}: {price}");
        }

        // Coarse grids at low volatility are where the PDE schemes oscillate.
        let low_vol = european.with_volatility(low_vol).unwrap();
        for grid in [FdGridSize::new(21, 3), FdGridSize::new(15, 2), FdGridSize::new(40, 40)] {
            let prices = [
                ("explicit", FdExplicitEngine.price(&low_vol, &grid).unwrap()),
                ("implicit", FdImplicitEngine.price(&low_vol, &grid).unwrap()),
                ("crank-nicolson", FdCrankNicolsonEngine.price(&low_vol, &grid).unwrap()),
            ];
            for (engine, price) in prices {
                prop_assert!(price.is_finite(), "{engine} {grid:?}: {price}");
                prop_assert!(price >= 0.0, "{engine} {grid:?}: {price} for {low_vol}");
            }
        }
    }

    #[test]
    fn american_dominates_european(m in market(), ot in option_type()) {
        let am = american(m, ot);
        let eu = am.with_exercise(ExerciseType::European);
        let res = BinomialParams::new(50);
        let am_price = BinomialEngine.price(&am, &res).unwrap();
        let eu_price = BinomialEngine.price(&eu, &res).unwrap();
        prop_assert!(eu_price >= 0.0);
        prop_assert!(am_price >= eu_price - 1e-12, "{am_price} < {eu_price}");
    }

    #[test]
    fn delta_bounded_and_gamma_non_negative(m in market(), ot in option_type()) {
        let option = american(m, ot);
        let res = BinomialParams::new(100);
        let greeks = compute_all_greeks(&BinomialEngine, &option, &res).unwrap();
        let (lo, hi) = match ot {
            OptionType::Call => (0.0, 1.0),
            OptionType::Put => (-1.0, 0.0),
        };
        let delta = greeks.delta;
        prop_assert!(delta >= lo - 1e-6 && delta <= hi + 1e-6, "delta = {delta}");
        prop_assert!(greeks.gamma >= -1e-6, "gamma = {}", greeks.gamma);
    }
}
