//! # ameropt
//!
//! American option pricing on a single non-dividend-paying asset with four
//! independent numerical methods (binomial lattice, explicit / implicit /
//! Crank-Nicolson finite differences, least-squares Monte Carlo), a generic
//! finite-difference Greek estimator, and a Black-Scholes reference pricer.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ao-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use ameropt::prelude::*;
//!
//! let put = VanillaOption::from_names(100.0, 100.0, 1.0, 0.05, 0.2, "put", "american")?;
//! let price = put.npv(&BinomialEngine, &BinomialParams::new(500))?;
//! assert!((price - 6.09).abs() < 0.02);
//!
//! let greeks = compute_all_greeks(&BinomialEngine, &put, &BinomialParams::new(200))?;
//! assert!(greeks.delta < 0.0);
//! # Ok::<(), ameropt::core::Error>(())
//! ```
//!
//! The library emits `tracing` events (a `WARN` when the explicit scheme
//! refines its time grid, `DEBUG` per pricing call) but never installs a
//! subscriber.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use ao_core as core;

/// Mathematical utilities: distributions, interpolation, regression, RNG.
pub use ao_math as math;

/// The option contract and the pricing-engine capability.
pub use ao_instruments as instruments;

/// Numerical methods (lattices, FDM, Monte Carlo).
pub use ao_methods as methods;

/// Pricing engines and Greeks.
pub use ao_pricingengines as pricingengines;

/// The types needed to build, price and risk an option.
pub mod prelude {
    pub use ao_core::{Error, Real, Result};
    pub use ao_instruments::{ExerciseType, OptionType, PricingEngine, VanillaOption};
    pub use ao_pricingengines::{
        compute_all_greeks, compute_all_greeks_with, AnalyticEuropeanEngine, BinomialEngine,
        BinomialParams, FdCrankNicolsonEngine, FdExplicitEngine, FdGridSize, FdImplicitEngine,
        GreekBumps, Greeks, LsmParams, MonteCarloLsmEngine,
    };
}
