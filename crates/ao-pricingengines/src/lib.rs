//! # ao-pricingengines
//!
//! Pricing engines for vanilla options on a non-dividend-paying asset, and
//! the finite-difference Greek estimator that works with any of them.
//!
//! ## Engines
//!
//! - [`BinomialEngine`] — Cox-Ross-Rubinstein lattice
//! - [`FdExplicitEngine`] — explicit finite differences
//! - [`FdImplicitEngine`] — fully implicit finite differences
//! - [`FdCrankNicolsonEngine`] — Crank-Nicolson finite differences
//! - [`MonteCarloLsmEngine`] — least-squares Monte Carlo
//! - [`AnalyticEuropeanEngine`] — Black-Scholes closed form (reference)

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analytic_european_engine;
pub mod binomial_engine;
pub mod fd_black_scholes_engine;
pub mod greeks;
pub mod mc_lsm_engine;

pub use analytic_european_engine::{black_scholes, AnalyticEuropeanEngine, BlackScholesResults};
pub use binomial_engine::{BinomialEngine, BinomialParams};
pub use fd_black_scholes_engine::{
    FdCrankNicolsonEngine, FdExplicitEngine, FdGridSize, FdImplicitEngine,
};
pub use greeks::{compute_all_greeks, compute_all_greeks_with, GreekBumps, Greeks};
pub use mc_lsm_engine::{LsmEstimate, LsmParams, MonteCarloLsmEngine};
