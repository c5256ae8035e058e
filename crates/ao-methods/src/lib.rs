//! # ao-methods
//!
//! Numerical methods: the binomial lattice, finite-difference grids for the
//! Black-Scholes PDE, and the Monte Carlo path ensemble with
//! Longstaff-Schwartz regression.
//!
//! # Modules
//!
//! * [`lattice`] — CRR binomial tree and backward-induction pricing
//! * [`finite_differences`] — tridiagonal solver and the uniform-grid PDE solver
//! * [`monte_carlo`] — GBM path generation and least-squares Monte Carlo

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Lattice methods: binomial trees, backward induction.
pub mod lattice;

/// Finite difference methods: tridiagonal solver, 1-D PDE solver.
pub mod finite_differences;

/// Monte Carlo simulation: path generation, Longstaff-Schwartz.
pub mod monte_carlo;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use finite_differences::{FdBlackScholesSolver, FdSolution, FdmScheme, TridiagonalOperator};
pub use lattice::{price_american, price_european, BinomialTree};
pub use monte_carlo::{longstaff_schwartz, GbmPathGenerator, Path, PathEnsemble};
