//! # ao-math
//!
//! Mathematical utilities: the normal distribution (via statrs), linear
//! interpolation, polynomial least squares (over nalgebra), seeded random
//! number generation, and a statistics accumulator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distributions.
pub mod distributions;

/// 1D interpolation schemes.
pub mod interpolations;

/// Linear least-squares regression.
pub mod linear_least_squares;

/// Random number generators.
pub mod random_numbers;

/// Statistics accumulators.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::{normal_cdf, normal_pdf};
pub use interpolations::{Interpolation1D, LinearInterpolation};
pub use linear_least_squares::{LinearLeastSquaresRegression, PolynomialRegression};
pub use random_numbers::{GaussianRng, MersenneTwisterUniformRng};
pub use statistics::Statistics;
