//! Standard normal distribution.

use ao_core::Real;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// The standard normal probability density function.
///
/// `φ(x) = exp(-x²/2) / √(2π)`
#[inline]
pub fn normal_pdf(x: Real) -> Real {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// The standard normal cumulative distribution function Φ(x).
///
/// Evaluated as `½·erfc(−x/√2)` with `statrs`' complementary error function,
/// which stays accurate deep in the lower tail. Infinite arguments map to
/// 0 and 1.
pub fn normal_cdf(x: Real) -> Real {
    if x == Real::NEG_INFINITY {
        return 0.0;
    }
    if x == Real::INFINITY {
        return 1.0;
    }
    0.5 * statrs::function::erf::erfc(-x * FRAC_1_SQRT_2)
}
