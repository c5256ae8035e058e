//! Analytic European option engine (Black-Scholes).
//!
//! Prices European vanilla options on a non-dividend-paying asset with the
//! closed-form Black-Scholes formula and computes the analytic Greeks. It is
//! the reference the numerical engines are validated against.

use ao_core::{
    errors::{Error, Result},
    Price, Rate, Real, Time, Volatility,
};
use ao_instruments::{OptionType, PricingEngine, VanillaOption};
use ao_math::distributions::{normal_cdf, normal_pdf};
use tracing::debug;

/// Analytic pricing engine for European vanilla options.
///
/// Implements the Black-Scholes closed-form solution:
///
/// $$C = S N(d_1) - K e^{-rT} N(d_2)$$
/// $$P = K e^{-rT} N(-d_2) - S N(-d_1)$$
///
/// where $d_{1,2} = \frac{\ln(S/K) + (r \pm \sigma^2/2)T}{\sigma\sqrt{T}}$
///
/// American calls are accepted (without dividends early exercise is never
/// optimal); American puts are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEuropeanEngine;

impl AnalyticEuropeanEngine {
    /// Create a new engine.
    pub fn new() -> Self {
        Self
    }
}

/// Black-Scholes price and analytic Greeks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesResults {
    /// Option value.
    pub price: Real,
    /// ∂V/∂S.
    pub delta: Real,
    /// ∂²V/∂S².
    pub gamma: Real,
    /// ∂V/∂σ, per 1.0 absolute vol (not per 1%).
    pub vega: Real,
    /// −∂V/∂T, per year.
    pub theta: Real,
    /// ∂V/∂r, per 1.0 rate shift.
    pub rho: Real,
}

/// Compute Black-Scholes price and Greeks for a European option.
///
/// When `σ√T` vanishes (or the spot is zero) the distribution collapses and
/// the result is the discounted forward intrinsic value
/// `max(φ(S − K e^{−rT}), 0)` with the matching first-order Greeks.
pub fn black_scholes(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    rate: Rate,
    volatility: Volatility,
    time_to_expiry: Time,
) -> BlackScholesResults {
    let phi = option_type.sign();
    let t = time_to_expiry;

    if t <= 0.0 {
        return BlackScholesResults {
            price: (phi * (spot - strike)).max(0.0),
            delta: 0.0,
            gamma: 0.0,
            vega: 0.0,
            theta: 0.0,
            rho: 0.0,
        };
    }

    let r = rate;
    let sigma = volatility;
    let sqrt_t = t.sqrt();
    let std_dev = sigma * sqrt_t;
    let df = (-r * t).exp();

    if std_dev <= 1e-15 || spot <= 0.0 {
        let in_the_money = phi * (spot - strike * df) > 0.0;
        let w = if in_the_money { 1.0 } else { 0.0 };
        return BlackScholesResults {
            price: w * phi * (spot - strike * df),
            delta: w * phi,
            gamma: 0.0,
            vega: 0.0,
            theta: -w * phi * r * strike * df,
            rho: w * phi * strike * t * df,
        };
    }

    let d1 = ((spot / strike).ln() + (r + 0.5 * sigma * sigma) * t) / std_dev;
    let d2 = d1 - std_dev;

    let nd1 = normal_cdf(phi * d1);
    let nd2 = normal_cdf(phi * d2);
    let npd1 = normal_pdf(d1);

    BlackScholesResults {
        price: phi * (spot * nd1 - strike * df * nd2),
        delta: phi * nd1,
        gamma: npd1 / (spot * std_dev),
        vega: spot * npd1 * sqrt_t,
        theta: -(spot * npd1 * sigma) / (2.0 * sqrt_t) - phi * r * strike * df * nd2,
        rho: phi * strike * t * df * nd2,
    }
}

impl PricingEngine for AnalyticEuropeanEngine {
    type Resolution = ();

    fn name(&self) -> &'static str {
        "analytic-european"
    }

    fn default_resolution(&self) {}

    fn price(&self, option: &VanillaOption, _resolution: &()) -> Result<Price> {
        if option.is_american() && option.option_type() == OptionType::Put {
            return Err(Error::InvalidArgument(
                "no closed form for an American put".into(),
            ));
        }
        debug!(engine = self.name(), %option, "pricing");
        Ok(black_scholes(
            option.option_type(),
            option.spot(),
            option.strike(),
            option.rate(),
            option.volatility(),
            option.maturity(),
        )
        .price)
    }
}
