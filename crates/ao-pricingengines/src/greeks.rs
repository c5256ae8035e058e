//! Finite-difference Greeks for any [`PricingEngine`].
//!
//! Every sensitivity is estimated by repricing bumped copies of the option
//! with the same engine and resolution:
//!
//! | Greek | Estimator |
//! |---|---|
//! | delta | `(V(S+ε) − V(S−ε)) / 2ε` |
//! | gamma | `(V(S+ε) − 2V(S) + V(S−ε)) / ε²` |
//! | theta | `−(V(T−ε) − V(T)) / ε` |
//! | vega | `(V(σ+ε) − V(σ−ε)) / 2ε` |
//! | rho | `(V(r+ε) − V(r−ε)) / 2ε` |
//!
//! Bumped options are built through the `with_*` constructors, so the
//! caller's option is never touched. Near the edge of the valid domain
//! (`S < ε` for delta and gamma, `σ < ε` for vega) the downward bump would
//! be rejected, so those Greeks switch to one-sided forward differences:
//! `(V(x+ε) − V(x)) / ε` and `(V(S+2ε) − 2V(S+ε) + V(S)) / ε²`.
//!
//! Monte Carlo engines reuse their seed across bumps, which gives common
//! random numbers for free.

use ao_core::{errors::Result, Real};
use ao_instruments::{PricingEngine, VanillaOption};
use tracing::trace;

/// Bump sizes for the finite-difference estimators.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GreekBumps {
    /// Absolute spot bump (delta, gamma).
    pub spot: Real,
    /// Absolute volatility bump (vega).
    pub volatility: Real,
    /// Absolute rate bump (rho).
    pub rate: Real,
    /// Maturity bump in years (theta).
    pub maturity: Real,
}

impl Default for GreekBumps {
    fn default() -> Self {
        Self {
            spot: 1e-2,
            volatility: 1e-3,
            rate: 1e-4,
            maturity: 1e-4,
        }
    }
}

/// The five first- and second-order sensitivities.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// ∂V/∂S.
    pub delta: Real,
    /// ∂²V/∂S².
    pub gamma: Real,
    /// −∂V/∂T, per year; NaN when the maturity is not larger than the bump.
    pub theta: Real,
    /// ∂V/∂σ, per 1.0 absolute vol.
    pub vega: Real,
    /// ∂V/∂r, per 1.0 rate shift.
    pub rho: Real,
}

impl Greeks {
    /// `(delta, gamma, theta, vega, rho)`.
    pub fn as_tuple(&self) -> (Real, Real, Real, Real, Real) {
        (self.delta, self.gamma, self.theta, self.vega, self.rho)
    }
}

fn reprice<E: PricingEngine + ?Sized>(
    engine: &E,
    option: &VanillaOption,
    resolution: &E::Resolution,
    greek: &'static str,
) -> Result<Real> {
    let value = engine.price(option, resolution)?;
    trace!(engine = engine.name(), greek, %option, value, "bumped price");
    Ok(value)
}

/// Central-difference delta; forward difference when `S < eps`.
pub fn delta<E: PricingEngine + ?Sized>(
    engine: &E,
    option: &VanillaOption,
    resolution: &E::Resolution,
    eps: Real,
) -> Result<Real> {
    let s = option.spot();
    let up = reprice(engine, &option.with_spot(s + eps)?, resolution, "delta")?;
    if s - eps < 0.0 {
        let base = reprice(engine, option, resolution, "delta")?;
        return Ok((up - base) / eps);
    }
    let down = reprice(engine, &option.with_spot(s - eps)?, resolution, "delta")?;
    Ok((up - down) / (2.0 * eps))
}

/// Second difference in the spot, central unless `S < eps`.
pub fn gamma<E: PricingEngine + ?Sized>(
    engine: &E,
    option: &VanillaOption,
    resolution: &E::Resolution,
    eps: Real,
) -> Result<Real> {
    let base = reprice(engine, option, resolution, "gamma")?;
    let (_, gamma) = spot_sensitivities(engine, option, resolution, eps, base)?;
    Ok(gamma)
}

/// Backward-in-maturity theta. Returns NaN when `T ≤ eps`.
pub fn theta<E: PricingEngine + ?Sized>(
    engine: &E,
    option: &VanillaOption,
    resolution: &E::Resolution,
    eps: Real,
) -> Result<Real> {
    if option.maturity() <= eps {
        return Ok(Real::NAN);
    }
    let base = reprice(engine, option, resolution, "theta")?;
    theta_from_base(engine, option, resolution, eps, base)
}

/// Central-difference vega; forward difference when `σ < eps`.
pub fn vega<E: PricingEngine + ?Sized>(
    engine: &E,
    option: &VanillaOption,
    resolution: &E::Resolution,
    eps: Real,
) -> Result<Real> {
    let v = option.volatility();
    let up = reprice(engine, &option.with_volatility(v + eps)?, resolution, "vega")?;
    if v - eps < 0.0 {
        let base = reprice(engine, option, resolution, "vega")?;
        return Ok((up - base) / eps);
    }
    let down = reprice(engine, &option.with_volatility(v - eps)?, resolution, "vega")?;
    Ok((up - down) / (2.0 * eps))
}

/// Central-difference rho.
pub fn rho<E: PricingEngine + ?Sized>(
    engine: &E,
    option: &VanillaOption,
    resolution: &E::Resolution,
    eps: Real,
) -> Result<Real> {
    let r = option.rate();
    let up = reprice(engine, &option.with_rate(r + eps)?, resolution, "rho")?;
    let down = reprice(engine, &option.with_rate(r - eps)?, resolution, "rho")?;
    Ok((up - down) / (2.0 * eps))
}

/// All five Greeks with the default [`GreekBumps`].
pub fn compute_all_greeks<E: PricingEngine + ?Sized>(
    engine: &E,
    option: &VanillaOption,
    resolution: &E::Resolution,
) -> Result<Greeks> {
    compute_all_greeks_with(engine, option, resolution, &GreekBumps::default())
}

/// All five Greeks with custom bumps.
///
/// The unbumped price and the two spot bumps are shared between delta,
/// gamma and theta, so this costs eight pricings instead of eleven.
pub fn compute_all_greeks_with<E: PricingEngine + ?Sized>(
    engine: &E,
    option: &VanillaOption,
    resolution: &E::Resolution,
    bumps: &GreekBumps,
) -> Result<Greeks> {
    let base = reprice(engine, option, resolution, "base")?;
    let (delta, gamma) = spot_sensitivities(engine, option, resolution, bumps.spot, base)?;

    let theta = if option.maturity() <= bumps.maturity {
        Real::NAN
    } else {
        theta_from_base(engine, option, resolution, bumps.maturity, base)?
    };

    Ok(Greeks {
        delta,
        gamma,
        theta,
        vega: vega(engine, option, resolution, bumps.volatility)?,
        rho: rho(engine, option, resolution, bumps.rate)?,
    })
}

/// `(delta, gamma)` around a known base price.
fn spot_sensitivities<E: PricingEngine + ?Sized>(
    engine: &E,
    option: &VanillaOption,
    resolution: &E::Resolution,
    eps: Real,
    base: Real,
) -> Result<(Real, Real)> {
    let s = option.spot();
    let up = reprice(engine, &option.with_spot(s + eps)?, resolution, "delta")?;
    if s - eps < 0.0 {
        let up2 = reprice(engine, &option.with_spot(s + 2.0 * eps)?, resolution, "gamma")?;
        return Ok(((up - base) / eps, second_difference(up2, up, base, eps)));
    }
    let down = reprice(engine, &option.with_spot(s - eps)?, resolution, "delta")?;
    Ok(((up - down) / (2.0 * eps), second_difference(up, base, down, eps)))
}

fn theta_from_base<E: PricingEngine + ?Sized>(
    engine: &E,
    option: &VanillaOption,
    resolution: &E::Resolution,
    eps: Real,
    base: Real,
) -> Result<Real> {
    let shorter = option.with_maturity(option.maturity() - eps)?;
    let bumped = reprice(engine, &shorter, resolution, "theta")?;
    Ok(-(bumped - base) / eps)
}

#[inline]
fn second_difference(up: Real, mid: Real, down: Real, eps: Real) -> Real {
    (up - 2.0 * mid + down) / (eps * eps)
}
