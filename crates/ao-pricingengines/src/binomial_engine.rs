//! Cox-Ross-Rubinstein binomial engine.

use ao_core::{errors::Result, Price, Real};
use ao_instruments::{Payoff, PricingEngine, VanillaOption};
use ao_methods::lattice::{price_american, price_european, BinomialTree};
use tracing::debug;

/// Lattice resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BinomialParams {
    /// Number of time steps in the tree.
    pub steps: usize,
}

impl BinomialParams {
    /// A tree with `steps` time steps.
    pub fn new(steps: usize) -> Self {
        Self { steps }
    }
}

impl Default for BinomialParams {
    fn default() -> Self {
        Self { steps: 100 }
    }
}

impl From<usize> for BinomialParams {
    fn from(steps: usize) -> Self {
        Self::new(steps)
    }
}

/// Binomial-tree pricing engine.
///
/// Builds a CRR tree with `u = exp(σ√Δt)`, `d = 1/u` and rolls the payoff
/// back to the root, taking `max(hold, exercise)` at every node for American
/// options. Cost is O(steps²).
///
/// Zero volatility, zero steps and risk-neutral probabilities outside
/// `[0, 1]` are reported as errors rather than priced.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinomialEngine;

impl BinomialEngine {
    /// Create a new engine.
    pub fn new() -> Self {
        Self
    }
}

impl PricingEngine for BinomialEngine {
    type Resolution = BinomialParams;

    fn name(&self) -> &'static str {
        "binomial-crr"
    }

    fn default_resolution(&self) -> BinomialParams {
        BinomialParams::default()
    }

    fn price(&self, option: &VanillaOption, params: &BinomialParams) -> Result<Price> {
        debug!(engine = self.name(), steps = params.steps, %option, "pricing");
        let tree = BinomialTree::cox_ross_rubinstein(
            option.spot(),
            option.rate(),
            option.volatility(),
            option.maturity(),
            params.steps,
        )?;
        let payoff = option.payoff();
        let value = |s: Real| payoff.value(s);
        let discount = (-option.rate() * tree.dt()).exp();
        Ok(if option.is_american() {
            price_american(&tree, &value, discount)
        } else {
            price_european(&tree, &value, discount)
        })
    }
}
