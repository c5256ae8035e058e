//! Recombining binomial tree for option pricing.
//!
//! Only the Cox-Ross-Rubinstein parametrisation is provided:
//!
//! | Quantity | Value |
//! |---|---|
//! | `Δt` | `T / steps` |
//! | up factor `u` | `exp(σ √Δt)` |
//! | down factor `d` | `1 / u` |
//! | up probability `p` | `(exp(rΔt) − d) / (u − d)` |

use ao_core::{
    errors::{Error, Result},
    Rate, Real, Time, Volatility,
};

/// A recombining binomial tree for a geometric Brownian motion.
///
/// The tree has `steps + 1` time layers, with layer `i` having `i + 1` nodes.
/// Node `(i, j)` represents the state after `j` up-moves and `i − j`
/// down-moves, so its asset level is `x0 · u^j · d^(i−j)`.
#[derive(Debug, Clone)]
pub struct BinomialTree {
    x0: Real,
    dt: Real,
    steps: usize,
    up: Real,
    down: Real,
    pu: Real,
    pd: Real,
}

impl BinomialTree {
    // ── Accessors ────────────────────────────────────────────────────────

    /// Number of time steps.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Time increment per step.
    pub fn dt(&self) -> Real {
        self.dt
    }

    /// Up-move factor.
    pub fn up(&self) -> Real {
        self.up
    }

    /// Down-move factor.
    pub fn down(&self) -> Real {
        self.down
    }

    /// Number of nodes at time step `i` (always `i + 1` for a binomial tree).
    pub fn size(&self, i: usize) -> usize {
        i + 1
    }

    /// Index of the descendant node at step `i+1` for a given `branch`.
    ///
    /// `branch = 0` → down, `branch = 1` → up.
    pub fn descendant(&self, _i: usize, index: usize, branch: usize) -> usize {
        index + branch
    }

    /// Underlying value at node `(i, index)`.
    pub fn underlying(&self, i: usize, index: usize) -> Real {
        self.x0 * self.down.powi((i - index) as i32) * self.up.powi(index as i32)
    }

    /// Transition probability for `branch` (0 = down, 1 = up).
    pub fn probability(&self, _i: usize, _index: usize, branch: usize) -> Real {
        if branch == 1 {
            self.pu
        } else {
            self.pd
        }
    }

    // ── Named constructors ───────────────────────────────────────────────

    /// Cox-Ross-Rubinstein tree.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] when `steps == 0`, when the tree is
    /// degenerate (`u ≤ d`, e.g. zero volatility), or when the risk-neutral
    /// up probability falls outside `[0, 1]`. The last case happens for a
    /// rate that is large relative to `σ / √Δt`; more steps usually fix it.
    pub fn cox_ross_rubinstein(
        spot: Real,
        rate: Rate,
        volatility: Volatility,
        maturity: Time,
        steps: usize,
    ) -> Result<Self> {
        if steps == 0 {
            return Err(Error::InvalidArgument(
                "binomial tree needs at least one step".into(),
            ));
        }
        let dt = maturity / steps as Real;
        let up = (volatility * dt.sqrt()).exp();
        let down = 1.0 / up;
        if up <= down {
            return Err(Error::InvalidArgument(format!(
                "CRR: degenerate tree, up factor {up} must exceed down factor {down}"
            )));
        }
        let pu = ((rate * dt).exp() - down) / (up - down);
        if !(0.0..=1.0).contains(&pu) {
            return Err(Error::InvalidArgument(format!(
                "CRR: risk-neutral probability {pu} outside [0, 1] (try more steps)"
            )));
        }
        Ok(Self {
            x0: spot,
            dt,
            steps,
            up,
            down,
            pu,
            pd: 1.0 - pu,
        })
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
