//! Monte Carlo simulation framework.
//!
//! # Overview
//!
//! * [`Path`] — a single realisation of the process (times + values)
//! * [`GbmPathGenerator`] — exact log-normal stepping of a geometric
//!   Brownian motion under the risk-neutral measure
//! * [`PathEnsemble`] — `paths × (steps + 1)` matrix of simulated levels
//! * [`longstaff_schwartz`] — least-squares Monte Carlo backward induction

pub mod longstaff_schwartz;

pub use longstaff_schwartz::longstaff_schwartz;

use ao_core::{
    errors::{Error, Result},
    Rate, Real, Time, Volatility,
};
use ao_math::GaussianRng;
use nalgebra::DMatrix;

// ─── Path ─────────────────────────────────────────────────────────────────────

/// A single sample path: a sequence of time-value pairs.
#[derive(Debug, Clone)]
pub struct Path {
    /// Time points (including t=0).
    pub times: Vec<Real>,
    /// Process values at each time point.
    pub values: Vec<Real>,
}

impl Path {
    /// Number of time steps (= len − 1).
    pub fn steps(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    /// The initial value.
    pub fn front(&self) -> Option<Real> {
        self.values.first().copied()
    }

    /// Length of the path (number of points including initial).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the path is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ─── GbmPathGenerator ─────────────────────────────────────────────────────────

/// Generates sample paths of `dS = rS dt + σS dW` on a uniform time grid.
///
/// Each step is exact: `S ← S · exp((r − ½σ²)Δt + σ√Δt · Z)`. The normal
/// draws come from a Mersenne-Twister generator owned by this value, so two
/// generators built with the same seed produce identical paths.
#[derive(Debug)]
pub struct GbmPathGenerator {
    spot: Real,
    dt: Real,
    steps: usize,
    drift: Real,
    diffusion: Real,
    rng: GaussianRng,
}

impl GbmPathGenerator {
    /// Create a new path generator.
    ///
    /// # Arguments
    /// * `spot` — initial level of every path
    /// * `rate` — risk-free rate (the risk-neutral drift)
    /// * `volatility` — lognormal volatility
    /// * `maturity` — total time horizon
    /// * `steps` — number of time steps
    /// * `seed` — RNG seed
    pub fn new(
        spot: Real,
        rate: Rate,
        volatility: Volatility,
        maturity: Time,
        steps: usize,
        seed: u64,
    ) -> Result<Self> {
        if steps == 0 {
            return Err(Error::InvalidArgument(
                "path generator needs at least one time step".into(),
            ));
        }
        let dt = maturity / steps as Real;
        Ok(Self {
            spot,
            dt,
            steps,
            drift: (rate - 0.5 * volatility * volatility) * dt,
            diffusion: volatility * dt.sqrt(),
            rng: GaussianRng::new(seed),
        })
    }

    /// Time step.
    pub fn dt(&self) -> Real {
        self.dt
    }

    /// Number of time steps per path.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Generate one sample path.
    pub fn next_path(&mut self) -> Path {
        let mut times = Vec::with_capacity(self.steps + 1);
        let mut values = Vec::with_capacity(self.steps + 1);
        times.push(0.0);
        values.push(self.spot);

        let mut x = self.spot;
        for i in 1..=self.steps {
            x *= (self.drift + self.diffusion * self.rng.next_real()).exp();
            times.push(i as Real * self.dt);
            values.push(x);
        }

        Path { times, values }
    }

    /// Generate `paths` sample paths into an ensemble.
    pub fn ensemble(&mut self, paths: usize) -> PathEnsemble {
        let mut values = DMatrix::<Real>::zeros(paths, self.steps + 1);
        for p in 0..paths {
            let path = self.next_path();
            for (t, &v) in path.values.iter().enumerate() {
                values[(p, t)] = v;
            }
        }
        PathEnsemble {
            values,
            dt: self.dt,
        }
    }
}

// ─── PathEnsemble ─────────────────────────────────────────────────────────────

/// A set of simulated paths sharing one uniform time grid.
#[derive(Debug, Clone)]
pub struct PathEnsemble {
    values: DMatrix<Real>,
    dt: Real,
}

impl PathEnsemble {
    /// Number of paths.
    pub fn paths(&self) -> usize {
        self.values.nrows()
    }

    /// Number of time steps (columns − 1).
    pub fn steps(&self) -> usize {
        self.values.ncols().saturating_sub(1)
    }

    /// Time step.
    pub fn dt(&self) -> Real {
        self.dt
    }

    /// Level of path `path` at time index `step`.
    #[inline]
    pub fn value(&self, path: usize, step: usize) -> Real {
        self.values[(path, step)]
    }

    /// All levels at time index `step`.
    pub fn slice(&self, step: usize) -> Vec<Real> {
        self.values.column(step).iter().copied().collect()
    }

    /// The underlying `paths × (steps + 1)` matrix.
    pub fn values(&self) -> &DMatrix<Real> {
        &self.values
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
