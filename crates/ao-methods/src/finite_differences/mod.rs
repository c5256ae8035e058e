//! Finite difference methods for PDE-based option pricing.
//!
//! Solves the Black-Scholes PDE
//! `∂V/∂t + ½σ²S²·∂²V/∂S² + rS·∂V/∂S − rV = 0`
//! backward in time on a uniform grid in the asset price.
//!
//! # Overview
//!
//! * [`TridiagonalOperator`] — tridiagonal matrix with Thomas-algorithm solver
//! * [`FdBlackScholesSolver`] — uniform `(M+1) × (N+1)` grid solver
//! * [`FdmScheme`] — explicit, implicit, or Crank-Nicolson
//!
//! Grid layout: asset nodes `S_i = i·ΔS` on `[0, 2S]`, time nodes
//! `t_j = j·Δt` on `[0, T]`. The last column holds the payoff; rows `0` and
//! `M` hold Dirichlet boundary values for every column.

pub mod tridiagonal_operator;

pub use tridiagonal_operator::TridiagonalOperator;

use ao_core::{
    ensure,
    errors::{Error, Result},
    Real,
};
use ao_instruments::{OptionType, VanillaOption};
use ao_math::{Interpolation1D, LinearInterpolation};
use nalgebra::DMatrix;
use tracing::{debug, warn};

// ─── FDM scheme selection ─────────────────────────────────────────────────────

/// Finite difference time-stepping scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FdmScheme {
    /// Explicit: `V^{n} = A · V^{n+1}` — simple but conditionally stable.
    Explicit,
    /// Fully implicit: `A · V^{n} = V^{n+1}` — unconditionally stable.
    Implicit,
    /// Crank-Nicolson: θ = ½ average of explicit and implicit.
    CrankNicolson,
}

impl FdmScheme {
    /// Short lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            FdmScheme::Explicit => "explicit",
            FdmScheme::Implicit => "implicit",
            FdmScheme::CrankNicolson => "crank-nicolson",
        }
    }
}

// ─── Solution grid ────────────────────────────────────────────────────────────

/// The filled value grid of one solve.
#[derive(Debug, Clone)]
pub struct FdSolution {
    grid: DMatrix<Real>,
    asset_levels: Vec<Real>,
    dt: Real,
}

impl FdSolution {
    /// The `(M+1) × (N+1)` value grid; rows are asset nodes, columns are
    /// time nodes.
    pub fn grid(&self) -> &DMatrix<Real> {
        &self.grid
    }

    /// Asset levels of the grid rows.
    pub fn asset_levels(&self) -> &[Real] {
        &self.asset_levels
    }

    /// Number of time steps actually used. May exceed the requested count
    /// when the explicit scheme had to be stabilised.
    pub fn time_steps(&self) -> usize {
        self.grid.ncols() - 1
    }

    /// Time step actually used.
    pub fn dt(&self) -> Real {
        self.dt
    }

    /// Option values at `t = 0` for every asset node.
    pub fn initial_values(&self) -> Vec<Real> {
        self.grid.column(0).iter().copied().collect()
    }

    /// Value at `t = 0`, linearly interpolated at asset level `spot`.
    pub fn value_at(&self, spot: Real) -> Result<Real> {
        let interpolation = LinearInterpolation::new(&self.asset_levels, &self.initial_values())?;
        Ok(interpolation.value(spot))
    }
}

// ─── Solver ───────────────────────────────────────────────────────────────────

/// A 1-D finite difference solver for the Black-Scholes PDE on a uniform
/// asset grid spanning `[0, 2S]`.
///
/// American early exercise is applied as a single projection per time step,
/// `V ← max(V, payoff)` on interior nodes, after the scheme's update.
/// European values are floored at zero in the same place, which removes the
/// negative oscillations coarse grids produce near the strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FdBlackScholesSolver {
    scheme: FdmScheme,
    asset_steps: usize,
    time_steps: usize,
}

impl FdBlackScholesSolver {
    /// Create a solver with `asset_steps` (M) space intervals and
    /// `time_steps` (N) time intervals.
    ///
    /// # Errors
    /// Requires `M ≥ 2` and `N ≥ 1`.
    pub fn new(scheme: FdmScheme, asset_steps: usize, time_steps: usize) -> Result<Self> {
        if asset_steps < 2 {
            return Err(Error::InvalidArgument(format!(
                "finite-difference grid needs at least 2 asset steps, got {asset_steps}"
            )));
        }
        if time_steps == 0 {
            return Err(Error::InvalidArgument(
                "finite-difference grid needs at least 1 time step".into(),
            ));
        }
        Ok(Self {
            scheme,
            asset_steps,
            time_steps,
        })
    }

    /// Time-stepping scheme.
    pub fn scheme(&self) -> FdmScheme {
        self.scheme
    }

    /// Number of asset intervals (M).
    pub fn asset_steps(&self) -> usize {
        self.asset_steps
    }

    /// Requested number of time intervals (N).
    pub fn time_steps(&self) -> usize {
        self.time_steps
    }

    /// Value of `option` at its spot.
    ///
    /// A zero spot collapses the grid to a point; the exact value of an
    /// option on an asset stuck at zero is returned instead.
    pub fn price(&self, option: &VanillaOption) -> Result<Real> {
        if option.spot() == 0.0 {
            return Ok(zero_spot_value(option));
        }
        self.solve(option)?.value_at(option.spot())
    }

    /// Fill the full value grid for `option`.
    ///
    /// # Errors
    /// Fails for a zero spot (the grid would be degenerate) or if a
    /// tridiagonal system turns out singular.
    pub fn solve(&self, option: &VanillaOption) -> Result<FdSolution> {
        ensure!(option.spot() > 0.0, "finite-difference grid needs a positive spot");

        let m = self.asset_steps;
        let t = option.maturity();
        let r = option.rate();
        let sigma2 = option.volatility() * option.volatility();
        let strike = option.strike();
        let s_max = 2.0 * option.spot();
        let ds = s_max / m as Real;

        let n = self.stable_time_steps(t, sigma2);
        let dt = t / n as Real;
        debug!(
            scheme = self.scheme.name(),
            asset_steps = m,
            time_steps = n,
            dt,
            "solving Black-Scholes PDE"
        );

        let asset_levels: Vec<Real> = (0..=m).map(|i| i as Real * ds).collect();
        let exercise: Vec<Real> = asset_levels.iter().map(|&s| option.intrinsic(s)).collect();
        let early_exercise = option.is_american();

        let mut grid = DMatrix::<Real>::zeros(m + 1, n + 1);

        // Terminal payoff
        for (i, &v) in exercise.iter().enumerate() {
            grid[(i, n)] = v;
        }

        // Boundary rows
        for j in 0..=n {
            let discount = (-r * dt * (n - j) as Real).exp();
            let (low, high) = match option.option_type() {
                OptionType::Call => (0.0, (s_max - strike * discount).max(0.0)),
                OptionType::Put => (strike * discount, 0.0),
            };
            grid[(0, j)] = low;
            grid[(m, j)] = high;
        }

        let coefficients = SchemeCoefficients::new(self.scheme, m, dt, r, sigma2);

        for j in (0..n).rev() {
            let next: Vec<Real> = grid.column(j + 1).iter().copied().collect();
            let interior = coefficients.step(&next, grid[(0, j)], grid[(m, j)])?;
            for (k, v) in interior.into_iter().enumerate() {
                let i = k + 1;
                // a claim with a non-negative payoff is never worth less than zero
                grid[(i, j)] = v.max(if early_exercise { exercise[i] } else { 0.0 });
            }
        }

        Ok(FdSolution {
            grid,
            asset_levels,
            dt,
        })
    }

    /// Time steps after enforcing `Δt ≤ 1/(σ²M²)` for the explicit scheme.
    fn stable_time_steps(&self, maturity: Real, sigma2: Real) -> usize {
        let n = self.time_steps;
        if self.scheme != FdmScheme::Explicit || sigma2 == 0.0 {
            return n;
        }
        let m2 = (self.asset_steps * self.asset_steps) as Real;
        let dt = maturity / n as Real;
        let dt_stable = 1.0 / (sigma2 * m2);
        if dt <= dt_stable {
            return n;
        }
        let stable = (maturity * sigma2 * m2).floor() as usize + 1;
        warn!(
            dt,
            dt_stable,
            requested_time_steps = n,
            time_steps = stable,
            "explicit scheme unstable for requested time step; increasing time steps"
        );
        stable
    }
}

/// Exact value when the underlying sits at zero forever.
fn zero_spot_value(option: &VanillaOption) -> Real {
    if option.is_american() {
        return option.intrinsic(0.0);
    }
    match option.option_type() {
        OptionType::Put => option.strike() * (-option.rate() * option.maturity()).exp(),
        OptionType::Call => 0.0,
    }
}

// ─── Per-scheme operators ─────────────────────────────────────────────────────

/// Operators for one backward time step over the interior rows `1..M`.
///
/// `forward` acts on the full next-layer column (boundary rows map to
/// themselves); `backward`, if present, is the interior system to solve.
#[derive(Debug)]
struct SchemeCoefficients {
    forward: Option<TridiagonalOperator>,
    backward: Option<TridiagonalOperator>,
}

impl SchemeCoefficients {
    fn new(scheme: FdmScheme, m: usize, dt: Real, r: Real, sigma2: Real) -> Self {
        // Row i terms: σ²i² and r·i
        let terms = |i: usize| {
            let i = i as Real;
            (sigma2 * i * i, r * i)
        };

        let explicit_half = |weight: Real| {
            let mut op = TridiagonalOperator::identity(m + 1);
            for i in 1..m {
                let (v, d) = terms(i);
                op.lower[i] = weight * dt * (v - d);
                op.diag[i] = 1.0 - 2.0 * weight * dt * (v + r);
                op.upper[i] = weight * dt * (v + d);
            }
            op
        };

        let implicit_half = |weight: Real| {
            let mut op = TridiagonalOperator::new(m - 1);
            for k in 0..m - 1 {
                let (v, d) = terms(k + 1);
                op.lower[k] = -weight * dt * (v - d);
                op.diag[k] = 1.0 + 2.0 * weight * dt * (v + r);
                op.upper[k] = -weight * dt * (v + d);
            }
            op
        };

        match scheme {
            FdmScheme::Explicit => Self {
                forward: Some(explicit_half(0.5)),
                backward: None,
            },
            FdmScheme::Implicit => Self {
                forward: None,
                backward: Some(implicit_half(0.5)),
            },
            FdmScheme::CrankNicolson => Self {
                forward: Some(explicit_half(0.25)),
                backward: Some(implicit_half(0.25)),
            },
        }
    }

    /// Interior values of the current layer from the next layer `next` and
    /// the current layer's boundary values.
    fn step(&self, next: &[Real], low: Real, high: Real) -> Result<Vec<Real>> {
        let m = next.len() - 1;
        let mut rhs = match &self.forward {
            Some(op) => op.apply(next)?[1..m].to_vec(),
            None => next[1..m].to_vec(),
        };
        let Some(op) = &self.backward else {
            return Ok(rhs);
        };
        // Known boundary values of the current layer move to the right-hand side
        let last = rhs.len() - 1;
        rhs[0] -= op.lower[0] * low;
        rhs[last] -= op.upper[last] * high;
        op.solve(&rhs)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
