//! Finite-difference engines on a uniform `[0, 2S]` asset grid.
//!
//! Three engines share one solver and differ only in the time-stepping
//! scheme:
//!
//! | Engine | Scheme | Default grid |
//! |---|---|---|
//! | [`FdExplicitEngine`] | explicit | 50 × 50 |
//! | [`FdImplicitEngine`] | fully implicit | 100 × 100 |
//! | [`FdCrankNicolsonEngine`] | Crank-Nicolson | 100 × 100 |
//!
//! When the requested step violates `Δt ≤ 1/(σ²M²)`, the explicit engine
//! refines its time grid instead of failing and emits a `WARN` event with the
//! requested and the refined step counts.
//!
//! European values are floored at zero on every layer, so coarse grids never
//! return a negative price.

use ao_core::{errors::Result, Price};
use ao_instruments::{PricingEngine, VanillaOption};
use ao_methods::finite_differences::{FdBlackScholesSolver, FdmScheme};
use tracing::debug;

/// Grid resolution for the finite-difference engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FdGridSize {
    /// Number of asset-price intervals (M); at least 2.
    pub asset_steps: usize,
    /// Number of time intervals (N); at least 1.
    pub time_steps: usize,
}

impl FdGridSize {
    /// An `M × N` grid.
    pub fn new(asset_steps: usize, time_steps: usize) -> Self {
        Self {
            asset_steps,
            time_steps,
        }
    }
}

impl Default for FdGridSize {
    fn default() -> Self {
        Self::new(100, 100)
    }
}

fn price_on_grid(
    name: &'static str,
    scheme: FdmScheme,
    option: &VanillaOption,
    grid: &FdGridSize,
) -> Result<Price> {
    debug!(
        engine = name,
        asset_steps = grid.asset_steps,
        time_steps = grid.time_steps,
        %option,
        "pricing"
    );
    FdBlackScholesSolver::new(scheme, grid.asset_steps, grid.time_steps)?.price(option)
}

macro_rules! fd_engine {
    ($(#[$doc:meta])* $engine:ident, $scheme:expr, $name:literal, $default:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $engine;

        impl $engine {
            /// Create a new engine.
            pub fn new() -> Self {
                Self
            }
        }

        impl PricingEngine for $engine {
            type Resolution = FdGridSize;

            fn name(&self) -> &'static str {
                $name
            }

            fn default_resolution(&self) -> FdGridSize {
                $default
            }

            fn price(&self, option: &VanillaOption, grid: &FdGridSize) -> Result<Price> {
                price_on_grid($name, $scheme, option, grid)
            }
        }
    };
}

fd_engine!(
    /// Explicit finite-difference engine.
    ///
    /// Each step is a direct three-point update of the next time layer.
    /// Conditionally stable; see the module docs for the automatic
    /// refinement.
    FdExplicitEngine,
    FdmScheme::Explicit,
    "fd-explicit",
    FdGridSize::new(50, 50)
);

fd_engine!(
    /// Fully implicit finite-difference engine.
    ///
    /// Solves one tridiagonal system per step; unconditionally stable,
    /// first order in time.
    FdImplicitEngine,
    FdmScheme::Implicit,
    "fd-implicit",
    FdGridSize::default()
);

fd_engine!(
    /// Crank-Nicolson finite-difference engine.
    ///
    /// Averages the explicit and implicit operators (θ = ½); second order in
    /// time.
    FdCrankNicolsonEngine,
    FdmScheme::CrankNicolson,
    "fd-crank-nicolson",
    FdGridSize::default()
);
