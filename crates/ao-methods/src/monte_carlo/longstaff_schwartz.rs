//! Least-squares Monte Carlo (Longstaff & Schwartz, 2001).
//!
//! Cashflows start at the terminal payoff and are rolled back one step at a
//! time. At each exercise date the discounted cashflows of in-the-money paths
//! are regressed on the asset level; a path exercises when its immediate
//! payoff beats the fitted continuation value.

use super::PathEnsemble;
use ao_core::{errors::Result, Rate, Real};
use ao_math::{PolynomialRegression, Statistics};
use tracing::debug;

/// Run the backward induction over `ensemble`.
///
/// Returns the statistics of the per-path cashflows discounted to `t = 0`;
/// their mean is the option value and their error estimate the Monte Carlo
/// standard error.
///
/// With `early_exercise == false` no exercise decisions are taken and the
/// result is the plain European estimator.
///
/// # Errors
/// Propagates regression failures.
pub fn longstaff_schwartz(
    ensemble: &PathEnsemble,
    payoff: &dyn Fn(Real) -> Real,
    rate: Rate,
    poly_degree: usize,
    early_exercise: bool,
) -> Result<Statistics> {
    let n = ensemble.steps();
    let paths = ensemble.paths();
    let discount = (-rate * ensemble.dt()).exp();

    let mut cashflows: Vec<Real> = (0..paths).map(|p| payoff(ensemble.value(p, n))).collect();

    for t in (1..n).rev() {
        for c in &mut cashflows {
            *c *= discount;
        }
        if !early_exercise {
            continue;
        }

        let itm: Vec<usize> = (0..paths)
            .filter(|&p| payoff(ensemble.value(p, t)) > 0.0)
            .collect();
        if itm.len() < poly_degree + 1 {
            debug!(
                step = t,
                in_the_money = itm.len(),
                poly_degree,
                "too few in-the-money paths, skipping regression"
            );
            continue;
        }

        let x: Vec<Real> = itm.iter().map(|&p| ensemble.value(p, t)).collect();
        let y: Vec<Real> = itm.iter().map(|&p| cashflows[p]).collect();
        let continuation = PolynomialRegression::fit(&x, &y, poly_degree)?;

        for (&p, &s) in itm.iter().zip(&x) {
            let exercise = payoff(s);
            if exercise > continuation.value(s) {
                cashflows[p] = exercise;
            }
        }
    }

    let mut stats = Statistics::new();
    stats.extend(cashflows.into_iter().map(|c| c * discount));
    Ok(stats)
}
