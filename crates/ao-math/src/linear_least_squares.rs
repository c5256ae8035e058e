//! General linear least-squares regression.
//!
//! Uses SVD to solve the linear regression problem
//! $\mathbf{y} = \mathbf{A}\,\boldsymbol{\beta} + \boldsymbol{\varepsilon}$,
//! where $\mathbf{A}$ is the design matrix built from basis functions.
//!
//! [`PolynomialRegression`] is the specialisation used by Longstaff-Schwartz
//! Monte Carlo to approximate continuation values from simulated cashflows.

use ao_core::{
    errors::{Error, Result},
    Real,
};
use nalgebra::{DMatrix, DVector};

/// Coefficients of a linear least-squares fit `y ≈ A β`.
#[derive(Debug, Clone)]
pub struct LinearLeastSquaresRegression {
    coefficients: Vec<Real>,
}

impl LinearLeastSquaresRegression {
    /// Fit the model given a pre-built design matrix.
    ///
    /// * `a` — the *n × m* design matrix, `A_ij = φ_j(x_i)`.
    /// * `y` — dependent variable observations (length *n*).
    ///
    /// Singular values below `max(n, m) · ε · s_max` are discarded, so
    /// rank-deficient designs yield the minimum-norm solution.
    pub fn from_design_matrix(a: &DMatrix<Real>, y: &[Real]) -> Result<Self> {
        let n = a.nrows();
        let m = a.ncols();
        if y.len() != n {
            return Err(Error::InvalidArgument(
                "y length must equal number of rows of A".into(),
            ));
        }
        if n < m {
            return Err(Error::InvalidArgument(
                "more basis functions than data points".into(),
            ));
        }

        let svd = a.clone().svd(true, true);
        let u = svd
            .u
            .ok_or_else(|| Error::Runtime("SVD did not produce U".into()))?;
        let v_t = svd
            .v_t
            .ok_or_else(|| Error::Runtime("SVD did not produce Vt".into()))?;
        let sv = svd.singular_values;

        let sv_max = sv.iter().copied().fold(0.0_f64, f64::max);
        let threshold = n.max(m) as Real * f64::EPSILON * sv_max;

        // β = V * diag(1/sᵢ) * Uᵀ * y  (only for sᵢ > threshold)
        let ut_y = u.transpose() * DVector::from_column_slice(y);

        let mut coefficients = vec![0.0; m];
        for (k, &s) in sv.iter().enumerate() {
            if s > threshold {
                let ratio = ut_y[k] / s;
                for (j, c) in coefficients.iter_mut().enumerate() {
                    *c += ratio * v_t[(k, j)];
                }
            }
        }

        Ok(Self { coefficients })
    }

    /// Fitted coefficients β, one per design-matrix column.
    pub fn coefficients(&self) -> &[Real] {
        &self.coefficients
    }
}

// ─── Polynomial regression ────────────────────────────────────────────────────

/// Least-squares polynomial fit of a given degree.
///
/// Observations are mapped affinely onto `[-1, 1]` before building the
/// monomial basis, which keeps the design matrix well conditioned for raw
/// asset prices. When every `x` is identical the mapped variable is zero and
/// the fit reduces to the sample mean.
#[derive(Debug, Clone)]
pub struct PolynomialRegression {
    coefficients: Vec<Real>,
    center: Real,
    half_width: Real,
}

impl PolynomialRegression {
    /// Fit a degree-`degree` polynomial to `(x, y)`.
    ///
    /// # Errors
    /// Fails when the lengths differ or there are fewer than `degree + 1`
    /// observations.
    pub fn fit(x: &[Real], y: &[Real], degree: usize) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::InvalidArgument(
                "x and y must have the same length".into(),
            ));
        }
        if x.len() < degree + 1 {
            return Err(Error::InvalidArgument(format!(
                "{} observations cannot determine a degree-{degree} polynomial",
                x.len()
            )));
        }

        let lo = x.iter().copied().fold(Real::INFINITY, Real::min);
        let hi = x.iter().copied().fold(Real::NEG_INFINITY, Real::max);
        let mut fit = Self {
            coefficients: Vec::new(),
            center: 0.5 * (lo + hi),
            half_width: 0.5 * (hi - lo),
        };

        let a = DMatrix::from_fn(x.len(), degree + 1, |i, j| {
            fit.map_to_window(x[i]).powi(j as i32)
        });
        fit.coefficients = LinearLeastSquaresRegression::from_design_matrix(&a, y)?
            .coefficients()
            .to_vec();
        Ok(fit)
    }

    /// Degree of the fitted polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Coefficients in the mapped variable, lowest order first.
    pub fn coefficients(&self) -> &[Real] {
        &self.coefficients
    }

    /// Evaluate the fitted polynomial at `x`.
    pub fn value(&self, x: Real) -> Real {
        let t = self.map_to_window(x);
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * t + c)
    }

    fn map_to_window(&self, x: Real) -> Real {
        if self.half_width > 0.0 {
            (x - self.center) / self.half_width
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn linear_fit() {
        // y = 2 + 3x
        let x: Vec<Real> = (0..20).map(|i| i as Real).collect();
        let y: Vec<Real> = x.iter().map(|&xi| 2.0 + 3.0 * xi).collect();
        let a = DMatrix::from_fn(x.len(), 2, |i, j| x[i].powi(j as i32));

        let reg = LinearLeastSquaresRegression::from_design_matrix(&a, &y).unwrap();
        let c = reg.coefficients();
        assert_abs_diff_eq!(c[0], 2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(c[1], 3.0, epsilon = 1e-10);
    }

    #[test]
    fn rejects_underdetermined_and_mismatched_designs() {
        let wide = DMatrix::from_element(1, 2, 1.0);
        assert!(LinearLeastSquaresRegression::from_design_matrix(&wide, &[2.0]).is_err());
        let tall = DMatrix::from_element(3, 1, 1.0);
        assert!(LinearLeastSquaresRegression::from_design_matrix(&tall, &[1.0, 2.0]).is_err());
    }

    #[test]
    fn polynomial_recovers_quadratic_on_price_scale() {
        // y = 1 - 2x + 0.5x² sampled around typical asset levels
        let x: Vec<Real> = (0..40).map(|i| 80.0 + i as Real).collect();
        let y: Vec<Real> = x.iter().map(|&xi| 1.0 - 2.0 * xi + 0.5 * xi * xi).collect();

        let fit = PolynomialRegression::fit(&x, &y, 2).unwrap();
        assert_eq!(fit.degree(), 2);
        for &xi in &[80.0, 95.5, 119.0] {
            let expected = 1.0 - 2.0 * xi + 0.5 * xi * xi;
            assert_abs_diff_eq!(fit.value(xi), expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn polynomial_with_constant_abscissa_returns_mean() {
        let x = [5.0; 6];
        let y = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let fit = PolynomialRegression::fit(&x, &y, 2).unwrap();
        assert_abs_diff_eq!(fit.value(5.0), 3.5, epsilon = 1e-10);
    }

    #[test]
    fn polynomial_needs_degree_plus_one_points() {
        assert!(PolynomialRegression::fit(&[1.0, 2.0], &[1.0, 2.0], 2).is_err());
        assert!(PolynomialRegression::fit(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], 2).is_ok());
    }
}
