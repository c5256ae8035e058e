//! Tridiagonal matrix operator with a Thomas-algorithm solver.

use ao_core::{ensure, errors::Result, fail, Real};

/// A tridiagonal matrix operator.
///
/// Stores the lower, diagonal, and upper bands. Used for 1-D finite difference
/// discretisations of second-order PDEs.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalOperator {
    /// Lower diagonal (index 0 unused — starts from row 1).
    pub lower: Vec<Real>,
    /// Main diagonal.
    pub diag: Vec<Real>,
    /// Upper diagonal (last index unused — ends at row n−2).
    pub upper: Vec<Real>,
}

impl TridiagonalOperator {
    /// Create a zero tridiagonal operator of size `n`.
    pub fn new(n: usize) -> Self {
        Self {
            lower: vec![0.0; n],
            diag: vec![0.0; n],
            upper: vec![0.0; n],
        }
    }

    /// Create the identity operator of size `n`.
    pub fn identity(n: usize) -> Self {
        Self {
            lower: vec![0.0; n],
            diag: vec![1.0; n],
            upper: vec![0.0; n],
        }
    }

    /// Size (number of rows/columns).
    pub fn size(&self) -> usize {
        self.diag.len()
    }

    /// Apply the operator: `y = A · x`.
    pub fn apply(&self, x: &[Real]) -> Result<Vec<Real>> {
        let n = self.size();
        ensure!(x.len() == n, "operator of size {n} applied to vector of length {}", x.len());
        let y = (0..n)
            .map(|i| {
                let mut v = self.diag[i] * x[i];
                if i > 0 {
                    v += self.lower[i] * x[i - 1];
                }
                if i + 1 < n {
                    v += self.upper[i] * x[i + 1];
                }
                v
            })
            .collect();
        Ok(y)
    }

    /// Solve `A · x = rhs` using the Thomas algorithm (LU decomposition
    /// for tridiagonal systems).
    ///
    /// No pivoting is done; the systems built by the finite-difference
    /// schemes are diagonally dominant.
    ///
    /// # Errors
    /// Fails on a size mismatch or a zero pivot.
    pub fn solve(&self, rhs: &[Real]) -> Result<Vec<Real>> {
        let n = self.size();
        ensure!(rhs.len() == n, "operator of size {n} solved against rhs of length {}", rhs.len());
        if n == 0 {
            return Ok(Vec::new());
        }

        // Forward sweep
        let mut c_prime = vec![0.0; n];
        let mut d_prime = vec![0.0; n];

        let m = pivot(self.diag[0], 0)?;
        c_prime[0] = self.upper[0] / m;
        d_prime[0] = rhs[0] / m;

        for i in 1..n {
            let m = pivot(self.diag[i] - self.lower[i] * c_prime[i - 1], i)?;
            if i < n - 1 {
                c_prime[i] = self.upper[i] / m;
            }
            d_prime[i] = (rhs[i] - self.lower[i] * d_prime[i - 1]) / m;
        }

        // Back substitution
        let mut x = vec![0.0; n];
        x[n - 1] = d_prime[n - 1];
        for i in (0..n - 1).rev() {
            x[i] = d_prime[i] - c_prime[i] * x[i + 1];
        }

        Ok(x)
    }
}

fn pivot(m: Real, row: usize) -> Result<Real> {
    if m == 0.0 || !m.is_finite() {
        fail!("tridiagonal solve: singular pivot {m} at row {row}");
    }
    Ok(m)
}
