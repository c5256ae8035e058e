//! 1D interpolation trait and the linear scheme used to read prices off
//! finite-difference grids.

use ao_core::{errors::Result, Real};

/// A 1D interpolation function `f: R → R` defined by a set of known points.
pub trait Interpolation1D: std::fmt::Debug {
    /// Evaluate the interpolation at `x`.
    fn value(&self, x: Real) -> Real;

    /// Return the lower bound of the interpolation domain.
    fn x_min(&self) -> Real;

    /// Return the upper bound of the interpolation domain.
    fn x_max(&self) -> Real;
}

// ── Linear ────────────────────────────────────────────────────────────────────

/// Linear interpolation.
///
/// `f(x) = y[i] + (y[i+1] - y[i]) * (x - x[i]) / (x[i+1] - x[i])`
///
/// Outside `[x_min, x_max]` the end values are held flat.
#[derive(Debug, Clone)]
pub struct LinearInterpolation {
    xs: Vec<Real>,
    ys: Vec<Real>,
}

impl LinearInterpolation {
    /// Construct a linear interpolation from sorted `xs` and corresponding `ys`.
    ///
    /// # Errors
    /// Returns an error if the slices have different lengths or fewer than 2 points.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        ao_core::ensure!(xs.len() >= 2, "need at least 2 points for interpolation");
        ao_core::ensure!(
            xs.len() == ys.len(),
            "xs and ys must have the same length"
        );
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    fn locate(&self, x: Real) -> usize {
        // Binary search for the interval containing x
        let n = self.xs.len();
        if x <= self.xs[0] {
            return 0;
        }
        if x >= self.xs[n - 1] {
            return n - 2;
        }
        let mut lo = 0;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.xs[mid] <= x {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    }
}

impl Interpolation1D for LinearInterpolation {
    fn x_min(&self) -> Real {
        self.xs[0]
    }

    fn x_max(&self) -> Real {
        self.xs[self.xs.len() - 1]
    }

    fn value(&self, x: Real) -> Real {
        if x <= self.x_min() {
            return self.ys[0];
        }
        if x >= self.x_max() {
            return self.ys[self.ys.len() - 1];
        }
        let i = self.locate(x);
        let dx = self.xs[i + 1] - self.xs[i];
        if dx.abs() < f64::EPSILON {
            return self.ys[i];
        }
        self.ys[i] + (x - self.xs[i]) * (self.ys[i + 1] - self.ys[i]) / dx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn interpolates_between_nodes() {
        let li = LinearInterpolation::new(&[0.0, 1.0, 2.0], &[0.0, 10.0, 30.0]).unwrap();
        assert_abs_diff_eq!(li.value(0.5), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(li.value(1.5), 20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(li.value(2.0), 30.0, epsilon = 1e-12);
    }

    #[test]
    fn holds_end_values_outside_range() {
        let li = LinearInterpolation::new(&[0.0, 1.0], &[3.0, 5.0]).unwrap();
        assert_abs_diff_eq!(li.value(-1.0), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(li.value(7.0), 5.0, epsilon = 1e-12);
        assert_eq!((li.x_min(), li.x_max()), (0.0, 1.0));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(LinearInterpolation::new(&[0.0], &[1.0]).is_err());
        assert!(LinearInterpolation::new(&[0.0, 1.0], &[1.0]).is_err());
    }

    proptest::proptest! {
        #[test]
        fn stays_within_neighbouring_values(
            ys in proptest::collection::vec(-100.0f64..100.0, 2..20),
            t in 0.0f64..1.0,
        ) {
            let xs: Vec<Real> = (0..ys.len()).map(|i| i as Real).collect();
            let li = LinearInterpolation::new(&xs, &ys).unwrap();
            let x = t * (ys.len() - 1) as Real;
            let i = (x.floor() as usize).min(ys.len() - 2);
            let lo = ys[i].min(ys[i + 1]);
            let hi = ys[i].max(ys[i + 1]);
            let v = li.value(x);
            proptest::prop_assert!(v >= lo - 1e-9 && v <= hi + 1e-9);
        }
    }
}
