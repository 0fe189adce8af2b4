//! Tridiagonal and cyclic-tridiagonal linear systems.
//!
//! * [`solve_tridiagonal`]: Thomas algorithm (forward elimination and back
//!   substitution, no pivoting).
//! * [`solve_cyclic_tridiagonal`]: the same system with the two wrap-around
//!   corner entries, reduced to two plain solves by a Sherman-Morrison
//!   correction.
//! * [`TridiagonalOperator`]: the banded matrix itself, with `apply` for
//!   matrix-vector products.
//!
//! The bands are stored full-length: `lower[0]` and `upper[n-1]` are ignored.
//! Diagonal dominance is assumed; a zero pivot is reported as
//! [`Error::NumericalInstability`] and no partial solution is returned.

use num_traits::Float;
use svi_core::{ensure, trace_warn, Error, Real, Result};

/// Solve `A x = r` for the tridiagonal `A` with sub-diagonal `a`, diagonal
/// `b` and super-diagonal `c`.
///
/// # Errors
/// * `Precondition` if the system is empty or the band lengths differ.
/// * `NumericalInstability` if `b[0] == 0` or a later pivot vanishes.
pub fn solve_tridiagonal<F: Float>(a: &[F], b: &[F], c: &[F], r: &[F]) -> Result<Vec<F>> {
    let n = r.len();
    ensure!(n > 0, "tridiagonal system must not be empty");
    ensure!(
        a.len() == n && b.len() == n && c.len() == n,
        "band lengths ({}, {}, {}) must equal the system size {n}",
        a.len(),
        b.len(),
        c.len()
    );
    if b[0] == F::zero() {
        trace_warn!("tridiagonal solve: leading diagonal entry is zero");
        return Err(Error::NumericalInstability(
            "leading diagonal entry is zero".into(),
        ));
    }

    let mut gam = vec![F::zero(); n];
    let mut x = vec![F::zero(); n];

    // Forward elimination
    let mut bet = b[0];
    x[0] = r[0] / bet;
    for j in 1..n {
        gam[j] = c[j - 1] / bet;
        bet = b[j] - a[j] * gam[j];
        if bet == F::zero() {
            trace_warn!("tridiagonal solve: zero pivot at row {j}");
            return Err(Error::NumericalInstability(format!(
                "zero pivot at row {j}"
            )));
        }
        x[j] = (r[j] - a[j] * x[j - 1]) / bet;
    }

    // Back substitution
    for j in (0..n - 1).rev() {
        let next = x[j + 1];
        x[j] = x[j] - gam[j + 1] * next;
    }

    Ok(x)
}

/// Solve the cyclic system: the tridiagonal `A` plus `top_right` at
/// `(0, n-1)` and `bottom_left` at `(n-1, 0)`.
///
/// With `s = -b[0]` the diagonal is modified to `b[0] - s` and
/// `b[n-1] - bottom_left * top_right / s`; the modified system is solved for
/// `r` and for the correction vector `(s, 0, …, 0, bottom_left)`, and the two
/// solutions are combined.
///
/// # Errors
/// * `Precondition` if `n < 3` or the band lengths differ.
/// * `NumericalInstability` on a zero pivot in either inner solve or a
///   singular correction.
pub fn solve_cyclic_tridiagonal<F: Float>(
    a: &[F],
    b: &[F],
    c: &[F],
    top_right: F,
    bottom_left: F,
    r: &[F],
) -> Result<Vec<F>> {
    let n = r.len();
    ensure!(n >= 3, "cyclic tridiagonal system needs n >= 3, got {n}");
    ensure!(
        a.len() == n && b.len() == n && c.len() == n,
        "band lengths ({}, {}, {}) must equal the system size {n}",
        a.len(),
        b.len(),
        c.len()
    );

    let s = -b[0];
    if s == F::zero() {
        trace_warn!("cyclic tridiagonal solve: leading diagonal entry is zero");
        return Err(Error::NumericalInstability(
            "leading diagonal entry is zero".into(),
        ));
    }

    let mut bb = b.to_vec();
    bb[0] = b[0] - s;
    bb[n - 1] = b[n - 1] - bottom_left * top_right / s;

    let mut x = solve_tridiagonal(a, &bb, c, r)?;

    let mut u = vec![F::zero(); n];
    u[0] = s;
    u[n - 1] = bottom_left;
    let z = solve_tridiagonal(a, &bb, c, &u)?;

    let denom = F::one() + z[0] + top_right * z[n - 1] / s;
    if denom == F::zero() {
        trace_warn!("cyclic tridiagonal solve: singular correction");
        return Err(Error::NumericalInstability(
            "singular Sherman-Morrison correction".into(),
        ));
    }
    let fact = (x[0] + top_right * x[n - 1] / s) / denom;
    for (xi, zi) in x.iter_mut().zip(&z) {
        *xi = *xi - fact * *zi;
    }

    Ok(x)
}

/// A tridiagonal matrix operator.
///
/// Stores the lower, diagonal, and upper bands, all of length `n`.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalOperator<F: Float = Real> {
    /// Lower diagonal (index 0 unused, starts from row 1).
    pub lower: Vec<F>,
    /// Main diagonal.
    pub diag: Vec<F>,
    /// Upper diagonal (last index unused, ends at row n-2).
    pub upper: Vec<F>,
}

impl<F: Float> TridiagonalOperator<F> {
    /// Create a zero tridiagonal operator of size `n`.
    pub fn new(n: usize) -> Self {
        Self {
            lower: vec![F::zero(); n],
            diag: vec![F::zero(); n],
            upper: vec![F::zero(); n],
        }
    }

    /// Build from explicit bands.
    ///
    /// # Errors
    /// Returns an error if the bands differ in length.
    pub fn from_bands(lower: Vec<F>, diag: Vec<F>, upper: Vec<F>) -> Result<Self> {
        ensure!(
            lower.len() == diag.len() && upper.len() == diag.len(),
            "bands must have equal length ({}, {}, {})",
            lower.len(),
            diag.len(),
            upper.len()
        );
        Ok(Self { lower, diag, upper })
    }

    /// Size (number of rows/columns).
    pub fn size(&self) -> usize {
        self.diag.len()
    }

    /// Apply the operator: `y = A · x`.
    ///
    /// # Panics
    /// Panics if `x.len() != self.size()`.
    pub fn apply(&self, x: &[F]) -> Vec<F> {
        let n = self.size();
        assert_eq!(x.len(), n);
        let mut y = vec![F::zero(); n];
        if n == 0 {
            return y;
        }
        if n == 1 {
            y[0] = self.diag[0] * x[0];
            return y;
        }
        y[0] = self.diag[0] * x[0] + self.upper[0] * x[1];
        for i in 1..n - 1 {
            y[i] = self.lower[i] * x[i - 1] + self.diag[i] * x[i] + self.upper[i] * x[i + 1];
        }
        y[n - 1] = self.lower[n - 1] * x[n - 2] + self.diag[n - 1] * x[n - 1];
        y
    }

    /// Apply the operator augmented with corner entries `top_right` at
    /// `(0, n-1)` and `bottom_left` at `(n-1, 0)`.
    ///
    /// # Panics
    /// Panics if `x.len() != self.size()` or the size is below 3.
    pub fn apply_cyclic(&self, top_right: F, bottom_left: F, x: &[F]) -> Vec<F> {
        let n = self.size();
        assert!(n >= 3, "cyclic operator needs n >= 3");
        let mut y = self.apply(x);
        y[0] = y[0] + top_right * x[n - 1];
        y[n - 1] = y[n - 1] + bottom_left * x[0];
        y
    }

    /// Solve `A · x = rhs` using the Thomas algorithm.
    pub fn solve(&self, rhs: &[F]) -> Result<Vec<F>> {
        solve_tridiagonal(&self.lower, &self.diag, &self.upper, rhs)
    }

    /// Solve the cyclic system with the given corner entries.
    pub fn solve_cyclic(&self, top_right: F, bottom_left: F, rhs: &[F]) -> Result<Vec<F>> {
        solve_cyclic_tridiagonal(
            &self.lower,
            &self.diag,
            &self.upper,
            top_right,
            bottom_left,
            rhs,
        )
    }
}
