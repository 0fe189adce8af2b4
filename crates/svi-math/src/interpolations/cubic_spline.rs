//! Cubic spline through scattered sample points.
//!
//! Configuration solves one tridiagonal system for the second derivative
//! `M_i` at every sample.  Interior rows express continuity of the first
//! derivative,
//!
//! ```text
//! h_{i-1}/6 · M_{i-1} + (h_{i-1} + h_i)/3 · M_i + h_i/6 · M_{i+1}
//!     = (y_{i+1} - y_i)/h_i - (y_i - y_{i-1})/h_{i-1}
//! ```
//!
//! and the end rows either fix `M = 0` (natural spline) or match the given
//! end slopes (clamped spline).
//!
//! Evaluation finds the bracketing interval `[x_lo, x_hi]` by a linear scan
//! and returns
//!
//! ```text
//! A·y_lo + B·y_hi + ((A³ - A)·M_lo + (B³ - B)·M_hi)·h²/6
//! ```
//!
//! with `A = (x_hi - x)/h`, `B = (x - x_lo)/h`.  Outside the sample range the
//! first or last cubic piece is extended.
//!
//! The spline is generic over the point type's float width; `f64` is the
//! default and `f32` point lists work the same way.

use std::fmt;

use num_traits::Float;
use svi_core::{ensure, trace_debug, trace_warn, Error, Real, Result, NEGLIGIBLE};

use crate::parameters::CubicSplineParameters;
use crate::point::Point;
use crate::tridiagonal::solve_tridiagonal;

/// Cubic spline interpolator.
///
/// Starts unconfigured; [`set_parameters`](Self::set_parameters) (or
/// [`configure`](Self::configure)) validates the sampling points and computes
/// the second derivatives, which are cached until the next configuration.
#[derive(Debug, Clone)]
pub struct CubicSplineInterpolator<F: Float = Real> {
    params: CubicSplineParameters<F>,
    second_derivatives: Vec<F>,
}

impl<F: Float> Default for CubicSplineInterpolator<F> {
    fn default() -> Self {
        Self {
            params: CubicSplineParameters::default(),
            second_derivatives: Vec::new(),
        }
    }
}

impl<F: Float + fmt::Debug> CubicSplineInterpolator<F> {
    /// Unconfigured spline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Spline configured from `params`.
    ///
    /// # Errors
    /// See [`set_parameters`](Self::set_parameters).
    pub fn with_parameters(params: CubicSplineParameters<F>) -> Result<Self> {
        let mut spline = Self::new();
        spline.set_parameters(params)?;
        Ok(spline)
    }

    /// Current parameters.
    pub fn parameters(&self) -> &CubicSplineParameters<F> {
        &self.params
    }

    /// Replace the parameters and recompute the second derivatives.
    ///
    /// # Errors
    /// * `Precondition` with fewer than three points or x values that are not
    ///   strictly increasing.
    /// * `NumericalInstability` if the coefficient system cannot be solved.
    ///
    /// On error the spline is left unconfigured.
    pub fn set_parameters(&mut self, params: CubicSplineParameters<F>) -> Result<()> {
        self.params = params;
        self.second_derivatives.clear();
        match second_derivatives(&self.params) {
            Ok(m) => {
                trace_debug!(
                    "spline coefficients recomputed for {} points (natural: {})",
                    m.len(),
                    self.params.use_natural_derivatives
                );
                self.second_derivatives = m;
                Ok(())
            }
            Err(e) => {
                trace_warn!("spline configuration rejected: {e}");
                Err(e)
            }
        }
    }

    /// Configure from sampling points and end conditions.
    ///
    /// With `natural` set the two slopes are ignored.
    pub fn configure(
        &mut self,
        points: Vec<Point<F>>,
        derivative_at_first: F,
        derivative_at_last: F,
        natural: bool,
    ) -> Result<()> {
        self.set_parameters(CubicSplineParameters {
            sampling_points: points,
            derivative_at_first_point: derivative_at_first,
            derivative_at_last_point: derivative_at_last,
            use_natural_derivatives: natural,
        })
    }

    /// Whether coefficients are available for queries.
    pub fn is_configured(&self) -> bool {
        !self.second_derivatives.is_empty()
    }

    /// Second derivative of the spline at each sampling point.
    ///
    /// Empty while unconfigured.
    pub fn second_derivatives(&self) -> &[F] {
        &self.second_derivatives
    }

    /// Value of the spline at `x`.
    ///
    /// # Errors
    /// `NotConfigured` if no valid sampling points were set.
    pub fn apply(&self, x: F) -> Result<F> {
        self.evaluate(&self.params.sampling_points, x)
    }

    /// Replace the `y` of every point by the spline value at its `x`.
    pub fn apply_in_place(&self, points: &mut [Point<F>]) -> Result<()> {
        for p in points.iter_mut() {
            p.y = self.apply(p.x)?;
        }
        Ok(())
    }

    /// Value at `x` of the spline through `points` using the cached second
    /// derivatives.
    ///
    /// `points` is normally the configured sampling list; any list of the
    /// same length with increasing x is accepted.
    ///
    /// # Errors
    /// * `NotConfigured` if the spline has no coefficients.
    /// * `Precondition` if `points` does not have one entry per coefficient.
    pub fn evaluate(&self, points: &[Point<F>], x: F) -> Result<F> {
        if !self.is_configured() {
            return Err(Error::NotConfigured(
                "cubic spline has no valid sampling points".into(),
            ));
        }
        let n = self.second_derivatives.len();
        ensure!(
            points.len() == n,
            "expected {n} points to match the spline coefficients, got {}",
            points.len()
        );

        let mut hi = 1;
        while hi < n - 1 && points[hi].x <= x {
            hi += 1;
        }
        let lo = hi - 1;
        let (p_lo, p_hi) = (points[lo], points[hi]);
        if p_lo.x == x {
            return Ok(p_lo.y);
        }
        if p_hi.x == x {
            return Ok(p_hi.y);
        }

        let mut h = p_hi.x - p_lo.x;
        if h == F::zero() {
            h = negligible();
        }
        let a = (p_hi.x - x) / h;
        let b = (x - p_lo.x) / h;
        let m = &self.second_derivatives;
        Ok(a * p_lo.y
            + b * p_hi.y
            + ((a * a * a - a) * m[lo] + (b * b * b - b) * m[hi]) * (h * h) / whole::<F>(6))
    }
}

/// `n` as `F`, summed from ones.
#[inline]
fn whole<F: Float>(n: u8) -> F {
    (0..n).fold(F::zero(), |acc, _| acc + F::one())
}

/// [`NEGLIGIBLE`] in `F`, or the smallest normal value where it underflows.
fn negligible<F: Float>() -> F {
    F::from(NEGLIGIBLE)
        .unwrap_or_else(F::zero)
        .max(F::min_positive_value())
}

/// Validate the sampling points and solve for the second derivatives.
fn second_derivatives<F: Float + fmt::Debug>(params: &CubicSplineParameters<F>) -> Result<Vec<F>> {
    let pts = &params.sampling_points;
    let n = pts.len();
    ensure!(n >= 3, "cubic spline needs at least 3 points, got {n}");
    if let Some(i) = (1..n).find(|&i| pts[i].x <= pts[i - 1].x) {
        return Err(Error::Precondition(format!(
            "sampling points must have strictly increasing x: x[{}] = {:?} is followed by x[{i}] = {:?}",
            i - 1,
            pts[i - 1].x,
            pts[i].x
        )));
    }

    let (three, six) = (whole::<F>(3), whole::<F>(6));
    let mut lower = vec![F::zero(); n];
    let mut diag = vec![F::zero(); n];
    let mut upper = vec![F::zero(); n];
    let mut rhs = vec![F::zero(); n];

    let slope = |i: usize| (pts[i + 1].y - pts[i].y) / (pts[i + 1].x - pts[i].x);

    for i in 1..n - 1 {
        let h0 = pts[i].x - pts[i - 1].x;
        let h1 = pts[i + 1].x - pts[i].x;
        lower[i] = h0 / six;
        diag[i] = (h0 + h1) / three;
        upper[i] = h1 / six;
        rhs[i] = slope(i) - slope(i - 1);
    }

    if params.use_natural_derivatives {
        diag[0] = F::one();
        diag[n - 1] = F::one();
    } else {
        let h = pts[1].x - pts[0].x;
        diag[0] = h / three;
        upper[0] = h / six;
        rhs[0] = slope(0) - params.derivative_at_first_point;

        let h = pts[n - 1].x - pts[n - 2].x;
        lower[n - 1] = h / six;
        diag[n - 1] = h / three;
        rhs[n - 1] = params.derivative_at_last_point - slope(n - 2);
    }

    solve_tridiagonal(&lower, &diag, &upper, &rhs)
}
