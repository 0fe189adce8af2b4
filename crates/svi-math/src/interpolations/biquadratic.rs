//! Three-sample parabolic interpolation.
//!
//! The parabola runs through the sample nearest to the query and its two
//! neighbors.  With `i = ⌊x⌋` and `f = x - i`, the triple starts at `i - 1`
//! when `f <= 0.5` (offset `f` from the centre) and at `i` otherwise (offset
//! `f - 1`).  For samples `y0, y1, y2` the value is `(a·f + b)·f + c` with
//! `a = (y0 + y2)/2 - y1`, `b = (y2 - y0)/2`, `c = y1`.
//!
//! The 2-D form is separable over the 3×3 neighborhood.

use svi_core::{Real, Result, Sample};

use super::{split_position, ScalarValuedInterpolation, SourceBinding, UseSource};
use crate::boundary::{value_at, value_at_2d, BoundaryType};
use crate::matrix::Matrix;
use crate::parameters::InterpolatorParameters;
use crate::vector::Vector;

/// Biquadratic interpolator with a configurable boundary policy.
#[derive(Debug, Clone)]
pub struct BiquadraticInterpolator<'a, T: Sample> {
    params: InterpolatorParameters,
    source: SourceBinding<'a, T>,
}

impl<T: Sample> Default for BiquadraticInterpolator<'_, T> {
    fn default() -> Self {
        Self::new(BoundaryType::default())
    }
}

impl<'a, T: Sample> BiquadraticInterpolator<'a, T> {
    /// Interpolator with the given boundary policy.
    pub fn new(boundary_type: BoundaryType) -> Self {
        Self {
            params: InterpolatorParameters::new(boundary_type),
            source: SourceBinding::default(),
        }
    }

    /// Current parameters.
    pub fn parameters(&self) -> &InterpolatorParameters {
        &self.params
    }

    /// Replace the parameters; only the boundary policy is read.
    pub fn set_parameters(&mut self, params: InterpolatorParameters) -> Result<()> {
        self.params = params;
        Ok(())
    }

    /// Change only the boundary policy.
    pub fn set_boundary_type(&mut self, boundary_type: BoundaryType) {
        self.params.boundary_type = boundary_type;
    }
}

/// First sample of the triple around `x` and the offset from its centre.
#[inline]
fn triple(x: Real) -> (isize, Real) {
    let (i, f) = split_position(x);
    if f <= 0.5 {
        (i - 1, f)
    } else {
        (i, f - 1.0)
    }
}

#[inline]
fn parabola(f: Real, y0: Real, y1: Real, y2: Real) -> Real {
    let a = 0.5 * (y0 + y2) - y1;
    let b = 0.5 * (y2 - y0);
    (a * f + b) * f + y1
}

#[inline]
fn fits(start: isize, len: usize) -> bool {
    start >= 0 && (start as usize) + 2 < len
}

impl<T: Sample> ScalarValuedInterpolation<T> for BiquadraticInterpolator<'_, T> {
    fn boundary_type(&self) -> BoundaryType {
        self.params.boundary_type
    }

    fn interpolate(&self, src: &Vector<T>, x: Real) -> T {
        let (start, f) = triple(x);
        let [y0, y1, y2] = if fits(start, src.size()) {
            let s = start as usize;
            [src.at(s), src.at(s + 1), src.at(s + 2)]
        } else {
            let boundary = self.params.boundary_type;
            if boundary == BoundaryType::NoBoundary || src.is_empty() {
                return T::default();
            }
            [0, 1, 2].map(|k| value_at(src, start + k, boundary))
        };
        T::from_real(parabola(f, y0.to_real(), y1.to_real(), y2.to_real()))
    }

    fn interpolate_2d(&self, src: &Matrix<T>, row: Real, col: Real) -> T {
        let (ry, fy) = triple(row);
        let (cx, fx) = triple(col);

        let rows: [[T; 3]; 3] = if fits(ry, src.rows()) && fits(cx, src.columns()) {
            let (ry, cx) = (ry as usize, cx as usize);
            [0, 1, 2].map(|r| [0, 1, 2].map(|c| src.at(ry + r, cx + c)))
        } else {
            let boundary = self.params.boundary_type;
            if boundary == BoundaryType::NoBoundary || src.is_empty() {
                return T::default();
            }
            [0, 1, 2].map(|r| [0, 1, 2].map(|c| value_at_2d(src, ry + r, cx + c, boundary)))
        };

        let [p0, p1, p2] =
            rows.map(|[a, b, c]| parabola(fx, a.to_real(), b.to_real(), c.to_real()));
        T::from_real(parabola(fy, p0, p1, p2))
    }
}

impl<'a, T: Sample> UseSource<'a, T> for BiquadraticInterpolator<'a, T> {
    fn binding(&self) -> &SourceBinding<'a, T> {
        &self.source
    }

    fn binding_mut(&mut self) -> &mut SourceBinding<'a, T> {
        &mut self.source
    }
}
