//! Bilinear interpolation of equally spaced samples.
//!
//! In 1-D the value at `x = i + f` is `(1-f)·v[i] + f·v[i+1]`; in 2-D the
//! same rule is applied along columns and then along rows over the 2×2
//! neighborhood `(⌊row⌋ + {0,1}, ⌊col⌋ + {0,1})`.
//!
//! The interior is served directly from the source.  Near the edges each
//! boundary policy has its own branch, so the common in-range query never
//! pays for boundary handling.

use svi_core::{Real, Result, Sample};

use super::{split_position, ScalarValuedInterpolation, SourceBinding, UseSource};
use crate::boundary::{clamp_index, mirror_index, periodic_index, BoundaryType};
use crate::matrix::Matrix;
use crate::parameters::InterpolatorParameters;
use crate::vector::Vector;

/// Bilinear interpolator with a configurable boundary policy.
#[derive(Debug, Clone)]
pub struct BilinearInterpolator<'a, T: Sample> {
    params: InterpolatorParameters,
    source: SourceBinding<'a, T>,
}

impl<T: Sample> Default for BilinearInterpolator<'_, T> {
    fn default() -> Self {
        Self::new(BoundaryType::default())
    }
}

impl<'a, T: Sample> BilinearInterpolator<'a, T> {
    /// Interpolator with the given boundary policy.
    pub fn new(boundary_type: BoundaryType) -> Self {
        Self {
            params: InterpolatorParameters::new(boundary_type),
            source: SourceBinding::default(),
        }
    }

    /// Interpolator configured from `params`; only the boundary is read.
    pub fn with_parameters(params: InterpolatorParameters) -> Self {
        Self {
            params,
            source: SourceBinding::default(),
        }
    }

    /// Current parameters.
    pub fn parameters(&self) -> &InterpolatorParameters {
        &self.params
    }

    /// Replace the parameters.  Bilinear interpolation has nothing to
    /// validate, so this never fails.
    pub fn set_parameters(&mut self, params: InterpolatorParameters) -> Result<()> {
        self.params = params;
        Ok(())
    }

    /// Change only the boundary policy.
    pub fn set_boundary_type(&mut self, boundary_type: BoundaryType) {
        self.params.boundary_type = boundary_type;
    }

    /// Value at `(row, col)` assuming the whole 2×2 neighborhood lies
    /// inside `src`.
    ///
    /// # Panics
    /// Panics (out-of-range access) if the neighborhood leaves the matrix.
    pub fn interpolate_unchecked(&self, src: &Matrix<T>, row: Real, col: Real) -> T {
        let (y, fy) = split_position(row);
        let (x, fx) = split_position(col);
        debug_assert!(x >= 0 && x < src.last_column() && y >= 0 && y < src.last_row());
        let (x, y) = (x as usize, y as usize);
        T::from_real(compute_2d(
            fy,
            fx,
            src.at(y, x).to_real(),
            src.at(y, x + 1).to_real(),
            src.at(y + 1, x).to_real(),
            src.at(y + 1, x + 1).to_real(),
        ))
    }

    fn interpolate_boundary_1d(&self, src: &Vector<T>, x: isize, fx: Real) -> T {
        let n = src.size();
        if n == 0 {
            return T::default();
        }
        let x1 = x + 1;
        let (a, b) = match self.params.boundary_type {
            BoundaryType::NoBoundary => return T::default(),
            BoundaryType::Zero => {
                let mut a1 = T::zero();
                let mut a2 = T::zero();
                if x < 0 {
                    // only the right neighbor can still be inside
                    if x == -1 {
                        a2 = src.at(0);
                    }
                } else if (x as usize) < n {
                    a1 = src.at(x as usize);
                }
                (a1, a2)
            }
            BoundaryType::Constant => (src.at(clamp_index(x, n)), src.at(clamp_index(x1, n))),
            BoundaryType::Mirror => (src.at(mirror_index(x, n)), src.at(mirror_index(x1, n))),
            BoundaryType::Periodic => (
                src.at(periodic_index(x, n)),
                src.at(periodic_index(x1, n)),
            ),
        };
        T::from_real(compute(fx, a.to_real(), b.to_real()))
    }

    fn interpolate_boundary_2d(
        &self,
        src: &Matrix<T>,
        y: isize,
        x: isize,
        fy: Real,
        fx: Real,
    ) -> T {
        let rows = src.rows();
        let cols = src.columns();
        if rows == 0 || cols == 0 {
            return T::default();
        }
        let y1 = y + 1;
        let x1 = x + 1;

        let corners = match self.params.boundary_type {
            BoundaryType::NoBoundary => return T::default(),
            BoundaryType::Zero => zero_corners(src, y, x),
            BoundaryType::Constant => {
                let (x, x1) = (clamp_index(x, cols), clamp_index(x1, cols));
                let (y, y1) = (clamp_index(y, rows), clamp_index(y1, rows));
                [src.at(y, x), src.at(y, x1), src.at(y1, x), src.at(y1, x1)]
            }
            BoundaryType::Mirror => {
                let (x, x1) = (mirror_index(x, cols), mirror_index(x1, cols));
                let (y, y1) = (mirror_index(y, rows), mirror_index(y1, rows));
                [src.at(y, x), src.at(y, x1), src.at(y1, x), src.at(y1, x1)]
            }
            BoundaryType::Periodic => {
                let (x, x1) = (periodic_index(x, cols), periodic_index(x1, cols));
                let (y, y1) = (periodic_index(y, rows), periodic_index(y1, rows));
                [src.at(y, x), src.at(y, x1), src.at(y1, x), src.at(y1, x1)]
            }
        };
        let [a1, a2, a3, a4] = corners;
        T::from_real(compute_2d(
            fy,
            fx,
            a1.to_real(),
            a2.to_real(),
            a3.to_real(),
            a4.to_real(),
        ))
    }
}

/// Corners `[top-left, top-right, bottom-left, bottom-right]` of the 2×2
/// neighborhood at `(y, x)` under the zero policy, for a neighborhood that
/// is not entirely inside `src`.
///
/// Cases follow the part of the grid the neighborhood overlaps: the first
/// row only (`y == -1`), the last row only (`y == rows-1`), or two rows
/// with the left (`x == -1`) or right (`x == cols-1`) column outside.
fn zero_corners<T: Sample>(src: &Matrix<T>, y: isize, x: isize) -> [T; 4] {
    let rows = src.rows() as isize;
    let cols = src.columns() as isize;
    let y1 = y + 1;
    let x1 = x + 1;
    let mut a = [T::zero(); 4];

    if y < 0 {
        if y == -1 {
            // first row: only the lower corners can be inside
            if x < 0 {
                if x == -1 {
                    a[3] = src.at(0, 0);
                }
            } else if x1 >= cols {
                if x < cols {
                    a[2] = src.at(0, x as usize);
                }
            } else {
                a[2] = src.at(0, x as usize);
                a[3] = src.at(0, x1 as usize);
            }
        }
    } else if y1 >= rows {
        if y < rows {
            // last row: only the upper corners can be inside
            let y = y as usize;
            if x < 0 {
                if x == -1 {
                    a[1] = src.at(y, 0);
                }
            } else if x1 >= cols {
                if x < cols {
                    a[0] = src.at(y, x as usize);
                }
            } else {
                a[0] = src.at(y, x as usize);
                a[1] = src.at(y, x1 as usize);
            }
        }
    } else {
        // both rows inside, so a column must be outside
        let (y, y1) = (y as usize, y1 as usize);
        if x < 0 {
            if x == -1 {
                a[1] = src.at(y, 0);
                a[3] = src.at(y1, 0);
            }
        } else if x1 >= cols && x < cols {
            a[0] = src.at(y, x as usize);
            a[2] = src.at(y1, x as usize);
        }
    }
    a
}

#[inline]
fn compute(f: Real, a: Real, b: Real) -> Real {
    (1.0 - f) * a + f * b
}

#[inline]
fn compute_2d(fy: Real, fx: Real, a1: Real, a2: Real, a3: Real, a4: Real) -> Real {
    let top = compute(fx, a1, a2);
    let bottom = compute(fx, a3, a4);
    compute(fy, top, bottom)
}

impl<T: Sample> ScalarValuedInterpolation<T> for BilinearInterpolator<'_, T> {
    fn boundary_type(&self) -> BoundaryType {
        self.params.boundary_type
    }

    fn interpolate(&self, src: &Vector<T>, x: Real) -> T {
        let (ix, fx) = split_position(x);
        if ix >= 0 && ix < src.last_idx() {
            let i = ix as usize;
            return T::from_real(compute(fx, src.at(i).to_real(), src.at(i + 1).to_real()));
        }
        self.interpolate_boundary_1d(src, ix, fx)
    }

    fn interpolate_2d(&self, src: &Matrix<T>, row: Real, col: Real) -> T {
        let (y, fy) = split_position(row);
        let (x, fx) = split_position(col);
        if x >= 0 && x < src.last_column() && y >= 0 && y < src.last_row() {
            let (x, y) = (x as usize, y as usize);
            return T::from_real(compute_2d(
                fy,
                fx,
                src.at(y, x).to_real(),
                src.at(y, x + 1).to_real(),
                src.at(y + 1, x).to_real(),
                src.at(y + 1, x + 1).to_real(),
            ));
        }
        self.interpolate_boundary_2d(src, y, x, fy, fx)
    }
}

impl<'a, T: Sample> UseSource<'a, T> for BilinearInterpolator<'a, T> {
    fn binding(&self) -> &SourceBinding<'a, T> {
        &self.source
    }

    fn binding_mut(&mut self) -> &mut SourceBinding<'a, T> {
        &mut self.source
    }
}
