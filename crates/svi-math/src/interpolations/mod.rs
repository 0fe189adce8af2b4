//! Scalar-valued interpolation over equally spaced samples.
//!
//! Every interpolator answers two kinds of query:
//!
//! * explicit source: [`ScalarValuedInterpolation::interpolate`] and
//!   [`interpolate_2d`](ScalarValuedInterpolation::interpolate_2d) take the
//!   signal with each call;
//! * bound source: [`UseSource::use_vector`] / [`UseSource::use_matrix`]
//!   attach a borrowed default signal, queried with `apply*`.
//!
//! Positions are real-valued; integer positions address samples exactly.
//! Neighborhoods reaching outside the source are completed by the
//! configured [`BoundaryType`].

use svi_core::{Error, Real, Result, Sample};

use crate::boundary::BoundaryType;
use crate::matrix::Matrix;
use crate::point::Point;
use crate::vector::Vector;

pub mod bilinear;
pub mod biquadratic;
pub mod cubic_spline;
pub mod generic;

pub use bilinear::BilinearInterpolator;
pub use biquadratic::BiquadraticInterpolator;
pub use cubic_spline::CubicSplineInterpolator;
pub use generic::GenericInterpolator;

/// Interpolation of a sampled signal at a real-valued position.
pub trait ScalarValuedInterpolation<T: Sample> {
    /// The active boundary policy.
    fn boundary_type(&self) -> BoundaryType;

    /// Value of `src` at position `x`.
    fn interpolate(&self, src: &Vector<T>, x: Real) -> T;

    /// Value of `src` at position `(row, col)`.
    fn interpolate_2d(&self, src: &Matrix<T>, row: Real, col: Real) -> T;

    /// Value of `src` at `p`, with `p.y` the row and `p.x` the column.
    fn interpolate_at(&self, src: &Matrix<T>, p: Point) -> T {
        self.interpolate_2d(src, p.y, p.x)
    }
}

/// Borrowed default source of an interpolator.
///
/// The interpolator never owns the signal; it only keeps the reference
/// handed to `use_vector` / `use_matrix` until it is replaced.
#[derive(Debug)]
pub struct SourceBinding<'a, T: Sample> {
    vector: Option<&'a Vector<T>>,
    matrix: Option<&'a Matrix<T>>,
}

impl<T: Sample> Clone for SourceBinding<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Sample> Copy for SourceBinding<'_, T> {}

impl<T: Sample> Default for SourceBinding<'_, T> {
    fn default() -> Self {
        Self {
            vector: None,
            matrix: None,
        }
    }
}

impl<'a, T: Sample> SourceBinding<'a, T> {
    /// The bound vector.
    ///
    /// # Errors
    /// `NotConfigured` if no vector has been bound.
    pub fn vector(&self) -> Result<&'a Vector<T>> {
        self.vector
            .ok_or_else(|| Error::NotConfigured("no vector bound with use_vector".into()))
    }

    /// The bound matrix.
    ///
    /// # Errors
    /// `NotConfigured` if no matrix has been bound.
    pub fn matrix(&self) -> Result<&'a Matrix<T>> {
        self.matrix
            .ok_or_else(|| Error::NotConfigured("no matrix bound with use_matrix".into()))
    }
}

/// Binding of a default source (the "use" operation) and queries against it.
pub trait UseSource<'a, T: Sample>: ScalarValuedInterpolation<T> {
    /// The current binding.
    fn binding(&self) -> &SourceBinding<'a, T>;

    /// Mutable access to the binding.
    fn binding_mut(&mut self) -> &mut SourceBinding<'a, T>;

    /// Bind `src` as the default 1-D source.
    fn use_vector(&mut self, src: &'a Vector<T>) {
        self.binding_mut().vector = Some(src);
    }

    /// Bind `src` as the default 2-D source.
    fn use_matrix(&mut self, src: &'a Matrix<T>) {
        self.binding_mut().matrix = Some(src);
    }

    /// Value of the bound vector at `x`.
    fn apply(&self, x: Real) -> Result<T> {
        Ok(self.interpolate(self.binding().vector()?, x))
    }

    /// Value of the bound matrix at `(row, col)`.
    fn apply_2d(&self, row: Real, col: Real) -> Result<T> {
        Ok(self.interpolate_2d(self.binding().matrix()?, row, col))
    }

    /// Value of the bound matrix at `p`.
    fn apply_at(&self, p: Point) -> Result<T> {
        self.apply_2d(p.y, p.x)
    }
}

/// Largest integer position handed to the index arithmetic. Positions past it
/// are already integral, and the headroom keeps neighbour and window offsets
/// from overflowing `isize`.
const INDEX_LIMIT: Real = (isize::MAX >> 2) as Real;

/// Split a position into its integer floor and fractional part in `[0, 1)`.
///
/// The integer part saturates at `±INDEX_LIMIT`.
#[inline]
pub(crate) fn split_position(x: Real) -> (isize, Real) {
    let base = x.floor();
    (base.clamp(-INDEX_LIMIT, INDEX_LIMIT) as isize, x - base)
}
