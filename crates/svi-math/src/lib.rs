//! # svi-math
//!
//! Scalar-valued interpolation of sampled signals: sample containers
//! (vector/matrix newtypes over nalgebra), boundary policies, a tridiagonal
//! solver, and the bilinear, biquadratic, kernel-table and cubic-spline
//! interpolators.
//!
//! ```
//! use svi_math::{BilinearInterpolator, BoundaryType, ScalarValuedInterpolation, Vector};
//!
//! let v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
//! let interp = BilinearInterpolator::new(BoundaryType::Periodic);
//! assert_eq!(interp.interpolate(&v, 4.5), interp.interpolate(&v, 0.5));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Boundary policies for out-of-range samples.
pub mod boundary;

/// Equally-spaced and scattered-point interpolators.
pub mod interpolations;

/// Row-major 2D sample container.
pub mod matrix;

/// Interpolator configuration.
pub mod parameters;

/// 2D query and spline sampling points.
pub mod point;

/// Tridiagonal and cyclic-tridiagonal solvers.
pub mod tridiagonal;

/// 1D sample container.
pub mod vector;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use boundary::{map_index, value_at, value_at_2d, BoundaryType};
pub use interpolations::{
    BilinearInterpolator, BiquadraticInterpolator, CubicSplineInterpolator, GenericInterpolator,
    ScalarValuedInterpolation, SourceBinding, UseSource,
};
pub use matrix::Matrix;
pub use parameters::{CubicSplineParameters, InterpolatorParameters, KernelType};
pub use point::Point;
pub use tridiagonal::{solve_cyclic_tridiagonal, solve_tridiagonal, TridiagonalOperator};
pub use vector::Vector;
