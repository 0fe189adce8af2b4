//! # svinterp
//!
//! Scalar-valued interpolation of 1-D and 2-D sampled signals.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates. Application code should depend on this crate rather
//! than on `svi-core` / `svi-math` directly.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! svinterp = "0.1"
//! ```
//!
//! ```rust
//! use svinterp::math::{
//!     BoundaryType, GenericInterpolator, InterpolatorParameters, KernelType, Matrix,
//!     ScalarValuedInterpolation,
//! };
//!
//! let grid = Matrix::<f64>::from_row_slice(2, 2, &[0.0, 1.0, 2.0, 3.0]);
//! let params = InterpolatorParameters::new(BoundaryType::Constant).with_kernel(KernelType::Bilinear);
//! let interp = GenericInterpolator::with_parameters(params)?;
//! let v = interp.interpolate_2d(&grid, 0.5, 0.5);
//! assert!((v - 1.5).abs() < 1e-2);
//! # Ok::<(), svinterp::core::Error>(())
//! ```
//!
//! ## Features
//!
//! * `serde`: `Serialize`/`Deserialize` for the parameter types.
//! * `tracing`: `debug`/`warn` events on kernel and coefficient rebuilds
//!   and rejected configurations; see [`core::logging`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core aliases, sample types, errors and logging.
pub use svi_core as core;

/// Containers, boundary policies, solvers and interpolators.
pub use svi_math as math;

pub use svi_core::{Error, Real, Result, Sample};
pub use svi_math::{
    BilinearInterpolator, BiquadraticInterpolator, BoundaryType, CubicSplineInterpolator,
    CubicSplineParameters, GenericInterpolator, InterpolatorParameters, KernelType, Matrix, Point,
    ScalarValuedInterpolation, UseSource, Vector,
};
