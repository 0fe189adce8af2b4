//! Plain-data configuration for the interpolators.
//!
//! Parameters are ordinary values: build one (usually from `Default` plus the
//! `with_*` builders), hand it to an interpolator's constructor or
//! `set_parameters`, and read it back with `parameters()`.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;
use svi_core::{Error, Real};

use crate::boundary::BoundaryType;
use crate::point::Point;

/// Kernel used by the table-driven [`GenericInterpolator`](crate::GenericInterpolator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KernelType {
    /// Linear ramp over two intervals.
    Bilinear,
    /// Cubic convolution kernel over four intervals.
    #[default]
    Bicubic,
    /// User-supplied symmetric kernel table.
    Generic,
}

impl fmt::Display for KernelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bilinear => "BilinearKernel",
            Self::Bicubic => "BicubicKernel",
            Self::Generic => "GenericKernel",
        };
        f.write_str(name)
    }
}

impl FromStr for KernelType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        if lower.contains("ilinear") {
            Ok(Self::Bilinear)
        } else if lower.contains("icubic") {
            Ok(Self::Bicubic)
        } else if lower.contains("eneric") {
            Ok(Self::Generic)
        } else {
            Err(Error::InvalidArgument(format!(
                "unknown interpolator kernel type '{s}'"
            )))
        }
    }
}

/// Parameters shared by the equally-spaced interpolators.
///
/// The bilinear and biquadratic interpolators only read `boundary_type`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterpolatorParameters {
    /// Policy for samples outside the source.
    pub boundary_type: BoundaryType,
    /// Kernel selection for the generic interpolator.
    pub kernel_type: KernelType,
    /// LUT entries per unit interval of the kernel.
    pub samples_per_interval: usize,
    /// Kernel table used with [`KernelType::Generic`].
    ///
    /// Its length must be `number_of_intervals * samples_per_interval` with
    /// an even number of intervals.  Entry `0` is the kernel at
    /// `-number_of_intervals / 2`; the table is symmetric about its centre.
    pub kernel_lut: Vec<Real>,
}

impl Default for InterpolatorParameters {
    fn default() -> Self {
        Self {
            boundary_type: BoundaryType::Constant,
            kernel_type: KernelType::Bicubic,
            samples_per_interval: 128,
            kernel_lut: Vec::new(),
        }
    }
}

impl InterpolatorParameters {
    /// Default parameters with the given boundary policy.
    pub fn new(boundary_type: BoundaryType) -> Self {
        Self {
            boundary_type,
            ..Self::default()
        }
    }

    /// Set the boundary policy.
    pub fn with_boundary(mut self, boundary_type: BoundaryType) -> Self {
        self.boundary_type = boundary_type;
        self
    }

    /// Set the kernel type.
    pub fn with_kernel(mut self, kernel_type: KernelType) -> Self {
        self.kernel_type = kernel_type;
        self
    }

    /// Set the number of LUT entries per unit interval.
    pub fn with_samples_per_interval(mut self, n: usize) -> Self {
        self.samples_per_interval = n;
        self
    }

    /// Install a custom kernel table and select [`KernelType::Generic`].
    pub fn with_kernel_lut(mut self, lut: Vec<Real>) -> Self {
        self.kernel_type = KernelType::Generic;
        self.kernel_lut = lut;
        self
    }
}

/// Parameters of the [`CubicSplineInterpolator`](crate::CubicSplineInterpolator).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicSplineParameters<F: Float = Real> {
    /// Samples `(x, y)`, strictly increasing in `x`, at least three.
    pub sampling_points: Vec<Point<F>>,
    /// First derivative at the first point (clamped spline only).
    pub derivative_at_first_point: F,
    /// First derivative at the last point (clamped spline only).
    pub derivative_at_last_point: F,
    /// Natural spline: zero second derivative at both ends, ignoring the
    /// derivative values above.
    pub use_natural_derivatives: bool,
}

impl<F: Float> Default for CubicSplineParameters<F> {
    fn default() -> Self {
        Self {
            sampling_points: Vec::new(),
            derivative_at_first_point: F::zero(),
            derivative_at_last_point: F::zero(),
            use_natural_derivatives: true,
        }
    }
}

impl<F: Float> CubicSplineParameters<F> {
    /// Natural spline through `points`.
    pub fn natural(points: Vec<Point<F>>) -> Self {
        Self {
            sampling_points: points,
            ..Self::default()
        }
    }

    /// Clamped spline through `points` with the given end slopes.
    pub fn clamped(points: Vec<Point<F>>, first: F, last: F) -> Self {
        Self {
            sampling_points: points,
            derivative_at_first_point: first,
            derivative_at_last_point: last,
            use_natural_derivatives: false,
        }
    }
}
