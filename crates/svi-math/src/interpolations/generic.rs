//! Kernel-table interpolation.
//!
//! The interpolation kernel is sampled once into a look-up table (LUT) of
//! `N * S` weights, `N` the (even) number of unit intervals the kernel spans
//! and `S` the samples per interval.  Entry `i` holds the kernel at
//! `i / S - N / 2`.
//!
//! A query at `x = i + f` combines the `N` samples starting at
//! `i - (N/2 - 1)`.  With `fi = ⌊f·S⌋` the weight of neighbor `k` is
//! `lut[(k+1)·S - fi]`; the single index `N·S` past the end reads `lut[0]`,
//! which the kernel's symmetry makes equal.
//!
//! 2-D queries are separable: each of the `N` rows of the `N×N`
//! neighborhood is reduced along columns, then the `N` partial sums are
//! reduced along rows.

use svi_core::{ensure, trace_debug, trace_warn, Real, Result, Sample};

use super::{split_position, ScalarValuedInterpolation, SourceBinding, UseSource};
use crate::boundary::{value_at, value_at_2d, BoundaryType};
use crate::matrix::Matrix;
use crate::parameters::{InterpolatorParameters, KernelType};
use crate::vector::Vector;

// ── Kernel tables ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
struct KernelTable {
    lut: Vec<Real>,
    intervals: usize,
    samples_per_interval: usize,
}

impl KernelTable {
    /// Triangle kernel `1 - |t|` over two intervals.
    fn bilinear(s: usize) -> Self {
        let step = 1.0 / s as Real;
        let lut = (0..2 * s)
            .map(|i| 1.0 - (i as Real * step - 1.0).abs())
            .collect();
        Self {
            lut,
            intervals: 2,
            samples_per_interval: s,
        }
    }

    /// Cubic convolution kernel over four intervals.
    fn bicubic(s: usize) -> Self {
        let step = 1.0 / s as Real;
        let lut = (0..4 * s)
            .map(|i| {
                let t = (i as Real * step - 2.0).abs();
                if t < 1.0 {
                    1.0 + t * t * (t - 2.0)
                } else if t < 2.0 {
                    4.0 + t * (t * (5.0 - t) - 8.0)
                } else {
                    0.0
                }
            })
            .collect();
        Self {
            lut,
            intervals: 4,
            samples_per_interval: s,
        }
    }

    fn custom(lut: &[Real], s: usize) -> Result<Self> {
        ensure!(
            lut.len() % s == 0,
            "kernel LUT of length {} is not a multiple of {s} samples per interval",
            lut.len()
        );
        let intervals = lut.len() / s;
        ensure!(
            intervals > 0 && intervals % 2 == 0,
            "kernel LUT must span a positive even number of intervals, got {intervals}"
        );
        Ok(Self {
            lut: lut.to_vec(),
            intervals,
            samples_per_interval: s,
        })
    }

    fn from_parameters(params: &InterpolatorParameters) -> Result<Self> {
        let s = params.samples_per_interval;
        ensure!(s > 0, "samples per interval must be positive");
        match params.kernel_type {
            KernelType::Bilinear => Ok(Self::bilinear(s)),
            KernelType::Bicubic => Ok(Self::bicubic(s)),
            KernelType::Generic => Self::custom(&params.kernel_lut, s),
        }
    }
}

// ── GenericInterpolator ───────────────────────────────────────────────────────

/// Interpolator driven by a sampled kernel table.
///
/// Queries take `&self` and keep their scratch space on the call stack, so a
/// configured instance can be shared between threads.
#[derive(Debug, Clone)]
pub struct GenericInterpolator<'a, T: Sample> {
    params: InterpolatorParameters,
    kernel: KernelTable,
    first_sample_offset: isize,
    source: SourceBinding<'a, T>,
}

impl<T: Sample> Default for GenericInterpolator<'_, T> {
    fn default() -> Self {
        Self::new(InterpolatorParameters::default().boundary_type)
    }
}

impl<'a, T: Sample> GenericInterpolator<'a, T> {
    /// Bicubic interpolator with the default table resolution and the given
    /// boundary policy.
    pub fn new(boundary_type: BoundaryType) -> Self {
        let params = InterpolatorParameters::new(boundary_type).with_kernel(KernelType::Bicubic);
        let kernel = KernelTable::bicubic(params.samples_per_interval);
        Self {
            params,
            first_sample_offset: (kernel.intervals / 2) as isize - 1,
            kernel,
            source: SourceBinding::default(),
        }
    }

    /// Interpolator configured from `params`.
    ///
    /// # Errors
    /// Fails when `params` describes an invalid kernel table; see
    /// [`set_parameters`](Self::set_parameters).
    pub fn with_parameters(params: InterpolatorParameters) -> Result<Self> {
        let mut interp = Self::new(params.boundary_type);
        interp.set_parameters(params)?;
        Ok(interp)
    }

    /// Current parameters.
    pub fn parameters(&self) -> &InterpolatorParameters {
        &self.params
    }

    /// Replace the parameters and rebuild the kernel table.
    ///
    /// # Errors
    /// `Precondition` when `samples_per_interval` is zero, or when a custom
    /// table's length is not a multiple of `samples_per_interval` or spans an
    /// odd number of intervals.  The interpolator then falls back to the
    /// bilinear kernel (with one sample per interval if none was given) and
    /// stays usable.
    pub fn set_parameters(&mut self, params: InterpolatorParameters) -> Result<()> {
        self.params = params;
        match KernelTable::from_parameters(&self.params) {
            Ok(kernel) => {
                trace_debug!(
                    "rebuilt {} table: {} intervals, {} samples per interval",
                    self.params.kernel_type,
                    kernel.intervals,
                    kernel.samples_per_interval
                );
                self.install(kernel);
                Ok(())
            }
            Err(e) => {
                trace_warn!("{e}; falling back to the bilinear kernel");
                self.install(KernelTable::bilinear(self.params.samples_per_interval.max(1)));
                Err(e)
            }
        }
    }

    /// Change only the boundary policy; the kernel table is kept.
    pub fn set_boundary_type(&mut self, boundary_type: BoundaryType) {
        self.params.boundary_type = boundary_type;
    }

    /// The active kernel table.
    pub fn lut(&self) -> &[Real] {
        &self.kernel.lut
    }

    /// Number of unit intervals the kernel spans (the neighborhood width).
    pub fn number_of_intervals(&self) -> usize {
        self.kernel.intervals
    }

    /// Table entries per unit interval.
    pub fn samples_per_interval(&self) -> usize {
        self.kernel.samples_per_interval
    }

    /// Value at `(row, col)` assuming the whole neighborhood lies inside
    /// `src`.
    ///
    /// # Panics
    /// Panics (out-of-range access) if the neighborhood leaves the matrix.
    pub fn interpolate_unchecked(&self, src: &Matrix<T>, row: Real, col: Real) -> T {
        let (y, fy) = split_position(row);
        let (x, fx) = split_position(col);
        let by = y - self.first_sample_offset;
        let bx = x - self.first_sample_offset;
        debug_assert!(self.window_fits(by, src.rows()) && self.window_fits(bx, src.columns()));
        T::from_real(self.reduce_2d(fy, fx, |r, c| {
            src.at((by as usize) + r, (bx as usize) + c)
        }))
    }

    fn install(&mut self, kernel: KernelTable) {
        self.first_sample_offset = (kernel.intervals / 2) as isize - 1;
        self.kernel = kernel;
    }

    #[inline]
    fn sub_table(&self, f: Real) -> usize {
        let s = self.kernel.samples_per_interval;
        ((f * s as Real) as usize).min(s - 1)
    }

    #[inline]
    fn weight(&self, k: usize, fi: usize) -> Real {
        let idx = (k + 1) * self.kernel.samples_per_interval - fi;
        if idx == self.kernel.lut.len() {
            self.kernel.lut[0]
        } else {
            self.kernel.lut[idx]
        }
    }

    #[inline]
    fn window_fits(&self, base: isize, len: usize) -> bool {
        base >= 0 && base as usize + self.kernel.intervals <= len
    }

    fn reduce(&self, fi: usize, samples: impl Iterator<Item = Real>) -> Real {
        samples
            .enumerate()
            .map(|(k, v)| self.weight(k, fi) * v)
            .sum()
    }

    /// Separable weighted sum over the `N×N` window addressed by `sample`.
    fn reduce_2d(&self, fy: Real, fx: Real, sample: impl Fn(usize, usize) -> T) -> Real {
        let n = self.kernel.intervals;
        let fix = self.sub_table(fx);
        let fiy = self.sub_table(fy);
        let column: Vec<Real> = (0..n)
            .map(|r| self.reduce(fix, (0..n).map(|c| sample(r, c).to_real())))
            .collect();
        self.reduce(fiy, column.into_iter())
    }
}

impl<T: Sample> ScalarValuedInterpolation<T> for GenericInterpolator<'_, T> {
    fn boundary_type(&self) -> BoundaryType {
        self.params.boundary_type
    }

    fn interpolate(&self, src: &Vector<T>, x: Real) -> T {
        let (ix, f) = split_position(x);
        let fi = self.sub_table(f);
        let base = ix - self.first_sample_offset;
        let n = self.kernel.intervals;

        if self.window_fits(base, src.size()) {
            let start = base as usize;
            let window = &src.as_slice()[start..start + n];
            return T::from_real(self.reduce(fi, window.iter().map(|v| v.to_real())));
        }

        let boundary = self.params.boundary_type;
        if boundary == BoundaryType::NoBoundary || src.is_empty() {
            return T::default();
        }
        let column: Vec<Real> = (0..n as isize)
            .map(|k| value_at(src, base + k, boundary).to_real())
            .collect();
        T::from_real(self.reduce(fi, column.into_iter()))
    }

    fn interpolate_2d(&self, src: &Matrix<T>, row: Real, col: Real) -> T {
        let (y, fy) = split_position(row);
        let (x, fx) = split_position(col);
        let by = y - self.first_sample_offset;
        let bx = x - self.first_sample_offset;

        if self.window_fits(by, src.rows()) && self.window_fits(bx, src.columns()) {
            let (by, bx) = (by as usize, bx as usize);
            return T::from_real(self.reduce_2d(fy, fx, |r, c| src.at(by + r, bx + c)));
        }

        let boundary = self.params.boundary_type;
        if boundary == BoundaryType::NoBoundary || src.is_empty() {
            return T::default();
        }
        let n = self.kernel.intervals;
        let mut buffer = Vec::with_capacity(n * n);
        for r in 0..n as isize {
            for c in 0..n as isize {
                buffer.push(value_at_2d(src, by + r, bx + c, boundary));
            }
        }
        T::from_real(self.reduce_2d(fy, fx, |r, c| buffer[r * n + c]))
    }
}

impl<'a, T: Sample> UseSource<'a, T> for GenericInterpolator<'a, T> {
    fn binding(&self) -> &SourceBinding<'a, T> {
        &self.source
    }

    fn binding_mut(&mut self) -> &mut SourceBinding<'a, T> {
        &mut self.source
    }
}
