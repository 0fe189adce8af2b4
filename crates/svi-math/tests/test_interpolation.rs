//! Integration tests for the public interpolation API.
//!
//! These exercise the interpolators together: the documented 1-D scenarios,
//! agreement between the bilinear interpolator and the kernel-table
//! interpolator running a bilinear kernel, and recovery from an invalid
//! kernel table.

use approx::assert_abs_diff_eq;
use svi_core::Error;
use svi_math::{
    BilinearInterpolator, BiquadraticInterpolator, BoundaryType, CubicSplineInterpolator,
    CubicSplineParameters, GenericInterpolator, InterpolatorParameters, KernelType, Matrix, Point,
    ScalarValuedInterpolation, UseSource, Vector,
};

const ALL_EXTENDING: [BoundaryType; 4] = [
    BoundaryType::Zero,
    BoundaryType::Constant,
    BoundaryType::Mirror,
    BoundaryType::Periodic,
];

fn ramp() -> Vector<f64> {
    Vector::from_slice(&[1.0, 2.0, 3.0, 4.0])
}

fn bilinear_kernel<'a>(boundary: BoundaryType) -> GenericInterpolator<'a, f64> {
    GenericInterpolator::with_parameters(
        InterpolatorParameters::new(boundary)
            .with_kernel(KernelType::Bilinear)
            .with_samples_per_interval(128),
    )
    .unwrap()
}

// ───────────────────────── scenarios ─────────────────────────

#[test]
fn constant_boundary_clamps_left_of_first_sample() {
    let v = ramp();
    let bilinear = BilinearInterpolator::new(BoundaryType::Constant);
    assert_eq!(bilinear.interpolate(&v, -0.5), 1.0);
    let generic = bilinear_kernel(BoundaryType::Constant);
    assert_eq!(generic.interpolate(&v, -0.5), 1.0);
}

#[test]
fn periodic_boundary_wraps_past_last_sample() {
    let v = ramp();
    let bilinear = BilinearInterpolator::new(BoundaryType::Periodic);
    assert_abs_diff_eq!(bilinear.interpolate(&v, 0.5), 1.5, epsilon = 1e-12);
    assert_abs_diff_eq!(
        bilinear.interpolate(&v, 4.5),
        bilinear.interpolate(&v, 0.5),
        epsilon = 1e-12
    );
}

#[test]
fn every_interpolator_is_exact_at_samples() {
    let v = Vector::from_slice(&[3.0, -2.0, 0.5, 8.0, 1.0, 1.0, -4.0]);
    let m = Matrix::from_fn(5, 6, |r, c| ((r * 13 + c * 7) % 11) as f64 - 5.0);
    for b in ALL_EXTENDING {
        let bilinear = BilinearInterpolator::new(b);
        let biquadratic = BiquadraticInterpolator::new(b);
        let bicubic = GenericInterpolator::new(b);
        let interps: [&dyn ScalarValuedInterpolation<f64>; 3] = [&bilinear, &biquadratic, &bicubic];
        for interp in interps {
            for i in 0..v.size() {
                assert_abs_diff_eq!(interp.interpolate(&v, i as f64), v[i], epsilon = 1e-12);
            }
            for r in 0..m.rows() {
                for c in 0..m.columns() {
                    let got = interp.interpolate_at(&m, Point::new(c as f64, r as f64));
                    assert_abs_diff_eq!(got, m[(r, c)], epsilon = 1e-12);
                }
            }
        }
    }
}

#[test]
fn mirror_on_single_sample() {
    let v = Vector::from_slice(&[42.0f32]);
    let m = Matrix::from_element(1, 1, 42.0f32);
    let interps: [Box<dyn ScalarValuedInterpolation<f32>>; 3] = [
        Box::new(BilinearInterpolator::new(BoundaryType::Mirror)),
        Box::new(BiquadraticInterpolator::new(BoundaryType::Mirror)),
        Box::new(GenericInterpolator::new(BoundaryType::Mirror)),
    ];
    for interp in &interps {
        for x in [-5.5, -1.0, 0.0, 0.3, 1.0, 7.25] {
            assert_abs_diff_eq!(interp.interpolate(&v, x), 42.0, epsilon = 1e-4);
            assert_abs_diff_eq!(interp.interpolate_2d(&m, x, -x), 42.0, epsilon = 1e-4);
        }
    }
}

#[test]
fn far_positions_are_total_for_every_policy() {
    let v = Vector::from_slice(&[3.0, -2.0, 0.5, 8.0]);
    let m = Matrix::from_fn(3, 5, |r, c| ((r * 7 + c * 3) % 8) as f64);
    let far = [1e300, -1e300, f64::MAX, -f64::MAX, 4.0e18, -4.0e18];
    for b in ALL_EXTENDING.into_iter().chain([BoundaryType::NoBoundary]) {
        let bilinear = BilinearInterpolator::new(b);
        let biquadratic = BiquadraticInterpolator::new(b);
        let bicubic = GenericInterpolator::new(b);
        let interps: [&dyn ScalarValuedInterpolation<f64>; 3] = [&bilinear, &biquadratic, &bicubic];
        for interp in interps {
            for x in far {
                let got = interp.interpolate(&v, x);
                let got_2d = interp.interpolate_2d(&m, x, -x);
                match b {
                    BoundaryType::NoBoundary | BoundaryType::Zero => {
                        assert_eq!(got, 0.0, "{b} at {x}");
                        assert_eq!(got_2d, 0.0, "{b} at ({x}, {})", -x);
                    }
                    BoundaryType::Constant => {
                        let (edge, corner) = if x > 0.0 {
                            (v[3], m[(2, 0)])
                        } else {
                            (v[0], m[(0, 4)])
                        };
                        assert_eq!(got, edge, "{b} at {x}");
                        assert_eq!(got_2d, corner, "{b} at ({x}, {})", -x);
                    }
                    BoundaryType::Mirror | BoundaryType::Periodic => {
                        assert!(v.iter().any(|s| *s == got), "{b} at {x}: {got}");
                        assert!(m.inner().iter().any(|s| *s == got_2d), "{b} at {x}: {got_2d}");
                    }
                }
            }
        }
    }
}

// ───────────────────────── generic vs bilinear ─────────────────────────

#[test]
fn bilinear_kernel_agrees_with_bilinear_interpolator() {
    let v = Vector::from_fn(9, |i| ((i * 37) % 10) as f64 * 0.5);
    let m = Matrix::from_fn(7, 8, |r, c| ((r * 5 + c * 3) % 9) as f64);
    // one LUT step of the largest sample difference
    let tol_1d = 4.5 / 128.0 + 1e-12;
    let tol_2d = 2.0 * 8.0 / 128.0 + 1e-12;

    for b in ALL_EXTENDING {
        let bilinear = BilinearInterpolator::new(b);
        let generic = bilinear_kernel(b);
        for k in -40..=140 {
            let x = k as f64 * 0.0731;
            let (g, e) = (generic.interpolate(&v, x), bilinear.interpolate(&v, x));
            assert!((g - e).abs() <= tol_1d, "{b} 1-D at {x}: {g} vs {e}");

            let (row, col) = (0.6 * x - 1.3, x - 0.4);
            let (g, e) = (
                generic.interpolate_2d(&m, row, col),
                bilinear.interpolate_2d(&m, row, col),
            );
            assert!((g - e).abs() <= tol_2d, "{b} 2-D at ({row}, {col}): {g} vs {e}");
        }
    }
}

#[test]
fn no_boundary_yields_default_outside() {
    let v = ramp();
    let bilinear = BilinearInterpolator::new(BoundaryType::NoBoundary);
    let generic = bilinear_kernel(BoundaryType::NoBoundary);
    for x in [-0.5, 3.5, 10.0] {
        assert_eq!(bilinear.interpolate(&v, x), 0.0);
        assert_eq!(generic.interpolate(&v, x), 0.0);
    }
}

// ───────────────────────── configuration ─────────────────────────

#[test]
fn invalid_kernel_table_keeps_interpolator_usable() {
    let v = ramp();
    let mut interp = GenericInterpolator::new(BoundaryType::Constant);
    let err = interp
        .set_parameters(
            InterpolatorParameters::new(BoundaryType::Constant)
                .with_samples_per_interval(16)
                .with_kernel_lut(vec![0.5; 40]),
        )
        .unwrap_err();
    assert!(matches!(err, Error::Precondition(_)), "{err}");
    assert_eq!(interp.number_of_intervals(), 2);
    assert_abs_diff_eq!(interp.interpolate(&v, 2.5), 3.5, epsilon = 1e-12);
}

#[test]
fn parameters_parse_from_text() {
    let boundary: BoundaryType = "Periodic".parse().unwrap();
    let kernel: KernelType = "bilinear kernel".parse().unwrap();
    let interp = GenericInterpolator::<u8>::with_parameters(
        InterpolatorParameters::new(boundary).with_kernel(kernel),
    )
    .unwrap();
    assert_eq!(interp.boundary_type(), BoundaryType::Periodic);
    let v = Vector::from_slice(&[0u8, 100, 200]);
    assert_eq!(interp.interpolate(&v, 2.5), 100);
}

#[test]
fn bound_sources_are_queried_through_apply() {
    let v = ramp();
    let m = Matrix::from_row_slice(2, 2, &[0.0, 1.0, 2.0, 3.0]);
    let mut interp = BilinearInterpolator::new(BoundaryType::Constant);
    assert!(matches!(interp.apply(0.0), Err(Error::NotConfigured(_))));
    interp.use_vector(&v);
    interp.use_matrix(&m);
    assert_abs_diff_eq!(interp.apply(-0.5).unwrap(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(interp.apply_2d(0.5, 0.5).unwrap(), 1.5, epsilon = 1e-12);
}

// ───────────────────────── cubic spline ─────────────────────────

#[test]
fn spline_smooths_a_sine() {
    let points: Vec<Point> = (0..=12)
        .map(|i| {
            let x = i as f64 * 0.5;
            Point::new(x, x.sin())
        })
        .collect();
    let spline = CubicSplineInterpolator::with_parameters(CubicSplineParameters::clamped(
        points,
        0.0f64.cos(),
        6.0f64.cos(),
    ))
    .unwrap();

    let mut queries: Vec<Point> = (0..60).map(|i| Point::new(i as f64 * 0.1, 0.0)).collect();
    spline.apply_in_place(&mut queries).unwrap();
    for q in &queries {
        assert!((q.y - q.x.sin()).abs() < 2e-3, "sin({}) ~ {}", q.x, q.y);
    }
}
