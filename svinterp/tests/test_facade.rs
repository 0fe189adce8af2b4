//! The façade re-exports are enough to drive every interpolator.

use approx::assert_abs_diff_eq;
use svinterp::math::{solve_tridiagonal, TridiagonalOperator};
use svinterp::{
    BiquadraticInterpolator, BoundaryType, CubicSplineInterpolator, CubicSplineParameters, Error,
    Point, ScalarValuedInterpolation, Vector,
};

#[test]
fn biquadratic_through_facade() {
    let v = Vector::from_fn(6, |i| (i * i) as f64);
    let interp = BiquadraticInterpolator::new(BoundaryType::Mirror);
    assert_abs_diff_eq!(interp.interpolate(&v, 2.5), 6.25, epsilon = 1e-12);
}

#[test]
fn spline_errors_are_core_errors() {
    let err = CubicSplineInterpolator::<f64>::with_parameters(CubicSplineParameters::natural(vec![
        Point::new(0.0, 0.0),
    ]))
    .unwrap_err();
    assert!(matches!(err, Error::Precondition(_)));
}

#[test]
fn tridiagonal_round_trip() {
    let op = TridiagonalOperator::from_bands(
        vec![0.0, -1.0, -1.0, -1.0],
        vec![4.0, 4.0, 4.0, 4.0],
        vec![-1.0, -1.0, -1.0, 0.0],
    )
    .unwrap();
    let x = [1.0, -2.0, 0.5, 3.0];
    let r = op.apply(&x);
    let solved = solve_tridiagonal(&op.lower, &op.diag, &op.upper, &r).unwrap();
    for (s, e) in solved.iter().zip(x) {
        assert_abs_diff_eq!(*s, e, epsilon = 1e-12);
    }
}
