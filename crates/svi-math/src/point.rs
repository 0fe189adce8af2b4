//! Two-dimensional point.

use svi_core::Real;

/// A point `(x, y)`.
///
/// As a 2-D query position `y` is the row and `x` the column; as a spline
/// sampling point it is the pair `(x, f(x))`, in whichever float width the
/// spline runs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<F = Real> {
    /// Abscissa / column.
    pub x: F,
    /// Ordinate / row.
    pub y: F,
}

impl<F> Point<F> {
    /// Create a point.
    pub const fn new(x: F, y: F) -> Self {
        Self { x, y }
    }
}

impl<F> From<(F, F)> for Point<F> {
    fn from((x, y): (F, F)) -> Self {
        Self { x, y }
    }
}
